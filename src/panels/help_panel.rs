use egui::{
    Align2, Color32, Context, Frame, Margin, RichText, Rounding, Vec2, ViewportCommand,
};

use crate::app::OverlayApp;
use crate::renderer::BACKING_TINT;

use super::gather;

const CARD_FILL: Color32 = Color32::from_black_alpha(230);
const HEADING_SIZE: f32 = 28.0;
const BODY_SIZE: f32 = 16.0;

/// Start view: a centered cheat-sheet card over the bare desktop. The
/// same gestures keep working here so the card never traps the user.
pub fn help_panel(app: &mut OverlayApp, ctx: &Context) {
    let input = gather(ctx);

    if input.escape || input.chord_close {
        ctx.send_viewport_cmd(ViewportCommand::Close);
        return;
    }
    if input.primary_double {
        app.toggle_view();
    }
    if input.secondary_double {
        app.reset_defaults(ctx);
    }

    egui::CentralPanel::default()
        .frame(Frame::none())
        .show(ctx, |ui| {
            ui.painter().rect_filled(ui.max_rect(), 0.0, BACKING_TINT);
        });

    egui::Area::new(egui::Id::new("help-card"))
        .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
        .show(ctx, |ui| {
            Frame::none()
                .fill(CARD_FILL)
                .rounding(Rounding::same(10.0))
                .inner_margin(Margin::same(25.0))
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(
                            RichText::new("glassboard")
                                .size(HEADING_SIZE)
                                .color(Color32::WHITE),
                        );
                        ui.label(
                            RichText::new("A transparent canvas that floats above your desktop.")
                                .italics()
                                .color(Color32::LIGHT_GRAY),
                        );
                        ui.add_space(18.0);

                        egui::Grid::new("help-bindings")
                            .spacing([36.0, 8.0])
                            .show(ui, |ui| {
                                ui.label("");
                                ui.label(bold("Left button"));
                                ui.label(bold("Right button"));
                                ui.end_row();

                                ui.label(bold("Single-click"));
                                ui.label(body("drag to draw"));
                                ui.label(body("clear canvas"));
                                ui.end_row();

                                ui.label(bold("Double-click"));
                                ui.label(body("toggle view"));
                                ui.label(body("reset settings"));
                                ui.end_row();
                            });

                        ui.add_space(14.0);
                        ui.label(body("Scroll: use the active mode"));
                        ui.label(body("Scroll with middle held: cycle the mode"));
                        ui.label(body("Esc: quit"));
                    });
                });
        });
}

fn bold(text: &str) -> RichText {
    RichText::new(text)
        .size(BODY_SIZE)
        .strong()
        .color(Color32::WHITE)
}

fn body(text: &str) -> RichText {
    RichText::new(text).size(BODY_SIZE).color(Color32::WHITE)
}
