use std::time::Instant;

use egui::{Context, CursorIcon, Frame, ViewportCommand};

use crate::app::{GalleyMeasure, OverlayApp};
use crate::renderer::{self, BACKING_TINT, PainterSurface};
use crate::tool::Tool;

use super::{FrameInput, gather};

/// Full-screen drawing view: routes pointer and wheel input into the
/// drawing core, then paints strokes, cursor and indicator.
pub fn canvas_panel(app: &mut OverlayApp, ctx: &Context) {
    let now = Instant::now();
    let input = gather(ctx);

    if input.escape || input.chord_close {
        ctx.send_viewport_cmd(ViewportCommand::Close);
        return;
    }

    route_pointer(app, ctx, &input, now);
    route_wheel(app, &input, now);

    // A lone right click resolved: clear the canvas.
    if app.right_click.expired(now) {
        app.canvas.history_mut().clear();
    }

    egui::CentralPanel::default()
        .frame(Frame::none())
        .show(ctx, |ui| {
            ctx.set_cursor_icon(CursorIcon::None);

            let painter = ui.painter();
            painter.rect_filled(ui.max_rect(), 0.0, BACKING_TINT);

            let live = app.canvas.live_stroke(&app.session);
            let mut surface = PainterSurface::new(painter);
            renderer::draw_all(&mut surface, app.canvas.history().strokes(), live.as_ref());

            if let Some(cursor) = app.cursor {
                renderer::draw_cursor(painter, cursor, &app.session);
                if let Some((heading, detail)) = app.indicator.message(now) {
                    let radius = app.session.width() as f32 / 2.0;
                    renderer::draw_indicator(painter, cursor, radius, heading, detail);
                }
            }

            show_text_editor(app, ctx);
        });

    schedule_repaint(app, ctx, now);
}

fn route_pointer(app: &mut OverlayApp, ctx: &Context, input: &FrameInput, now: Instant) {
    if let Some(pos) = input.pos {
        if app.cursor != Some(pos) {
            app.cursor = Some(pos);
            app.canvas.motion(pos, &app.session);
        }
    }

    if input.primary_pressed {
        if let Some(pos) = input.pos {
            let over_editor = app.editor_rect.is_some_and(|rect| rect.contains(pos));
            if !over_editor {
                let measure = GalleyMeasure { ctx };
                app.canvas.press(pos, &app.session, &measure);
            }
        }
    }

    if input.primary_released {
        if input.primary_double && app.session.tool() != Tool::Text {
            // The first half of this double-click already committed a dot.
            // Drop the stroke the second press started, then the dot, then
            // hand the gesture to the view toggle.
            app.canvas.discard_live();
            app.canvas.history_mut().remove_last();
            app.toggle_view();
        } else {
            app.canvas.release(&app.session);
        }
    }

    if input.secondary_double {
        if app.right_click.cancel() {
            app.reset_defaults(ctx);
        }
    } else if input.secondary_released {
        app.right_click.arm(now);
    }
}

fn route_wheel(app: &mut OverlayApp, input: &FrameInput, now: Instant) {
    if input.middle_released {
        if !app.middle_wheeled {
            app.cycle_mode(1, now);
        }
        app.middle_wheeled = false;
    }

    let notches = match input.scroll_y {
        y if y > 0.0 => -1,
        y if y < 0.0 => 1,
        _ => return,
    };

    if input.middle_down {
        app.middle_wheeled = true;
        app.cycle_mode(notches, now);
    } else if let Some(outcome) = app.session.scroll(notches) {
        app.apply_scroll_outcome(outcome, now);
    }
}

/// Single-line editor floating at the pending press point. Typing goes
/// straight into the pending buffer; losing focus (Enter included)
/// finishes the entry.
fn show_text_editor(app: &mut OverlayApp, ctx: &Context) {
    let Some(anchor) = app.canvas.pending_text().map(|pending| pending.press) else {
        app.editor_rect = None;
        return;
    };
    let font = egui::FontId::proportional(app.session.text_size() as f32);
    let color = app.session.color().to_color32();

    let response = egui::Area::new(egui::Id::new("text-entry"))
        .fixed_pos(anchor)
        .show(ctx, |ui| {
            let Some(pending) = app.canvas.pending_text_mut() else {
                return None;
            };
            Some(ui.add(
                egui::TextEdit::singleline(&mut pending.buffer)
                    .font(font)
                    .text_color(color)
                    .frame(false)
                    .desired_width(240.0),
            ))
        })
        .inner;

    let Some(response) = response else {
        app.editor_rect = None;
        return;
    };

    let newly_opened = app.editor_rect.is_none();
    app.editor_rect = Some(response.rect);
    if newly_opened {
        response.request_focus();
    } else if response.lost_focus() {
        app.finish_text(ctx);
    }
}

/// Requests a repaint for whichever cooperative deadline lands first, so
/// timers fire without continuous rendering.
fn schedule_repaint(app: &OverlayApp, ctx: &Context, now: Instant) {
    let deadlines = [
        app.right_click.time_remaining(now),
        app.indicator.time_remaining(now),
    ];
    if let Some(delay) = deadlines.into_iter().flatten().min() {
        ctx.request_repaint_after(delay);
    }
}
