use std::time::Instant;

use egui::{Color32, FontId, Pos2, Rect, Vec2};

use crate::canvas::{Canvas, TextMeasure};
use crate::cli::Cli;
use crate::gesture::ClickArbiter;
use crate::indicator::Indicator;
use crate::panels;
use crate::scroll::{ScrollOutcome, Session};
use crate::settings::{self, Settings};

/// Which full-screen view is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Canvas,
    Help,
}

/// The overlay application: owns the drawing core and session parameters
/// and routes egui input into them. Everything runs on the UI thread; the
/// two timers (right-click deferral, indicator expiry) are cooperative
/// deadlines polled each frame.
pub struct OverlayApp {
    pub(crate) session: Session,
    pub(crate) canvas: Canvas,
    pub(crate) indicator: Indicator,
    pub(crate) right_click: ClickArbiter,
    pub(crate) view: View,
    pub(crate) cursor: Option<Pos2>,
    /// Where the text editor sat last frame; presses inside it stay with
    /// the editor instead of the canvas.
    pub(crate) editor_rect: Option<Rect>,
    /// Set while a wheel notch arrives with the middle button held, so
    /// the following middle release does not cycle a second time.
    pub(crate) middle_wheeled: bool,
    never_save: bool,
}

impl OverlayApp {
    pub fn new(cc: &eframe::CreationContext<'_>, cli: &Cli) -> Self {
        let mut settings = Settings::with_screen_height(screen_height(&cc.egui_ctx));
        if !cli.reset {
            if let Some(stored) = cc
                .storage
                .and_then(|storage| eframe::get_value::<Settings>(storage, eframe::APP_KEY))
            {
                settings = stored;
            }
        }
        settings.apply_cli(cli);
        log::info!("starting with {settings:?}");

        Self {
            session: settings.to_session(),
            canvas: Canvas::new(),
            indicator: Indicator::new(),
            right_click: ClickArbiter::new(),
            view: if cli.clean { View::Canvas } else { View::Help },
            cursor: None,
            editor_rect: None,
            middle_wheeled: false,
            never_save: cli.never_save,
        }
    }

    /// Routes a wheel outcome into the history and the indicator.
    pub(crate) fn apply_scroll_outcome(&mut self, outcome: ScrollOutcome, now: Instant) {
        let heading = self.session.mode().label();
        match outcome {
            ScrollOutcome::Undo => {
                if self.canvas.history_mut().undo() {
                    self.indicator.show(heading, "undo", now);
                }
            }
            ScrollOutcome::Redo => {
                if self.canvas.history_mut().redo() {
                    self.indicator.show(heading, "redo", now);
                }
            }
            ScrollOutcome::ColorChanged => {
                self.indicator.show(heading, self.session.color().summary(), now);
            }
            ScrollOutcome::WidthChanged(width) => {
                self.indicator.show(heading, format!("{width}px"), now);
            }
            ScrollOutcome::TextSizeChanged(size) => {
                self.indicator.show(heading, format!("{size}pt"), now);
            }
            ScrollOutcome::ToolChanged(tool) => {
                self.indicator.show(heading, tool.to_string(), now);
            }
        }
    }

    /// Steps the active scroll mode and confirms it on screen.
    pub(crate) fn cycle_mode(&mut self, step: i32, now: Instant) {
        let mode = self.session.cycle_mode(step);
        let detail = if mode.adjusts_color() {
            self.session.color().summary()
        } else {
            String::new()
        };
        self.indicator.show(mode.label(), detail, now);
    }

    /// Restores tool, color, sizes and mode to the screen-scaled defaults.
    /// The canvas itself is left untouched.
    pub(crate) fn reset_defaults(&mut self, ctx: &egui::Context) {
        let defaults = Settings::with_screen_height(screen_height(ctx));
        self.session = defaults.to_session();
        log::info!("settings reset to defaults");
    }

    pub(crate) fn toggle_view(&mut self) {
        // A half-resolved right click does not follow across views.
        self.right_click.cancel();
        self.view = match self.view {
            View::Canvas => View::Help,
            View::Help => View::Canvas,
        };
    }

    /// Completes the pending text entry against the live font atlas.
    pub(crate) fn finish_text(&mut self, ctx: &egui::Context) {
        let measure = GalleyMeasure { ctx };
        self.canvas.finish_text_entry(&self.session, &measure);
        self.editor_rect = None;
    }
}

impl eframe::App for OverlayApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        match self.view {
            View::Canvas => panels::canvas_panel(self, ctx),
            View::Help => panels::help_panel(self, ctx),
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        if self.never_save {
            return;
        }
        log::debug!("saving session settings");
        eframe::set_value(storage, eframe::APP_KEY, &Settings::capture(&self.session));
    }

    /// The window clears to nothing at all: the desktop stays visible
    /// behind the strokes.
    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        [0.0, 0.0, 0.0, 0.0]
    }
}

/// Text measurement against egui's font atlas.
pub(crate) struct GalleyMeasure<'a> {
    pub(crate) ctx: &'a egui::Context,
}

impl TextMeasure for GalleyMeasure<'_> {
    fn center_offset(&self, text: &str, size: u32) -> Vec2 {
        let galley = self.ctx.fonts(|fonts| {
            fonts.layout_no_wrap(
                text.to_owned(),
                FontId::proportional(size as f32),
                Color32::WHITE,
            )
        });
        galley.size() / 2.0
    }
}

fn screen_height(ctx: &egui::Context) -> f32 {
    ctx.input(|i| i.viewport().monitor_size)
        .map_or(settings::FALLBACK_SCREEN_HEIGHT, |size| size.y)
}
