use egui::{Context, Key, PointerButton, Pos2};

mod canvas_panel;
mod help_panel;

pub use canvas_panel::canvas_panel;
pub use help_panel::help_panel;

/// Snapshot of one frame of pointer, wheel and key input, read once and
/// routed from there.
pub(crate) struct FrameInput {
    pub pos: Option<Pos2>,
    pub primary_pressed: bool,
    pub primary_released: bool,
    pub primary_double: bool,
    pub secondary_released: bool,
    pub secondary_double: bool,
    pub middle_released: bool,
    pub middle_down: bool,
    pub scroll_y: f32,
    pub escape: bool,
    /// Both main buttons held at once.
    pub chord_close: bool,
}

pub(crate) fn gather(ctx: &Context) -> FrameInput {
    ctx.input(|i| FrameInput {
        pos: i.pointer.latest_pos(),
        primary_pressed: i.pointer.button_pressed(PointerButton::Primary),
        primary_released: i.pointer.button_released(PointerButton::Primary),
        primary_double: i.pointer.button_double_clicked(PointerButton::Primary),
        secondary_released: i.pointer.button_released(PointerButton::Secondary),
        secondary_double: i.pointer.button_double_clicked(PointerButton::Secondary),
        middle_released: i.pointer.button_released(PointerButton::Middle),
        middle_down: i.pointer.button_down(PointerButton::Middle),
        scroll_y: i.raw_scroll_delta.y,
        escape: i.key_pressed(Key::Escape),
        chord_close: i.pointer.button_down(PointerButton::Primary)
            && i.pointer.button_down(PointerButton::Secondary),
    })
}
