use egui::{Pos2, Vec2};

use crate::color::Color;
use crate::history::History;
use crate::scroll::Session;
use crate::stroke::Stroke;
use crate::tool::Tool;

/// Measures a rendered text box so a label can be centered on the press
/// point. The app shell implements this against egui's font layout;
/// tests use fixed-size fixtures.
pub trait TextMeasure {
    /// Offset from the box's top-left corner to its center.
    fn center_offset(&self, text: &str, size: u32) -> Vec2;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum Phase {
    #[default]
    Idle,
    Drawing,
}

/// A text entry waiting for the user to finish typing. The editor widget
/// types directly into `buffer`.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingText {
    pub press: Pos2,
    pub buffer: String,
}

/// The press/move/release state machine, owner of the in-progress stroke
/// and of the stroke history it finalizes into.
///
/// Pressing with the text tool does not start drawing; it opens a pending
/// text entry that is finalized on completion or superseded by the next
/// press.
#[derive(Debug, Default)]
pub struct Canvas {
    phase: Phase,
    live: Vec<Pos2>,
    history: History,
    pending_text: Option<PendingText>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Primary-button press. Any unfinished text entry is finalized first;
    /// then either a new text entry opens (text tool) or a stroke starts.
    pub fn press(&mut self, pos: Pos2, session: &Session, measure: &dyn TextMeasure) {
        self.finish_text_entry(session, measure);

        if session.tool() == Tool::Text {
            self.pending_text = Some(PendingText {
                press: pos,
                buffer: String::new(),
            });
            return;
        }

        self.history.invalidate_redo();
        self.live.clear();
        self.live.push(pos);
        if session.tool().is_two_point() {
            // The live preview always has an endpoint to draw to.
            self.live.push(pos);
        }
        self.phase = Phase::Drawing;
    }

    /// Pointer motion. Freehand tools keep every sample; shape tools only
    /// track the current endpoint.
    pub fn motion(&mut self, pos: Pos2, session: &Session) {
        if self.phase != Phase::Drawing {
            return;
        }
        if session.tool().is_two_point() && self.live.len() >= 2 {
            if let Some(end) = self.live.last_mut() {
                *end = pos;
            }
        } else {
            self.live.push(pos);
        }
    }

    /// Primary-button release. Commits the in-progress stroke, resolving
    /// the eraser to the transparent color. Returns whether a stroke was
    /// committed; a release while idle is a no-op.
    pub fn release(&mut self, session: &Session) -> bool {
        if self.phase != Phase::Drawing {
            return false;
        }
        self.phase = Phase::Idle;
        if self.live.is_empty() {
            return false;
        }
        let color = if session.tool() == Tool::Eraser {
            Color::TRANSPARENT
        } else {
            session.color()
        };
        let points = std::mem::take(&mut self.live);
        self.history
            .commit(Stroke::path(session.tool(), points, color, session.width()));
        true
    }

    /// Drops the in-progress stroke without committing it. The second
    /// press of a double-click starts a spurious stroke; this swallows it.
    pub fn discard_live(&mut self) {
        self.phase = Phase::Idle;
        self.live.clear();
    }

    /// Finishes a pending text entry. Empty text is dropped; anything else
    /// commits a label whose box is centered on the original press point.
    pub fn finish_text_entry(&mut self, session: &Session, measure: &dyn TextMeasure) {
        let Some(pending) = self.pending_text.take() else {
            return;
        };
        if pending.buffer.is_empty() {
            return;
        }
        let offset = measure.center_offset(&pending.buffer, session.text_size());
        let anchor = pending.press - offset;
        self.history.commit(Stroke::label(
            anchor,
            pending.buffer,
            session.text_size(),
            session.color(),
        ));
    }

    pub fn is_drawing(&self) -> bool {
        self.phase == Phase::Drawing
    }

    pub fn live_points(&self) -> &[Pos2] {
        &self.live
    }

    /// The stroke being drawn, shaped the way it will be committed.
    /// None while idle.
    pub fn live_stroke(&self, session: &Session) -> Option<Stroke> {
        if self.phase != Phase::Drawing || self.live.is_empty() {
            return None;
        }
        let color = if session.tool() == Tool::Eraser {
            Color::TRANSPARENT
        } else {
            session.color()
        };
        Some(Stroke::path(
            session.tool(),
            self.live.clone(),
            color,
            session.width(),
        ))
    }

    pub fn pending_text(&self) -> Option<&PendingText> {
        self.pending_text.as_ref()
    }

    pub fn pending_text_mut(&mut self) -> Option<&mut PendingText> {
        self.pending_text.as_mut()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::ScrollMode;
    use egui::{pos2, vec2};

    /// Pretends every text box has the same center offset.
    struct FixedBox(Vec2);

    impl TextMeasure for FixedBox {
        fn center_offset(&self, _text: &str, _size: u32) -> Vec2 {
            self.0
        }
    }

    fn session(tool: Tool) -> Session {
        Session::new(tool, Color::WHITE, 3, 24, ScrollMode::History)
    }

    const NO_BOX: FixedBox = FixedBox(Vec2::ZERO);

    #[test]
    fn release_while_idle_does_nothing() {
        let mut canvas = Canvas::new();
        assert!(!canvas.release(&session(Tool::Pen)));
        assert!(canvas.history().strokes().is_empty());
    }

    #[test]
    fn pressing_invalidates_redo() {
        let mut canvas = Canvas::new();
        let s = session(Tool::Pen);
        canvas.press(pos2(0.0, 0.0), &s, &NO_BOX);
        canvas.release(&s);
        canvas.history_mut().undo();
        assert!(canvas.history().can_redo());

        canvas.press(pos2(5.0, 5.0), &s, &NO_BOX);
        assert!(!canvas.history().can_redo());
    }

    #[test]
    fn text_press_opens_an_entry_instead_of_drawing() {
        let mut canvas = Canvas::new();
        canvas.press(pos2(40.0, 40.0), &session(Tool::Text), &NO_BOX);
        assert!(!canvas.is_drawing());
        assert_eq!(canvas.pending_text().unwrap().press, pos2(40.0, 40.0));
    }

    #[test]
    fn finished_text_is_centered_on_the_press_point() {
        let mut canvas = Canvas::new();
        let s = session(Tool::Text);
        canvas.press(pos2(100.0, 100.0), &s, &NO_BOX);
        canvas.pending_text_mut().unwrap().buffer.push_str("hello");

        canvas.finish_text_entry(&s, &FixedBox(vec2(20.0, 8.0)));
        let strokes = canvas.history().strokes();
        assert_eq!(strokes.len(), 1);
        assert_eq!(strokes[0].points(), &[pos2(80.0, 92.0)]);
        assert_eq!(strokes[0].text(), Some("hello"));
    }

    #[test]
    fn empty_text_entry_is_discarded() {
        let mut canvas = Canvas::new();
        let s = session(Tool::Text);
        canvas.press(pos2(10.0, 10.0), &s, &NO_BOX);
        canvas.finish_text_entry(&s, &NO_BOX);
        assert!(canvas.history().strokes().is_empty());
        assert!(canvas.pending_text().is_none());
    }

    #[test]
    fn next_press_finalizes_the_pending_entry_first() {
        let mut canvas = Canvas::new();
        let s = session(Tool::Text);
        canvas.press(pos2(10.0, 10.0), &s, &NO_BOX);
        canvas.pending_text_mut().unwrap().buffer.push_str("first");

        canvas.press(pos2(50.0, 50.0), &s, &NO_BOX);
        assert_eq!(canvas.history().strokes().len(), 1);
        assert_eq!(canvas.history().strokes()[0].text(), Some("first"));
        assert!(canvas.pending_text().unwrap().buffer.is_empty());
    }
}
