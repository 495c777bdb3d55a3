use egui::epaint::EllipseShape;
use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, vec2};

use crate::scroll::Session;
use crate::stroke::Stroke;
use crate::tool::{self, Primitive, Tool};

/// Near-invisible fill that keeps the overlay receiving pointer events.
/// Erase strokes paint in this tint.
pub const BACKING_TINT: Color32 = Color32::from_black_alpha(1);

/// Gap between the cursor and the indicator text.
const INDICATOR_MARGIN: f32 = 15.0;
/// Indicator line height.
const INDICATOR_LINE_STEP: f32 = 18.0;
const INDICATOR_FONT: f32 = 14.0;

/// Primitive draw operations the overlay renders through, one per shape
/// the tool resolver can produce. The egui painter implements it for the
/// live window; tests record calls instead.
pub trait Surface {
    /// `clear` asks the backend to erase to transparency along the path.
    fn polyline(&mut self, points: &[Pos2], width: f32, color: Color32, clear: bool);
    fn segment(&mut self, from: Pos2, to: Pos2, width: f32, color: Color32);
    fn corner_rect(&mut self, a: Pos2, b: Pos2, width: f32, color: Color32);
    fn corner_ellipse(&mut self, a: Pos2, b: Pos2, width: f32, color: Color32);
    fn glyphs(&mut self, anchor: Pos2, text: &str, size: f32, color: Color32);
}

/// Draws one stroke through a surface. Degenerate strokes resolve to no
/// primitive and are skipped.
pub fn draw_stroke(surface: &mut dyn Surface, stroke: &Stroke) {
    let Some(primitive) = tool::resolve(stroke) else {
        return;
    };
    let color = stroke.color().to_color32();
    let width = stroke.width() as f32;
    match primitive {
        Primitive::Polyline { points, clear } => surface.polyline(points, width, color, clear),
        Primitive::Segment { from, to } => surface.segment(from, to, width, color),
        Primitive::ArrowSegment { from, to, head } => {
            surface.segment(from, to, width, color);
            surface.segment(to, head[0], width, color);
            surface.segment(to, head[1], width, color);
        }
        Primitive::CornerRect { a, b } => surface.corner_rect(a, b, width, color),
        Primitive::CornerEllipse { a, b } => surface.corner_ellipse(a, b, width, color),
        Primitive::Glyphs { anchor, text, size } => {
            surface.glyphs(anchor, text, size as f32, color);
        }
    }
}

/// Draws every committed stroke in order, then the live one on top.
pub fn draw_all(surface: &mut dyn Surface, committed: &[Stroke], live: Option<&Stroke>) {
    for stroke in committed {
        draw_stroke(surface, stroke);
    }
    if let Some(stroke) = live {
        draw_stroke(surface, stroke);
    }
}

/// egui-painter-backed surface.
///
/// egui exposes no clear composite, so erase strokes paint in the
/// overlay's backing tint instead of cutting through it.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter) -> Self {
        Self { painter }
    }
}

impl Surface for PainterSurface<'_> {
    fn polyline(&mut self, points: &[Pos2], width: f32, color: Color32, clear: bool) {
        let color = if clear { BACKING_TINT } else { color };
        let stroke = egui::Stroke::new(width, color);
        if points.len() == 2 {
            self.painter.line_segment([points[0], points[1]], stroke);
        } else {
            self.painter.add(egui::Shape::line(points.to_vec(), stroke));
        }
    }

    fn segment(&mut self, from: Pos2, to: Pos2, width: f32, color: Color32) {
        self.painter
            .line_segment([from, to], egui::Stroke::new(width, color));
    }

    fn corner_rect(&mut self, a: Pos2, b: Pos2, width: f32, color: Color32) {
        self.painter.rect_stroke(
            Rect::from_two_pos(a, b),
            0.0,
            egui::Stroke::new(width, color),
        );
    }

    fn corner_ellipse(&mut self, a: Pos2, b: Pos2, width: f32, color: Color32) {
        let rect = Rect::from_two_pos(a, b);
        self.painter.add(egui::Shape::Ellipse(EllipseShape {
            center: rect.center(),
            radius: rect.size() / 2.0,
            fill: Color32::TRANSPARENT,
            stroke: egui::Stroke::new(width, color),
        }));
    }

    fn glyphs(&mut self, anchor: Pos2, text: &str, size: f32, color: Color32) {
        self.painter.text(
            anchor,
            Align2::LEFT_TOP,
            text,
            FontId::proportional(size),
            color,
        );
    }
}

/// Brush cursor: an outlined ring for the eraser, a filled dot in the pen
/// color otherwise. The system cursor is hidden over the overlay.
pub fn draw_cursor(painter: &Painter, pos: Pos2, session: &Session) {
    let radius = (session.width() as f32 / 2.0).max(1.0);
    if session.tool() == Tool::Eraser {
        painter.circle_stroke(pos, radius, egui::Stroke::new(1.0, Color32::WHITE));
    } else {
        painter.circle_filled(pos, radius, session.color().to_color32());
    }
}

/// Indicator text below-right of the cursor, white over a one-pixel black
/// outline so it reads on any desktop.
pub fn draw_indicator(painter: &Painter, cursor: Pos2, brush_radius: f32, heading: &str, detail: &str) {
    let origin = cursor + vec2(brush_radius + INDICATOR_MARGIN, brush_radius + INDICATOR_MARGIN);
    outlined_text(painter, origin, heading);
    if !detail.is_empty() {
        outlined_text(painter, origin + vec2(0.0, INDICATOR_LINE_STEP), detail);
    }
}

fn outlined_text(painter: &Painter, pos: Pos2, text: &str) {
    let font = FontId::proportional(INDICATOR_FONT);
    for offset in [
        vec2(1.0, 1.0),
        vec2(-1.0, -1.0),
        vec2(1.0, -1.0),
        vec2(-1.0, 1.0),
    ] {
        painter.text(pos + offset, Align2::LEFT_TOP, text, font.clone(), Color32::BLACK);
    }
    painter.text(pos, Align2::LEFT_TOP, text, font, Color32::WHITE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use egui::pos2;

    /// Records which primitives were drawn, in order.
    #[derive(Default)]
    struct RecordingSurface {
        calls: Vec<String>,
    }

    impl Surface for RecordingSurface {
        fn polyline(&mut self, points: &[Pos2], _width: f32, _color: Color32, clear: bool) {
            self.calls.push(format!("polyline:{}:{clear}", points.len()));
        }

        fn segment(&mut self, _from: Pos2, _to: Pos2, _width: f32, _color: Color32) {
            self.calls.push("segment".to_owned());
        }

        fn corner_rect(&mut self, _a: Pos2, _b: Pos2, _width: f32, _color: Color32) {
            self.calls.push("rect".to_owned());
        }

        fn corner_ellipse(&mut self, _a: Pos2, _b: Pos2, _width: f32, _color: Color32) {
            self.calls.push("ellipse".to_owned());
        }

        fn glyphs(&mut self, _anchor: Pos2, text: &str, _size: f32, _color: Color32) {
            self.calls.push(format!("glyphs:{text}"));
        }
    }

    #[test]
    fn arrow_draws_a_shaft_and_two_flanks() {
        let stroke = Stroke::path(
            Tool::Arrow,
            vec![pos2(0.0, 0.0), pos2(10.0, 0.0)],
            Color::WHITE,
            2,
        );
        let mut surface = RecordingSurface::default();
        draw_stroke(&mut surface, &stroke);
        assert_eq!(surface.calls, ["segment", "segment", "segment"]);
    }

    #[test]
    fn degenerate_strokes_draw_nothing() {
        let dot = Stroke::path(Tool::Rectangle, vec![pos2(1.0, 1.0)], Color::WHITE, 2);
        let mut surface = RecordingSurface::default();
        draw_stroke(&mut surface, &dot);
        assert!(surface.calls.is_empty());
    }

    #[test]
    fn committed_strokes_draw_before_the_live_one() {
        let committed = vec![
            Stroke::path(
                Tool::Eraser,
                vec![pos2(0.0, 0.0), pos2(1.0, 1.0), pos2(2.0, 0.0)],
                Color::TRANSPARENT,
                4,
            ),
            Stroke::label(pos2(5.0, 5.0), "hi".to_owned(), 20, Color::WHITE),
        ];
        let live = Stroke::path(
            Tool::Line,
            vec![pos2(0.0, 0.0), pos2(9.0, 9.0)],
            Color::WHITE,
            2,
        );

        let mut surface = RecordingSurface::default();
        draw_all(&mut surface, &committed, Some(&live));
        assert_eq!(surface.calls, ["polyline:3:true", "glyphs:hi", "segment"]);
    }
}
