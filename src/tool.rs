use std::fmt;
use std::str::FromStr;

use egui::{Pos2, Vec2};

use crate::error::ParseNameError;
use crate::stroke::Stroke;

/// Annotation tools, in the order the wheel cycles through them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Pen,
    Eraser,
    Text,
    Line,
    Arrow,
    Rectangle,
    Circle,
}

/// Angle between the arrow shaft and each head flank.
const ARROW_FLANK_ANGLE: f32 = std::f32::consts::PI / 6.0;
/// Head flank length as a multiple of the stroke width.
const ARROW_LENGTH_FACTOR: f32 = 3.0;

impl Tool {
    pub const ALL: [Self; 7] = [
        Self::Pen,
        Self::Eraser,
        Self::Text,
        Self::Line,
        Self::Arrow,
        Self::Rectangle,
        Self::Circle,
    ];

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    /// Steps through the tool order, wrapping at both ends.
    pub fn cycle(self, step: i32) -> Self {
        let count = Self::ALL.len() as i32;
        let next = (self.index() as i32 + step).rem_euclid(count);
        Self::ALL[next as usize]
    }

    /// Shape tools keep an anchor point and a live endpoint, nothing else.
    pub fn is_two_point(self) -> bool {
        matches!(self, Self::Line | Self::Arrow | Self::Rectangle | Self::Circle)
    }

    pub fn is_freehand(self) -> bool {
        matches!(self, Self::Pen | Self::Eraser)
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pen => "pen",
            Self::Eraser => "eraser",
            Self::Text => "text",
            Self::Line => "line",
            Self::Arrow => "arrow",
            Self::Rectangle => "rectangle",
            Self::Circle => "circle",
        };
        f.write_str(name)
    }
}

impl FromStr for Tool {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pen" => Ok(Self::Pen),
            "eraser" => Ok(Self::Eraser),
            "text" => Ok(Self::Text),
            "line" => Ok(Self::Line),
            "arrow" => Ok(Self::Arrow),
            "rectangle" => Ok(Self::Rectangle),
            "circle" => Ok(Self::Circle),
            _ => Err(ParseNameError::UnknownTool(s.to_owned())),
        }
    }
}

/// A renderable primitive derived from a stroke.
///
/// Borrowed views into the stroke; nothing is copied until a surface
/// draws it.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive<'a> {
    /// Freehand path. `clear` means the backend erases instead of painting.
    Polyline { points: &'a [Pos2], clear: bool },
    Segment {
        from: Pos2,
        to: Pos2,
    },
    /// Shaft plus the two head flanks.
    ArrowSegment {
        from: Pos2,
        to: Pos2,
        head: [Pos2; 2],
    },
    /// Axis-aligned rectangle with the two points as opposite corners.
    CornerRect { a: Pos2, b: Pos2 },
    /// Ellipse inscribed in the corner-defined bounding box.
    CornerEllipse { a: Pos2, b: Pos2 },
    /// Text at its top-left anchor.
    Glyphs {
        anchor: Pos2,
        text: &'a str,
        size: u32,
    },
}

/// Derives the primitive a stroke renders as.
///
/// Degenerate strokes (fewer than two points for the non-text tools,
/// missing or empty text for the text tool) resolve to `None` and are
/// skipped by the renderer.
pub fn resolve(stroke: &Stroke) -> Option<Primitive<'_>> {
    let points = stroke.points();
    if stroke.tool() == Tool::Text {
        let text = stroke.text().filter(|t| !t.is_empty())?;
        let anchor = *points.first()?;
        return Some(Primitive::Glyphs {
            anchor,
            text,
            size: stroke.text_size().unwrap_or(1),
        });
    }
    if points.len() < 2 {
        return None;
    }
    match stroke.tool() {
        Tool::Text => unreachable!(),
        Tool::Pen | Tool::Eraser => Some(Primitive::Polyline {
            points,
            clear: stroke.tool() == Tool::Eraser,
        }),
        Tool::Line => Some(Primitive::Segment {
            from: points[0],
            to: points[points.len() - 1],
        }),
        Tool::Arrow => {
            let from = points[0];
            let to = points[points.len() - 1];
            Some(Primitive::ArrowSegment {
                from,
                to,
                head: arrow_head(from, to, stroke.width()),
            })
        }
        Tool::Rectangle => Some(Primitive::CornerRect {
            a: points[0],
            b: points[points.len() - 1],
        }),
        Tool::Circle => Some(Primitive::CornerEllipse {
            a: points[0],
            b: points[points.len() - 1],
        }),
    }
}

/// The two head flanks, rotated off the reversed shaft direction.
fn arrow_head(from: Pos2, to: Pos2, width: u32) -> [Pos2; 2] {
    let back = (from - to).angle();
    let length = ARROW_LENGTH_FACTOR * width as f32;
    [
        to + length * Vec2::angled(back - ARROW_FLANK_ANGLE),
        to + length * Vec2::angled(back + ARROW_FLANK_ANGLE),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use egui::pos2;

    fn path(tool: Tool, points: Vec<Pos2>) -> Stroke {
        Stroke::path(tool, points, Color::WHITE, 2)
    }

    #[test]
    fn cycle_wraps_in_both_directions() {
        assert_eq!(Tool::Circle.cycle(1), Tool::Pen);
        assert_eq!(Tool::Pen.cycle(-1), Tool::Circle);
        assert_eq!(Tool::Pen.cycle(7), Tool::Pen);
    }

    #[test]
    fn names_round_trip() {
        for tool in Tool::ALL {
            assert_eq!(tool.to_string().parse::<Tool>().unwrap(), tool);
        }
        assert_eq!("Rectangle".parse::<Tool>().unwrap(), Tool::Rectangle);
        assert!("marker".parse::<Tool>().is_err());
    }

    #[test]
    fn single_point_shape_resolves_to_nothing() {
        for tool in [Tool::Pen, Tool::Line, Tool::Arrow, Tool::Rectangle, Tool::Circle] {
            let stroke = path(tool, vec![pos2(5.0, 5.0)]);
            assert_eq!(resolve(&stroke), None);
        }
    }

    #[test]
    fn empty_text_resolves_to_nothing() {
        let stroke = Stroke::label(pos2(5.0, 5.0), String::new(), 20, Color::WHITE);
        assert_eq!(resolve(&stroke), None);
    }

    #[test]
    fn eraser_polyline_is_marked_clear() {
        let stroke = path(Tool::Eraser, vec![pos2(0.0, 0.0), pos2(4.0, 4.0)]);
        match resolve(&stroke) {
            Some(Primitive::Polyline { clear: true, .. }) => {}
            other => panic!("expected clear polyline, got {other:?}"),
        }
    }

    #[test]
    fn arrow_head_flanks_sit_off_the_shaft() {
        let stroke = path(Tool::Arrow, vec![pos2(0.0, 0.0), pos2(10.0, 0.0)]);
        let Some(Primitive::ArrowSegment { to, head, .. }) = resolve(&stroke) else {
            panic!("expected an arrow");
        };

        let expected_len = ARROW_LENGTH_FACTOR * 2.0;
        for flank in head {
            assert!(((flank - to).length() - expected_len).abs() < 1e-4);
        }
        // Flanks point back along the shaft, mirrored across it.
        assert!(head[0].x < to.x && head[1].x < to.x);
        assert!((head[0].y + head[1].y).abs() < 1e-4);
        assert!(head[0].y != head[1].y);
    }
}
