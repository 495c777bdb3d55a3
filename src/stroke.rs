use egui::Pos2;

use crate::color::Color;
use crate::tool::Tool;

/// One committed annotation: a freehand path, a shape, or a placed label.
///
/// Points are kept in drawing order and never reordered. Shape tools carry
/// exactly two points (anchor and endpoint), freehand tools one per motion
/// sample, and labels a single anchor with a non-empty text payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Pos2>,
    color: Color,
    width: u32,
    tool: Tool,
    text: Option<String>,
    text_size: Option<u32>,
}

impl Stroke {
    pub fn path(tool: Tool, points: Vec<Pos2>, color: Color, width: u32) -> Self {
        Self {
            points,
            color,
            width: width.max(1),
            tool,
            text: None,
            text_size: None,
        }
    }

    /// A placed text label; `anchor` is the top-left corner of its box.
    pub fn label(anchor: Pos2, text: String, size: u32, color: Color) -> Self {
        Self {
            points: vec![anchor],
            color,
            width: 1,
            tool: Tool::Text,
            text: Some(text),
            text_size: Some(size.max(1)),
        }
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn text_size(&self) -> Option<u32> {
        self.text_size
    }
}
