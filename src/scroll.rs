use std::fmt;
use std::str::FromStr;

use crate::color::Color;
use crate::error::ParseNameError;
use crate::tool::Tool;

/// What a wheel notch adjusts, in cycling order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollMode {
    History,
    Hue,
    Saturation,
    Brightness,
    Opacity,
    BrushSize,
    ToolSwitch,
}

/// Hue degrees per wheel notch.
const HUE_STEP: i32 = 5;
/// Saturation/brightness/opacity units per wheel notch.
const CHANNEL_STEP: i32 = 5;
/// Size pixels or points per wheel notch.
const SIZE_STEP: i32 = 1;

impl ScrollMode {
    pub const ALL: [Self; 7] = [
        Self::History,
        Self::Hue,
        Self::Saturation,
        Self::Brightness,
        Self::Opacity,
        Self::BrushSize,
        Self::ToolSwitch,
    ];

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|m| *m == self).unwrap_or(0)
    }

    /// Steps through the mode order, wrapping at both ends.
    pub fn cycle(self, step: i32) -> Self {
        let count = Self::ALL.len() as i32;
        let next = (self.index() as i32 + step).rem_euclid(count);
        Self::ALL[next as usize]
    }

    /// Modes whose indicator detail is the four-channel color summary.
    pub fn adjusts_color(self) -> bool {
        matches!(
            self,
            Self::Hue | Self::Saturation | Self::Brightness | Self::Opacity
        )
    }

    /// The indicator heading for this mode.
    pub fn label(self) -> &'static str {
        match self {
            Self::History => "History",
            Self::Hue => "Hue",
            Self::Saturation => "Saturation",
            Self::Brightness => "Brightness",
            Self::Opacity => "Opacity",
            Self::BrushSize => "Size",
            Self::ToolSwitch => "Tool",
        }
    }
}

impl fmt::Display for ScrollMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ScrollMode {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "history" => Ok(Self::History),
            "hue" => Ok(Self::Hue),
            "saturation" => Ok(Self::Saturation),
            "brightness" => Ok(Self::Brightness),
            "opacity" => Ok(Self::Opacity),
            "size" => Ok(Self::BrushSize),
            "tool" => Ok(Self::ToolSwitch),
            _ => Err(ParseNameError::UnknownScrollMode(s.to_owned())),
        }
    }
}

/// What a wheel event changed. The app shell turns this into history
/// operations and indicator feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollOutcome {
    Undo,
    Redo,
    ColorChanged,
    WidthChanged(u32),
    TextSizeChanged(u32),
    ToolChanged(Tool),
}

/// The session parameters every new stroke is stamped with: current tool,
/// color, sizes and the active scroll mode.
///
/// Owned by the wheel controller; the drawing state machine only reads it.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    tool: Tool,
    color: Color,
    width: u32,
    text_size: u32,
    mode: ScrollMode,
}

impl Session {
    pub fn new(tool: Tool, color: Color, width: u32, text_size: u32, mode: ScrollMode) -> Self {
        Self {
            tool,
            color,
            width: width.max(1),
            text_size: text_size.max(1),
            mode,
        }
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn text_size(&self) -> u32 {
        self.text_size
    }

    pub fn mode(&self) -> ScrollMode {
        self.mode
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    /// Injects a color from outside the wheel flow. An explicit color
    /// while erasing selects the pen again.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
        if self.tool == Tool::Eraser {
            self.tool = Tool::Pen;
        }
    }

    pub fn set_width(&mut self, width: u32) {
        self.width = width.max(1);
    }

    pub fn set_text_size(&mut self, size: u32) {
        self.text_size = size.max(1);
    }

    pub fn set_mode(&mut self, mode: ScrollMode) {
        self.mode = mode;
    }

    /// Applies wheel notches under the active mode. Positive notches
    /// increase the targeted value (redo, for the history mode).
    pub fn scroll(&mut self, notches: i32) -> Option<ScrollOutcome> {
        if notches == 0 {
            return None;
        }
        match self.mode {
            ScrollMode::History => Some(if notches < 0 {
                ScrollOutcome::Undo
            } else {
                ScrollOutcome::Redo
            }),
            ScrollMode::Hue => {
                self.color.shift_hue(HUE_STEP * notches);
                Some(ScrollOutcome::ColorChanged)
            }
            ScrollMode::Saturation => {
                self.color.shift_saturation(CHANNEL_STEP * notches);
                Some(ScrollOutcome::ColorChanged)
            }
            ScrollMode::Brightness => {
                self.color.shift_value(CHANNEL_STEP * notches);
                Some(ScrollOutcome::ColorChanged)
            }
            ScrollMode::Opacity => {
                self.color.shift_alpha(CHANNEL_STEP * notches);
                Some(ScrollOutcome::ColorChanged)
            }
            ScrollMode::BrushSize => {
                // The one mode with two targets: the text tool sizes its
                // glyphs, every other tool sizes the stroke.
                if self.tool == Tool::Text {
                    self.text_size = bump(self.text_size, notches);
                    Some(ScrollOutcome::TextSizeChanged(self.text_size))
                } else {
                    self.width = bump(self.width, notches);
                    Some(ScrollOutcome::WidthChanged(self.width))
                }
            }
            ScrollMode::ToolSwitch => {
                self.tool = self.tool.cycle(notches);
                Some(ScrollOutcome::ToolChanged(self.tool))
            }
        }
    }

    /// Steps the active mode, wrapping in both directions.
    pub fn cycle_mode(&mut self, step: i32) -> ScrollMode {
        self.mode = self.mode.cycle(step);
        self.mode
    }
}

fn bump(value: u32, notches: i32) -> u32 {
    (value as i32 + SIZE_STEP * notches).max(1) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(mode: ScrollMode) -> Session {
        Session::new(Tool::Pen, Color::WHITE, 3, 24, mode)
    }

    #[test]
    fn mode_cycle_wraps_in_both_directions() {
        assert_eq!(ScrollMode::ToolSwitch.cycle(1), ScrollMode::History);
        assert_eq!(ScrollMode::History.cycle(-1), ScrollMode::ToolSwitch);
    }

    #[test]
    fn mode_names_round_trip() {
        for mode in ScrollMode::ALL {
            assert_eq!(mode.to_string().parse::<ScrollMode>().unwrap(), mode);
        }
        assert!("volume".parse::<ScrollMode>().is_err());
    }

    #[test]
    fn history_mode_maps_directions_to_undo_and_redo() {
        let mut s = session(ScrollMode::History);
        assert_eq!(s.scroll(-1), Some(ScrollOutcome::Undo));
        assert_eq!(s.scroll(1), Some(ScrollOutcome::Redo));
        assert_eq!(s.scroll(0), None);
    }

    #[test]
    fn brush_size_has_a_floor_of_one() {
        let mut s = session(ScrollMode::BrushSize);
        for _ in 0..10 {
            s.scroll(-1);
        }
        assert_eq!(s.width(), 1);
        assert_eq!(s.scroll(1), Some(ScrollOutcome::WidthChanged(2)));
    }

    #[test]
    fn brush_size_targets_text_size_under_the_text_tool() {
        let mut s = session(ScrollMode::BrushSize);
        s.set_tool(Tool::Text);
        assert_eq!(s.scroll(1), Some(ScrollOutcome::TextSizeChanged(25)));
        assert_eq!(s.width(), 3);
    }

    #[test]
    fn explicit_color_switches_the_eraser_back_to_the_pen() {
        let mut s = session(ScrollMode::Hue);
        s.set_tool(Tool::Eraser);
        s.set_color(Color::new(120, 255, 255, 255));
        assert_eq!(s.tool(), Tool::Pen);
    }
}
