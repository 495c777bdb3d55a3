use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::color::Color;
use crate::scroll::{ScrollMode, Session};
use crate::tool::Tool;

/// Screen height assumed when the monitor size is not known yet.
pub const FALLBACK_SCREEN_HEIGHT: f32 = 1080.0;

/// Brush width as a fraction of the screen height.
const DEFAULT_WIDTH_FRACTION: f32 = 0.005;
/// Text size as a fraction of the screen height.
const DEFAULT_TEXT_FRACTION: f32 = 0.025;
const MIN_DEFAULT_TEXT_SIZE: u32 = 12;

/// Snapshot of the adjustable session values, persisted across runs.
///
/// Tool and mode are stored by name so a stale or hand-edited entry
/// degrades to the default instead of discarding the whole snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub tool: String,
    pub mode: String,
    pub hue: u16,
    pub saturation: u8,
    pub value: u8,
    pub opacity: u8,
    pub width: u32,
    pub text_size: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self::with_screen_height(FALLBACK_SCREEN_HEIGHT)
    }
}

impl Settings {
    /// Built-in defaults, scaled to the screen: a white opaque pen whose
    /// width and text size follow the display resolution.
    pub fn with_screen_height(height: f32) -> Self {
        Self {
            tool: Tool::Pen.to_string(),
            mode: ScrollMode::History.to_string(),
            hue: 0,
            saturation: 0,
            value: 255,
            opacity: 255,
            width: ((height * DEFAULT_WIDTH_FRACTION) as u32).max(1),
            text_size: ((height * DEFAULT_TEXT_FRACTION) as u32).max(MIN_DEFAULT_TEXT_SIZE),
        }
    }

    /// Applies command-line overrides, the highest-precedence source.
    /// Out-of-range values are clamped, never rejected.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(tool) = &cli.tool {
            self.tool = tool.clone();
        }
        if let Some(mode) = &cli.mode {
            self.mode = mode.clone();
        }
        if let Some(hue) = cli.hue {
            self.hue = hue.min(359);
        }
        if let Some(saturation) = cli.saturation {
            self.saturation = saturation;
        }
        if let Some(value) = cli.value {
            self.value = value;
        }
        if let Some(opacity) = cli.opacity {
            self.opacity = opacity;
        }
        if let Some(size) = cli.size {
            self.width = size.max(1);
        }
        if let Some(text_size) = cli.text_size {
            self.text_size = text_size.max(1);
        }
    }

    /// The stored tool, defaulting to the pen on an unknown name.
    pub fn tool(&self) -> Tool {
        self.tool.parse().unwrap_or_else(|err| {
            log::warn!("{err}, falling back to the pen");
            Tool::Pen
        })
    }

    /// The stored scroll mode, defaulting to history on an unknown name.
    pub fn mode(&self) -> ScrollMode {
        self.mode.parse().unwrap_or_else(|err| {
            log::warn!("{err}, falling back to history");
            ScrollMode::History
        })
    }

    pub fn color(&self) -> Color {
        Color::new(self.hue, self.saturation, self.value, self.opacity)
    }

    /// Builds the startup session from the merged settings.
    pub fn to_session(&self) -> Session {
        Session::new(
            self.tool(),
            self.color(),
            self.width,
            self.text_size,
            self.mode(),
        )
    }

    /// Captures the current session for saving at shutdown.
    pub fn capture(session: &Session) -> Self {
        let color = session.color();
        Self {
            tool: session.tool().to_string(),
            mode: session.mode().to_string(),
            hue: color.hue(),
            saturation: color.saturation(),
            value: color.value(),
            opacity: color.alpha(),
            width: session.width(),
            text_size: session.text_size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_scale_with_the_screen() {
        let settings = Settings::with_screen_height(2160.0);
        assert_eq!(settings.width, 10);
        assert_eq!(settings.text_size, 54);

        let tiny = Settings::with_screen_height(100.0);
        assert_eq!(tiny.width, 1);
        assert_eq!(tiny.text_size, MIN_DEFAULT_TEXT_SIZE);
    }

    #[test]
    fn cli_overrides_win_over_stored_values() {
        let mut settings = Settings {
            tool: Tool::Line.to_string(),
            hue: 40,
            ..Settings::default()
        };

        let cli = Cli {
            tool: Some("circle".to_owned()),
            hue: Some(400),
            size: Some(0),
            ..Cli::default()
        };
        settings.apply_cli(&cli);

        assert_eq!(settings.tool(), Tool::Circle);
        // Out-of-range hue clamps, zero width floors at one.
        assert_eq!(settings.hue, 359);
        assert_eq!(settings.width, 1);
    }

    #[test]
    fn unknown_names_fall_back_to_the_defaults() {
        let settings = Settings {
            tool: "crayon".to_owned(),
            mode: "volume".to_owned(),
            ..Settings::default()
        };
        assert_eq!(settings.tool(), Tool::Pen);
        assert_eq!(settings.mode(), ScrollMode::History);
    }

    #[test]
    fn capture_round_trips_through_a_session() {
        let settings = Settings {
            tool: Tool::Arrow.to_string(),
            mode: ScrollMode::Opacity.to_string(),
            hue: 200,
            saturation: 100,
            value: 220,
            opacity: 128,
            width: 4,
            text_size: 30,
        };
        let session = settings.to_session();
        assert_eq!(Settings::capture(&session), settings);
    }
}
