use clap::Parser;

/// Command-line options. Values given here override the stored settings,
/// which override the built-in defaults.
#[derive(Debug, Default, Parser)]
#[command(
    name = "glassboard",
    version,
    about = "A transparent canvas that floats above your desktop"
)]
pub struct Cli {
    /// Start on the canvas, skipping the help view.
    #[arg(short, long)]
    pub clean: bool,

    /// Initial scroll mode.
    #[arg(short = 'M', long, value_name = "NAME")]
    pub mode: Option<String>,

    /// Initial color hue.
    #[arg(short = 'H', long, value_name = "0-359")]
    pub hue: Option<u16>,

    /// Initial color saturation.
    #[arg(short = 'S', long, value_name = "0-255")]
    pub saturation: Option<u8>,

    /// Initial color value/brightness.
    #[arg(short = 'B', long, value_name = "0-255")]
    pub value: Option<u8>,

    /// Initial color opacity.
    #[arg(short = 'O', long, value_name = "0-255")]
    pub opacity: Option<u8>,

    /// Initial brush/shape size in pixels.
    #[arg(short = 's', long, value_name = "PIXELS")]
    pub size: Option<u32>,

    /// Initial text size in points.
    #[arg(short = 't', long, value_name = "POINTS")]
    pub text_size: Option<u32>,

    /// Initial tool.
    #[arg(short = 'T', long, value_name = "NAME")]
    pub tool: Option<String>,

    /// Discard saved settings and start from the defaults.
    #[arg(short, long)]
    pub reset: bool,

    /// Do not save settings when the overlay exits.
    #[arg(short, long)]
    pub never_save: bool,
}
