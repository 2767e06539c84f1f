use std::path::PathBuf;

use clap::Parser;

use joyserial::app::DEFAULT_POLL_HZ;
use joyserial::sink::LineEnding;
use joyserial_profile::DEFAULT_DEVICE_NAME;

/// Converts joystick input into text lines for a serial console.
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub(crate) struct Cli {
    /// Reported name of the controller to use. A name containing "test"
    /// dumps raw events instead
    #[arg(long, default_value = DEFAULT_DEVICE_NAME)]
    pub controller_name: String,

    /// Turn debugging information on
    #[arg(short, long)]
    pub debug: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// YAML profile with additional device configurations
    #[arg(short, long)]
    pub profile: Option<PathBuf>,

    /// Write lines to this file or serial device instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Terminator appended to every line
    #[arg(long, value_enum, default_value_t = LineEnding::Crlf)]
    pub line_ending: LineEnding,

    /// Input drain frequency, 0 to poll without pause
    #[arg(long, default_value_t = DEFAULT_POLL_HZ)]
    pub poll_hz: u32,

    /// Joystick to open, in backend enumeration order
    #[arg(long, default_value_t = 0)]
    pub joystick_index: u32,

    /// Print supported controller names and exit
    #[arg(long)]
    pub list: bool,
}
