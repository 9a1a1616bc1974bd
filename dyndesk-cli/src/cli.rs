// dyndesk-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Parser, ValueEnum};
use dyndesk_core::ToolPreference;
use dyndesk_core::config::{DEFAULT_EXIFTOOL_PROGRAM, DEFAULT_MAGICK_PROGRAM};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "dyndesk: Dynamic Desktop HEIC to wallpaper schedule converter",
    long_about = "Converts Apple Dynamic Desktop HEIC files to a JSON wallpaper schedule \
                  using exiftool and ImageMagick via the dyndesk-core library."
)]
pub struct Cli {
    /// Path to the Dynamic Desktop HEIC file
    #[arg(value_name = "HEIC_PATH")]
    pub heic_path: PathBuf,

    /// Optional: Directory for extracted frames (defaults to .<name>_extracted beside the HEIC)
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// exiftool executable to run
    #[arg(
        long,
        value_name = "PATH",
        env = "DYNDESK_EXIFTOOL",
        default_value = DEFAULT_EXIFTOOL_PROGRAM
    )]
    pub exiftool: String,

    /// ImageMagick executable to run
    #[arg(
        long,
        value_name = "PATH",
        env = "DYNDESK_MAGICK",
        default_value = DEFAULT_MAGICK_PROGRAM
    )]
    pub magick: String,

    /// Tool used for frame extraction; `auto` prefers exiftool when installed
    #[arg(long, value_enum, env = "DYNDESK_TOOL", default_value_t = ToolArg::Auto)]
    pub tool: ToolArg,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Optional: Directory for a timestamped log file of this run
    #[arg(long, value_name = "LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolArg {
    Auto,
    Exiftool,
    Imagemagick,
}

impl From<ToolArg> for ToolPreference {
    fn from(arg: ToolArg) -> Self {
        match arg {
            ToolArg::Auto => ToolPreference::Auto,
            ToolArg::Exiftool => ToolPreference::Exiftool,
            ToolArg::Imagemagick => ToolPreference::ImageMagick,
        }
    }
}
