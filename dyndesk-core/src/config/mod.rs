//! Configuration structures and constants for the dyndesk-core library.
//!
//! This module holds everything a single conversion run needs to know: which
//! HEIC file to read, where frames go, which binaries to call and which tool
//! should drive extraction.

mod builder;

use std::fmt;
use std::path::PathBuf;

pub use builder::CoreConfigBuilder;

use crate::external::ExtractionTool;

// Default constants

/// Default program name for the EXIF metadata reader.
pub const DEFAULT_EXIFTOOL_PROGRAM: &str = "exiftool";

/// Default program name for the ImageMagick entry point.
pub const DEFAULT_MAGICK_PROGRAM: &str = "magick";

/// Which external tool should drive frame extraction.
///
/// `Auto` defers to the dependency probe, which prefers exiftool whenever it
/// is installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolPreference {
    #[default]
    Auto,
    Exiftool,
    ImageMagick,
}

impl ToolPreference {
    /// The tool this preference pins, or `None` for `Auto`.
    pub fn pinned(self) -> Option<ExtractionTool> {
        match self {
            ToolPreference::Auto => None,
            ToolPreference::Exiftool => Some(ExtractionTool::Exiftool),
            ToolPreference::ImageMagick => Some(ExtractionTool::ImageMagick),
        }
    }
}

impl fmt::Display for ToolPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolPreference::Auto => write!(f, "auto"),
            ToolPreference::Exiftool => write!(f, "exiftool"),
            ToolPreference::ImageMagick => write!(f, "imagemagick"),
        }
    }
}

/// Main configuration structure for a conversion run.
///
/// Only `input_path` is required; everything else has a default. The builder
/// is the usual way to create one.
///
/// # Examples
///
/// ```rust
/// use dyndesk_core::config::{CoreConfigBuilder, ToolPreference};
/// use std::path::PathBuf;
///
/// let config = CoreConfigBuilder::new()
///     .input_path(PathBuf::from("/wallpapers/Mojave.heic"))
///     .output_dir(PathBuf::from("/tmp/mojave"))
///     .tool_preference(ToolPreference::ImageMagick)
///     .build();
///
/// assert_eq!(config.magick_program, "magick");
/// ```
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// The Dynamic Desktop HEIC file to convert
    pub input_path: PathBuf,

    /// Directory for extracted frames. Defaults to `.<stem>_extracted`
    /// beside the input when `None`.
    pub output_dir: Option<PathBuf>,

    /// Program used to invoke exiftool
    pub exiftool_program: String,

    /// Program used to invoke ImageMagick
    pub magick_program: String,

    /// Which tool drives frame extraction
    pub tool_preference: ToolPreference,
}

impl CoreConfig {
    /// Creates a configuration for `input_path` with all defaults.
    pub fn new(input_path: PathBuf) -> Self {
        Self {
            input_path,
            ..Default::default()
        }
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::new(),
            output_dir: None,
            exiftool_program: DEFAULT_EXIFTOOL_PROGRAM.to_string(),
            magick_program: DEFAULT_MAGICK_PROGRAM.to_string(),
            tool_preference: ToolPreference::Auto,
        }
    }
}
