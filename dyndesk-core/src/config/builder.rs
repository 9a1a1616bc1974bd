// ============================================================================
// dyndesk-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for CoreConfig
//
// Fluent construction of CoreConfig with defaults for every optional field.

use std::path::PathBuf;

use super::{CoreConfig, ToolPreference};

/// Builder for creating CoreConfig instances.
///
/// # Examples
///
/// ```rust
/// use dyndesk_core::config::CoreConfigBuilder;
/// use std::path::PathBuf;
///
/// let config = CoreConfigBuilder::new()
///     .input_path(PathBuf::from("Catalina.heic"))
///     .magick_program("/opt/imagemagick/bin/magick")
///     .build();
///
/// assert!(config.output_dir.is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CoreConfigBuilder {
    config: CoreConfig,
}

impl CoreConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the HEIC file to convert.
    pub fn input_path(mut self, path: PathBuf) -> Self {
        self.config.input_path = path;
        self
    }

    /// Sets the directory for extracted frames.
    pub fn output_dir(mut self, dir: PathBuf) -> Self {
        self.config.output_dir = Some(dir);
        self
    }

    /// Sets (or clears) the directory for extracted frames.
    pub fn maybe_output_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.config.output_dir = dir;
        self
    }

    /// Sets the program used to invoke exiftool.
    pub fn exiftool_program(mut self, program: impl Into<String>) -> Self {
        self.config.exiftool_program = program.into();
        self
    }

    /// Sets the program used to invoke ImageMagick.
    pub fn magick_program(mut self, program: impl Into<String>) -> Self {
        self.config.magick_program = program.into();
        self
    }

    /// Sets which tool drives frame extraction.
    pub fn tool_preference(mut self, preference: ToolPreference) -> Self {
        self.config.tool_preference = preference;
        self
    }

    /// Builds the CoreConfig.
    pub fn build(self) -> CoreConfig {
        self.config
    }
}
