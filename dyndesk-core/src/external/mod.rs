// ============================================================================
// dyndesk-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with exiftool and ImageMagick
//
// This module encapsulates every subprocess dyndesk spawns. Each tool sits
// behind a trait so the pipeline can be driven by fakes in tests, with
// concrete implementations that shell out through std::process::Command.
//
// KEY COMPONENTS:
// - ExiftoolExecutor / MagickExecutor traits and their Command-backed types
// - Dependency probing (check_dependency, check_dependencies)
// - ToolAvailability and ExtractionTool, the probe's outcome

use crate::error::{CoreError, CoreResult, command_failed_error, command_start_error};

use std::ffi::OsStr;
use std::fmt;
use std::io;
use std::process::{Command, Output, Stdio};

// ============================================================================
// SUBMODULES
// ============================================================================

/// Traits and implementations for running exiftool
pub mod exiftool_executor;

/// Traits and implementations for running ImageMagick
pub mod magick_executor;

#[cfg(test)]
pub mod mocks;

pub use exiftool_executor::{CommandExiftool, ExiftoolExecutor};
pub use magick_executor::{CommandMagick, MagickExecutor};

// ============================================================================
// TOOL SELECTION
// ============================================================================

/// The external tool used to pull frames out of a HEIC container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionTool {
    Exiftool,
    ImageMagick,
}

impl fmt::Display for ExtractionTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionTool::Exiftool => write!(f, "exiftool"),
            ExtractionTool::ImageMagick => write!(f, "imagemagick"),
        }
    }
}

/// Which of the two external tools answered the version probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToolAvailability {
    pub exiftool: bool,
    pub imagemagick: bool,
}

impl ToolAvailability {
    /// Returns true if `tool` answered the probe.
    pub fn has(&self, tool: ExtractionTool) -> bool {
        match tool {
            ExtractionTool::Exiftool => self.exiftool,
            ExtractionTool::ImageMagick => self.imagemagick,
        }
    }

    /// The tool the probe prefers.
    ///
    /// exiftool wins whenever it is present, regardless of ImageMagick.
    ///
    /// # Errors
    ///
    /// * `CoreError::NoToolsAvailable` - If neither tool answered the probe
    pub fn preferred(&self) -> CoreResult<ExtractionTool> {
        if self.exiftool {
            Ok(ExtractionTool::Exiftool)
        } else if self.imagemagick {
            Ok(ExtractionTool::ImageMagick)
        } else {
            Err(CoreError::NoToolsAvailable)
        }
    }
}

// ============================================================================
// DEPENDENCY CHECKING
// ============================================================================

/// Checks if an external command is available and answers a version query.
///
/// The command is run with `version_arg` and its output discarded. Unlike a
/// plain spawn check, a non-zero exit also counts as unavailable.
///
/// # Returns
///
/// * `Ok(())` - If the command ran and exited successfully
/// * `Err(CoreError::DependencyNotFound)` - If the command is not found
/// * `Err(CoreError::CommandStart)` - If the command exists but fails to start
/// * `Err(CoreError::CommandFailed)` - If the version query exits non-zero
pub(crate) fn check_dependency(cmd_name: &str, version_arg: &str) -> CoreResult<()> {
    let result = Command::new(cmd_name)
        .arg(version_arg)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(status) if status.success() => {
            log::debug!("Found dependency: {}", cmd_name);
            Ok(())
        }
        Ok(status) => {
            log::warn!("Dependency '{}' answered {} with {}", cmd_name, version_arg, status);
            Err(command_failed_error(cmd_name, status, ""))
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("Dependency '{}' not found.", cmd_name);
            Err(CoreError::DependencyNotFound(cmd_name.to_string()))
        }
        Err(e) => {
            log::error!("Failed to start dependency check command '{}': {}", cmd_name, e);
            Err(command_start_error(cmd_name, e))
        }
    }
}

/// Probes both external tools and reports which ones are usable.
///
/// Never fails; a tool that cannot be run is simply reported as missing.
pub fn check_dependencies<E, M>(exiftool: &E, magick: &M) -> ToolAvailability
where
    E: ExiftoolExecutor + ?Sized,
    M: MagickExecutor + ?Sized,
{
    let availability = ToolAvailability {
        exiftool: exiftool.is_available(),
        imagemagick: magick.is_available(),
    };
    log::debug!(
        "Tool availability: exiftool={}, imagemagick={}",
        availability.exiftool,
        availability.imagemagick
    );
    availability
}

// ============================================================================
// COMMAND EXECUTION
// ============================================================================

/// Runs `program` with `args`, capturing stdout and stderr.
///
/// A spawn failure or a non-zero exit becomes an error naming `cmd_name`.
pub(crate) fn run_captured<I, S>(cmd_name: &str, program: &str, args: I) -> CoreResult<Output>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut cmd = Command::new(program);
    cmd.args(args).stdin(Stdio::null());
    log::debug!("Running {}: {:?}", cmd_name, cmd);

    let output = cmd.output().map_err(|e| command_start_error(cmd_name, e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(command_failed_error(cmd_name, output.status, stderr));
    }

    Ok(output)
}
