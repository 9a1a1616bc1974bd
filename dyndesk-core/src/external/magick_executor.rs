//! ImageMagick integration for splitting HEIC containers into frames
//!
//! ImageMagick writes one output file per frame when given a printf-style
//! output pattern such as `Mojave_%02d.png`. `identify` prints one line per
//! frame, which gives a cheap frame count for diagnostics.

use crate::error::CoreResult;
use std::ffi::OsStr;
use std::path::Path;

use super::{check_dependency, run_captured};

/// Trait for executing ImageMagick.
pub trait MagickExecutor {
    /// Returns true if ImageMagick answers a version query.
    fn is_available(&self) -> bool;

    /// Runs `magick identify <path>` and returns the number of frames listed.
    fn identify_frame_count(&self, path: &Path) -> CoreResult<usize>;

    /// Runs `magick convert <input> <output_pattern>`, writing every frame.
    fn convert_frames(&self, input: &Path, output_pattern: &Path) -> CoreResult<()>;
}

/// Runs the real ImageMagick binary.
#[derive(Debug, Clone)]
pub struct CommandMagick {
    program: String,
}

impl CommandMagick {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl MagickExecutor for CommandMagick {
    fn is_available(&self) -> bool {
        check_dependency(&self.program, "-version").is_ok()
    }

    fn identify_frame_count(&self, path: &Path) -> CoreResult<usize> {
        let output = run_captured(
            "magick identify",
            &self.program,
            [OsStr::new("identify"), path.as_os_str()],
        )?;
        Ok(count_identify_lines(&String::from_utf8_lossy(&output.stdout)))
    }

    fn convert_frames(&self, input: &Path, output_pattern: &Path) -> CoreResult<()> {
        log::debug!(
            "Running magick convert on {} -> {}",
            input.display(),
            output_pattern.display()
        );
        run_captured(
            "magick convert",
            &self.program,
            [OsStr::new("convert"), input.as_os_str(), output_pattern.as_os_str()],
        )?;
        Ok(())
    }
}

/// Counts the frame lines in `identify` output, ignoring blank lines.
fn count_identify_lines(stdout: &str) -> usize {
    stdout.lines().filter(|line| !line.trim().is_empty()).count()
}
