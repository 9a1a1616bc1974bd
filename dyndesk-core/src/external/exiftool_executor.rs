//! exiftool integration for reading HEIC metadata
//!
//! This module runs exiftool to dump a file's tags as JSON. Parsing and
//! inspecting the dump is left to the `metadata` module.

use crate::error::CoreResult;
use std::ffi::OsStr;
use std::path::Path;

use super::{check_dependency, run_captured};

/// Trait for executing exiftool.
pub trait ExiftoolExecutor {
    /// Returns true if exiftool answers a version query.
    fn is_available(&self) -> bool;

    /// Runs `exiftool -j -G <path>` and returns its raw stdout.
    fn read_metadata_json(&self, path: &Path) -> CoreResult<String>;
}

/// Runs the real exiftool binary.
#[derive(Debug, Clone)]
pub struct CommandExiftool {
    program: String,
}

impl CommandExiftool {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl ExiftoolExecutor for CommandExiftool {
    fn is_available(&self) -> bool {
        check_dependency(&self.program, "-ver").is_ok()
    }

    fn read_metadata_json(&self, path: &Path) -> CoreResult<String> {
        log::debug!("Running exiftool for metadata on: {}", path.display());
        let output = run_captured(
            "exiftool",
            &self.program,
            [OsStr::new("-j"), OsStr::new("-G"), path.as_os_str()],
        )?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
