// ============================================================================
// dyndesk-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Custom Error Types for dyndesk-core
//
// This module defines the error type used throughout the core library and a
// couple of helper constructors for subprocess failures. The Display text of
// each variant is the message the CLI shows to the user.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors produced by the dyndesk core library.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("File not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Neither exiftool nor ImageMagick found. Please install one of them.")]
    NoToolsAvailable,

    #[error("Required tool '{0}' is not available")]
    DependencyNotFound(String),

    #[error("Failed to start {0}: {1}")]
    CommandStart(String, #[source] io::Error),

    #[error("{0} exited with {1}: {2}")]
    CommandFailed(String, ExitStatus, String),

    #[error("JSON parse error: {0}")]
    JsonParseError(String),

    #[error("Failed to serialize schedule: {0}")]
    Serialization(String),

    #[error("No metadata records returned for {}", .0.display())]
    MetadataEmpty(PathBuf),

    #[error("Failed to extract images from HEIC file")]
    ExtractionFailed,

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for dyndesk-core operations.
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Builds a `CommandStart` error for a tool that could not be spawned.
pub fn command_start_error(cmd_name: impl Into<String>, err: io::Error) -> CoreError {
    CoreError::CommandStart(cmd_name.into(), err)
}

/// Builds a `CommandFailed` error from a non-zero exit and its stderr.
pub fn command_failed_error(
    cmd_name: impl Into<String>,
    status: ExitStatus,
    stderr: impl Into<String>,
) -> CoreError {
    CoreError::CommandFailed(cmd_name.into(), status, stderr.into().trim().to_string())
}
