//! HEIC metadata reading via exiftool.
//!
//! Apple stores the Dynamic Desktop schedule as solar azimuth/altitude data in
//! the HEIC's XMP. dyndesk does not decode it; this module only reads the tag
//! dump and logs keys that look like they carry that data. Nothing here feeds
//! into the generated schedule.

use crate::error::{CoreError, CoreResult};
use crate::external::ExiftoolExecutor;
use serde_json::{Map, Value};
use std::path::Path;

/// Substrings (lowercase) that mark a metadata key as solar/appearance data.
const APPEARANCE_KEY_HINTS: [&str; 2] = ["solar", "appearance"];

/// Untyped tag map for one file, keyed by `Group:Tag` names.
pub type Metadata = Map<String, Value>;

/// Reads the metadata of `path` with exiftool.
///
/// # Errors
///
/// * `CoreError::CommandStart` / `CoreError::CommandFailed` - exiftool could not run
/// * `CoreError::JsonParseError` - the output is not a JSON array of objects
/// * `CoreError::MetadataEmpty` - exiftool returned no records
pub fn extract_metadata<E>(exiftool: &E, path: &Path) -> CoreResult<Metadata>
where
    E: ExiftoolExecutor + ?Sized,
{
    let stdout = exiftool.read_metadata_json(path)?;
    parse_exiftool_json(&stdout, path)
}

/// Parses `exiftool -j` output and returns the first record.
pub fn parse_exiftool_json(stdout: &str, path: &Path) -> CoreResult<Metadata> {
    let records: Vec<Value> = serde_json::from_str(stdout).map_err(|e| {
        CoreError::JsonParseError(format!(
            "Failed to parse exiftool JSON output for {}: {}",
            path.display(),
            e
        ))
    })?;

    match records.into_iter().next() {
        Some(Value::Object(map)) => Ok(map),
        Some(other) => Err(CoreError::JsonParseError(format!(
            "Expected an object in exiftool output for {}, found {}",
            path.display(),
            other
        ))),
        None => Err(CoreError::MetadataEmpty(path.to_path_buf())),
    }
}

/// Logs and returns the keys that look like solar/appearance data.
pub fn log_appearance_keys(metadata: &Metadata) -> Vec<String> {
    metadata
        .iter()
        .filter(|(key, _)| is_appearance_key(key))
        .map(|(key, value)| {
            log::info!("Found metadata: {} = {}", key, value);
            key.clone()
        })
        .collect()
}

fn is_appearance_key(key: &str) -> bool {
    let lower = key.to_lowercase();
    APPEARANCE_KEY_HINTS.iter().any(|hint| lower.contains(hint))
}
