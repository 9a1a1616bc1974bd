// dyndesk-core/src/external/mocks.rs

// --- Mocking Infrastructure (for testing) ---

use super::{ExiftoolExecutor, MagickExecutor};
use crate::error::{CoreError, CoreResult};
use std::cell::RefCell;
use std::io;
use std::path::Path;

/// Mock implementation of ExiftoolExecutor.
#[derive(Debug, Default)]
pub struct MockExiftool {
    available: bool,
    json: Option<String>,
    calls: RefCell<Vec<String>>,
}

impl MockExiftool {
    /// An exiftool that is installed and prints `json` for every file.
    pub fn with_json(json: &str) -> Self {
        Self {
            available: true,
            json: Some(json.to_string()),
            calls: RefCell::default(),
        }
    }

    /// An exiftool that is installed but fails every metadata read.
    pub fn failing() -> Self {
        Self {
            available: true,
            json: None,
            calls: RefCell::default(),
        }
    }

    /// An exiftool that is not installed.
    pub fn unavailable() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl ExiftoolExecutor for MockExiftool {
    fn is_available(&self) -> bool {
        self.calls.borrow_mut().push("is_available".to_string());
        self.available
    }

    fn read_metadata_json(&self, path: &Path) -> CoreResult<String> {
        self.calls
            .borrow_mut()
            .push(format!("read_metadata_json {}", path.display()));
        self.json
            .clone()
            .ok_or_else(|| CoreError::Io(io::Error::other("mock exiftool failure")))
    }
}

/// Mock implementation of MagickExecutor.
///
/// `convert_frames` writes an empty file for each configured index by
/// substituting it into the `%02d` slot of the output pattern.
#[derive(Debug)]
pub struct MockMagick {
    available: bool,
    indices: Vec<usize>,
    identify_count: Option<usize>,
    fail_convert: bool,
    calls: RefCell<Vec<String>>,
}

impl Default for MockMagick {
    fn default() -> Self {
        Self::new()
    }
}

impl MockMagick {
    /// An installed ImageMagick that writes no frames.
    pub fn new() -> Self {
        Self {
            available: true,
            indices: Vec::new(),
            identify_count: None,
            fail_convert: false,
            calls: RefCell::default(),
        }
    }

    /// An ImageMagick that is not installed.
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new()
        }
    }

    /// Writes frames `0..count` on convert.
    pub fn with_frames(self, count: usize) -> Self {
        self.with_indices((0..count).collect())
    }

    /// Writes exactly the listed frame indices on convert.
    pub fn with_indices(mut self, indices: Vec<usize>) -> Self {
        self.indices = indices;
        self
    }

    /// Reports `count` frames from identify.
    pub fn with_identify(mut self, count: usize) -> Self {
        self.identify_count = Some(count);
        self
    }

    /// Makes convert fail as if ImageMagick exited non-zero.
    pub fn failing(mut self) -> Self {
        self.fail_convert = true;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl MagickExecutor for MockMagick {
    fn is_available(&self) -> bool {
        self.calls.borrow_mut().push("is_available".to_string());
        self.available
    }

    fn identify_frame_count(&self, path: &Path) -> CoreResult<usize> {
        self.calls
            .borrow_mut()
            .push(format!("identify {}", path.display()));
        self.identify_count
            .ok_or_else(|| CoreError::Io(io::Error::other("mock identify failure")))
    }

    fn convert_frames(&self, input: &Path, output_pattern: &Path) -> CoreResult<()> {
        self.calls.borrow_mut().push(format!(
            "convert {} {}",
            input.display(),
            output_pattern.display()
        ));
        if self.fail_convert {
            return Err(CoreError::Io(io::Error::other("mock convert failure")));
        }

        // Only the file name carries the `%02d` slot; the directory is kept as
        // raw OS bytes so frames land where ImageMagick would put them.
        let dir = output_pattern.parent().unwrap_or_else(|| Path::new(""));
        let name = output_pattern
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        for index in &self.indices {
            let frame = dir.join(name.replace("%02d", &format!("{:02}", index)));
            std::fs::write(&frame, b"")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[cfg(unix)]
    #[test]
    fn test_convert_keeps_non_utf8_directory() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let tmp = tempdir().unwrap();
        let dir = tmp.path().join(OsStr::from_bytes(b"walls\xff"));
        std::fs::create_dir(&dir).unwrap();

        MockMagick::new()
            .with_frames(2)
            .convert_frames(Path::new("Mojave.heic"), &dir.join("Mojave_%02d.png"))
            .unwrap();

        assert!(dir.join("Mojave_00.png").exists());
        assert!(dir.join("Mojave_01.png").exists());
    }
}
