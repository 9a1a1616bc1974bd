// ============================================================================
// dyndesk-core/src/extraction.rs
// ============================================================================
//
// FRAME EXTRACTION: Splitting a HEIC Container into Numbered PNG Files
//
// ImageMagick is asked to write every frame as `<stem>_NN.png`. The files it
// produced are then discovered by probing that name for NN = 00, 01, ... and
// stopping at the first index that does not exist. A gap in the numbering
// therefore ends the sequence even if later frames are on disk; consumers
// rely on that truncation, so it is kept as is.

use crate::error::CoreResult;
use crate::external::{ExtractionTool, MagickExecutor};
use std::path::{Path, PathBuf};

/// Upper bound on the number of frames discovered after extraction.
pub const MAX_FRAMES: usize = 100;

/// File extension of extracted frames.
pub const FRAME_EXTENSION: &str = "png";

/// Extracts every frame of `input` into `output_dir`.
///
/// `output_dir` is created if needed. With `ExtractionTool::Exiftool`
/// nothing is extracted. A failing ImageMagick run is logged and yields an
/// empty list; the caller decides whether that is fatal.
///
/// # Errors
///
/// * `CoreError::Io` - If `output_dir` cannot be created
pub fn extract_images<M>(
    magick: &M,
    input: &Path,
    output_dir: &Path,
    tool: ExtractionTool,
) -> CoreResult<Vec<PathBuf>>
where
    M: MagickExecutor + ?Sized,
{
    std::fs::create_dir_all(output_dir)?;

    let stem = file_stem(input);

    match tool {
        ExtractionTool::ImageMagick => {
            let pattern = output_dir.join(format!("{stem}_%02d.{FRAME_EXTENSION}"));
            if let Err(e) = magick.convert_frames(input, &pattern) {
                log::error!("Error extracting images: {}", e);
                return Ok(Vec::new());
            }
            Ok(discover_frames(output_dir, &stem))
        }
        ExtractionTool::Exiftool => {
            log::error!("Image extraction with exiftool not implemented");
            Ok(Vec::new())
        }
    }
}

/// Path of frame `index` for a source with file stem `stem`.
pub fn frame_path(output_dir: &Path, stem: &str, index: usize) -> PathBuf {
    output_dir.join(format!("{stem}_{index:02}.{FRAME_EXTENSION}"))
}

/// Lists extracted frames in index order, stopping at the first missing one.
pub fn discover_frames(output_dir: &Path, stem: &str) -> Vec<PathBuf> {
    let frames: Vec<PathBuf> = (0..MAX_FRAMES)
        .map(|index| frame_path(output_dir, stem, index))
        .take_while(|path| path.exists())
        .collect();
    log::debug!("Discovered {} frames in {}", frames.len(), output_dir.display());
    frames
}

/// The input's file stem, used as the frame name prefix.
pub(crate) fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external::mocks::MockMagick;
    use tempfile::tempdir;

    #[test]
    fn test_frame_path_is_zero_padded() {
        let dir = Path::new("/out");
        assert_eq!(frame_path(dir, "Mojave", 0), PathBuf::from("/out/Mojave_00.png"));
        assert_eq!(frame_path(dir, "Mojave", 7), PathBuf::from("/out/Mojave_07.png"));
        assert_eq!(frame_path(dir, "Mojave", 42), PathBuf::from("/out/Mojave_42.png"));
    }

    #[test]
    fn test_extract_images_with_imagemagick() {
        let dir = tempdir().unwrap();
        let output_dir = dir.path().join("nested").join("frames");
        let magick = MockMagick::new().with_frames(4);

        let frames = extract_images(
            &magick,
            Path::new("/wallpapers/Mojave.heic"),
            &output_dir,
            ExtractionTool::ImageMagick,
        )
        .unwrap();

        assert_eq!(frames.len(), 4);
        assert_eq!(frames[0], output_dir.join("Mojave_00.png"));
        assert_eq!(frames[3], output_dir.join("Mojave_03.png"));
        assert_eq!(
            magick.calls(),
            vec![format!(
                "convert /wallpapers/Mojave.heic {}",
                output_dir.join("Mojave_%02d.png").display()
            )]
        );
    }

    #[test]
    fn test_extract_images_stops_at_first_gap() {
        let dir = tempdir().unwrap();
        let magick = MockMagick::new().with_indices(vec![0, 1, 3]);

        let frames =
            extract_images(&magick, Path::new("Gap.heic"), dir.path(), ExtractionTool::ImageMagick)
                .unwrap();

        assert_eq!(frames, vec![dir.path().join("Gap_00.png"), dir.path().join("Gap_01.png")]);
        assert!(dir.path().join("Gap_03.png").exists());
    }

    #[test]
    fn test_extract_images_convert_failure_yields_empty() {
        let dir = tempdir().unwrap();
        let magick = MockMagick::new().failing();

        let frames =
            extract_images(&magick, Path::new("Bad.heic"), dir.path(), ExtractionTool::ImageMagick)
                .unwrap();
        assert!(frames.is_empty());
    }

    #[test]
    fn test_extract_images_with_exiftool_is_unsupported() {
        let dir = tempdir().unwrap();
        let output_dir = dir.path().join("frames");
        let magick = MockMagick::new().with_frames(2);

        let frames =
            extract_images(&magick, Path::new("A.heic"), &output_dir, ExtractionTool::Exiftool)
                .unwrap();

        assert!(frames.is_empty());
        assert!(magick.calls().is_empty());
        assert!(output_dir.is_dir());
    }

    #[test]
    fn test_discover_frames_caps_at_max() {
        let dir = tempdir().unwrap();
        for index in 0..=MAX_FRAMES {
            std::fs::write(frame_path(dir.path(), "Big", index), b"").unwrap();
        }

        let frames = discover_frames(dir.path(), "Big");
        assert_eq!(frames.len(), MAX_FRAMES);
        assert_eq!(frames.last().unwrap(), &dir.path().join("Big_99.png"));
    }
}
