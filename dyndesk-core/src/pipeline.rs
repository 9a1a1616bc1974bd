// ============================================================================
// dyndesk-core/src/pipeline.rs
// ============================================================================
//
// CONVERSION PIPELINE: HEIC File to Wallpaper Schedule
//
// Runs one conversion from start to finish:
//   1. verify the input exists (before any subprocess is spawned)
//   2. probe exiftool / ImageMagick and settle on an extraction tool
//   3. dump metadata with exiftool when it is installed (diagnostic only)
//   4. extract frames and build the evenly spaced schedule
//
// Metadata failures are logged and ignored. Extraction producing no frames
// is the only failure after the probe.

use crate::config::CoreConfig;
use crate::error::{CoreError, CoreResult};
use crate::external::{
    CommandExiftool, CommandMagick, ExiftoolExecutor, ExtractionTool, MagickExecutor,
    ToolAvailability, check_dependencies,
};
use crate::extraction::{extract_images, file_stem};
use crate::metadata::{extract_metadata, log_appearance_keys};
use crate::schedule::{ScheduleResult, build_schedule, create_time_schedule};
use std::path::{Path, PathBuf};

/// Converts the HEIC named by `config` into a schedule using the given tools.
///
/// # Errors
///
/// * `CoreError::InputNotFound` - The input file does not exist
/// * `CoreError::NoToolsAvailable` - Neither exiftool nor ImageMagick runs
/// * `CoreError::DependencyNotFound` - The pinned tool is not installed
/// * `CoreError::Io` - The output directory cannot be created
/// * `CoreError::ExtractionFailed` - No frames were extracted
pub fn heic_to_schedule<E, M>(
    exiftool: &E,
    magick: &M,
    config: &CoreConfig,
) -> CoreResult<ScheduleResult>
where
    E: ExiftoolExecutor + ?Sized,
    M: MagickExecutor + ?Sized,
{
    let input = config.input_path.as_path();
    if !input.exists() {
        return Err(CoreError::InputNotFound(input.to_path_buf()));
    }

    let availability = check_dependencies(exiftool, magick);
    let tool = select_tool(availability, config)?;
    log::info!("Using {} for frame extraction", tool);

    let output_dir = config
        .output_dir
        .clone()
        .unwrap_or_else(|| default_output_dir(input));

    if availability.exiftool {
        match extract_metadata(exiftool, input) {
            Ok(metadata) => {
                let keys: Vec<&String> = metadata.keys().collect();
                log::info!("Metadata keys: {:?}", keys);
                log_appearance_keys(&metadata);
            }
            Err(e) => log::warn!("Error extracting metadata: {}", e),
        }
    }

    let frames = extract_images(magick, input, &output_dir, tool)?;
    if frames.is_empty() {
        return Err(CoreError::ExtractionFailed);
    }

    if tool == ExtractionTool::ImageMagick {
        if let Some(identified) = frame_count_mismatch(magick, input, frames.len()) {
            log::warn!(
                "ImageMagick reports {} frames in {} but only {} were found",
                identified,
                input.display(),
                frames.len()
            );
        }
    }

    let image_count = frames.len();
    let schedule = build_schedule(create_time_schedule(image_count as i64), &frames);

    Ok(ScheduleResult {
        schedule,
        extracted_dir: output_dir,
        image_count,
        source_heic: input.to_path_buf(),
    })
}

/// Runs [`heic_to_schedule`] against the real exiftool and ImageMagick
/// binaries named in `config`.
pub fn heic_to_schedule_with_system_tools(config: &CoreConfig) -> CoreResult<ScheduleResult> {
    let exiftool = CommandExiftool::new(config.exiftool_program.as_str());
    let magick = CommandMagick::new(config.magick_program.as_str());
    heic_to_schedule(&exiftool, &magick, config)
}

/// `.<stem>_extracted` next to the input file.
pub fn default_output_dir(input: &Path) -> PathBuf {
    let dir_name = format!(".{}_extracted", file_stem(input));
    match input.parent() {
        Some(parent) => parent.join(dir_name),
        None => PathBuf::from(dir_name),
    }
}

fn select_tool(availability: ToolAvailability, config: &CoreConfig) -> CoreResult<ExtractionTool> {
    log::debug!("Tool preference: {}", config.tool_preference);
    let preferred = availability.preferred()?;
    match config.tool_preference.pinned() {
        None => Ok(preferred),
        Some(tool) if availability.has(tool) => Ok(tool),
        Some(tool) => Err(CoreError::DependencyNotFound(tool.to_string())),
    }
}

/// The frame count ImageMagick reports for `input`, if it differs from the
/// number found on disk. A gap in the frame numbering causes this.
fn frame_count_mismatch<M>(magick: &M, input: &Path, discovered: usize) -> Option<usize>
where
    M: MagickExecutor + ?Sized,
{
    match magick.identify_frame_count(input) {
        Ok(identified) if identified != discovered => Some(identified),
        Ok(_) => None,
        Err(e) => {
            log::debug!("Could not identify frame count: {}", e);
            None
        }
    }
}
