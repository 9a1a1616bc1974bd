// ============================================================================
// dyndesk-cli/src/commands/schedule.rs
// ============================================================================
//
// SCHEDULE COMMAND: Convert one HEIC File and Print Its Schedule
//
// Builds a CoreConfig from the parsed arguments, runs the core pipeline
// against the system exiftool/ImageMagick and writes the result:
// - stdout: the {time, image} array as pretty JSON
// - stderr: a short summary of where the frames went

use crate::cli::Cli;
use dyndesk_core::{
    CoreConfig, CoreConfigBuilder, CoreError, CoreResult, ScheduleEntry,
    heic_to_schedule_with_system_tools,
};

/// Builds the core configuration for a run from the CLI arguments.
pub fn build_config(args: &Cli) -> CoreConfig {
    CoreConfigBuilder::new()
        .input_path(args.heic_path.clone())
        .maybe_output_dir(args.output_dir.clone())
        .exiftool_program(args.exiftool.as_str())
        .magick_program(args.magick.as_str())
        .tool_preference(args.tool.into())
        .build()
}

/// Runs the conversion and prints the schedule.
pub fn run_schedule(args: &Cli) -> CoreResult<()> {
    let config = build_config(args);
    log::debug!("Core configuration: {:?}", config);

    let result = heic_to_schedule_with_system_tools(&config)?;

    println!("{}", render_schedule_json(&result.schedule)?);

    eprintln!(
        "\nExtracted {} images to: {}",
        result.image_count,
        result.extracted_dir.display()
    );
    eprintln!("Source HEIC: {}", result.source_heic.display());

    Ok(())
}

/// Serializes the schedule as a two-space indented JSON array.
pub fn render_schedule_json(schedule: &[ScheduleEntry]) -> CoreResult<String> {
    serde_json::to_string_pretty(schedule).map_err(|e| CoreError::Serialization(e.to_string()))
}
