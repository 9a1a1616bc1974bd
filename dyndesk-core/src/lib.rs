//! Core library for turning Apple Dynamic Desktop HEIC files into wallpaper
//! schedules using exiftool and ImageMagick.
//!
//! The crate probes for the two tools, logs whatever solar/appearance
//! metadata exiftool reports, splits the HEIC into numbered PNG frames and
//! spreads those frames evenly across a 24-hour day.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use dyndesk_core::config::{CoreConfigBuilder, ToolPreference};
//! use dyndesk_core::heic_to_schedule_with_system_tools;
//! use std::path::PathBuf;
//!
//! let config = CoreConfigBuilder::new()
//!     .input_path(PathBuf::from("/wallpapers/Mojave.heic"))
//!     .tool_preference(ToolPreference::ImageMagick)
//!     .build();
//!
//! let result = heic_to_schedule_with_system_tools(&config).unwrap();
//! for entry in &result.schedule {
//!     println!("{} {}", entry.time, entry.image.display());
//! }
//! ```

pub mod config;
pub mod error;
pub mod external;
pub mod extraction;
pub mod metadata;
pub mod pipeline;
pub mod schedule;

// Re-exports for public API
pub use config::{CoreConfig, CoreConfigBuilder, ToolPreference};
pub use error::{CoreError, CoreResult};
pub use external::{
    CommandExiftool, CommandMagick, ExiftoolExecutor, ExtractionTool, MagickExecutor,
    ToolAvailability, check_dependencies,
};
pub use extraction::{MAX_FRAMES, extract_images};
pub use metadata::{Metadata, extract_metadata};
pub use pipeline::{default_output_dir, heic_to_schedule, heic_to_schedule_with_system_tools};
pub use schedule::{ScheduleEntry, ScheduleResult, create_time_schedule};
