// ============================================================================
// dyndesk-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: fern Dispatch for Console and File Output
//
// All log output goes to stderr so that stdout carries nothing but the JSON
// schedule. With --log-dir, a timestamped copy of the log is also written.
//
// USAGE:
// - default: Info and above
// - --verbose: Debug and above (includes every external command line)

use dyndesk_core::{CoreError, CoreResult};
use log::LevelFilter;
use std::io;
use std::path::{Path, PathBuf};

/// Returns the current local timestamp formatted as "YYYYMMDD_HHMMSS".
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Installs the global logger.
///
/// Returns the log file path when `log_dir` is given.
pub fn init_logging(verbose: bool, log_dir: Option<&Path>) -> CoreResult<Option<PathBuf>> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let console = fern::Dispatch::new()
        .format(|out, message, record| out.finish(format_args!("[{}] {}", record.level(), message)))
        .chain(io::stderr());

    let mut dispatch = fern::Dispatch::new().level(level).chain(console);

    let log_path = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let path = dir.join(format!("dyndesk_run_{}.log", get_timestamp()));
            let file = fern::Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "{} [{}] {}: {}",
                        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                        record.level(),
                        record.target(),
                        message
                    ))
                })
                .chain(fern::log_file(&path)?);
            dispatch = dispatch.chain(file);
            Some(path)
        }
        None => None,
    };

    dispatch
        .apply()
        .map_err(|e| CoreError::Io(io::Error::other(e)))?;

    if let Some(path) = &log_path {
        log::debug!("Writing log file: {}", path.display());
    }
    Ok(log_path)
}
