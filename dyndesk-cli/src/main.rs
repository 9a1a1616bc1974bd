// dyndesk-cli/src/main.rs
//
// Entry point for the dyndesk binary.
//
// Responsibilities:
// - Parsing arguments (usage errors exit with status 1).
// - Setting up logging to stderr and an optional log file.
// - Running the schedule command and mapping failures to exit status 1.

use clap::Parser;
use dyndesk_cli::{Cli, logging, run_schedule};
use std::process;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are reported through clap's error type too
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            process::exit(code);
        }
    };

    if let Err(e) = logging::init_logging(cli.verbose, cli.log_dir.as_deref()) {
        eprintln!("Error: failed to initialize logging: {}", e);
        process::exit(1);
    }

    if let Err(e) = run_schedule(&cli) {
        log::debug!("Run failed: {:?}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
