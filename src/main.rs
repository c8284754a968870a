//! Macshift: the simple Windows MAC address changing utility
//!
//! Entry point for the macshift application.

use macshift::config::{Cli, ValidatedConfig};
use std::process::ExitCode;

mod app;
mod run;

use app::{exit_code, print_banner, print_config_hint, print_run_hint, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    print_banner();

    let cli = Cli::parse_args();

    // Resolve adapter name and address before touching the system
    let config = match ValidatedConfig::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            return exit_code::CONFIG_ERROR;
        }
    };

    setup_tracing(config.verbose);
    tracing::debug!("{config}");

    match run::execute(&config) {
        Ok(report) => {
            run::log_report(&report);
            exit_code::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            print_run_hint(&e);
            exit_code::runtime_error()
        }
    }
}
