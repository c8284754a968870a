//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and error hints
//! that support the main entry point.

use macshift::config::ConfigError;
use macshift::shift::Stage;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::run::RunError;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - missing or blank adapter name.
    ///
    /// Usage errors caught by clap (conflicting modes, malformed MAC, unknown
    /// flags) exit with clap's own code 2 before this point.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Runtime error (exit code 2) - adapter not found, registry or reset failure.
    ///
    /// Note: A function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Prints the startup banner to stderr.
pub fn print_banner() {
    eprintln!(
        "Macshift v{} - the simple Windows MAC address changing utility",
        env!("CARGO_PKG_VERSION")
    );
}

/// Prints helpful hints for configuration errors.
pub fn print_config_hint(error: &ConfigError) {
    if matches!(error, ConfigError::MissingRequired { .. }) {
        eprintln!("\nRun 'macshift --help' for usage.");
    }
}

/// Prints helpful hints for runtime errors.
pub fn print_run_hint(error: &RunError) {
    let RunError::Shift(shift) = error else {
        return;
    };

    if shift.requires_elevation() {
        eprintln!("\nPlease run this program as Administrator.");
        return;
    }

    match shift.stage() {
        Stage::Locate => {
            eprintln!(
                "\nAdapter names are listed in Control Panel > Network Connections (ncpa.cpl)."
            );
        }
        Stage::Reset => {
            eprintln!("\nDisable and re-enable the adapter, or restart, to apply the new address.");
        }
        Stage::Write => {}
    }
}

/// Sets up the tracing subscriber for logging.
///
/// Logs go to stderr so they never mix with anything a caller pipes from stdout.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
