//! Application execution logic.
//!
//! This module wires the platform registry and connection manager into the
//! address-change pipeline.

use thiserror::Error;

use macshift::adapter::{AdapterResetter, RegistryStore, ResetOutcome};
use macshift::config::ValidatedConfig;
use macshift::shift::{MacShift, ShiftError, ShiftReport};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// The pipeline failed in one of its stages.
    #[error("{0}")]
    Shift(#[from] ShiftError),

    /// The registry override and connection manager only exist on Windows.
    #[error("Changing the MAC address is only supported on Windows")]
    UnsupportedPlatform,
}

/// Executes one address change using the platform services.
///
/// # Errors
///
/// Returns an error if any pipeline stage fails, or immediately on
/// platforms other than Windows.
///
/// # Coverage Note
///
/// This function is excluded from coverage because it writes the real
/// registry and resets a real adapter.
#[cfg(all(windows, not(tarpaulin_include)))]
pub fn execute(config: &ValidatedConfig) -> Result<ShiftReport, RunError> {
    use macshift::adapter::platform::{PlatformRegistry, PlatformResetter};

    let shift = MacShift::new(PlatformRegistry::new(), PlatformResetter::new());
    execute_with(&shift, config)
}

/// Executes one address change using the platform services.
///
/// # Errors
///
/// Always returns [`RunError::UnsupportedPlatform`].
#[cfg(not(windows))]
pub fn execute(config: &ValidatedConfig) -> Result<ShiftReport, RunError> {
    tracing::debug!(
        "Refusing to change '{}' on this platform",
        config.adapter_name
    );
    Err(RunError::UnsupportedPlatform)
}

/// Runs the pipeline for `config` on the given services.
#[cfg_attr(not(windows), allow(dead_code))]
fn execute_with<S: RegistryStore, R: AdapterResetter>(
    shift: &MacShift<S, R>,
    config: &ValidatedConfig,
) -> Result<ShiftReport, RunError> {
    Ok(shift.execute(&config.to_request())?)
}

/// Logs the final summary line for a successful run.
pub fn log_report(report: &ShiftReport) {
    tracing::info!("{}", summarize(report));
}

/// Describes what a successful run did.
fn summarize(report: &ShiftReport) -> String {
    if !report.applied() {
        return format!(
            "Dry run complete: adapter {} would get {}",
            report.adapter_id, report.change
        );
    }

    let action = if report.change.is_restore() {
        "original address restored".to_string()
    } else {
        format!("{} written", report.change)
    };

    match report.reset {
        Some(ResetOutcome::NotFound) => format!(
            "Done: {action} for adapter {}; it applies after the adapter restarts",
            report.adapter_id
        ),
        _ => format!("Done: adapter {} reset, {action}", report.adapter_id),
    }
}
