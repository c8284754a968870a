//! The locate → write → reset pipeline.
//!
//! A run moves through `Init → Located → Written → Reset → Done`. Any failure
//! ends the run in the stage where it happened; nothing is retried. A failed
//! reset does not undo the registry write: the new address stays configured
//! and applies the next time the adapter restarts.

use std::fmt;

use thiserror::Error;
use tracing::{debug, info};

use crate::adapter::{
    AdapterId, AdapterResetter, AddressChange, LocateError, RegistryStore, ResetError,
    ResetOutcome, WriteError, find_adapter_id, write_override,
};


/// Pipeline stage, used to report where a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Looking up the adapter identifier.
    Locate,
    /// Writing the registry override.
    Write,
    /// Cycling the live connection.
    Reset,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Locate => write!(f, "locate"),
            Self::Write => write!(f, "write"),
            Self::Reset => write!(f, "reset"),
        }
    }
}

/// Error type for a pipeline run.
#[derive(Debug, Error)]
pub enum ShiftError {
    /// The adapter could not be found; nothing was written.
    #[error("{0}")]
    Locate(#[from] LocateError),

    /// The registry write failed; the adapter was not reset.
    #[error("{0}")]
    Write(#[from] WriteError),

    /// The address was written but the adapter could not be reset.
    #[error("The new address was written but resetting the adapter failed: {0}")]
    Reset(#[source] ResetError),
}

impl ShiftError {
    /// Returns the stage in which the run failed.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        match self {
            Self::Locate(_) => Stage::Locate,
            Self::Write(_) => Stage::Write,
            Self::Reset(_) => Stage::Reset,
        }
    }

    /// Returns true if re-running with administrator rights is likely to help.
    #[must_use]
    pub const fn requires_elevation(&self) -> bool {
        match self {
            Self::Write(e) => e.requires_elevation(),
            Self::Locate(_) | Self::Reset(_) => false,
        }
    }
}

/// One requested address change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftRequest {
    /// Adapter display name as shown in Network Connections.
    pub adapter_name: String,
    /// Address to set, or restore.
    pub change: AddressChange,
    /// Locate only; skip the write and the reset.
    pub dry_run: bool,
}

/// What a successful run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftReport {
    /// Identifier of the adapter that was (or would be) changed.
    pub adapter_id: AdapterId,
    /// The requested change.
    pub change: AddressChange,
    /// Reset outcome, or `None` for a dry run.
    pub reset: Option<ResetOutcome>,
}

impl ShiftReport {
    /// Returns true if the registry was modified.
    #[must_use]
    pub const fn applied(&self) -> bool {
        self.reset.is_some()
    }
}

/// Runs address changes against a registry and a connection manager.
#[derive(Debug)]
pub struct MacShift<S, R> {
    store: S,
    resetter: R,
}

impl<S: RegistryStore, R: AdapterResetter> MacShift<S, R> {
    /// Creates a pipeline over the given platform services.
    pub const fn new(store: S, resetter: R) -> Self {
        Self { store, resetter }
    }

    /// Locates the adapter, writes the override and resets the adapter.
    ///
    /// The reset is attempted only if the write succeeded.
    ///
    /// # Errors
    ///
    /// Returns [`ShiftError`] tagged with the stage that failed.
    pub fn execute(&self, request: &ShiftRequest) -> Result<ShiftReport, ShiftError> {
        info!("New MAC address: {}", request.change);

        let adapter_id = find_adapter_id(&self.store, &request.adapter_name)?;
        info!("Network adapter ID: {adapter_id}");

        if request.dry_run {
            info!("Dry run: not writing the registry or resetting the adapter");
            return Ok(ShiftReport {
                adapter_id,
                change: request.change.clone(),
                reset: None,
            });
        }

        write_override(&self.store, &adapter_id, &request.change)?;
        debug!("Override written for {adapter_id}");

        let outcome = self
            .resetter
            .reset(&request.adapter_name)
            .map_err(ShiftError::Reset)?;
        debug!("Reset finished: {outcome:?}");

        Ok(ShiftReport {
            adapter_id,
            change: request.change.clone(),
            reset: Some(outcome),
        })
    }
}
