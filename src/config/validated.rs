//! Validated configuration resolved from CLI arguments.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;

use crate::adapter::AddressChange;
use crate::mac::MacGenerator;
use crate::shift::ShiftRequest;

use super::cli::Cli;
use super::error::{ConfigError, field};

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_cli`] with an explicit generator (tests), or
/// [`ValidatedConfig::load`] which seeds one from the system tick count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedConfig {
    /// Adapter display name
    pub adapter_name: String,

    /// Address to set, or restore
    pub change: AddressChange,

    /// Dry-run mode (locate only)
    pub dry_run: bool,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ adapter: '{}', address: {}, dry_run: {} }}",
            self.adapter_name, self.change, self.dry_run,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments.
    ///
    /// `generator` is only consulted when the address mode is random
    /// (`-r` or no mode flag).
    ///
    /// # Errors
    ///
    /// Returns an error if no adapter name was given or it is blank.
    pub fn from_cli(cli: &Cli, generator: &mut MacGenerator) -> Result<Self, ConfigError> {
        let adapter_name = Self::resolve_adapter_name(cli)?;
        let change = Self::resolve_change(cli, generator);

        Ok(Self {
            adapter_name,
            change,
            dry_run: cli.dry_run,
            verbose: cli.verbose,
        })
    }

    /// Validates CLI arguments, generating a random address from a generator
    /// seeded with the system tick count if needed.
    ///
    /// # Errors
    ///
    /// Same as [`ValidatedConfig::from_cli`].
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        Self::from_cli(cli, &mut MacGenerator::from_tick_count())
    }

    /// Builds the pipeline request for this configuration.
    #[must_use]
    pub fn to_request(&self) -> ShiftRequest {
        ShiftRequest {
            adapter_name: self.adapter_name.clone(),
            change: self.change.clone(),
            dry_run: self.dry_run,
        }
    }

    fn resolve_adapter_name(cli: &Cli) -> Result<String, ConfigError> {
        let name = cli.adapter_name().ok_or_else(|| {
            ConfigError::missing(
                field::ADAPTER,
                "Pass the adapter name as shown in Network Connections, e.g. macshift \"Wi-Fi\"",
            )
        })?;

        if name.trim().is_empty() {
            return Err(ConfigError::BlankAdapterName(name.to_string()));
        }

        Ok(name.to_string())
    }

    fn resolve_change(cli: &Cli, generator: &mut MacGenerator) -> AddressChange {
        if cli.restore {
            return AddressChange::Restore;
        }

        cli.address.clone().map_or_else(
            || AddressChange::Set(generator.generate()),
            AddressChange::Set,
        )
    }
}
