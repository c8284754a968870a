//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options.

use clap::{ArgGroup, Parser};

use crate::mac::MacAddress;

const EXAMPLES: &str = "Examples:
  macshift \"Wi-Fi\" -r
  macshift \"Ethernet\" -a 02ABCDEF9876
  macshift \"Ethernet\" -d";

/// Macshift: the simple Windows MAC address changing utility
///
/// Writes a new hardware address for a network adapter and resets the
/// adapter through the Windows connection manager so the change takes effect
/// without a restart. All connections on the adapter are closed while it
/// resets.
#[derive(Debug, Parser)]
#[command(name = "macshift")]
#[command(version, about, long_about = None)]
#[command(after_help = EXAMPLES)]
#[command(group(ArgGroup::new("mode").args(["random", "address", "restore"]).multiple(false)))]
#[allow(clippy::struct_excessive_bools)] // CLI flags are naturally boolean
pub struct Cli {
    /// Network adapter name as shown in Network Connections
    #[arg(value_name = "ADAPTER", conflicts_with = "interface")]
    pub adapter: Option<String>,

    /// Network adapter name (legacy spelling of ADAPTER)
    #[arg(short = 'i', long = "interface", value_name = "NAME")]
    pub interface: Option<String>,

    /// Use a random MAC address (default action)
    #[arg(short = 'r', long)]
    pub random: bool,

    /// Use the given MAC address (12 hex digits, e.g. 02ABCDEF9876)
    #[arg(short = 'a', long, value_name = "MAC")]
    pub address: Option<MacAddress>,

    /// Restore the original MAC address
    #[arg(short = 'd', long)]
    pub restore: bool,

    /// Find the adapter and report, without writing or resetting anything
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Parses CLI arguments from an iterator, returning usage errors instead
    /// of exiting.
    ///
    /// # Errors
    ///
    /// Returns the clap error for unknown flags, conflicting modes and
    /// malformed values.
    pub fn try_parse_from_iter<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(iter)
    }

    /// Returns the adapter name from either spelling.
    #[must_use]
    pub fn adapter_name(&self) -> Option<&str> {
        self.adapter.as_deref().or(self.interface.as_deref())
    }
}
