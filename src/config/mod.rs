//! Configuration layer for macshift.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`])
//! - Validated configuration ([`ValidatedConfig`])
//!
//! # Address Modes
//!
//! `-r` (random), `-a <MAC>` (explicit) and `-d` (restore) are mutually
//! exclusive; clap rejects more than one before anything touches the system.
//! With none given the address is random.
//!
//! # Adapter Name
//!
//! The adapter is named positionally or with the legacy `-i` flag, never
//! both. There is no default adapter: omitting the name is an error.
//!
//! There is no configuration file; the tool keeps no settings between runs.

mod cli;
mod error;
mod validated;


pub use cli::Cli;
pub use error::{ConfigError, field};
pub use validated::ValidatedConfig;
