//! MAC address types and the plausible-address generator.
//!
//! This module provides:
//! - A validated 12-hex-digit address ([`MacAddress`])
//! - The random address generator ([`MacGenerator`])
//! - The embedded vendor prefix table ([`VENDOR_OUIS`])

mod address;
mod generator;
mod vendors;


pub use address::{MAC_DIGITS, MacAddress, MacParseError};
pub use generator::MacGenerator;
pub use vendors::VENDOR_OUIS;
