//! Validated MAC address representation.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Number of hex digits in a textual MAC address (6 bytes).
pub const MAC_DIGITS: usize = 12;

/// Error returned when a string is not a 12-hex-digit MAC address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MacParseError {
    /// The input does not contain exactly [`MAC_DIGITS`] characters.
    #[error("Invalid MAC address, must match pattern /[0-9a-fA-F]{{12}}/ (got {len} characters)")]
    WrongLength {
        /// Number of characters in the rejected input
        len: usize,
    },

    /// The input contains a character outside `[0-9a-fA-F]`.
    #[error(
        "Invalid MAC address, must match pattern /[0-9a-fA-F]{{12}}/ \
         ('{character}' at position {position})"
    )]
    InvalidCharacter {
        /// The offending character
        character: char,
        /// Zero-based character position
        position: usize,
    },
}

/// A MAC address written as exactly 12 hex digits without separators.
///
/// The original spelling is preserved: `02abcdef9876` is stored and written
/// to the registry as given. Comparison is case-sensitive on the text, so use
/// [`MacAddress::to_bytes`] when comparing addresses semantically.
///
/// A `MacAddress` is never empty. Restoring the hardware address is modelled
/// separately by [`AddressChange::Restore`](crate::adapter::AddressChange).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MacAddress(String);

impl MacAddress {
    /// Validates and wraps a textual MAC address.
    ///
    /// # Errors
    ///
    /// Returns [`MacParseError`] if the input is not exactly 12 characters
    /// from `[0-9a-fA-F]`.
    pub fn parse(input: &str) -> Result<Self, MacParseError> {
        let len = input.chars().count();
        if len != MAC_DIGITS {
            return Err(MacParseError::WrongLength { len });
        }

        if let Some((position, character)) = input
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_hexdigit())
        {
            return Err(MacParseError::InvalidCharacter {
                character,
                position,
            });
        }

        Ok(Self(input.to_owned()))
    }

    /// Builds an address from its 48-bit numeric value, rendered as
    /// uppercase hex, most-significant nibble first.
    ///
    /// Bits above the low 48 are ignored.
    #[must_use]
    pub fn from_u64(value: u64) -> Self {
        Self(format!("{:012X}", value & 0xFFFF_FFFF_FFFF))
    }

    /// Returns the address exactly as it will be stored in the registry.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the six address bytes.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; 6] {
        let mut bytes = [0u8; 6];
        for (i, byte) in bytes.iter_mut().enumerate() {
            // Validated on construction, so every pair is valid hex.
            *byte = u8::from_str_radix(&self.0[i * 2..i * 2 + 2], 16).unwrap_or_default();
        }
        bytes
    }

    /// Returns the 24-bit vendor prefix (OUI).
    #[must_use]
    pub fn oui(&self) -> u32 {
        let [a, b, c, ..] = self.to_bytes();
        u32::from_be_bytes([0, a, b, c])
    }
}

impl FromStr for MacAddress {
    type Err = MacParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for MacAddress {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Dash-separated pairs, e.g. `02-AB-CD-EF-98-76`.
impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pair) in self.0.as_bytes().chunks(2).enumerate() {
            if i > 0 {
                f.write_str("-")?;
            }
            // ASCII-only after validation.
            let pair = std::str::from_utf8(pair).map_err(|_| fmt::Error)?;
            f.write_str(pair)?;
        }
        Ok(())
    }
}
