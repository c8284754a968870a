//! Core adapter types.

use std::fmt;

use crate::mac::MacAddress;

/// Opaque identifier of one adapter instance, e.g.
/// `{1F2E3D4C-0000-1111-2222-333344445555}`.
///
/// Discovered by [`find_adapter_id`](super::find_adapter_id); never created
/// by this program.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AdapterId(String);

impl AdapterId {
    /// Wraps an identifier read from the registry.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AdapterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What to do with the adapter's `NetworkAddress` override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressChange {
    /// Set the override to the given address.
    Set(MacAddress),
    /// Remove the override so the adapter reports its burned-in address.
    Restore,
}

impl AddressChange {
    /// Returns the address being set, or `None` for a restore.
    #[must_use]
    pub const fn mac(&self) -> Option<&MacAddress> {
        match self {
            Self::Set(mac) => Some(mac),
            Self::Restore => None,
        }
    }

    /// Returns true if this change removes the override.
    #[must_use]
    pub const fn is_restore(&self) -> bool {
        matches!(self, Self::Restore)
    }
}

impl fmt::Display for AddressChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Set(mac) => write!(f, "{mac}"),
            Self::Restore => write!(f, "(restore)"),
        }
    }
}
