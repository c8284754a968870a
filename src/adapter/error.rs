//! Error types for the adapter layer.

use thiserror::Error;

/// Error type for registry store operations.
///
/// Describes what went wrong without dictating recovery strategy.
/// The scans skip keys that fail with [`StoreError::NotFound`] or
/// [`StoreError::AccessDenied`]; callers decide for everything else.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The key or value does not exist.
    #[error("Registry entry not found: {path}")]
    NotFound {
        /// Key path, with the value name appended after `@` for values
        path: String,
    },

    /// The requested access was refused.
    #[error("Access denied to registry entry: {path}")]
    AccessDenied {
        /// Key path, with the value name appended after `@` for values
        path: String,
    },

    /// Any other registry failure.
    #[error("Registry error at {path}: {source}")]
    Io {
        /// Key path, with the value name appended after `@` for values
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// Classifies an I/O error returned by the registry.
    #[must_use]
    pub fn from_io(path: impl Into<String>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            std::io::ErrorKind::PermissionDenied => Self::AccessDenied { path },
            _ => Self::Io { path, source },
        }
    }

    /// Returns true if the entry does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true if access was refused.
    #[must_use]
    pub const fn is_access_denied(&self) -> bool {
        matches!(self, Self::AccessDenied { .. })
    }
}

/// Error type for [`find_adapter_id`](super::find_adapter_id).
#[derive(Debug, Error)]
pub enum LocateError {
    /// The network connection list could not be opened.
    #[error("Failed to open adapter list key: {0}")]
    OpenRoot(#[source] StoreError),

    /// Enumerating the connection list failed.
    #[error("Failed to enumerate registry keys: {0}")]
    Enumerate(#[source] StoreError),

    /// No connection carries the requested display name.
    #[error("Failed to find an adapter named '{name}'; please recheck your Network Connections")]
    NotFound {
        /// The display name that was searched for
        name: String,
    },
}

/// Error type for [`write_override`](super::write_override).
#[derive(Debug, Error)]
pub enum WriteError {
    /// The adapter class key could not be opened.
    #[error("Failed to open adapter class key: {0}")]
    OpenRoot(#[source] StoreError),

    /// Enumerating the adapter class key failed.
    #[error("Failed to enumerate registry keys: {0}")]
    Enumerate(#[source] StoreError),

    /// The adapter's driver key was found but could not be opened for writing.
    #[error("Cannot open the driver key of adapter {id} for writing: {source}")]
    AccessDenied {
        /// Adapter identifier
        id: String,
        /// Underlying store error
        #[source]
        source: StoreError,
    },

    /// Setting or deleting the override value failed.
    #[error("Failed to update the network address of adapter {id}: {source}")]
    Update {
        /// Adapter identifier
        id: String,
        /// Underlying store error
        #[source]
        source: StoreError,
    },

    /// No driver key carries the identifier found by the locator.
    #[error("Failed to find adapter by ID {id} among the driver keys")]
    NotFound {
        /// Adapter identifier
        id: String,
    },
}

impl WriteError {
    /// Returns true if re-running with administrator rights is likely to help.
    ///
    /// An unopenable class root is always reported this way, whatever the
    /// underlying cause.
    #[must_use]
    pub const fn requires_elevation(&self) -> bool {
        match self {
            Self::OpenRoot(_) | Self::AccessDenied { .. } => true,
            Self::Update { source, .. } => source.is_access_denied(),
            Self::Enumerate(_) | Self::NotFound { .. } => false,
        }
    }
}

/// Error type for adapter reset operations.
#[derive(Debug, Error)]
pub enum ResetError {
    /// Windows API call failed.
    #[cfg(windows)]
    #[error("Windows API error: {0}")]
    WindowsApi(#[from] windows::core::Error),

    /// A required system library could not be loaded.
    #[error("Failed to load {library}: {reason}")]
    LoadLibrary {
        /// Library file name
        library: &'static str,
        /// Reason for the failure
        reason: String,
    },

    /// A required function is missing from a loaded library.
    #[error("Failed to load function {function} from {library}")]
    MissingExport {
        /// Library file name
        library: &'static str,
        /// Exported function name
        function: &'static str,
    },

    /// The connection manager object could not be created.
    #[error("Failed to create connection manager: {reason}")]
    CreateManager {
        /// Reason for the failure
        reason: String,
    },

    /// The live connections could not be enumerated.
    #[error("Could not enumerate Network Connections: {reason}")]
    Enumerate {
        /// Reason for the failure
        reason: String,
    },

    /// Reconnecting the adapter failed.
    #[error("Failed to reconnect '{name}': {reason}")]
    Connect {
        /// Connection display name
        name: String,
        /// Reason for the failure
        reason: String,
    },
}
