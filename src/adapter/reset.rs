//! Live connection reset.

use tracing::{debug, info, warn};

use super::ResetError;

/// Result of a reset attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    /// The connection was disconnected and reconnected.
    Reset,
    /// No live connection had the adapter's name.
    ///
    /// The override stays written and applies the next time the adapter
    /// restarts.
    NotFound,
}

/// A live network connection.
pub trait NetConnection {
    /// Returns the connection's display name.
    ///
    /// # Errors
    ///
    /// Returns [`ResetError`] if the connection properties cannot be read.
    fn name(&self) -> Result<String, ResetError>;

    /// Disconnects (disables) the connection.
    ///
    /// # Errors
    ///
    /// Returns [`ResetError`] if the platform call fails.
    fn disconnect(&self) -> Result<(), ResetError>;

    /// Connects (enables) the connection.
    ///
    /// # Errors
    ///
    /// Returns [`ResetError`] if the platform call fails.
    fn connect(&self) -> Result<(), ResetError>;
}

/// Yields live connections one at a time.
pub trait ConnectionEnumerator {
    /// Connection type produced by this enumerator.
    type Connection: NetConnection;

    /// Returns the next connection, or `None` once the list is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`ResetError::Enumerate`] if fetching the next item fails.
    fn next_connection(&mut self) -> Result<Option<Self::Connection>, ResetError>;
}

/// Cycles the adapter with the given display name so it re-reads its
/// address override.
///
/// # Design
///
/// - Implementations own any process-wide runtime state they need and
///   release it before returning
/// - Enables dependency injection for testing with mock implementations
pub trait AdapterResetter {
    /// Disconnects and reconnects the connection named `adapter_name`.
    ///
    /// # Errors
    ///
    /// Returns [`ResetError`] if the connection manager is unavailable or
    /// reconnecting fails.
    fn reset(&self, adapter_name: &str) -> Result<ResetOutcome, ResetError>;
}

/// Walks `connections` until one is named `name`, then disconnects and
/// reconnects it and stops.
///
/// Connections whose name cannot be read are skipped. A failed disconnect
/// is logged and the reconnect is still attempted, since the connection may
/// already be down.
///
/// # Errors
///
/// Returns the enumerator's error, or [`ResetError::Connect`] if the
/// reconnect fails.
pub fn reset_connection<E: ConnectionEnumerator>(
    connections: &mut E,
    name: &str,
) -> Result<ResetOutcome, ResetError> {
    while let Some(connection) = connections.next_connection()? {
        match connection.name() {
            Ok(candidate) if candidate == name => {
                info!("Resetting adapter '{name}'");
                if let Err(e) = connection.disconnect() {
                    warn!("Disconnect of '{name}' failed, reconnecting anyway: {e}");
                }
                connection.connect().map_err(|e| ResetError::Connect {
                    name: name.to_owned(),
                    reason: e.to_string(),
                })?;
                return Ok(ResetOutcome::Reset);
            }
            Ok(candidate) => debug!("Skipping connection '{candidate}'"),
            Err(e) => debug!("Skipping connection with unreadable properties: {e}"),
        }
    }

    warn!("No live connection named '{name}'; the new address applies after the adapter restarts");
    Ok(ResetOutcome::NotFound)
}
