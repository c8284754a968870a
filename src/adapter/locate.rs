//! Display name to adapter identifier lookup.

use tracing::debug;

use super::store::sorted_subkeys;
use super::{Access, AdapterId, LocateError, RegistryKey, RegistryStore};

/// Registry key listing every network connection by adapter identifier.
pub const NETWORK_CONNECTIONS_ROOT: &str =
    r"SYSTEM\CurrentControlSet\Control\Network\{4D36E972-E325-11CE-BFC1-08002BE10318}";

/// Value under `<id>\Connection` holding the connection's display name.
pub const CONNECTION_NAME_VALUE: &str = "Name";

/// Finds the identifier of the adapter whose connection is called `name`.
///
/// Subkeys of [`NETWORK_CONNECTIONS_ROOT`] are visited in ascending name
/// order; the first one whose `Connection\Name` equals `name` exactly
/// (case-sensitive) wins. Subkeys without a readable `Connection` key or
/// `Name` value are skipped.
///
/// # Errors
///
/// - [`LocateError::OpenRoot`] if the connection list cannot be opened
/// - [`LocateError::Enumerate`] if listing its subkeys fails
/// - [`LocateError::NotFound`] if no connection has that name
pub fn find_adapter_id<S: RegistryStore>(store: &S, name: &str) -> Result<AdapterId, LocateError> {
    let root = store
        .open(NETWORK_CONNECTIONS_ROOT, Access::Read)
        .map_err(LocateError::OpenRoot)?;

    for id in sorted_subkeys(&root).map_err(LocateError::Enumerate)? {
        let connection_path = format!(r"{id}\Connection");
        let connection = match root.open_subkey(&connection_path, Access::Read) {
            Ok(key) => key,
            Err(e) => {
                debug!("Skipping {id}: {e}");
                continue;
            }
        };

        match connection.string_value(CONNECTION_NAME_VALUE) {
            Ok(display_name) if display_name == name => {
                debug!(
                    "Matched connection '{display_name}' at {}",
                    connection.path()
                );
                return Ok(AdapterId::new(id));
            }
            Ok(display_name) => debug!("Connection {id} is '{display_name}'"),
            Err(e) => debug!("Skipping {id}: {e}"),
        }
    }

    Err(LocateError::NotFound {
        name: name.to_owned(),
    })
}
