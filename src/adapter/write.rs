//! `NetworkAddress` override writer.

use tracing::{debug, info};

use super::store::sorted_subkeys;
use super::{Access, AdapterId, AddressChange, RegistryKey, RegistryStore, StoreError, WriteError};

/// Registry key holding one driver configuration subkey per network adapter.
pub const ADAPTER_CLASS_ROOT: &str =
    r"SYSTEM\CurrentControlSet\Control\Class\{4D36E972-E325-11CE-BFC1-08002BE10318}";

/// Value in a driver key naming the adapter instance it configures.
pub const INSTANCE_ID_VALUE: &str = "NetCfgInstanceId";

/// Value in a driver key that overrides the hardware address.
pub const NETWORK_ADDRESS_VALUE: &str = "NetworkAddress";

/// Applies `change` to the driver key of adapter `id`.
///
/// Subkeys of [`ADAPTER_CLASS_ROOT`] are opened read-only in ascending name
/// order until one has a [`INSTANCE_ID_VALUE`] equal to `id`. That key is
/// then reopened with write access and:
///
/// - for [`AddressChange::Set`], [`NETWORK_ADDRESS_VALUE`] is set to the
///   address text exactly as given;
/// - for [`AddressChange::Restore`], [`NETWORK_ADDRESS_VALUE`] is deleted.
///   Restoring an adapter that has no override succeeds.
///
/// The change takes effect once the adapter is reset.
///
/// # Errors
///
/// - [`WriteError::OpenRoot`] / [`WriteError::Enumerate`] if the class key
///   cannot be opened or listed
/// - [`WriteError::AccessDenied`] if the matching key cannot be opened for writing
/// - [`WriteError::Update`] if setting or deleting the value fails
/// - [`WriteError::NotFound`] if no driver key carries `id`
pub fn write_override<S: RegistryStore>(
    store: &S,
    id: &AdapterId,
    change: &AddressChange,
) -> Result<(), WriteError> {
    let root = store
        .open(ADAPTER_CLASS_ROOT, Access::Read)
        .map_err(WriteError::OpenRoot)?;

    for name in sorted_subkeys(&root).map_err(WriteError::Enumerate)? {
        if !carries_instance_id(&root, &name, id) {
            continue;
        }

        let driver = root
            .open_subkey(&name, Access::ReadWrite)
            .map_err(|source| WriteError::AccessDenied {
                id: id.to_string(),
                source,
            })?;

        apply(&driver, change).map_err(|source| WriteError::Update {
            id: id.to_string(),
            source,
        })?;

        info!("Wrote registry key {}", driver.path());
        return Ok(());
    }

    Err(WriteError::NotFound { id: id.to_string() })
}

/// Returns true if subkey `name` is the driver key for `id`.
///
/// The subkey handle is closed before returning.
fn carries_instance_id<K: RegistryKey>(root: &K, name: &str, id: &AdapterId) -> bool {
    let key = match root.open_subkey(name, Access::Read) {
        Ok(key) => key,
        Err(e) => {
            debug!("Skipping {name}: {e}");
            return false;
        }
    };

    key.string_value(INSTANCE_ID_VALUE)
        .is_ok_and(|instance| instance == id.as_str())
}

fn apply<K: RegistryKey>(driver: &K, change: &AddressChange) -> Result<(), StoreError> {
    match change {
        AddressChange::Set(mac) => driver.set_string_value(NETWORK_ADDRESS_VALUE, mac.as_str()),
        AddressChange::Restore => match driver.delete_value(NETWORK_ADDRESS_VALUE) {
            Err(e) if e.is_not_found() => {
                debug!("No address override present at {}", driver.path());
                Ok(())
            }
            other => other,
        },
    }
}
