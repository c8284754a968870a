//! Registry access traits.

use super::StoreError;

/// Access rights requested when opening a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Query values and enumerate subkeys.
    Read,
    /// [`Access::Read`] plus setting and deleting values.
    ReadWrite,
}

/// A hierarchical key/value store rooted at `HKEY_LOCAL_MACHINE`.
///
/// # Design
///
/// - The Windows registry and the in-memory test store both implement this trait
/// - Keys are released when the returned [`RegistryStore::Key`] is dropped,
///   so a scan that opens one key per iteration cannot leak handles
pub trait RegistryStore {
    /// Open key handle type.
    type Key: RegistryKey;

    /// Opens a key below `HKEY_LOCAL_MACHINE`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the key does not exist and
    /// [`StoreError::AccessDenied`] if the requested access is not granted.
    fn open(&self, path: &str, access: Access) -> Result<Self::Key, StoreError>;
}

/// An open registry key.
pub trait RegistryKey: Sized {
    /// Full path of this key, used in error messages.
    fn path(&self) -> &str;

    /// Returns the names of all direct subkeys, in the store's enumeration order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if enumeration fails part-way.
    fn subkey_names(&self) -> Result<Vec<String>, StoreError>;

    /// Opens a subkey by relative path (components separated by `\`).
    ///
    /// # Errors
    ///
    /// Same as [`RegistryStore::open`].
    fn open_subkey(&self, path: &str, access: Access) -> Result<Self, StoreError>;

    /// Reads a string value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the value is absent.
    fn string_value(&self, name: &str) -> Result<String, StoreError>;

    /// Writes a string (`REG_SZ`) value, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::AccessDenied`] if the key was opened read-only.
    fn set_string_value(&self, name: &str, value: &str) -> Result<(), StoreError>;

    /// Deletes a value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the value is absent.
    fn delete_value(&self, name: &str) -> Result<(), StoreError>;
}

/// Returns the subkey names of `key` sorted ascending.
pub(super) fn sorted_subkeys<K: RegistryKey>(key: &K) -> Result<Vec<String>, StoreError> {
    let mut names = key.subkey_names()?;
    names.sort_unstable();
    Ok(names)
}
