//! Windows registry access using the `winreg` crate.

use winreg::RegKey;
use winreg::enums::{HKEY_LOCAL_MACHINE, KEY_READ, KEY_SET_VALUE};

use crate::adapter::{Access, RegistryKey, RegistryStore, StoreError};

/// Windows implementation of [`RegistryStore`] over `HKEY_LOCAL_MACHINE`.
///
/// # Example
///
/// ```no_run
/// use macshift::adapter::platform::WindowsRegistry;
/// use macshift::adapter::find_adapter_id;
///
/// let id = find_adapter_id(&WindowsRegistry::new(), "Wi-Fi").expect("adapter not found");
/// println!("Wi-Fi is {id}");
/// ```
#[derive(Debug, Clone, Default)]
pub struct WindowsRegistry {
    _private: (),
}

impl WindowsRegistry {
    /// Creates a new registry accessor.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl RegistryStore for WindowsRegistry {
    type Key = WindowsKey;

    fn open(&self, path: &str, access: Access) -> Result<Self::Key, StoreError> {
        let hklm = RegKey::predef(HKEY_LOCAL_MACHINE);
        let key = hklm
            .open_subkey_with_flags(path, sam(access))
            .map_err(|e| StoreError::from_io(path, e))?;
        Ok(WindowsKey {
            key,
            path: path.to_owned(),
        })
    }
}

/// An open registry key. The handle is closed on drop.
#[derive(Debug)]
pub struct WindowsKey {
    key: RegKey,
    path: String,
}

impl WindowsKey {
    fn value_path(&self, name: &str) -> String {
        format!("{}@{name}", self.path)
    }
}

impl RegistryKey for WindowsKey {
    fn path(&self) -> &str {
        &self.path
    }

    fn subkey_names(&self) -> Result<Vec<String>, StoreError> {
        self.key
            .enum_keys()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| StoreError::from_io(self.path.as_str(), e))
    }

    fn open_subkey(&self, path: &str, access: Access) -> Result<Self, StoreError> {
        let full_path = format!(r"{}\{path}", self.path);
        let key = self
            .key
            .open_subkey_with_flags(path, sam(access))
            .map_err(|e| StoreError::from_io(full_path.as_str(), e))?;
        Ok(Self {
            key,
            path: full_path,
        })
    }

    fn string_value(&self, name: &str) -> Result<String, StoreError> {
        self.key
            .get_value::<String, _>(name)
            .map_err(|e| StoreError::from_io(self.value_path(name), e))
    }

    fn set_string_value(&self, name: &str, value: &str) -> Result<(), StoreError> {
        // Stored as REG_SZ including the terminating NUL.
        self.key
            .set_value(name, &value.to_owned())
            .map_err(|e| StoreError::from_io(self.value_path(name), e))
    }

    fn delete_value(&self, name: &str) -> Result<(), StoreError> {
        self.key
            .delete_value(name)
            .map_err(|e| StoreError::from_io(self.value_path(name), e))
    }
}

const fn sam(access: Access) -> u32 {
    match access {
        Access::Read => KEY_READ,
        Access::ReadWrite => KEY_READ | KEY_SET_VALUE,
    }
}
