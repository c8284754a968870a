//! Windows connection reset using the `INetConnectionManager` COM interface.
//!
//! `Netshell.dll` exports `NcFreeNetconProperties`, the only supported way to
//! release the property blocks returned by `INetConnection::GetProperties`.
//! The library is loaded at runtime and kept loaded until every property
//! block has been freed.

use std::marker::PhantomData;

use tracing::debug;
use windows::Win32::Foundation::{FreeLibrary, HMODULE};
use windows::Win32::NetworkManagement::WindowsFirewall::{
    IEnumNetConnection, INetConnection, INetConnectionManager, NCME_DEFAULT, NETCON_PROPERTIES,
};
use windows::Win32::System::Com::{
    CLSCTX_ALL, COINIT_APARTMENTTHREADED, CoCreateInstance, CoInitializeEx, CoUninitialize,
};
use windows::Win32::System::LibraryLoader::{GetProcAddress, LoadLibraryW};
use windows::core::{GUID, s, w};

use crate::adapter::{
    AdapterResetter, ConnectionEnumerator, NetConnection, ResetError, ResetOutcome,
    reset_connection,
};

const NETSHELL: &str = "Netshell.dll";
const FREE_PROPERTIES: &str = "NcFreeNetconProperties";

/// `CLSID_ConnectionManager` from `netcon.h`.
const CLSID_CONNECTION_MANAGER: GUID = GUID::from_u128(0xBA12_6AD1_2166_11D1_B1D0_0080_5FC1_270E);

type FreePropertiesFn = unsafe extern "system" fn(*mut NETCON_PROPERTIES);

/// Windows implementation of [`AdapterResetter`].
///
/// Each call loads `Netshell.dll`, initialises COM on the calling thread,
/// walks the live connections and releases everything before returning.
///
/// # Example
///
/// ```no_run
/// use macshift::adapter::AdapterResetter;
/// use macshift::adapter::platform::WindowsResetter;
///
/// let outcome = WindowsResetter::new().reset("Wi-Fi").expect("reset failed");
/// println!("{outcome:?}");
/// ```
#[derive(Debug, Clone, Default)]
pub struct WindowsResetter {
    _private: (),
}

impl WindowsResetter {
    /// Creates a new Windows resetter.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl AdapterResetter for WindowsResetter {
    fn reset(&self, adapter_name: &str) -> Result<ResetOutcome, ResetError> {
        let netshell = Netshell::load()?;
        let _apartment = ComApartment::enter();

        // SAFETY: COM is initialised on this thread for the lifetime of `_apartment`,
        // which outlives `manager` and `connections` (dropped in reverse order).
        let manager: INetConnectionManager =
            unsafe { CoCreateInstance(&CLSID_CONNECTION_MANAGER, None, CLSCTX_ALL) }
                .map_err(|e| ResetError::CreateManager {
                    reason: e.to_string(),
                })?;

        // SAFETY: `manager` is a valid interface pointer.
        let enumerator = unsafe { manager.EnumConnections(NCME_DEFAULT) }
            .map_err(|e| ResetError::Enumerate {
                reason: e.to_string(),
            })?;

        let mut connections = WindowsConnections {
            enumerator,
            netshell: &netshell,
        };
        reset_connection(&mut connections, adapter_name)
    }
}

/// RAII wrapper for the loaded `Netshell.dll` module.
struct Netshell {
    module: HMODULE,
    free_properties: FreePropertiesFn,
}

impl Netshell {
    fn load() -> Result<Self, ResetError> {
        // SAFETY: Loading a system library by name; the handle is freed on drop.
        let module = unsafe { LoadLibraryW(w!("Netshell.dll")) }
            .map_err(|e| ResetError::LoadLibrary {
                library: NETSHELL,
                reason: e.to_string(),
            })?;

        // SAFETY: `module` is a valid module handle.
        let Some(proc) = (unsafe { GetProcAddress(module, s!("NcFreeNetconProperties")) }) else {
            // SAFETY: We own the handle and have not handed it out.
            let _ = unsafe { FreeLibrary(module) };
            return Err(ResetError::MissingExport {
                library: NETSHELL,
                function: FREE_PROPERTIES,
            });
        };

        // SAFETY: NcFreeNetconProperties is declared in netcon.h as
        // `void NcFreeNetconProperties(NETCON_PROPERTIES*)` with the stdcall ABI.
        let free_properties = unsafe {
            std::mem::transmute::<unsafe extern "system" fn() -> isize, FreePropertiesFn>(proc)
        };

        Ok(Self {
            module,
            free_properties,
        })
    }
}

impl Drop for Netshell {
    fn drop(&mut self) {
        // SAFETY: We own this handle and it was returned by LoadLibraryW.
        let _ = unsafe { FreeLibrary(self.module) };
    }
}

/// RAII guard for COM initialisation on the current thread.
///
/// `CoUninitialize` is only called if `CoInitializeEx` succeeded, keeping the
/// calls balanced when the thread was already initialised in another mode.
struct ComApartment {
    initialized: bool,
}

impl ComApartment {
    fn enter() -> Self {
        // SAFETY: No reserved pointer is passed; balanced by Drop.
        let result = unsafe { CoInitializeEx(None, COINIT_APARTMENTTHREADED) };
        if result.is_err() {
            debug!("CoInitializeEx returned {result:?}; continuing with the existing apartment");
        }
        Self {
            initialized: result.is_ok(),
        }
    }
}

impl Drop for ComApartment {
    fn drop(&mut self) {
        if self.initialized {
            // SAFETY: Paired with the successful CoInitializeEx in `enter`.
            unsafe { CoUninitialize() };
        }
    }
}

/// Property block returned by `INetConnection::GetProperties`.
///
/// Freed through `NcFreeNetconProperties` on drop; borrows the library so it
/// cannot outlive the loaded module.
struct ConnectionProperties<'a> {
    ptr: *mut NETCON_PROPERTIES,
    free: FreePropertiesFn,
    _library: PhantomData<&'a Netshell>,
}

impl ConnectionProperties<'_> {
    fn name(&self) -> Result<String, ResetError> {
        // SAFETY: `ptr` is non-null (checked on construction) and stays valid until drop.
        let name = unsafe { (*self.ptr).pszwName };
        if name.is_null() {
            return Err(ResetError::Enumerate {
                reason: "connection has no name".to_string(),
            });
        }
        // SAFETY: pszwName is a NUL-terminated wide string owned by the property block.
        unsafe { name.to_string() }.map_err(|e| ResetError::Enumerate {
            reason: e.to_string(),
        })
    }
}

impl Drop for ConnectionProperties<'_> {
    fn drop(&mut self) {
        // SAFETY: `ptr` came from GetProperties and is freed exactly once.
        unsafe { (self.free)(self.ptr) };
    }
}

struct WindowsConnections<'a> {
    enumerator: IEnumNetConnection,
    netshell: &'a Netshell,
}

impl<'a> ConnectionEnumerator for WindowsConnections<'a> {
    type Connection = WindowsConnection<'a>;

    fn next_connection(&mut self) -> Result<Option<Self::Connection>, ResetError> {
        loop {
            let mut slot: [Option<INetConnection>; 1] = [None];
            let mut fetched = 0u32;

            // SAFETY: `slot` has room for exactly one element and `fetched` is a valid out pointer.
            unsafe { self.enumerator.Next(&mut slot, &raw mut fetched) }
                .ok()
                .map_err(|e| ResetError::Enumerate {
                    reason: e.to_string(),
                })?;

            if fetched == 0 {
                return Ok(None);
            }

            if let Some(connection) = slot[0].take() {
                return Ok(Some(WindowsConnection {
                    connection,
                    netshell: self.netshell,
                }));
            }
        }
    }
}

struct WindowsConnection<'a> {
    connection: INetConnection,
    netshell: &'a Netshell,
}

impl NetConnection for WindowsConnection<'_> {
    fn name(&self) -> Result<String, ResetError> {
        // SAFETY: `connection` is a valid interface pointer.
        let ptr = unsafe { self.connection.GetProperties() }?;
        if ptr.is_null() {
            return Err(ResetError::Enumerate {
                reason: "connection returned no properties".to_string(),
            });
        }

        let properties = ConnectionProperties {
            ptr,
            free: self.netshell.free_properties,
            _library: PhantomData,
        };
        properties.name()
    }

    fn disconnect(&self) -> Result<(), ResetError> {
        // SAFETY: `connection` is a valid interface pointer.
        unsafe { self.connection.Disconnect() }?;
        Ok(())
    }

    fn connect(&self) -> Result<(), ResetError> {
        // SAFETY: `connection` is a valid interface pointer.
        unsafe { self.connection.Connect() }?;
        Ok(())
    }
}
