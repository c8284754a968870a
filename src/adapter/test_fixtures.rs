//! Shared test fixtures for adapter tests.

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use super::{
    ADAPTER_CLASS_ROOT, Access, AdapterResetter, CONNECTION_NAME_VALUE, ConnectionEnumerator,
    INSTANCE_ID_VALUE, NETWORK_CONNECTIONS_ROOT, NetConnection, RegistryKey, RegistryStore,
    ResetError, ResetOutcome, StoreError,
};

#[derive(Debug, Default)]
struct Node {
    values: BTreeMap<String, String>,
    /// Children in insertion order, standing in for the registry's own order.
    children: Vec<String>,
    deny_read: bool,
    deny_write: bool,
}

#[derive(Debug, Default)]
struct Inner {
    nodes: HashMap<String, Node>,
    open_handles: usize,
    opened: Vec<String>,
    deny_root: bool,
    fail_enumeration: bool,
    fail_updates: bool,
}

/// In-memory registry for testing.
///
/// Tracks every key opened and how many handles are still live, so tests
/// can check that scans release what they open.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates `path` and any missing ancestors.
    pub fn add_key(&self, path: &str) -> &Self {
        let mut inner = self.inner.lock().unwrap();
        let mut current = String::new();
        for component in path.split('\\') {
            let parent = current.clone();
            if !current.is_empty() {
                current.push('\\');
            }
            current.push_str(component);

            if !inner.nodes.contains_key(&current) {
                inner.nodes.insert(current.clone(), Node::default());
                if !parent.is_empty() {
                    inner
                        .nodes
                        .get_mut(&parent)
                        .unwrap()
                        .children
                        .push(component.to_string());
                }
            }
        }
        self
    }

    /// Sets a string value, creating the key if needed.
    pub fn set(&self, path: &str, name: &str, value: &str) -> &Self {
        self.add_key(path);
        self.inner
            .lock()
            .unwrap()
            .nodes
            .get_mut(path)
            .unwrap()
            .values
            .insert(name.to_string(), value.to_string());
        self
    }

    /// Returns a string value, if present.
    pub fn get(&self, path: &str, name: &str) -> Option<String> {
        self.inner
            .lock()
            .unwrap()
            .nodes
            .get(path)
            .and_then(|n| n.values.get(name).cloned())
    }

    /// Makes `path` refuse to open, even read-only.
    pub fn deny_read(&self, path: &str) -> &Self {
        self.add_key(path);
        self.update_node(path, |node| node.deny_read = true);
        self
    }

    /// Makes `path` refuse to open with write access.
    pub fn deny_write(&self, path: &str) -> &Self {
        self.add_key(path);
        self.update_node(path, |node| node.deny_write = true);
        self
    }

    /// Makes every [`RegistryStore::open`] call fail with access denied.
    pub fn deny_root(&self) -> &Self {
        self.inner.lock().unwrap().deny_root = true;
        self
    }

    /// Makes every subkey enumeration fail.
    pub fn fail_enumeration(&self) -> &Self {
        self.inner.lock().unwrap().fail_enumeration = true;
        self
    }

    /// Makes every set/delete fail with an I/O error.
    pub fn fail_updates(&self) -> &Self {
        self.inner.lock().unwrap().fail_updates = true;
        self
    }

    /// Number of keys currently open.
    pub fn open_handles(&self) -> usize {
        self.inner.lock().unwrap().open_handles
    }

    /// Paths of all keys opened so far, in order.
    pub fn opened(&self) -> Vec<String> {
        self.inner.lock().unwrap().opened.clone()
    }

    /// Registers a connection `name` for adapter `id` under the connection list.
    pub fn add_connection(&self, id: &str, name: &str) -> &Self {
        self.set(
            &format!(r"{NETWORK_CONNECTIONS_ROOT}\{id}\Connection"),
            CONNECTION_NAME_VALUE,
            name,
        )
    }

    /// Registers driver key `index` for adapter `id` under the class key.
    pub fn add_driver(&self, index: &str, id: &str) -> &Self {
        self.set(&driver_path(index), INSTANCE_ID_VALUE, id)
    }

    fn update_node(&self, path: &str, update: impl FnOnce(&mut Node)) {
        let mut inner = self.inner.lock().unwrap();
        if let Some(node) = inner.nodes.get_mut(path) {
            update(node);
        }
    }

    fn open_path(&self, path: &str, access: Access) -> Result<MemoryKey, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        let node = inner.nodes.get(path).ok_or_else(|| StoreError::NotFound {
            path: path.to_string(),
        })?;
        if node.deny_read || (access == Access::ReadWrite && node.deny_write) {
            return Err(StoreError::AccessDenied {
                path: path.to_string(),
            });
        }
        inner.open_handles += 1;
        inner.opened.push(path.to_string());
        drop(inner);

        Ok(MemoryKey {
            store: self.clone(),
            path: path.to_string(),
            access,
        })
    }
}

/// Full path of driver key `index` under the class key.
pub fn driver_path(index: &str) -> String {
    format!(r"{ADAPTER_CLASS_ROOT}\{index}")
}

impl RegistryStore for MemoryStore {
    type Key = MemoryKey;

    fn open(&self, path: &str, access: Access) -> Result<Self::Key, StoreError> {
        if self.inner.lock().unwrap().deny_root {
            return Err(StoreError::AccessDenied {
                path: path.to_string(),
            });
        }
        self.open_path(path, access)
    }
}

/// Open key in a [`MemoryStore`].
#[derive(Debug)]
pub struct MemoryKey {
    store: MemoryStore,
    path: String,
    access: Access,
}

impl Drop for MemoryKey {
    fn drop(&mut self) {
        self.store.inner.lock().unwrap().open_handles -= 1;
    }
}

impl MemoryKey {
    fn check_writable(&self, name: &str) -> Result<(), StoreError> {
        let value_path = format!("{}@{name}", self.path);
        if self.access != Access::ReadWrite {
            return Err(StoreError::AccessDenied { path: value_path });
        }
        if self.store.inner.lock().unwrap().fail_updates {
            return Err(StoreError::Io {
                path: value_path,
                source: std::io::Error::other("simulated write failure"),
            });
        }
        Ok(())
    }
}

impl RegistryKey for MemoryKey {
    fn path(&self) -> &str {
        &self.path
    }

    fn subkey_names(&self) -> Result<Vec<String>, StoreError> {
        let inner = self.store.inner.lock().unwrap();
        if inner.fail_enumeration {
            return Err(StoreError::Io {
                path: self.path.clone(),
                source: std::io::Error::other("simulated enumeration failure"),
            });
        }
        Ok(inner
            .nodes
            .get(&self.path)
            .map(|n| n.children.clone())
            .unwrap_or_default())
    }

    fn open_subkey(&self, path: &str, access: Access) -> Result<Self, StoreError> {
        self.store
            .open_path(&format!(r"{}\{path}", self.path), access)
    }

    fn string_value(&self, name: &str) -> Result<String, StoreError> {
        self.store
            .get(&self.path, name)
            .ok_or_else(|| StoreError::NotFound {
                path: format!("{}@{name}", self.path),
            })
    }

    fn set_string_value(&self, name: &str, value: &str) -> Result<(), StoreError> {
        self.check_writable(name)?;
        self.store.set(&self.path, name, value);
        Ok(())
    }

    fn delete_value(&self, name: &str) -> Result<(), StoreError> {
        self.check_writable(name)?;
        let removed = self
            .store
            .inner
            .lock()
            .unwrap()
            .nodes
            .get_mut(&self.path)
            .and_then(|n| n.values.remove(name));
        match removed {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound {
                path: format!("{}@{name}", self.path),
            }),
        }
    }
}

/// Calls recorded by [`MockConnection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionCall {
    Disconnect,
    Connect,
}

/// Scripted live connection.
#[derive(Debug, Clone)]
pub struct MockConnection {
    name: Option<String>,
    fail_disconnect: bool,
    fail_connect: bool,
    calls: Arc<Mutex<Vec<(String, ConnectionCall)>>>,
}

impl MockConnection {
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            fail_disconnect: false,
            fail_connect: false,
            calls: Arc::default(),
        }
    }

    /// A connection whose properties cannot be read.
    pub fn unreadable() -> Self {
        Self {
            name: None,
            ..Self::named("")
        }
    }

    pub const fn failing_disconnect(mut self) -> Self {
        self.fail_disconnect = true;
        self
    }

    pub const fn failing_connect(mut self) -> Self {
        self.fail_connect = true;
        self
    }

    fn record(&self, call: ConnectionCall) {
        self.calls
            .lock()
            .unwrap()
            .push((self.name.clone().unwrap_or_default(), call));
    }
}

impl NetConnection for MockConnection {
    fn name(&self) -> Result<String, ResetError> {
        self.name.clone().ok_or_else(|| ResetError::Enumerate {
            reason: "no properties".to_string(),
        })
    }

    fn disconnect(&self) -> Result<(), ResetError> {
        self.record(ConnectionCall::Disconnect);
        if self.fail_disconnect {
            return Err(ResetError::Enumerate {
                reason: "already disconnected".to_string(),
            });
        }
        Ok(())
    }

    fn connect(&self) -> Result<(), ResetError> {
        self.record(ConnectionCall::Connect);
        if self.fail_connect {
            return Err(ResetError::Enumerate {
                reason: "device refused".to_string(),
            });
        }
        Ok(())
    }
}

/// Scripted connection enumerator sharing one call log across its connections.
#[derive(Debug)]
pub struct MockConnections {
    items: VecDeque<Result<MockConnection, ResetError>>,
    calls: Arc<Mutex<Vec<(String, ConnectionCall)>>>,
    pub fetched: usize,
}

impl MockConnections {
    pub fn new(connections: Vec<MockConnection>) -> Self {
        Self::with_results(connections.into_iter().map(Ok).collect())
    }

    pub fn with_results(results: Vec<Result<MockConnection, ResetError>>) -> Self {
        let calls: Arc<Mutex<Vec<(String, ConnectionCall)>>> = Arc::default();
        let items = results
            .into_iter()
            .map(|r| {
                r.map(|mut c| {
                    c.calls = Arc::clone(&calls);
                    c
                })
            })
            .collect();
        Self {
            items,
            calls,
            fetched: 0,
        }
    }

    pub fn calls(&self) -> Vec<(String, ConnectionCall)> {
        self.calls.lock().unwrap().clone()
    }
}

impl ConnectionEnumerator for MockConnections {
    type Connection = MockConnection;

    fn next_connection(&mut self) -> Result<Option<Self::Connection>, ResetError> {
        match self.items.pop_front() {
            Some(item) => {
                self.fetched += 1;
                item.map(Some)
            }
            None => Ok(None),
        }
    }
}

/// Resetter that records the names it was asked to reset.
#[derive(Debug)]
pub struct MockResetter {
    result: Mutex<Option<Result<ResetOutcome, ResetError>>>,
    requests: Mutex<Vec<String>>,
}

impl MockResetter {
    pub fn returning(result: Result<ResetOutcome, ResetError>) -> Self {
        Self {
            result: Mutex::new(Some(result)),
            requests: Mutex::default(),
        }
    }

    pub fn succeeding() -> Self {
        Self::returning(Ok(ResetOutcome::Reset))
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl AdapterResetter for MockResetter {
    fn reset(&self, adapter_name: &str) -> Result<ResetOutcome, ResetError> {
        self.requests.lock().unwrap().push(adapter_name.to_string());
        self.result
            .lock()
            .unwrap()
            .take()
            .unwrap_or(Ok(ResetOutcome::Reset))
    }
}
