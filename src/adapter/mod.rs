//! Network adapter lookup, address override and reset.
//!
//! This module provides types and traits for:
//! - Identifying adapters ([`AdapterId`]) and describing the change ([`AddressChange`])
//! - Abstracting the registry ([`RegistryStore`], [`RegistryKey`])
//! - Locating an adapter by display name ([`find_adapter_id`])
//! - Writing or removing the `NetworkAddress` override ([`write_override`])
//! - Cycling the live connection ([`AdapterResetter`], [`reset_connection`])
//! - Platform-specific implementations ([`platform`])
//!
//! # Ordering
//!
//! Both registry scans sort subkey names before matching, so "first match"
//! means the lexicographically smallest subkey name, independent of the
//! order in which the registry happens to enumerate them.
//!
//! # Concurrency
//!
//! The scan-then-write sequence is not atomic. If another process edits the
//! adapter keys between the scan and the write, the write may land on a key
//! that no longer matches. The registry is not ours to lock, so this race is
//! accepted.

mod error;
mod locate;
pub mod platform;
mod reset;
mod store;
mod types;
mod write;

#[cfg(test)]
pub(crate) mod test_fixtures;


pub use error::{LocateError, ResetError, StoreError, WriteError};
pub use locate::{CONNECTION_NAME_VALUE, NETWORK_CONNECTIONS_ROOT, find_adapter_id};
pub use reset::{
    AdapterResetter, ConnectionEnumerator, NetConnection, ResetOutcome, reset_connection,
};
pub use store::{Access, RegistryKey, RegistryStore};
pub use types::{AdapterId, AddressChange};
pub use write::{ADAPTER_CLASS_ROOT, INSTANCE_ID_VALUE, NETWORK_ADDRESS_VALUE, write_override};
