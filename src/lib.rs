//! Macshift: the simple Windows MAC address changing utility
//!
//! A library for overriding a network adapter's hardware address through
//! the registry and resetting the adapter so the change applies immediately.

pub mod adapter;
pub mod config;
pub mod mac;
pub mod shift;
