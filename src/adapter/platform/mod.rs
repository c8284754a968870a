//! Platform-specific registry and connection manager implementations.
//!
//! This module provides conditional compilation for platform-specific
//! implementations of the [`RegistryStore`](super::RegistryStore) and
//! [`AdapterResetter`](super::AdapterResetter) traits.
//!
//! # Platform Support
//!
//! - **Windows**: Registry access via the `winreg` crate; connection reset via
//!   the `INetConnectionManager` COM interface from the `windows` crate.
//! - Other platforms have no adapter address override to patch.

#[cfg(windows)]
mod netcon;
#[cfg(windows)]
mod registry;


#[cfg(windows)]
pub use netcon::WindowsResetter;
#[cfg(windows)]
pub use registry::{WindowsKey, WindowsRegistry};

// Re-export platform-specific implementations for convenience
#[cfg(windows)]
pub use netcon::WindowsResetter as PlatformResetter;
#[cfg(windows)]
pub use registry::WindowsRegistry as PlatformRegistry;
