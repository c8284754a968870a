//! Plausible random MAC address generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{MacAddress, VENDOR_OUIS};

/// Generates random addresses that carry a real vendor prefix.
///
/// The generator is seeded once and then reused, so every address produced
/// within a run comes from the same pseudo-random sequence. It is not
/// cryptographically secure: the output only needs to look plausible.
///
/// # Example
///
/// ```
/// use macshift::mac::{MacGenerator, VENDOR_OUIS};
///
/// let mut generator = MacGenerator::from_seed(42);
/// let mac = generator.generate();
///
/// assert_eq!(mac.as_str().len(), 12);
/// assert!(VENDOR_OUIS.contains(&mac.oui()));
/// ```
#[derive(Debug, Clone)]
pub struct MacGenerator {
    rng: StdRng,
}

impl MacGenerator {
    /// Creates a generator with a fixed seed.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a generator seeded from the system tick count.
    #[must_use]
    pub fn from_tick_count() -> Self {
        Self::from_seed(tick_count())
    }

    /// Produces a new address: a vendor prefix followed by 24 random bits.
    pub fn generate(&mut self) -> MacAddress {
        let oui = VENDOR_OUIS[self.rng.random_range(0..VENDOR_OUIS.len())];
        let low: u32 = self.rng.random_range(0..=0xFF_FFFF);
        MacAddress::from_u64((u64::from(oui) << 24) | u64::from(low))
    }
}

/// Milliseconds since boot.
#[cfg(windows)]
fn tick_count() -> u64 {
    // SAFETY: GetTickCount64 has no preconditions.
    unsafe { windows::Win32::System::SystemInformation::GetTickCount64() }
}

/// Milliseconds since the Unix epoch, standing in for a tick counter.
#[cfg(not(windows))]
fn tick_count() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
}
