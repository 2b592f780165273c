//! # Sketch Seeds
//!
//! A sketch's entire output derives from one signed 32-bit seed. The seed is
//! normally supplied by the caller (a UI control, a config file, a CLI flag);
//! when it is not, [`Seed::from_entropy`] picks one.

use std::fmt;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{RandomError, RandomResult};

/// Upper bound (exclusive) for entropy-derived seeds.
///
/// Keeps generated seeds short enough to read off a screen and type back in.
pub const ENTROPY_SEED_RANGE: u32 = 10_000;

/// Seed for deterministic sketch generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Seed(i32);

impl Seed {
    /// Creates a new seed.
    #[inline]
    #[must_use]
    pub const fn new(seed: i32) -> Self {
        Self(seed)
    }

    /// Returns the raw seed value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Returns the seed shifted by `delta`, wrapping at the `i32` bounds.
    ///
    /// The engine seeds its noise source with `offset(1)`.
    #[inline]
    #[must_use]
    pub const fn offset(self, delta: i32) -> Self {
        Self(self.0.wrapping_add(delta))
    }

    /// Picks a seed in `[0, ENTROPY_SEED_RANGE)` from the OS entropy source.
    ///
    /// Falls back to the system clock if the entropy source is unavailable.
    #[must_use]
    pub fn from_entropy() -> Self {
        let mut bytes = [0u8; 4];
        let raw = match getrandom::fill(&mut bytes) {
            Ok(()) => u32::from_le_bytes(bytes),
            Err(err) => {
                tracing::debug!("entropy source unavailable ({err}), seeding from clock");
                clock_entropy()
            }
        };
        // Always below ENTROPY_SEED_RANGE, which fits in i32.
        Self((raw % ENTROPY_SEED_RANGE) as i32)
    }
}

/// Sub-second clock bits, used only when the OS entropy source fails.
fn clock_entropy() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.subsec_nanos() ^ (elapsed.as_secs() as u32))
}

impl From<i32> for Seed {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Seed {
    type Err = RandomError;

    fn from_str(s: &str) -> RandomResult<Self> {
        s.trim()
            .parse::<i32>()
            .map(Self)
            .map_err(|_| RandomError::InvalidSeed(s.to_string()))
    }
}
