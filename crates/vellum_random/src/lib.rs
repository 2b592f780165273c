//! # VELLUM Random
//!
//! Deterministic randomness for reproducible generative sketches.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Same seed always produces the same artwork
//! 2. **Explicit state**: One `u32` state per engine, advanced only by draws
//! 3. **No hidden globals**: Engines are owned values; variants get their own
//! 4. **Capabilities, not algorithms**: Noise and blue noise sit behind seams
//!
//! ## Core Components
//!
//! - `RandomEngine`: uniform stream, circle samples, gaussian, shuffle
//! - `SimplexNoise`: 2D/3D/4D coherent noise (`CoherentNoise` implementation)
//! - `PoissonDisk`: blue-noise point sets driven by an injected uniform source
//! - `Seed`: the 32-bit value everything derives from
//!
//! ## Example
//!
//! ```rust
//! use vellum_random::{RandomEngine, Seed};
//!
//! let mut rng = RandomEngine::new(Seed::new(1000));
//!
//! let x = rng.uniform();
//! assert!((0.0..1.0).contains(&x));
//!
//! let wobble = rng.noise("1d", &[0.5]).unwrap();
//! assert!(wobble.abs() <= 1.0);
//!
//! let dots = rng.poisson(100.0, 100.0, 10.0).unwrap();
//! assert!(!dots.is_empty());
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod engine;
pub mod error;
pub mod noise;
pub mod poisson;
pub mod seed;
pub mod vec2;

pub use engine::{mix32, NoiseDimension, RandomEngine, STATE_INCREMENT};
pub use error::{RandomError, RandomResult};
pub use noise::{CoherentNoise, SeedableNoise, SimplexNoise};
pub use poisson::{PoissonDisk, DEFAULT_ATTEMPTS, MAX_GRID_CELLS};
pub use seed::{Seed, ENTROPY_SEED_RANGE};
pub use vec2::Vec2;
