//! # VELLUM
//!
//! Seeded generative sketches, sized in viewport units.
//!
//! ## Design Principles
//!
//! 1. **No fixed dimensions**: Positions, widths and offsets are percentages
//!    of the surface (`vw`, `vh`), never pixels
//! 2. **One seed, one artwork**: Every random choice flows through the
//!    design's `RandomEngine`
//! 3. **Display lists, not pixels**: The canvas records draw commands
//!
//! ## Modules
//!
//! - `config`: TOML sketch configuration
//! - `viewport`: percentage-to-pixel conversion
//! - `canvas`: the display-list drawing surface
//! - `design`: the sketch
//! - `cli`: argument handling for the `vellum` binary
//!
//! ## Example
//!
//! ```rust
//! use vellum::{Design, Viewport};
//! use vellum_random::Seed;
//!
//! let mut design = Design::new(Seed::new(1000), Viewport::new(1080.0, 1080.0));
//! let frame = design.render().unwrap();
//! assert_eq!(frame.len(), 4);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod canvas;
pub mod cli;
pub mod config;
pub mod design;
pub mod error;
pub mod viewport;

// Re-export the randomness core
pub use vellum_random as random;

pub use canvas::{Canvas, Color, DrawCommand};
pub use cli::CliArgs;
pub use config::{CanvasConfig, RandomConfig, SketchConfig};
pub use design::Design;
pub use error::{SketchError, SketchResult};
pub use viewport::Viewport;
