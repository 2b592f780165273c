//! # Sketch Configuration
//!
//! Loaded once at startup from a TOML file:
//!
//! ```toml
//! [canvas]
//! width = 1080
//! height = 1080
//!
//! [random]
//! seed = 1234   # optional; picked from entropy when absent
//! ```
//!
//! Every section and key is optional.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use vellum_random::Seed;

use crate::error::{SketchError, SketchResult};
use crate::viewport::Viewport;

/// Default canvas edge, in pixels.
pub const DEFAULT_CANVAS_SIZE: u32 = 1080;

/// Top-level sketch configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SketchConfig {
    /// Drawing surface size.
    pub canvas: CanvasConfig,
    /// Randomness settings.
    pub random: RandomConfig,
}

/// `[canvas]` section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CanvasConfig {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_SIZE,
            height: DEFAULT_CANVAS_SIZE,
        }
    }
}

/// `[random]` section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RandomConfig {
    /// Fixed seed; `None` means pick one from entropy at startup.
    pub seed: Option<i32>,
}

impl SketchConfig {
    /// Parses and validates a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// [`SketchError::Config`] for malformed TOML or unknown keys, and
    /// [`SketchError::InvalidCanvas`] for a zero-sized canvas.
    pub fn from_toml_str(text: &str) -> SketchResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    ///
    /// # Errors
    ///
    /// [`SketchError::Io`] if the file cannot be read, otherwise as
    /// [`from_toml_str`](Self::from_toml_str).
    pub fn from_file(path: impl AsRef<Path>) -> SketchResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SketchError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded sketch config");
        Self::from_toml_str(&text)
    }

    /// Checks invariants serde cannot express.
    ///
    /// # Errors
    ///
    /// [`SketchError::InvalidCanvas`] if either canvas side is zero.
    pub fn validate(&self) -> SketchResult<()> {
        let CanvasConfig { width, height } = self.canvas;
        if width == 0 || height == 0 {
            return Err(SketchError::InvalidCanvas { width, height });
        }
        Ok(())
    }

    /// The configured seed, or a fresh entropy-derived one.
    #[must_use]
    pub fn resolve_seed(&self) -> Seed {
        self.random.seed.map_or_else(Seed::from_entropy, Seed::new)
    }

    /// Viewport matching the configured canvas.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(f64::from(self.canvas.width), f64::from(self.canvas.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config() {
        let config = SketchConfig::from_toml_str(
            r"
            [canvas]
            width = 800
            height = 600

            [random]
            seed = -42
            ",
        )
        .unwrap();

        assert_eq!(config.canvas, CanvasConfig { width: 800, height: 600 });
        assert_eq!(config.resolve_seed(), Seed::new(-42));
        assert_eq!(config.viewport(), Viewport::new(800.0, 600.0));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = SketchConfig::from_toml_str("").unwrap();
        assert_eq!(config, SketchConfig::default());
        assert_eq!(config.canvas.width, DEFAULT_CANVAS_SIZE);
        assert_eq!(config.random.seed, None);

        let seed = config.resolve_seed().value();
        assert!((0..10_000).contains(&seed));
    }

    #[test]
    fn test_partial_section() {
        let config = SketchConfig::from_toml_str("[canvas]\nwidth = 300\n").unwrap();
        assert_eq!(config.canvas.width, 300);
        assert_eq!(config.canvas.height, DEFAULT_CANVAS_SIZE);
    }

    #[test]
    fn test_rejects_unknown_keys() {
        let result = SketchConfig::from_toml_str("[canvas]\ndepth = 3\n");
        assert!(matches!(result, Err(SketchError::Config(_))));
    }

    #[test]
    fn test_rejects_seed_out_of_range() {
        let result = SketchConfig::from_toml_str("[random]\nseed = 3000000000\n");
        assert!(matches!(result, Err(SketchError::Config(_))));
    }

    #[test]
    fn test_rejects_empty_canvas() {
        let result = SketchConfig::from_toml_str("[canvas]\nwidth = 0\n");
        assert!(matches!(
            result,
            Err(SketchError::InvalidCanvas { width: 0, height: DEFAULT_CANVAS_SIZE })
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = SketchConfig::from_file("/definitely/not/here/sketch.toml");
        assert!(matches!(result, Err(SketchError::Io { .. })));
    }
}
