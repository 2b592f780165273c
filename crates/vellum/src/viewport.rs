//! # Viewport Units
//!
//! A design never uses fixed pixel values. Positions and sizes are given as
//! percentages of the drawing surface, like CSS `vw`/`vh`/`vmin`/`vmax`, and
//! converted here.
//!
//! The surface size is an explicit value owned by whoever draws; there is no
//! process-wide "current size".

/// Drawing surface dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    width: f64,
    height: f64,
}

impl Viewport {
    /// Creates a viewport for a `width` x `height` pixel surface.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Surface width in pixels.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Surface height in pixels.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// `percent` (0-100) of the width, in pixels.
    #[inline]
    #[must_use]
    pub fn vw(&self, percent: f64) -> f64 {
        self.width * (percent / 100.0)
    }

    /// `percent` (0-100) of the height, in pixels.
    #[inline]
    #[must_use]
    pub fn vh(&self, percent: f64) -> f64 {
        self.height * (percent / 100.0)
    }

    /// `percent` of the shorter side.
    #[inline]
    #[must_use]
    pub fn vmin(&self, percent: f64) -> f64 {
        self.width.min(self.height) * (percent / 100.0)
    }

    /// `percent` of the longer side.
    #[inline]
    #[must_use]
    pub fn vmax(&self, percent: f64) -> f64 {
        self.width.max(self.height) * (percent / 100.0)
    }
}
