//! # Design
//!
//! The sketch itself. Everything is sized in viewport units and every
//! random choice goes through the design's [`RandomEngine`], so a seed fully
//! determines the artwork.

use vellum_random::{RandomEngine, Seed};

use crate::canvas::{Canvas, Color, DrawCommand};
use crate::config::SketchConfig;
use crate::error::SketchResult;
use crate::viewport::Viewport;

/// Background fill.
pub const BACKGROUND: Color = Color::rgb(0, 70, 200);

/// Color of the randomly placed vertical bar.
pub const BAR_COLOR: Color = Color::WHITE;

/// Color of the noise line.
pub const NOISE_LINE_COLOR: Color = Color::rgb(200, 70, 0);

/// Vertices in the noise line, one per percent of width.
pub const NOISE_LINE_STEPS: u32 = 100;

/// Noise-space distance between consecutive vertices.
pub const NOISE_LINE_STEP: f64 = 0.1;

/// A seeded sketch bound to one canvas.
#[derive(Debug)]
pub struct Design {
    random: RandomEngine,
    canvas: Canvas,
}

impl Design {
    /// Creates a design for `seed` drawing on a `viewport`-sized canvas.
    #[must_use]
    pub fn new(seed: Seed, viewport: Viewport) -> Self {
        Self {
            random: RandomEngine::new(seed),
            canvas: Canvas::new(viewport),
        }
    }

    /// Creates a design from configuration, resolving the seed.
    #[must_use]
    pub fn from_config(config: &SketchConfig) -> Self {
        let seed = config.resolve_seed();
        tracing::info!(
            %seed,
            width = config.canvas.width,
            height = config.canvas.height,
            "sketch configured"
        );
        Self::new(seed, config.viewport())
    }

    /// Seed driving this design.
    #[must_use]
    pub const fn seed(&self) -> Seed {
        self.random.seed()
    }

    /// The canvas drawn on by [`render`](Self::render).
    #[must_use]
    pub const fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Draws one frame and returns its display list.
    ///
    /// Each call continues the random stream, so successive frames differ;
    /// a fresh design with the same seed replays the same frames.
    ///
    /// # Errors
    ///
    /// Propagates noise lookup failures from the random engine.
    pub fn render(&mut self) -> SketchResult<&[DrawCommand]> {
        let view = *self.canvas.viewport();

        self.canvas.clear();
        self.canvas
            .fill_rect(0.0, 0.0, view.vw(100.0), view.vh(100.0), BACKGROUND);

        // A simple vertical bar at a random position
        let bar = self.random.int_value(100);
        self.canvas.fill_rect(
            view.vw(f64::from(bar)),
            0.0,
            view.vw(1.0),
            view.vh(100.0),
            BAR_COLOR,
        );

        // A noise line across the middle
        self.canvas.begin_path();
        self.canvas.move_to(0.0, view.vh(50.0));
        let mut pos = 0.0;
        for i in 0..NOISE_LINE_STEPS {
            pos += NOISE_LINE_STEP;
            let offset = self.random.noise("1d", &[pos])?;
            self.canvas
                .line_to(view.vw(f64::from(i)), view.vh(50.0) + offset * view.vw(10.0));
        }
        self.canvas.stroke(NOISE_LINE_COLOR);

        tracing::debug!(
            commands = self.canvas.commands().len(),
            draws = self.random.draw_count(),
            "frame rendered"
        );
        Ok(self.canvas.commands())
    }
}
