//! # Canvas
//!
//! A drawing surface that records commands instead of pixels. The display
//! list it produces is what a rasterizer (or a test) consumes.

use std::fmt;

use vellum_random::Vec2;

use crate::viewport::Viewport;

/// RGBA color, 8 bits per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
    /// Alpha (255 = opaque)
    pub a: u8,
}

impl Color {
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Opaque color from red, green and blue.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Color with explicit alpha.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// One recorded drawing operation. Coordinates are in pixels.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Wipe the whole surface.
    Clear {
        /// Surface width.
        width: f64,
        /// Surface height.
        height: f64,
    },
    /// Axis-aligned filled rectangle.
    FillRect {
        /// Left edge.
        x: f64,
        /// Top edge.
        y: f64,
        /// Width.
        width: f64,
        /// Height.
        height: f64,
        /// Fill color.
        color: Color,
    },
    /// Open polyline.
    StrokePath {
        /// Vertices in drawing order.
        points: Vec<Vec2>,
        /// Stroke color.
        color: Color,
    },
}

impl fmt::Display for DrawCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clear { width, height } => write!(f, "clear {width:.2}x{height:.2}"),
            Self::FillRect {
                x,
                y,
                width,
                height,
                color,
            } => write!(
                f,
                "fill_rect ({x:.2}, {y:.2}) {width:.2}x{height:.2} {color}"
            ),
            Self::StrokePath { points, color } => {
                write!(f, "stroke {color} [")?;
                for (i, p) in points.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "({:.2}, {:.2})", p.x, p.y)?;
                }
                f.write_str("]")
            }
        }
    }
}

/// Display-list canvas bound to one viewport.
#[derive(Clone, Debug)]
pub struct Canvas {
    viewport: Viewport,
    commands: Vec<DrawCommand>,
    /// Vertices of the path under construction.
    path: Vec<Vec2>,
}

impl Canvas {
    /// Creates an empty canvas.
    #[must_use]
    pub const fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            commands: Vec::new(),
            path: Vec::new(),
        }
    }

    /// The viewport used for unit conversion.
    #[inline]
    #[must_use]
    pub const fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Commands recorded since the last [`clear`](Self::clear).
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Wipes the surface: earlier commands are discarded.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.path.clear();
        self.commands.push(DrawCommand::Clear {
            width: self.viewport.width(),
            height: self.viewport.height(),
        });
    }

    /// Fills a rectangle.
    pub fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) {
        self.commands.push(DrawCommand::FillRect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    /// Starts a new, empty path.
    pub fn begin_path(&mut self) {
        self.path.clear();
    }

    /// Starts a new subpath at `(x, y)`, dropping any unstroked vertices.
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.path.clear();
        self.path.push(Vec2::new(x, y));
    }

    /// Extends the current path to `(x, y)`.
    pub fn line_to(&mut self, x: f64, y: f64) {
        self.path.push(Vec2::new(x, y));
    }

    /// Records the current path as a stroke. Paths with fewer than two
    /// vertices draw nothing.
    pub fn stroke(&mut self, color: Color) {
        if self.path.len() < 2 {
            return;
        }
        let points = std::mem::take(&mut self.path);
        self.commands.push(DrawCommand::StrokePath { points, color });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> Canvas {
        Canvas::new(Viewport::new(200.0, 100.0))
    }

    #[test]
    fn test_clear_discards_previous_frame() {
        let mut canvas = canvas();
        canvas.fill_rect(0.0, 0.0, 10.0, 10.0, Color::WHITE);
        canvas.clear();
        assert_eq!(
            canvas.commands(),
            &[DrawCommand::Clear {
                width: 200.0,
                height: 100.0
            }]
        );
    }

    #[test]
    fn test_path_builds_stroke() {
        let mut canvas = canvas();
        canvas.begin_path();
        canvas.move_to(0.0, 50.0);
        canvas.line_to(10.0, 40.0);
        canvas.line_to(20.0, 60.0);
        canvas.stroke(Color::BLACK);

        assert_eq!(
            canvas.commands(),
            &[DrawCommand::StrokePath {
                points: vec![
                    Vec2::new(0.0, 50.0),
                    Vec2::new(10.0, 40.0),
                    Vec2::new(20.0, 60.0)
                ],
                color: Color::BLACK,
            }]
        );

        // The path is consumed by stroke
        canvas.stroke(Color::BLACK);
        assert_eq!(canvas.commands().len(), 1);
    }

    #[test]
    fn test_single_point_path_draws_nothing() {
        let mut canvas = canvas();
        canvas.move_to(5.0, 5.0);
        canvas.stroke(Color::WHITE);
        assert!(canvas.commands().is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(Color::rgb(0, 70, 200).to_string(), "rgba(0, 70, 200, 255)");

        let rect = DrawCommand::FillRect {
            x: 1.0,
            y: 2.0,
            width: 3.5,
            height: 4.0,
            color: Color::WHITE,
        };
        assert_eq!(
            rect.to_string(),
            "fill_rect (1.00, 2.00) 3.50x4.00 rgba(255, 255, 255, 255)"
        );

        let path = DrawCommand::StrokePath {
            points: vec![Vec2::new(0.0, 1.0), Vec2::new(2.0, 3.0)],
            color: Color::BLACK,
        };
        assert_eq!(path.to_string(), "stroke rgba(0, 0, 0, 255) [(0.00, 1.00), (2.00, 3.00)]");
    }
}
