//! # Poisson-Disk Sampling
//!
//! Blue-noise point sets: no two points closer than a minimum spacing.
//!
//! Uses Bridson's algorithm over a background grid. The sampler owns no
//! randomness; every choice comes from a caller-supplied uniform source, so
//! the caller decides reproducibility.

use std::f64::consts::{SQRT_2, TAU};

use crate::error::{RandomError, RandomResult};
use crate::vec2::Vec2;

/// Candidates tried around each active point before it is retired.
pub const DEFAULT_ATTEMPTS: u32 = 30;

/// Upper bound on background grid cells (16M cells, 256 MiB).
pub const MAX_GRID_CELLS: usize = 1 << 24;

/// Blue-noise point generator over `[0, width) x [0, height)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PoissonDisk {
    width: f64,
    height: f64,
    spacing: f64,
    attempts: u32,
}

impl PoissonDisk {
    /// Configures a sampler. Validation happens in [`generate`](Self::generate).
    #[must_use]
    pub const fn new(width: f64, height: f64, spacing: f64) -> Self {
        Self {
            width,
            height,
            spacing,
            attempts: DEFAULT_ATTEMPTS,
        }
    }

    /// Overrides the number of candidates tried per active point.
    #[must_use]
    pub const fn with_attempts(mut self, attempts: u32) -> Self {
        self.attempts = attempts;
        self
    }

    /// Minimum distance between any two generated points.
    #[must_use]
    pub const fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Generates the point set, drawing every random value from `uniform`.
    ///
    /// `uniform` must return values in `[0, 1)`.
    ///
    /// # Errors
    ///
    /// - [`RandomError::InvalidSpacing`] if `spacing` is not positive and finite
    /// - [`RandomError::InvalidRegion`] if an extent is negative or not finite
    /// - [`RandomError::RegionTooLarge`] if the grid would exceed [`MAX_GRID_CELLS`]
    pub fn generate<F>(&self, mut uniform: F) -> RandomResult<Vec<Vec2>>
    where
        F: FnMut() -> f64,
    {
        if !(self.spacing.is_finite() && self.spacing > 0.0) {
            return Err(RandomError::InvalidSpacing(self.spacing));
        }
        if !(self.width.is_finite() && self.height.is_finite())
            || self.width < 0.0
            || self.height < 0.0
        {
            return Err(RandomError::InvalidRegion {
                width: self.width,
                height: self.height,
            });
        }
        if self.width == 0.0 || self.height == 0.0 {
            return Ok(Vec::new());
        }

        let mut grid = Grid::new(self.width, self.height, self.spacing).ok_or(
            RandomError::RegionTooLarge {
                width: self.width,
                height: self.height,
                spacing: self.spacing,
                limit: MAX_GRID_CELLS,
            },
        )?;
        let mut points = Vec::new();
        let mut active = Vec::new();

        let first = Vec2::new(uniform() * self.width, uniform() * self.height);
        grid.insert(first, points.len());
        active.push(points.len());
        points.push(first);

        while !active.is_empty() {
            let slot = ((uniform() * active.len() as f64) as usize).min(active.len() - 1);
            let center = points[active[slot]];

            let mut placed = false;
            for _ in 0..self.attempts {
                let angle = uniform() * TAU;
                let distance = self.spacing * (1.0 + uniform());
                let candidate = Vec2::new(
                    center.x + distance * angle.cos(),
                    center.y + distance * angle.sin(),
                );

                if self.contains(candidate) && grid.is_clear(candidate, &points) {
                    grid.insert(candidate, points.len());
                    active.push(points.len());
                    points.push(candidate);
                    placed = true;
                    break;
                }
            }

            if !placed {
                active.swap_remove(slot);
            }
        }

        Ok(points)
    }

    #[inline]
    fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.x < self.width && p.y >= 0.0 && p.y < self.height
    }
}

/// Cells needed to cover `extent`, or `None` past [`MAX_GRID_CELLS`].
fn cells_along(extent: f64, cell: f64) -> Option<usize> {
    let cells = (extent / cell).ceil();
    (cells <= MAX_GRID_CELLS as f64).then(|| (cells as usize).max(1))
}

/// Background acceleration grid: at most one point per cell.
struct Grid {
    cell: f64,
    cols: usize,
    rows: usize,
    spacing_sq: f64,
    /// Index into the point list, per cell.
    cells: Vec<Option<usize>>,
}

impl Grid {
    /// `None` when the grid would hold more than [`MAX_GRID_CELLS`] cells.
    fn new(width: f64, height: f64, spacing: f64) -> Option<Self> {
        // A cell's diagonal equals the spacing, so a cell holds one point
        let cell = spacing / SQRT_2;
        let cols = cells_along(width, cell)?;
        let rows = cells_along(height, cell)?;
        let count = cols.checked_mul(rows).filter(|&n| n <= MAX_GRID_CELLS)?;
        Some(Self {
            cell,
            cols,
            rows,
            spacing_sq: spacing * spacing,
            cells: vec![None; count],
        })
    }

    #[inline]
    fn cell_of(&self, p: Vec2) -> (usize, usize) {
        let col = ((p.x / self.cell) as usize).min(self.cols - 1);
        let row = ((p.y / self.cell) as usize).min(self.rows - 1);
        (col, row)
    }

    fn insert(&mut self, p: Vec2, index: usize) {
        let (col, row) = self.cell_of(p);
        self.cells[row * self.cols + col] = Some(index);
    }

    /// True when no existing point lies within `spacing` of `p`.
    fn is_clear(&self, p: Vec2, points: &[Vec2]) -> bool {
        let (col, row) = self.cell_of(p);
        let col_range = col.saturating_sub(2)..=(col + 2).min(self.cols - 1);
        let row_range = row.saturating_sub(2)..=(row + 2).min(self.rows - 1);

        for r in row_range {
            for c in col_range.clone() {
                if let Some(index) = self.cells[r * self.cols + c] {
                    if points[index].distance_squared(p) < self.spacing_sq {
                        return false;
                    }
                }
            }
        }
        true
    }
}
