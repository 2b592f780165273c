//! # Random Engine
//!
//! The deterministic randomness source every sketch draws from.
//!
//! ## Determinism Guarantee
//!
//! All randomness flows through one `u32` state. It advances by a fixed odd
//! constant on every uniform draw and is run through a 32-bit finalizer
//! ([`mix32`]) to produce the output. Given the same [`Seed`] and the same
//! ordered sequence of calls, every value is reproduced bit for bit.
//!
//! ## Draw Accounting
//!
//! Derived samples consume a fixed number of uniform draws, which callers
//! may rely on when replaying artwork:
//!
//! | Operation        | Uniform draws                           |
//! |------------------|-----------------------------------------|
//! | `uniform`        | 1                                       |
//! | `int_value`      | 1                                       |
//! | `on_circle`      | 1 (angle)                               |
//! | `inside_circle`  | 2 (angle, then radius)                  |
//! | `gaussian`       | 2 per rejection round, 0 when cached    |
//! | `shuffle`        | n (one per element, including the last) |
//! | `noise`          | 0                                       |

use std::f64::consts::TAU;
use std::fmt;
use std::str::FromStr;

use crate::error::{RandomError, RandomResult};
use crate::noise::{CoherentNoise, SeedableNoise, SimplexNoise};
use crate::poisson::PoissonDisk;
use crate::seed::Seed;
use crate::vec2::Vec2;

/// Odd increment added to the state before every draw.
pub const STATE_INCREMENT: u32 = 0xABAD_1DEA;

/// Divisor mapping a mixed `u32` into `[0, 1)`.
const TWO_POW_32: f64 = 4_294_967_296.0;

/// MurmurHash3-style 32-bit finalizer applied to the advanced state.
#[inline]
#[must_use]
pub const fn mix32(state: u32) -> u32 {
    let mut t = state;
    t = (t ^ (t >> 15)).wrapping_mul(t | 1);
    t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
    t ^ (t >> 14)
}

/// Rounds to the nearest integer, ties toward positive infinity.
#[inline]
fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Dimension tag accepted by [`RandomEngine::noise`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NoiseDimension {
    /// One coordinate, sampled as 2D noise along `y = 0`.
    One,
    /// Two coordinates.
    Two,
    /// Three coordinates.
    Three,
    /// Four coordinates.
    Four,
}

impl NoiseDimension {
    /// Number of coordinates this dimension consumes.
    #[must_use]
    pub const fn coordinates(self) -> usize {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
        }
    }

    /// The tag this dimension parses from.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::One => "1d",
            Self::Two => "2d",
            Self::Three => "3d",
            Self::Four => "4d",
        }
    }
}

impl FromStr for NoiseDimension {
    type Err = RandomError;

    fn from_str(s: &str) -> RandomResult<Self> {
        match s {
            "1d" => Ok(Self::One),
            "2d" => Ok(Self::Two),
            "3d" => Ok(Self::Three),
            "4d" => Ok(Self::Four),
            other => Err(RandomError::UnsupportedDimension(other.to_string())),
        }
    }
}

impl fmt::Display for NoiseDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Seeded random engine for one sketch run.
///
/// Owns its state exclusively: every drawing method takes `&mut self`, so
/// parallel sketch variants each need their own engine.
///
/// # Example
///
/// ```rust
/// use vellum_random::{RandomEngine, Seed};
///
/// let mut a = RandomEngine::new(Seed::new(1000));
/// let mut b = RandomEngine::new(Seed::new(1000));
///
/// assert_eq!(a.uniform(), b.uniform());
/// assert_eq!(a.gaussian(0.0, 1.0), b.gaussian(0.0, 1.0));
/// assert_eq!(a.shuffle(&[1, 2, 3]), b.shuffle(&[1, 2, 3]));
/// ```
pub struct RandomEngine<N = SimplexNoise> {
    /// Seed the engine was built from.
    seed: Seed,
    /// Mutable generator state; advanced only by uniform draws.
    state: u32,
    /// Second deviate of the last polar-method pair, if not yet consumed.
    pending_gaussian: Option<f64>,
    /// Uniform draws taken so far.
    draws: u64,
    /// Coherent noise source, seeded from `seed + 1`.
    noise: N,
}

impl RandomEngine<SimplexNoise> {
    /// Creates an engine with simplex noise seeded from `seed + 1`.
    #[must_use]
    pub fn new(seed: Seed) -> Self {
        Self::from_seed(seed)
    }
}

impl<N: SeedableNoise> RandomEngine<N> {
    /// Creates an engine whose noise source `N` is seeded from `seed + 1`.
    #[must_use]
    pub fn from_seed(seed: Seed) -> Self {
        Self::with_noise(seed, N::from_seed(seed.offset(1)))
    }
}

impl<N: CoherentNoise> RandomEngine<N> {
    /// Creates an engine around an already-constructed noise source.
    #[must_use]
    pub fn with_noise(seed: Seed, noise: N) -> Self {
        tracing::debug!(seed = seed.value(), "random engine created");
        Self {
            seed,
            state: seed.value() as u32,
            pending_gaussian: None,
            draws: 0,
            noise,
        }
    }

    /// Seed this engine was built from.
    #[inline]
    #[must_use]
    pub const fn seed(&self) -> Seed {
        self.seed
    }

    /// Number of uniform draws taken so far.
    #[inline]
    #[must_use]
    pub const fn draw_count(&self) -> u64 {
        self.draws
    }

    /// Whether the next [`gaussian`](Self::gaussian) call will use a cached deviate.
    #[inline]
    #[must_use]
    pub const fn has_pending_gaussian(&self) -> bool {
        self.pending_gaussian.is_some()
    }

    /// The coherent noise source backing [`noise`](Self::noise).
    #[inline]
    #[must_use]
    pub const fn noise_source(&self) -> &N {
        &self.noise
    }

    /// Draws a value in `[0, 1)`.
    #[inline]
    pub fn uniform(&mut self) -> f64 {
        self.state = self.state.wrapping_add(STATE_INCREMENT);
        self.draws += 1;
        f64::from(mix32(self.state)) / TWO_POW_32
    }

    /// Returns `round(uniform() * max)`, ties rounding up.
    ///
    /// The result can equal `max`, with half the weight of the interior
    /// values. Kept this way so earlier artwork replays identically; use
    /// [`int_inclusive`](Self::int_inclusive) for an even spread.
    pub fn int_value(&mut self, max: i32) -> i32 {
        round_half_up(self.uniform() * f64::from(max)) as i32
    }

    /// Draws an integer evenly from `[0, max]` using one uniform draw.
    pub fn int_inclusive(&mut self, max: i32) -> i32 {
        (self.uniform() * (f64::from(max) + 1.0)).floor() as i32
    }

    /// Draws a point exactly on the circle of `radius` around the origin.
    pub fn on_circle(&mut self, radius: f64) -> Vec2 {
        let theta = self.uniform() * TAU;
        Vec2::new(radius * theta.cos(), radius * theta.sin())
    }

    /// Draws a point uniformly distributed over the disk of `radius`.
    ///
    /// The square root on the radius draw keeps area density even.
    pub fn inside_circle(&mut self, radius: f64) -> Vec2 {
        let unit = self.on_circle(1.0);
        unit.scale(radius * self.uniform().sqrt())
    }

    /// Draws a normally distributed value (polar method).
    ///
    /// Each rejection round yields two deviates: one is returned, the other
    /// is cached and returned by the next call without drawing.
    pub fn gaussian(&mut self, mean: f64, std_dev: f64) -> f64 {
        if let Some(cached) = self.pending_gaussian.take() {
            return mean + std_dev * cached;
        }

        let (v1, v2, s) = loop {
            let v1 = self.uniform() * 2.0 - 1.0;
            let v2 = self.uniform() * 2.0 - 1.0;
            let s = v1 * v1 + v2 * v2;
            if s < 1.0 && s != 0.0 {
                break (v1, v2, s);
            }
        };

        let multiplier = (-2.0 * s.ln() / s).sqrt();
        self.pending_gaussian = Some(v2 * multiplier);
        mean + std_dev * (v1 * multiplier)
    }

    /// Standard normal deviate, `gaussian(0, 1)`.
    pub fn standard_gaussian(&mut self) -> f64 {
        self.gaussian(0.0, 1.0)
    }

    /// Samples coherent noise by dimension tag (`"1d"`..`"4d"`).
    ///
    /// Extra coordinates are ignored. Does not advance the uniform stream.
    ///
    /// # Errors
    ///
    /// [`RandomError::UnsupportedDimension`] for an unknown tag and
    /// [`RandomError::MissingCoordinates`] when `coords` is too short.
    pub fn noise(&self, dimension: &str, coords: &[f64]) -> RandomResult<f64> {
        let dimension: NoiseDimension = dimension.parse()?;
        self.noise_at(dimension, coords)
    }

    /// Samples coherent noise for an already-parsed dimension.
    ///
    /// # Errors
    ///
    /// [`RandomError::MissingCoordinates`] when `coords` is too short.
    pub fn noise_at(&self, dimension: NoiseDimension, coords: &[f64]) -> RandomResult<f64> {
        let expected = dimension.coordinates();
        if coords.len() < expected {
            return Err(RandomError::MissingCoordinates {
                dimension: dimension.tag(),
                expected,
                got: coords.len(),
            });
        }

        Ok(match dimension {
            NoiseDimension::One => self.noise_1d(coords[0]),
            NoiseDimension::Two => self.noise_2d(coords[0], coords[1]),
            NoiseDimension::Three => self.noise_3d(coords[0], coords[1], coords[2]),
            NoiseDimension::Four => self.noise_4d(coords[0], coords[1], coords[2], coords[3]),
        })
    }

    /// 1D noise: the 2D field sampled along `y = 0`.
    #[inline]
    #[must_use]
    pub fn noise_1d(&self, x: f64) -> f64 {
        self.noise.noise2(x, 0.0)
    }

    /// 2D noise.
    #[inline]
    #[must_use]
    pub fn noise_2d(&self, x: f64, y: f64) -> f64 {
        self.noise.noise2(x, y)
    }

    /// 3D noise.
    #[inline]
    #[must_use]
    pub fn noise_3d(&self, x: f64, y: f64, z: f64) -> f64 {
        self.noise.noise3(x, y, z)
    }

    /// 4D noise.
    #[inline]
    #[must_use]
    pub fn noise_4d(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        self.noise.noise4(x, y, z, w)
    }

    /// Generates a blue-noise point set over `width` x `height`.
    ///
    /// Every random choice the sampler makes is a uniform draw from this
    /// engine, so the set is reproducible from the seed and call history.
    ///
    /// # Errors
    ///
    /// Whatever [`PoissonDisk::generate`] rejects: non-positive spacing,
    /// an invalid region, or a region too large for the sampling grid.
    pub fn poisson(&mut self, width: f64, height: f64, spacing: f64) -> RandomResult<Vec<Vec2>> {
        let draws_before = self.draws;
        let points = PoissonDisk::new(width, height, spacing).generate(|| self.uniform())?;
        tracing::debug!(
            width,
            height,
            spacing,
            points = points.len(),
            draws = self.draws - draws_before,
            "poisson disk generated"
        );
        Ok(points)
    }

    /// Returns a shuffled copy of `items`; the input is left untouched.
    pub fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut shuffled = items.to_vec();
        self.shuffle_in_place(&mut shuffled);
        shuffled
    }

    /// Fisher-Yates shuffle in place, walking from the last index down.
    ///
    /// Takes one draw per element; the final step swaps the first element
    /// with itself but still draws.
    pub fn shuffle_in_place<T>(&mut self, items: &mut [T]) {
        let mut counter = items.len();
        while counter > 0 {
            let index = (self.uniform() * counter as f64) as usize;
            counter -= 1;
            items.swap(counter, index);
        }
    }
}

impl<N> fmt::Debug for RandomEngine<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomEngine")
            .field("seed", &self.seed)
            .field("state", &self.state)
            .field("pending_gaussian", &self.pending_gaussian)
            .field("draws", &self.draws)
            .finish_non_exhaustive()
    }
}
