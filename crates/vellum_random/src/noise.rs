//! # Simplex Noise Implementation
//!
//! Deterministic coherent noise in 2, 3 and 4 dimensions.
//!
//! The engine only needs a capability: "construct from a seed, query at
//! coordinates". That capability is the [`CoherentNoise`] /
//! [`SeedableNoise`] pair; [`SimplexNoise`] is the default implementation.
//!
//! ## Determinism Guarantee
//!
//! Given the same [`Seed`], this implementation will produce
//! **exactly** the same values on any platform, any time.

use crate::seed::Seed;

/// A smooth, deterministic pseudo-random field.
///
/// Each query returns a value roughly in `[-1, 1]`.
pub trait CoherentNoise {
    /// Samples the field at a 2D coordinate.
    fn noise2(&self, x: f64, y: f64) -> f64;

    /// Samples the field at a 3D coordinate.
    fn noise3(&self, x: f64, y: f64, z: f64) -> f64;

    /// Samples the field at a 4D coordinate.
    fn noise4(&self, x: f64, y: f64, z: f64, w: f64) -> f64;
}

/// Noise sources that can be built from a sketch seed.
pub trait SeedableNoise: CoherentNoise {
    /// Creates the noise field for `seed`.
    fn from_seed(seed: Seed) -> Self;
}

/// Gradients for 2D and 3D simplex: midpoints of the cube's 12 edges.
const GRAD3: [[i8; 3]; 12] = [
    [1, 1, 0], [-1, 1, 0], [1, -1, 0], [-1, -1, 0],
    [1, 0, 1], [-1, 0, 1], [1, 0, -1], [-1, 0, -1],
    [0, 1, 1], [0, -1, 1], [0, 1, -1], [0, -1, -1],
];

/// Gradients for 4D simplex: midpoints of the tesseract's 32 edges.
const GRAD4: [[i8; 4]; 32] = [
    [0, 1, 1, 1], [0, 1, 1, -1], [0, 1, -1, 1], [0, 1, -1, -1],
    [0, -1, 1, 1], [0, -1, 1, -1], [0, -1, -1, 1], [0, -1, -1, -1],
    [1, 0, 1, 1], [1, 0, 1, -1], [1, 0, -1, 1], [1, 0, -1, -1],
    [-1, 0, 1, 1], [-1, 0, 1, -1], [-1, 0, -1, 1], [-1, 0, -1, -1],
    [1, 1, 0, 1], [1, 1, 0, -1], [1, -1, 0, 1], [1, -1, 0, -1],
    [-1, 1, 0, 1], [-1, 1, 0, -1], [-1, -1, 0, 1], [-1, -1, 0, -1],
    [1, 1, 1, 0], [1, 1, -1, 0], [1, -1, 1, 0], [1, -1, -1, 0],
    [-1, 1, 1, 0], [-1, 1, -1, 0], [-1, -1, 1, 0], [-1, -1, -1, 0],
];

/// Pre-computed permutation table for noise.
///
/// This is computed once from the seed and reused.
struct PermutationTable {
    /// 512-entry permutation table (256 entries, doubled for overflow handling).
    perm: [u8; 512],
}

impl PermutationTable {
    /// Creates a new permutation table from a seed.
    fn new(seed: Seed) -> Self {
        let mut perm = [0u8; 512];

        // Initialize with identity permutation
        for (i, slot) in perm.iter_mut().take(256).enumerate() {
            *slot = i as u8;
        }

        // Fisher-Yates shuffle with deterministic RNG
        let mut rng_state = shuffle_state(seed);
        for i in (1..256).rev() {
            // Simple xorshift64 for deterministic shuffling
            rng_state ^= rng_state << 13;
            rng_state ^= rng_state >> 7;
            rng_state ^= rng_state << 17;

            let j = (rng_state % (i as u64 + 1)) as usize;
            perm.swap(i, j);
        }

        // Double the table to avoid index wrapping
        perm.copy_within(0..256, 256);

        Self { perm }
    }

    /// Gets a permutation value (with automatic wrapping).
    #[inline]
    fn get(&self, index: usize) -> usize {
        usize::from(self.perm[index & 511])
    }
}

/// Spreads a 32-bit seed into a non-zero xorshift64 state.
fn shuffle_state(seed: Seed) -> u64 {
    let mut hash = u64::from(seed.value() as u32) ^ 0x9E37_79B9_7F4A_7C15;
    hash = hash.wrapping_mul(0x517c_c1b7_2722_0a95);
    hash ^= hash >> 32;
    if hash == 0 {
        0x2545_F491_4F6C_DD1D
    } else {
        hash
    }
}

/// Simplex noise generator in 2, 3 and 4 dimensions.
///
/// Produces smooth, continuous noise values in (roughly) the range [-1, 1].
///
/// # Performance
///
/// - O(1) per sample
/// - No allocations
///
/// # Example
///
/// ```rust
/// use vellum_random::{CoherentNoise, Seed, SeedableNoise, SimplexNoise};
///
/// let noise = SimplexNoise::from_seed(Seed::new(42));
/// let value = noise.noise2(100.5, 200.3);
/// assert!((-1.0..=1.0).contains(&value));
/// ```
pub struct SimplexNoise {
    /// The permutation table.
    perm_table: PermutationTable,
}

impl SimplexNoise {
    /// Skewing factor for 2D simplex grid.
    const F2: f64 = 0.366_025_403_784_438_6; // (sqrt(3) - 1) / 2
    /// Unskewing factor for 2D simplex grid.
    const G2: f64 = 0.211_324_865_405_187_1; // (3 - sqrt(3)) / 6
    /// Skewing factor for 3D simplex grid.
    const F3: f64 = 1.0 / 3.0;
    /// Unskewing factor for 3D simplex grid.
    const G3: f64 = 1.0 / 6.0;
    /// Skewing factor for 4D simplex grid.
    const F4: f64 = 0.309_016_994_374_947_4; // (sqrt(5) - 1) / 4
    /// Unskewing factor for 4D simplex grid.
    const G4: f64 = 0.138_196_601_125_010_5; // (5 - sqrt(5)) / 20

    /// Creates a new simplex noise generator from a seed.
    #[must_use]
    pub fn new(seed: Seed) -> Self {
        Self {
            perm_table: PermutationTable::new(seed),
        }
    }

    /// Generates octaved (fractal) 2D noise.
    ///
    /// Combines multiple layers of noise at different frequencies
    /// for more organic-looking strokes and fields.
    ///
    /// # Arguments
    ///
    /// * `x`, `y` - Coordinates
    /// * `octaves` - Number of noise layers (typically 4-8)
    /// * `persistence` - Amplitude decay per octave (typically 0.5)
    /// * `lacunarity` - Frequency increase per octave (typically 2.0)
    ///
    /// # Returns
    ///
    /// A value roughly in the range [-1, 1]. Zero octaves yield 0.
    #[must_use]
    pub fn octaved(
        &self,
        x: f64,
        y: f64,
        octaves: u32,
        persistence: f64,
        lacunarity: f64,
    ) -> f64 {
        let mut total = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut max_amplitude = 0.0;

        for _ in 0..octaves {
            total += self.noise2(x * frequency, y * frequency) * amplitude;
            max_amplitude += amplitude;
            amplitude *= persistence;
            frequency *= lacunarity;
        }

        if max_amplitude == 0.0 {
            return 0.0;
        }
        total / max_amplitude
    }
}

impl CoherentNoise for SimplexNoise {
    fn noise2(&self, x: f64, y: f64) -> f64 {
        // Skew input coordinates to simplex grid
        let skew = (x + y) * Self::F2;
        let i = fast_floor(x + skew);
        let j = fast_floor(y + skew);

        // Unskew to get first corner in simplex
        let unskew = f64::from(i + j) * Self::G2;
        let x0 = x - (f64::from(i) - unskew);
        let y0 = y - (f64::from(j) - unskew);

        // Determine which simplex we're in (upper or lower triangle)
        let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

        // Offsets for second and third corners
        let x1 = x0 - i1 as f64 + Self::G2;
        let y1 = y0 - j1 as f64 + Self::G2;
        let x2 = x0 - 1.0 + 2.0 * Self::G2;
        let y2 = y0 - 1.0 + 2.0 * Self::G2;

        // Hash coordinates to get gradient indices
        let p = &self.perm_table;
        let ii = (i & 255) as usize;
        let jj = (j & 255) as usize;
        let gi0 = p.get(ii + p.get(jj));
        let gi1 = p.get(ii + i1 + p.get(jj + j1));
        let gi2 = p.get(ii + 1 + p.get(jj + 1));

        // Calculate contribution from three corners
        let n0 = corner(0.5 - x0 * x0 - y0 * y0, || {
            let g = grad3(gi0);
            g[0] * x0 + g[1] * y0
        });
        let n1 = corner(0.5 - x1 * x1 - y1 * y1, || {
            let g = grad3(gi1);
            g[0] * x1 + g[1] * y1
        });
        let n2 = corner(0.5 - x2 * x2 - y2 * y2, || {
            let g = grad3(gi2);
            g[0] * x2 + g[1] * y2
        });

        // Scale to [-1, 1] range
        70.0 * (n0 + n1 + n2)
    }

    fn noise3(&self, x: f64, y: f64, z: f64) -> f64 {
        let skew = (x + y + z) * Self::F3;
        let i = fast_floor(x + skew);
        let j = fast_floor(y + skew);
        let k = fast_floor(z + skew);

        let unskew = f64::from(i + j + k) * Self::G3;
        let x0 = x - (f64::from(i) - unskew);
        let y0 = y - (f64::from(j) - unskew);
        let z0 = z - (f64::from(k) - unskew);

        // Which of the six tetrahedra we're in
        let (i1, j1, k1, i2, j2, k2) = if x0 >= y0 {
            if y0 >= z0 {
                (1, 0, 0, 1, 1, 0)
            } else if x0 >= z0 {
                (1, 0, 0, 1, 0, 1)
            } else {
                (0, 0, 1, 1, 0, 1)
            }
        } else if y0 < z0 {
            (0, 0, 1, 0, 1, 1)
        } else if x0 < z0 {
            (0, 1, 0, 0, 1, 1)
        } else {
            (0, 1, 0, 1, 1, 0)
        };

        let x1 = x0 - i1 as f64 + Self::G3;
        let y1 = y0 - j1 as f64 + Self::G3;
        let z1 = z0 - k1 as f64 + Self::G3;
        let x2 = x0 - i2 as f64 + 2.0 * Self::G3;
        let y2 = y0 - j2 as f64 + 2.0 * Self::G3;
        let z2 = z0 - k2 as f64 + 2.0 * Self::G3;
        let x3 = x0 - 1.0 + 3.0 * Self::G3;
        let y3 = y0 - 1.0 + 3.0 * Self::G3;
        let z3 = z0 - 1.0 + 3.0 * Self::G3;

        let p = &self.perm_table;
        let ii = (i & 255) as usize;
        let jj = (j & 255) as usize;
        let kk = (k & 255) as usize;
        let gi0 = p.get(ii + p.get(jj + p.get(kk)));
        let gi1 = p.get(ii + i1 + p.get(jj + j1 + p.get(kk + k1)));
        let gi2 = p.get(ii + i2 + p.get(jj + j2 + p.get(kk + k2)));
        let gi3 = p.get(ii + 1 + p.get(jj + 1 + p.get(kk + 1)));

        let dot = |gi: usize, dx: f64, dy: f64, dz: f64| {
            let g = grad3(gi);
            g[0] * dx + g[1] * dy + g[2] * dz
        };
        let n0 = corner(0.6 - x0 * x0 - y0 * y0 - z0 * z0, || dot(gi0, x0, y0, z0));
        let n1 = corner(0.6 - x1 * x1 - y1 * y1 - z1 * z1, || dot(gi1, x1, y1, z1));
        let n2 = corner(0.6 - x2 * x2 - y2 * y2 - z2 * z2, || dot(gi2, x2, y2, z2));
        let n3 = corner(0.6 - x3 * x3 - y3 * y3 - z3 * z3, || dot(gi3, x3, y3, z3));

        32.0 * (n0 + n1 + n2 + n3)
    }

    fn noise4(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        let skew = (x + y + z + w) * Self::F4;
        let i = fast_floor(x + skew);
        let j = fast_floor(y + skew);
        let k = fast_floor(z + skew);
        let l = fast_floor(w + skew);

        let unskew = f64::from(i + j + k + l) * Self::G4;
        let x0 = x - (f64::from(i) - unskew);
        let y0 = y - (f64::from(j) - unskew);
        let z0 = z - (f64::from(k) - unskew);
        let w0 = w - (f64::from(l) - unskew);

        // Rank each axis by magnitude to find the simplex traversal order
        let mut rank = [0usize; 4];
        let offsets = [x0, y0, z0, w0];
        for a in 0..4 {
            for b in (a + 1)..4 {
                if offsets[a] > offsets[b] {
                    rank[a] += 1;
                } else {
                    rank[b] += 1;
                }
            }
        }
        let step = |threshold: usize| rank.map(|r| usize::from(r >= threshold));
        let [i1, j1, k1, l1] = step(3);
        let [i2, j2, k2, l2] = step(2);
        let [i3, j3, k3, l3] = step(1);

        let corner_offset = |n: [usize; 4], scale: f64| {
            [
                x0 - n[0] as f64 + scale * Self::G4,
                y0 - n[1] as f64 + scale * Self::G4,
                z0 - n[2] as f64 + scale * Self::G4,
                w0 - n[3] as f64 + scale * Self::G4,
            ]
        };
        let d0 = [x0, y0, z0, w0];
        let d1 = corner_offset([i1, j1, k1, l1], 1.0);
        let d2 = corner_offset([i2, j2, k2, l2], 2.0);
        let d3 = corner_offset([i3, j3, k3, l3], 3.0);
        let d4 = corner_offset([1, 1, 1, 1], 4.0);

        let p = &self.perm_table;
        let ii = (i & 255) as usize;
        let jj = (j & 255) as usize;
        let kk = (k & 255) as usize;
        let ll = (l & 255) as usize;
        let hash = |n: [usize; 4]| {
            p.get(ii + n[0] + p.get(jj + n[1] + p.get(kk + n[2] + p.get(ll + n[3]))))
        };
        let gi0 = hash([0, 0, 0, 0]);
        let gi1 = hash([i1, j1, k1, l1]);
        let gi2 = hash([i2, j2, k2, l2]);
        let gi3 = hash([i3, j3, k3, l3]);
        let gi4 = hash([1, 1, 1, 1]);

        let contribution = |gi: usize, d: [f64; 4]| {
            let t = 0.6 - d[0] * d[0] - d[1] * d[1] - d[2] * d[2] - d[3] * d[3];
            corner(t, || {
                let g = grad4(gi);
                g[0] * d[0] + g[1] * d[1] + g[2] * d[2] + g[3] * d[3]
            })
        };

        27.0 * (contribution(gi0, d0)
            + contribution(gi1, d1)
            + contribution(gi2, d2)
            + contribution(gi3, d3)
            + contribution(gi4, d4))
    }
}

impl SeedableNoise for SimplexNoise {
    fn from_seed(seed: Seed) -> Self {
        Self::new(seed)
    }
}

/// Gradient from [`GRAD3`] for a hashed lattice corner.
#[inline]
fn grad3(hash: usize) -> [f64; 3] {
    let g = GRAD3[hash % 12];
    [f64::from(g[0]), f64::from(g[1]), f64::from(g[2])]
}

/// Gradient from [`GRAD4`] for a hashed lattice corner.
#[inline]
fn grad4(hash: usize) -> [f64; 4] {
    let g = GRAD4[hash % 32];
    [f64::from(g[0]), f64::from(g[1]), f64::from(g[2]), f64::from(g[3])]
}

/// Falloff-weighted contribution from one simplex corner.
///
/// `t` is the squared kernel radius minus the squared distance to the corner;
/// corners outside the kernel contribute nothing.
#[inline]
fn corner(t: f64, gradient_dot: impl FnOnce() -> f64) -> f64 {
    if t < 0.0 {
        0.0
    } else {
        let t2 = t * t;
        t2 * t2 * gradient_dot()
    }
}

/// Fast floor function.
///
/// Faster than `f64::floor()` for our use case.
#[inline]
fn fast_floor(x: f64) -> i32 {
    let xi = x as i32;
    if x < f64::from(xi) { xi - 1 } else { xi }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let seed = Seed::new(12345);
        let noise1 = SimplexNoise::new(seed);
        let noise2 = SimplexNoise::new(seed);

        // Same seed should produce identical results
        for i in 0..100 {
            let x = f64::from(i) * 0.1;
            let y = f64::from(i) * 0.17;
            assert_eq!(noise1.noise2(x, y), noise2.noise2(x, y));
            assert_eq!(noise1.noise3(x, y, 0.3), noise2.noise3(x, y, 0.3));
            assert_eq!(noise1.noise4(x, y, 0.3, -x), noise2.noise4(x, y, 0.3, -x));
        }
    }

    #[test]
    fn test_different_seeds_different_results() {
        let noise1 = SimplexNoise::new(Seed::new(1));
        let noise2 = SimplexNoise::new(Seed::new(2));

        let differs = (0..50).any(|i| {
            let x = f64::from(i) * 1.37 + 0.5;
            noise1.noise2(x, x * 0.3) != noise2.noise2(x, x * 0.3)
        });
        assert!(differs, "Different seeds should produce different results");
    }

    #[test]
    fn test_zero_seed_is_shuffled() {
        // The xorshift state must never collapse to zero
        let table = PermutationTable::new(Seed::new(0));
        let identity = (0..256).all(|i| table.get(i) == i);
        assert!(!identity, "Seed 0 should still permute the table");
    }

    #[test]
    fn test_range() {
        let noise = SimplexNoise::new(Seed::new(42));

        for i in 0..10000 {
            let x = (f64::from(i) * 0.1) - 500.0;
            let y = (f64::from(i) * 0.13) - 650.0;
            let v2 = noise.noise2(x, y);
            let v3 = noise.noise3(x, y, x * 0.07);
            let v4 = noise.noise4(x, y, x * 0.07, y * 0.11);

            assert!((-1.0..=1.0).contains(&v2), "2D value {v2} out of range at ({x}, {y})");
            assert!(v3.abs() <= 1.2, "3D value {v3} out of range at ({x}, {y})");
            assert!(v4.abs() <= 1.2, "4D value {v4} out of range at ({x}, {y})");
        }
    }

    #[test]
    fn test_not_flat() {
        let noise = SimplexNoise::new(Seed::new(7));
        let spread = |f: &dyn Fn(f64) -> f64| {
            let samples: Vec<f64> = (0..500).map(|i| f(f64::from(i) * 0.37)).collect();
            let max = samples.iter().copied().fold(f64::MIN, f64::max);
            let min = samples.iter().copied().fold(f64::MAX, f64::min);
            max - min
        };

        assert!(spread(&|t| noise.noise2(t, t * 0.5)) > 0.5);
        assert!(spread(&|t| noise.noise3(t, t * 0.5, 1.0 - t)) > 0.5);
        assert!(spread(&|t| noise.noise4(t, t * 0.5, 1.0 - t, 0.25 * t)) > 0.5);
    }

    #[test]
    fn test_continuity() {
        let noise = SimplexNoise::new(Seed::new(42));

        // Sample adjacent points - should be similar
        let (x, y, z, w) = (100.0, 100.0, 3.3, -4.4);
        let delta = 0.001;

        let diff2 = (noise.noise2(x, y) - noise.noise2(x + delta, y)).abs();
        let diff3 = (noise.noise3(x, y, z) - noise.noise3(x, y, z + delta)).abs();
        let diff4 = (noise.noise4(x, y, z, w) - noise.noise4(x, y, z, w + delta)).abs();

        assert!(diff2 < 0.01, "2D noise should be continuous: diff = {diff2}");
        assert!(diff3 < 0.01, "3D noise should be continuous: diff = {diff3}");
        assert!(diff4 < 0.01, "4D noise should be continuous: diff = {diff4}");
    }

    #[test]
    fn test_lattice_origin_is_zero() {
        // Every corner gradient is dotted with a zero offset at the origin
        let noise = SimplexNoise::new(Seed::new(99));
        assert_eq!(noise.noise2(0.0, 0.0), 0.0);
        assert_eq!(noise.noise3(0.0, 0.0, 0.0), 0.0);
        assert_eq!(noise.noise4(0.0, 0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_octaved_noise() {
        let noise = SimplexNoise::new(Seed::new(42));

        let value = noise.octaved(100.0, 100.0, 6, 0.5, 2.0);
        assert!(
            (-1.5..=1.5).contains(&value),
            "Octaved value {value} out of expected range"
        );

        // A single octave is plain noise
        assert_eq!(noise.octaved(3.1, 4.1, 1, 0.5, 2.0), noise.noise2(3.1, 4.1));
        assert_eq!(noise.octaved(3.1, 4.1, 0, 0.5, 2.0), 0.0);
    }
}
