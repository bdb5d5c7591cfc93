//! Seeded gradient noise for procedural patterns
//!
//! Classic improved Perlin noise over a 512-entry permutation table. The table
//! is shuffled with a seeded `StdRng`, so a seed fully determines the field.

use rand::seq::SliceRandom;
use rand::{SeedableRng, rngs::StdRng};

use crate::math::geometry::Vec3;

/// Deterministic 3D gradient noise field
#[derive(Clone)]
pub struct NoiseField {
    perm: [u8; 512],
}

impl std::fmt::Debug for NoiseField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoiseField").finish_non_exhaustive()
    }
}

impl NoiseField {
    /// Build the permutation table for `seed`
    pub fn new(seed: u64) -> Self {
        let mut permutation: Vec<u8> = (0..=255).collect();
        let mut rng = StdRng::seed_from_u64(seed);
        permutation.shuffle(&mut rng);

        let mut perm = [0_u8; 512];
        for (slot, value) in perm.iter_mut().zip(permutation.iter().cycle()) {
            *slot = *value;
        }
        Self { perm }
    }

    fn hash(&self, index: usize) -> usize {
        self.perm.get(index & 511).copied().map_or(0, usize::from)
    }

    /// Single octave of noise in roughly `[-1, 1]`
    pub fn sample(&self, point: Vec3) -> f64 {
        let cell = [point[0].floor(), point[1].floor(), point[2].floor()];
        let xi = (cell[0] as i64 & 255) as usize;
        let yi = (cell[1] as i64 & 255) as usize;
        let zi = (cell[2] as i64 & 255) as usize;

        let x = point[0] - cell[0];
        let y = point[1] - cell[1];
        let z = point[2] - cell[2];
        let (u, v, w) = (fade(x), fade(y), fade(z));

        let a = self.hash(xi) + yi;
        let aa = self.hash(a) + zi;
        let ab = self.hash(a + 1) + zi;
        let b = self.hash(xi + 1) + yi;
        let ba = self.hash(b) + zi;
        let bb = self.hash(b + 1) + zi;

        lerp(
            w,
            lerp(
                v,
                lerp(u, grad(self.hash(aa), x, y, z), grad(self.hash(ba), x - 1.0, y, z)),
                lerp(
                    u,
                    grad(self.hash(ab), x, y - 1.0, z),
                    grad(self.hash(bb), x - 1.0, y - 1.0, z),
                ),
            ),
            lerp(
                v,
                lerp(
                    u,
                    grad(self.hash(aa + 1), x, y, z - 1.0),
                    grad(self.hash(ba + 1), x - 1.0, y, z - 1.0),
                ),
                lerp(
                    u,
                    grad(self.hash(ab + 1), x, y - 1.0, z - 1.0),
                    grad(self.hash(bb + 1), x - 1.0, y - 1.0, z - 1.0),
                ),
            ),
        )
    }

    /// Fractal sum of `octaves` octaves, normalized into `[0, 1]`
    ///
    /// Each octave doubles the frequency and halves the amplitude.
    pub fn fractal(&self, point: Vec3, octaves: u32) -> f64 {
        let mut total = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut max_amplitude = 0.0;

        for _ in 0..octaves.max(1) {
            let p = [point[0] * frequency, point[1] * frequency, point[2] * frequency];
            total += self.sample(p) * amplitude;
            max_amplitude += amplitude;
            amplitude *= 0.5;
            frequency *= 2.0;
        }

        ((total / max_amplitude) * 0.5 + 0.5).clamp(0.0, 1.0)
    }
}

fn fade(t: f64) -> f64 {
    t * t * t * t.mul_add(t.mul_add(6.0, -15.0), 10.0)
}

fn lerp(t: f64, a: f64, b: f64) -> f64 {
    t.mul_add(b - a, a)
}

fn grad(hash: usize, x: f64, y: f64, z: f64) -> f64 {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        z
    };
    let u = if h & 1 == 0 { u } else { -u };
    let v = if h & 2 == 0 { v } else { -v };
    u + v
}
