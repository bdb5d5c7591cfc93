//! Built-in procedural pattern strategies
//!
//! All strategies work in pattern space (see [`pattern_space`]): positions are
//! taken relative to the origin, rotated about the vertical axis and divided
//! by the scale. Frequency then sets how many bands fit in one unit.

use std::sync::Arc;

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::io::configuration::MAX_NOISE_OCTAVES;
use crate::io::error::{Result, invalid_argument};
use crate::math::geometry::length;
use crate::math::noise::NoiseField;
use crate::pattern::parameters::PatternParameters;
use crate::pattern::strategy::{
    IndexMap, PatternStrategy, check_inputs, fraction_index, pattern_space, resolve_origin,
    wrap_index,
};
use crate::spatial::block::Position;
use crate::spatial::structure::Structure;

fn axis_parameter(parameters: &PatternParameters) -> Result<usize> {
    match parameters.text("axis").map(str::to_ascii_lowercase).as_deref() {
        None | Some("x") => Ok(0),
        Some("y") => Ok(1),
        Some("z") => Ok(2),
        Some(other) => Err(invalid_argument(
            "axis",
            &format!("expected x, y or z, got '{other}'"),
        )),
    }
}

/// Parallel bands along one axis
#[derive(Debug, Clone, Copy, Default)]
pub struct Stripes;

impl PatternStrategy for Stripes {
    fn name(&self) -> &str {
        "stripes"
    }

    fn description(&self) -> &str {
        "Parallel bands along a rotated axis (extra: axis = x|y|z)"
    }

    fn generate(
        &self,
        structure: &Structure,
        positions: &[Position],
        color_indices: &[usize],
        parameters: &PatternParameters,
    ) -> Result<IndexMap> {
        check_inputs(color_indices, parameters)?;
        let axis = axis_parameter(parameters)?;
        let origin = resolve_origin(structure, parameters);

        Ok(positions
            .iter()
            .map(|&position| {
                let p = pattern_space(position, origin, parameters);
                let coordinate = p.get(axis).copied().unwrap_or(0.0);
                let band = (coordinate * parameters.frequency).floor() as i64;
                (position, wrap_index(color_indices, band))
            })
            .collect())
    }
}

/// Three-dimensional checkerboard
#[derive(Debug, Clone, Copy, Default)]
pub struct Checker;

impl PatternStrategy for Checker {
    fn name(&self) -> &str {
        "checker"
    }

    fn description(&self) -> &str {
        "Alternating cubes cycling through the chosen colors"
    }

    fn generate(
        &self,
        structure: &Structure,
        positions: &[Position],
        color_indices: &[usize],
        parameters: &PatternParameters,
    ) -> Result<IndexMap> {
        check_inputs(color_indices, parameters)?;
        let origin = resolve_origin(structure, parameters);

        Ok(positions
            .iter()
            .map(|&position| {
                let p = pattern_space(position, origin, parameters);
                let band: i64 = p
                    .iter()
                    .map(|c| (c * parameters.frequency).floor() as i64)
                    .sum();
                (position, wrap_index(color_indices, band))
            })
            .collect())
    }
}

/// Concentric shells around the origin
#[derive(Debug, Clone, Copy, Default)]
pub struct Radial;

impl PatternStrategy for Radial {
    fn name(&self) -> &str {
        "radial"
    }

    fn description(&self) -> &str {
        "Concentric rings around the origin"
    }

    fn generate(
        &self,
        structure: &Structure,
        positions: &[Position],
        color_indices: &[usize],
        parameters: &PatternParameters,
    ) -> Result<IndexMap> {
        check_inputs(color_indices, parameters)?;
        let origin = resolve_origin(structure, parameters);

        Ok(positions
            .iter()
            .map(|&position| {
                let distance = length(pattern_space(position, origin, parameters));
                let ring = (distance * parameters.frequency).floor() as i64;
                (position, wrap_index(color_indices, ring))
            })
            .collect())
    }
}

/// Linear ramp across the extent of the selected positions
#[derive(Debug, Clone, Copy, Default)]
pub struct Gradient;

impl PatternStrategy for Gradient {
    fn name(&self) -> &str {
        "gradient"
    }

    fn description(&self) -> &str {
        "Linear ramp through the colors along a rotated axis (extra: axis = x|y|z)"
    }

    fn generate(
        &self,
        structure: &Structure,
        positions: &[Position],
        color_indices: &[usize],
        parameters: &PatternParameters,
    ) -> Result<IndexMap> {
        check_inputs(color_indices, parameters)?;
        let axis = axis_parameter(parameters)?;
        let origin = resolve_origin(structure, parameters);

        let coordinates: Vec<f64> = positions
            .iter()
            .map(|&position| {
                pattern_space(position, origin, parameters)
                    .get(axis)
                    .copied()
                    .unwrap_or(0.0)
            })
            .collect();
        let low = coordinates.iter().copied().fold(f64::INFINITY, f64::min);
        let high = coordinates.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let span = high - low;

        Ok(positions
            .iter()
            .zip(&coordinates)
            .map(|(&position, &coordinate)| {
                let fraction = if span > f64::EPSILON {
                    (coordinate - low) / span
                } else {
                    0.0
                };
                (position, fraction_index(color_indices, fraction))
            })
            .collect())
    }
}

/// Seeded fractal gradient noise
#[derive(Debug, Clone, Copy, Default)]
pub struct Noise;

impl PatternStrategy for Noise {
    fn name(&self) -> &str {
        "noise"
    }

    fn description(&self) -> &str {
        "Organic blotches from seeded fractal noise (extra: octaves)"
    }

    fn generate(
        &self,
        structure: &Structure,
        positions: &[Position],
        color_indices: &[usize],
        parameters: &PatternParameters,
    ) -> Result<IndexMap> {
        check_inputs(color_indices, parameters)?;
        let octaves = match parameters.number("octaves") {
            None => 3,
            Some(value) if (1.0..=f64::from(MAX_NOISE_OCTAVES)).contains(&value) => value as u32,
            Some(value) => {
                return Err(invalid_argument(
                    "octaves",
                    &format!("must be between 1 and {MAX_NOISE_OCTAVES}, got {value}"),
                ));
            }
        };
        let origin = resolve_origin(structure, parameters);
        let field = NoiseField::new(parameters.seed);

        Ok(positions
            .iter()
            .map(|&position| {
                let p = pattern_space(position, origin, parameters);
                let sample = field.fractal(
                    [
                        p[0] * parameters.frequency,
                        p[1] * parameters.frequency,
                        p[2] * parameters.frequency,
                    ],
                    octaves,
                );
                (position, fraction_index(color_indices, sample))
            })
            .collect())
    }
}

/// Independent random pick per position
///
/// Each position seeds its own generator from the pattern seed and its
/// coordinates, so the result does not depend on position order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scatter;

impl PatternStrategy for Scatter {
    fn name(&self) -> &str {
        "scatter"
    }

    fn description(&self) -> &str {
        "Random speckle, reproducible from the seed"
    }

    fn generate(
        &self,
        _structure: &Structure,
        positions: &[Position],
        color_indices: &[usize],
        parameters: &PatternParameters,
    ) -> Result<IndexMap> {
        check_inputs(color_indices, parameters)?;

        Ok(positions
            .iter()
            .map(|&position| {
                let mut rng = StdRng::seed_from_u64(position_seed(parameters.seed, position));
                let slot = rng.random_range(0..color_indices.len());
                (position, color_indices.get(slot).copied().unwrap_or(0))
            })
            .collect())
    }
}

// SplitMix64 finalizer over the seed and packed coordinates
fn position_seed(seed: u64, position: Position) -> u64 {
    let mut z = seed;
    for coordinate in position {
        z = z
            .wrapping_add(0x9E37_79B9_7F4A_7C15)
            .wrapping_add(u64::from(coordinate as u32));
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^= z >> 31;
    }
    z
}

/// Every built-in strategy, ready for registration
pub fn builtin_strategies() -> Vec<Arc<dyn PatternStrategy>> {
    vec![
        Arc::new(Stripes),
        Arc::new(Checker),
        Arc::new(Radial),
        Arc::new(Gradient),
        Arc::new(Noise),
        Arc::new(Scatter),
    ]
}
