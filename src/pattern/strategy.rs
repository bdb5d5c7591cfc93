//! Pattern generator trait and shared helpers

use std::collections::BTreeMap;
use std::fmt;

use crate::io::error::{Result, invalid_argument};
use crate::math::geometry::{Vec3, rotate_about, scale, sub, to_vec3};
use crate::pattern::parameters::PatternParameters;
use crate::spatial::block::Position;
use crate::spatial::structure::Structure;

/// Mapping from positions to palette indices
pub type IndexMap = BTreeMap<Position, usize>;

/// Deterministic generator mapping positions to palette indices
///
/// For fixed inputs (including the seed) two calls must return identical
/// maps. Every value in the output is drawn from `color_indices`.
pub trait PatternStrategy: fmt::Debug + Send + Sync {
    /// Canonical strategy name
    fn name(&self) -> &str;

    /// One-line human description
    fn description(&self) -> &str;

    /// Assign a palette index to every position
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `color_indices` is empty or the parameters
    /// fail validation
    fn generate(
        &self,
        structure: &Structure,
        positions: &[Position],
        color_indices: &[usize],
        parameters: &PatternParameters,
    ) -> Result<IndexMap>;
}

/// Validate generator inputs shared by every strategy
///
/// # Errors
///
/// Returns `InvalidArgument` for empty `color_indices` or invalid parameters
pub fn check_inputs(color_indices: &[usize], parameters: &PatternParameters) -> Result<()> {
    if color_indices.is_empty() {
        return Err(invalid_argument(
            "color_indices",
            &"at least one palette index is required",
        ));
    }
    parameters.validate()
}

/// Palette index for an arbitrary band number, wrapping around `color_indices`
pub fn wrap_index(color_indices: &[usize], band: i64) -> usize {
    let len = color_indices.len().max(1) as i64;
    let slot = band.rem_euclid(len) as usize;
    color_indices.get(slot).copied().unwrap_or(0)
}

/// Palette index for a fraction in `[0, 1]`, clamping to the last entry
pub fn fraction_index(color_indices: &[usize], fraction: f64) -> usize {
    let len = color_indices.len();
    let t = if fraction.is_finite() {
        fraction.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let slot = ((t * len as f64).floor() as usize).min(len.saturating_sub(1));
    color_indices.get(slot).copied().unwrap_or(0)
}

/// Pattern origin, optionally anchored at the structure center
///
/// With the `center_on_structure` flag the origin is an offset from the
/// bounding-box center instead of an absolute cell coordinate.
pub fn resolve_origin(structure: &Structure, parameters: &PatternParameters) -> Vec3 {
    if parameters.flag("center_on_structure") {
        let center = structure.bounds().center();
        [
            center[0] + parameters.origin[0],
            center[1] + parameters.origin[1],
            center[2] + parameters.origin[2],
        ]
    } else {
        parameters.origin
    }
}

/// Position in pattern space: relative to the origin, rotated about the
/// vertical axis and divided by the scale
pub fn pattern_space(position: Position, origin: Vec3, parameters: &PatternParameters) -> Vec3 {
    let relative = sub(to_vec3(position), origin);
    let rotated = rotate_about(relative, [0.0, 1.0, 0.0], -parameters.rotation);
    scale(rotated, 1.0 / parameters.scale)
}
