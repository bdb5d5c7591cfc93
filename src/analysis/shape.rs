//! Overall shape of a structure: bounds, extents and proportions

use num_traits::clamp;

use crate::analysis::cache::{Analyzer, AnalyzerKind};
use crate::math::geometry::{Vec3, dot, sub, to_vec3};
use crate::spatial::block::Position;
use crate::spatial::structure::{BoundingBox, Structure};

/// Bounds, center and proportions of a structure
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeAnalyzer {
    /// Inclusive bounding box
    pub bounds: BoundingBox,
    /// Geometric center in cell coordinates
    pub center: Vec3,
    /// Cell counts along each axis
    pub extents: [u32; 3],
    /// Vector from the minimum to the maximum corner
    pub diagonal: Vec3,
    /// Number of blocks
    pub block_count: usize,
    /// Fraction of bounding-box cells that are occupied
    pub fill_ratio: f64,
    /// Axis with the largest extent (ties resolve to the lower axis)
    pub dominant_axis: usize,
}

impl Analyzer for ShapeAnalyzer {
    const KIND: AnalyzerKind = AnalyzerKind::Shape;

    fn analyze(structure: &Structure) -> Self {
        let bounds = *structure.bounds();
        let extents = structure.size();
        let volume = extents.iter().map(|&e| f64::from(e)).product::<f64>();
        let fill_ratio = if volume > 0.0 {
            structure.len() as f64 / volume
        } else {
            0.0
        };

        let mut dominant_axis = 0;
        for axis in 1..3 {
            if extents[axis] > extents[dominant_axis] {
                dominant_axis = axis;
            }
        }

        Self {
            bounds,
            center: bounds.center(),
            extents,
            diagonal: bounds.diagonal(),
            block_count: structure.len(),
            fill_ratio,
            dominant_axis,
        }
    }
}

impl ShapeAnalyzer {
    /// Normalized projection of a position onto the bounding diagonal
    ///
    /// Returns 0 at the minimum corner and 1 at the maximum corner; positions
    /// are clamped into that range. A zero-length diagonal yields 0.
    pub fn diagonal_fraction(&self, position: Position) -> f64 {
        let length_squared = dot(self.diagonal, self.diagonal);
        if length_squared <= f64::EPSILON {
            return 0.0;
        }
        let offset = sub(to_vec3(position), to_vec3(self.bounds.min));
        clamp(dot(offset, self.diagonal) / length_squared, 0.0, 1.0)
    }

    /// Largest extent in cells
    pub fn longest_extent(&self) -> u32 {
        self.extents.iter().copied().max().unwrap_or(0)
    }
}
