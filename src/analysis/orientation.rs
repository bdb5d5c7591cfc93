//! Local forward/right/up basis of a structure
//!
//! Forward comes from the first cockpit that declares a facing. Without one,
//! the ship is assumed to fly away from its thrusters along the dominant axis.
//! Structures with neither fall back to `+Z`.

use tracing::debug;

use crate::analysis::cache::{Analyzer, AnalyzerCache, AnalyzerKind};
use crate::analysis::shape::ShapeAnalyzer;
use crate::math::geometry::{Vec3, dot, sub, to_vec3};
use crate::spatial::block::{BlockCategory, Position};
use crate::spatial::direction::Direction;
use crate::spatial::structure::Structure;

/// How the forward direction was derived
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrientationSource {
    /// Facing of a cockpit block
    Cockpit,
    /// Opposite the thruster centroid along the dominant axis
    Thrust,
    /// No cue available
    Default,
}

/// Which side of the lateral axis a block sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Negative lateral offset (left when looking forward)
    Port,
    /// Zero or positive lateral offset (right when looking forward)
    Starboard,
}

/// Orthonormal axis basis of a structure
#[derive(Debug, Clone, PartialEq)]
pub struct OrientationAnalyzer {
    /// Direction of travel
    pub forward: Direction,
    /// Up direction
    pub up: Direction,
    /// Lateral direction, `up x forward`
    pub right: Direction,
    /// Bounding-box center the basis is anchored at
    pub center: Vec3,
    /// Cue the forward direction came from
    pub source: OrientationSource,
}

impl Analyzer for OrientationAnalyzer {
    const KIND: AnalyzerKind = AnalyzerKind::Orientation;

    fn analyze(structure: &Structure) -> Self {
        Self::analyze_cached(structure, &mut AnalyzerCache::new())
    }

    fn analyze_cached(structure: &Structure, cache: &mut AnalyzerCache) -> Self {
        let shape = cache.analyzer::<ShapeAnalyzer>(structure);
        let (forward, source) = cockpit_forward(structure)
            .map(|forward| (forward, OrientationSource::Cockpit))
            .or_else(|| {
                thrust_forward(structure, &shape).map(|forward| (forward, OrientationSource::Thrust))
            })
            .unwrap_or((Direction::PosZ, OrientationSource::Default));

        let up = if forward.axis() == 1 {
            Direction::PosZ
        } else {
            Direction::PosY
        };
        let right = up.cross(forward).unwrap_or(Direction::PosX);

        debug!(?forward, ?up, ?right, ?source, "derived structure orientation");

        Self {
            forward,
            up,
            right,
            center: shape.center,
            source,
        }
    }
}

impl OrientationAnalyzer {
    /// Signed distance of a position from the center along the right axis
    pub fn lateral_offset(&self, position: Position) -> f64 {
        dot(sub(to_vec3(position), self.center), self.right.vector())
    }

    /// Side of the lateral axis a position sits on
    pub fn side(&self, position: Position) -> Side {
        if self.lateral_offset(position) < 0.0 {
            Side::Port
        } else {
            Side::Starboard
        }
    }

    /// Signed distance of a position from the center along forward
    pub fn longitudinal_offset(&self, position: Position) -> f64 {
        dot(sub(to_vec3(position), self.center), self.forward.vector())
    }
}

fn cockpit_forward(structure: &Structure) -> Option<Direction> {
    structure
        .blocks()
        .iter()
        .filter(|block| block.category == BlockCategory::Cockpit)
        .find_map(|block| block.facing)
}

fn thrust_forward(structure: &Structure, shape: &ShapeAnalyzer) -> Option<Direction> {
    let mut sum = [0.0; 3];
    let mut count = 0_usize;
    for block in structure.blocks() {
        if block.category == BlockCategory::Thruster {
            let p = to_vec3(block.position);
            sum = [sum[0] + p[0], sum[1] + p[1], sum[2] + p[2]];
            count += 1;
        }
    }
    if count == 0 {
        return None;
    }

    let axis = shape.dominant_axis;
    let centroid = sum.get(axis).copied().unwrap_or(0.0) / count as f64;
    let offset = centroid - shape.center.get(axis).copied().unwrap_or(0.0);
    if offset.abs() <= f64::EPSILON {
        return None;
    }
    // Thrusters sit at the stern
    Some(Direction::along(axis, offset < 0.0))
}
