//! Exterior and edge classification by directional probing
//!
//! Exterior detection asks whether an observer outside the hull could see the
//! block along any of the six axis directions. Rays are cast through an abstract
//! collision capability so hosts can answer them with their own physics engine;
//! [`crate::spatial::raycast::VoxelRaycaster`] answers them from occupancy alone.

use crate::io::configuration::{EDGE_EMPTY_NEIGHBOR_THRESHOLD, PROBE_CLEARANCE_CELLS};
use crate::math::geometry::{Vec3, add, scale};
use crate::spatial::block::Block;
use crate::spatial::direction::Direction;
use crate::spatial::structure::{EntityId, Structure};

/// Result of a successful ray cast
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Entity the ray hit first
    pub entity: EntityId,
    /// World-space hit position
    pub position: Vec3,
}

/// Ray casting supplied by the host
pub trait CollisionCapability {
    /// Cast a ray from `origin` to `target`, returning the first hit
    ///
    /// `None` means nothing was hit; a hit on another entity must report that
    /// entity's id rather than `None`.
    fn cast_ray(&self, origin: Vec3, target: Vec3) -> Option<RayHit>;
}

/// Adapts a closure into a [`CollisionCapability`]
pub struct FnCollision<F>(pub F);

impl<F> CollisionCapability for FnCollision<F>
where
    F: Fn(Vec3, Vec3) -> Option<RayHit>,
{
    fn cast_ray(&self, origin: Vec3, target: Vec3) -> Option<RayHit> {
        (self.0)(origin, target)
    }
}

/// Stateless classifier for a block's spatial role
#[derive(Clone, Copy, Default)]
pub struct SpatialProbe<'c> {
    collision: Option<&'c dyn CollisionCapability>,
}

impl std::fmt::Debug for SpatialProbe<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpatialProbe")
            .field("collision", &self.collision.is_some())
            .finish()
    }
}

impl<'c> SpatialProbe<'c> {
    /// Probe backed by a collision capability
    pub const fn new(collision: &'c dyn CollisionCapability) -> Self {
        Self {
            collision: Some(collision),
        }
    }

    /// Probe with no collision capability; every block classifies as exterior
    pub const fn without_collision() -> Self {
        Self { collision: None }
    }

    /// Whether a collision capability is attached
    pub const fn has_collision(&self) -> bool {
        self.collision.is_some()
    }

    /// Whether the block can be seen from outside the structure
    ///
    /// A missing capability, a degenerate structure, a ray with no hit or a
    /// ray hitting another entity all classify the block as exterior.
    pub fn is_exterior(&self, block: &Block, structure: &Structure) -> bool {
        let Some(collision) = self.collision else {
            return true;
        };
        if structure.is_degenerate() {
            return true;
        }

        let origin = structure.world_position(block.position);
        let size = structure.size();
        Direction::ALL.iter().any(|&direction| {
            let extent = size
                .get(direction.axis())
                .map_or(0.0, |&cells| f64::from(cells) + PROBE_CLEARANCE_CELLS);
            let target = add(
                origin,
                scale(direction.vector(), extent * structure.cell_size()),
            );
            collision
                .cast_ray(origin, target)
                .is_none_or(|hit| hit.entity != structure.id())
        })
    }

    /// Number of empty orthogonal neighbour cells
    pub fn empty_neighbor_count(block: &Block, structure: &Structure) -> usize {
        Direction::ALL
            .iter()
            .filter(|direction| !structure.is_occupied(direction.step(block.position)))
            .count()
    }

    /// Whether the block has at least two empty orthogonal neighbours
    pub fn is_edge(&self, block: &Block, structure: &Structure) -> bool {
        Self::empty_neighbor_count(block, structure) >= EDGE_EMPTY_NEIGHBOR_THRESHOLD
    }
}
