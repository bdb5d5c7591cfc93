//! Spatial data structures and geometric probing
//!
//! This module contains spatial-related functionality including:
//! - Blocks, categories and axis directions
//! - Read-only structure snapshots with occupancy queries
//! - Exterior and edge classification through an abstract collision capability

/// Unit blocks, categories and subsystems
pub mod block;
/// Axis-aligned directions and neighbour offsets
pub mod direction;
/// Exterior and edge classification
pub mod probe;
/// Occupancy-backed ray casting
pub mod raycast;
/// Structure snapshots and occupancy volumes
pub mod structure;

pub use block::{Block, BlockCategory, Position, Subsystem};
pub use direction::Direction;
pub use probe::{CollisionCapability, RayHit, SpatialProbe};
pub use raycast::VoxelRaycaster;
pub use structure::{BoundingBox, EntityId, Structure};
