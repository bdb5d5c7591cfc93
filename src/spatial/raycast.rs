//! Occupancy-backed collision capability using voxel traversal

use crate::math::geometry::Vec3;
use crate::spatial::block::Position;
use crate::spatial::probe::{CollisionCapability, RayHit};
use crate::spatial::structure::Structure;

/// Answers ray casts against a single structure's occupancy
///
/// Steps through cells along the ray (Amanatides & Woo traversal) and reports
/// the first occupied cell after the one containing the origin. The origin
/// cell is skipped so a ray leaving a block does not hit the block itself.
#[derive(Debug, Clone, Copy)]
pub struct VoxelRaycaster<'s> {
    structure: &'s Structure,
}

impl<'s> VoxelRaycaster<'s> {
    /// Create a raycaster over `structure`
    pub const fn new(structure: &'s Structure) -> Self {
        Self { structure }
    }

    // Cell k spans [k, k + 1) in shifted grid space
    fn to_grid(&self, point: Vec3) -> Vec3 {
        let origin = self.structure.world_origin();
        let cell = self.structure.cell_size();
        [
            (point[0] - origin[0]) / cell + 0.5,
            (point[1] - origin[1]) / cell + 0.5,
            (point[2] - origin[2]) / cell + 0.5,
        ]
    }
}

impl CollisionCapability for VoxelRaycaster<'_> {
    fn cast_ray(&self, origin: Vec3, target: Vec3) -> Option<RayHit> {
        let start = self.to_grid(origin);
        let end = self.to_grid(target);

        let mut cell: Position = [
            start[0].floor() as i32,
            start[1].floor() as i32,
            start[2].floor() as i32,
        ];
        let mut step = [0_i32; 3];
        let mut t_max = [f64::INFINITY; 3];
        let mut t_delta = [f64::INFINITY; 3];
        let mut remaining: u64 = 0;

        for axis in 0..3 {
            let delta = end[axis] - start[axis];
            let end_cell = end[axis].floor() as i32;
            remaining += u64::from(end_cell.abs_diff(cell[axis]));

            if delta > 0.0 {
                step[axis] = 1;
                t_delta[axis] = 1.0 / delta;
                t_max[axis] = (f64::from(cell[axis]) + 1.0 - start[axis]) / delta;
            } else if delta < 0.0 {
                step[axis] = -1;
                t_delta[axis] = -1.0 / delta;
                t_max[axis] = (start[axis] - f64::from(cell[axis])) / -delta;
            }
        }

        for _ in 0..remaining {
            let axis = if t_max[0] <= t_max[1] && t_max[0] <= t_max[2] {
                0
            } else if t_max[1] <= t_max[2] {
                1
            } else {
                2
            };
            if t_max[axis] > 1.0 {
                break;
            }

            cell[axis] += step[axis];
            t_max[axis] += t_delta[axis];

            if self.structure.is_occupied(cell) {
                return Some(RayHit {
                    entity: self.structure.id(),
                    position: self.structure.world_position(cell),
                });
            }
        }

        None
    }
}
