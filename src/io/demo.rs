//! Procedural demo hulls for the command-line tool and benchmarks

use std::fmt;
use std::str::FromStr;

use crate::io::configuration::MAX_DEMO_SIZE;
use crate::io::error::{PaintError, Result, invalid_argument};
use crate::spatial::block::{Block, BlockCategory};
use crate::spatial::direction::Direction;
use crate::spatial::structure::{EntityId, Structure};

/// Shape of a generated demo hull
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoHull {
    /// Solid cube
    Cube,
    /// Cube shell with a one-block wall and a reactor core
    HollowBox,
    /// Solid voxel sphere
    Sphere,
    /// Elongated hull with cockpit, thrusters and navigation lights
    Ship,
}

impl DemoHull {
    /// Every hull in display order
    pub const ALL: [Self; 4] = [Self::Cube, Self::HollowBox, Self::Sphere, Self::Ship];

    /// Name used on the command line
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cube => "cube",
            Self::HollowBox => "hollow-box",
            Self::Sphere => "sphere",
            Self::Ship => "ship",
        }
    }

    /// Build the hull with the given edge length
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `size` is zero or above the demo limit
    /// (the ship needs at least 3)
    pub fn build(self, size: u32) -> Result<Structure> {
        let minimum = if self == Self::Ship { 3 } else { 1 };
        if size < minimum || size > MAX_DEMO_SIZE {
            return Err(invalid_argument(
                "size",
                &format!("{} needs a size in {minimum}..={MAX_DEMO_SIZE}, got {size}", self.name()),
            ));
        }

        let n = size as i32;
        let blocks = match self {
            Self::Cube => cube(n),
            Self::HollowBox => hollow_box(n),
            Self::Sphere => sphere(n),
            Self::Ship => ship(n),
        };
        Structure::new(EntityId(u64::from(size)), blocks)
    }
}

impl fmt::Display for DemoHull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DemoHull {
    type Err = PaintError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|hull| hull.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| crate::io::error::not_found("demo hull", &s))
    }
}

fn cube(n: i32) -> Vec<Block> {
    let mut blocks = Vec::with_capacity((n * n * n) as usize);
    for x in 0..n {
        for y in 0..n {
            for z in 0..n {
                blocks.push(Block::armor([x, y, z]));
            }
        }
    }
    blocks
}

fn hollow_box(n: i32) -> Vec<Block> {
    let last = n - 1;
    let core = n / 2;
    let mut blocks = Vec::new();
    for x in 0..n {
        for y in 0..n {
            for z in 0..n {
                let on_wall = [x, y, z].iter().any(|&c| c == 0 || c == last);
                if on_wall {
                    blocks.push(Block::new([x, y, z], BlockCategory::HeavyArmor));
                } else if [x, y, z] == [core; 3] {
                    blocks.push(Block::new([x, y, z], BlockCategory::Reactor));
                }
            }
        }
    }
    blocks
}

fn sphere(n: i32) -> Vec<Block> {
    let radius = f64::from(n) / 2.0;
    let mut blocks = Vec::new();
    for x in 0..n {
        for y in 0..n {
            for z in 0..n {
                let offset = [x, y, z].map(|c| f64::from(c) + 0.5 - radius);
                let distance_sq: f64 = offset.iter().map(|c| c * c).sum();
                if distance_sq <= radius * radius {
                    blocks.push(Block::armor([x, y, z]));
                }
            }
        }
    }
    blocks
}

/// Hull of `n` x `n/2` x `2n` cells flying along `+Z`
fn ship(n: i32) -> Vec<Block> {
    let width = n;
    let height = (n / 2).max(2);
    let length = n * 2;
    let mid_x = width / 2;
    let mut blocks = Vec::new();

    for x in 0..width {
        for y in 0..height {
            for z in 0..length {
                let position = [x, y, z];
                let block = if z == 0 && y == 0 && x % 2 == 1 {
                    Block::new(position, BlockCategory::Thruster)
                } else if z == length - 1 && y == height - 1 && x == mid_x {
                    Block::new(position, BlockCategory::Cockpit).facing(Direction::PosZ)
                } else if z == length - 1 && y == height - 1 {
                    Block::new(position, BlockCategory::Window)
                } else if y == height - 1 && z == length / 2 && (x == 0 || x == width - 1) {
                    Block::new(position, BlockCategory::Light)
                } else if y == 0 && z == length / 2 && x == mid_x {
                    Block::new(position, BlockCategory::Cargo)
                } else {
                    Block::armor(position)
                };
                blocks.push(block);
            }
        }
    }
    blocks
}
