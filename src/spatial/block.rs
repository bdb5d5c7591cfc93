//! Unit blocks and their categories

use serde::{Deserialize, Serialize};

use crate::spatial::direction::Direction;

/// Integer cell coordinate of a block
pub type Position = [i32; 3];

/// Functional subsystem a block category belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subsystem {
    /// Thrusters and other propulsion
    Propulsion,
    /// Reactors and batteries
    Power,
    /// Interior and navigation lights
    Lighting,
    /// Cockpits and control seats
    Control,
    /// Conveyors and cargo containers
    Logistics,
    /// Turrets and fixed weapons
    Weapons,
}

/// Block type tag used for applicability checks and cache keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockCategory {
    /// Light armor plating
    LightArmor,
    /// Heavy armor plating
    HeavyArmor,
    /// Transparent window
    Window,
    /// Cockpit or control seat
    Cockpit,
    /// Thruster
    Thruster,
    /// Interior or navigation light
    Light,
    /// Reactor
    Reactor,
    /// Battery
    Battery,
    /// Conveyor segment
    Conveyor,
    /// Cargo container
    Cargo,
    /// Weapon mount
    Weapon,
    /// Host-defined category
    Custom(u16),
}

impl BlockCategory {
    /// Subsystem the category belongs to, if it is functional
    pub const fn subsystem(self) -> Option<Subsystem> {
        match self {
            Self::Thruster => Some(Subsystem::Propulsion),
            Self::Reactor | Self::Battery => Some(Subsystem::Power),
            Self::Light => Some(Subsystem::Lighting),
            Self::Cockpit => Some(Subsystem::Control),
            Self::Conveyor | Self::Cargo => Some(Subsystem::Logistics),
            Self::Weapon => Some(Subsystem::Weapons),
            Self::LightArmor | Self::HeavyArmor | Self::Window | Self::Custom(_) => None,
        }
    }

    /// Whether blocks of this category host a functional sub-entity by default
    pub const fn is_functional(self) -> bool {
        self.subsystem().is_some()
    }
}

/// A unit cell of a structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Block {
    /// Cell coordinate
    pub position: Position,
    /// Block type tag
    pub category: BlockCategory,
    /// Whether the block hosts a functional sub-entity such as a light or thruster
    pub functional: bool,
    /// Facing of directional blocks such as cockpits and thrusters
    pub facing: Option<Direction>,
}

impl Block {
    /// Create a block whose functional flag follows its category
    pub const fn new(position: Position, category: BlockCategory) -> Self {
        Self {
            position,
            category,
            functional: category.is_functional(),
            facing: None,
        }
    }

    /// Light armor block at `position`
    pub const fn armor(position: Position) -> Self {
        Self::new(position, BlockCategory::LightArmor)
    }

    /// Override the functional flag
    #[must_use]
    pub const fn with_functional(mut self, functional: bool) -> Self {
        self.functional = functional;
        self
    }

    /// Set the facing direction
    #[must_use]
    pub const fn facing(mut self, direction: Direction) -> Self {
        self.facing = Some(direction);
        self
    }

    /// Subsystem of a functional block
    pub const fn subsystem(&self) -> Option<Subsystem> {
        if self.functional {
            self.category.subsystem()
        } else {
            None
        }
    }
}
