//! Factors that replace the accumulated color outright
//!
//! Overrides ignore the running color. When an override and a blend factor
//! both apply to a block, whichever runs later in the pipeline wins.

use serde::{Deserialize, Serialize};

use crate::algorithm::factor::{ColorFactor, FactorScope};
use crate::analysis::orientation::{OrientationAnalyzer, Side};
use crate::io::error::Result;
use crate::math::color::{Color, Palette};
use crate::spatial::block::{Block, BlockCategory};

/// Palette entry chosen by a fixed override
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaletteSlot {
    /// First palette entry
    First,
    /// Last palette entry
    Last,
    /// Entry at an index, clamped into the palette
    Index(usize),
}

impl PaletteSlot {
    /// Resolve the slot against a palette
    pub fn resolve(self, palette: &Palette) -> Color {
        match self {
            Self::First => palette.first(),
            Self::Last => palette.last(),
            Self::Index(index) => palette.get_clamped(index),
        }
    }
}

/// Replaces the color of selected categories with a fixed palette entry
#[derive(Debug, Clone)]
pub struct FixedIndexOverride {
    name: String,
    categories: Vec<BlockCategory>,
    slot: PaletteSlot,
    functional_only: bool,
}

impl FixedIndexOverride {
    /// Override `categories` with `slot`
    pub fn new(name: &str, categories: Vec<BlockCategory>, slot: PaletteSlot) -> Self {
        Self {
            name: name.to_string(),
            categories,
            slot,
            functional_only: false,
        }
    }

    /// Restrict the override to blocks hosting a functional sub-entity
    #[must_use]
    pub fn functional_only(mut self) -> Self {
        self.functional_only = true;
        self
    }

    /// Thrusters take the last palette entry
    pub fn thrusters() -> Self {
        Self::new("thrusters", vec![BlockCategory::Thruster], PaletteSlot::Last).functional_only()
    }

    /// Lights take the first palette entry
    pub fn lights() -> Self {
        Self::new("lights", vec![BlockCategory::Light], PaletteSlot::First).functional_only()
    }

    /// Configured palette slot
    pub const fn slot(&self) -> PaletteSlot {
        self.slot
    }
}

impl ColorFactor for FixedIndexOverride {
    fn name(&self) -> &str {
        &self.name
    }

    fn applies(&self, block: &Block, _scope: &mut FactorScope<'_, '_>) -> bool {
        self.categories.contains(&block.category) && (!self.functional_only || block.functional)
    }

    fn transform(
        &self,
        _block: &Block,
        _current: Color,
        scope: &mut FactorScope<'_, '_>,
    ) -> Result<Color> {
        Ok(self.slot.resolve(scope.palette))
    }
}

/// Picks between two fixed colors by the side of the lateral axis
#[derive(Debug, Clone)]
pub struct SideOverride {
    name: String,
    categories: Vec<BlockCategory>,
    port: Color,
    starboard: Color,
}

impl SideOverride {
    /// Override `categories` with `port` or `starboard`
    pub fn new(name: &str, categories: Vec<BlockCategory>, port: Color, starboard: Color) -> Self {
        Self {
            name: name.to_string(),
            categories,
            port,
            starboard,
        }
    }

    /// Red port and green starboard navigation lights
    pub fn navigation_lights() -> Self {
        Self::new(
            "navigation_lights",
            vec![BlockCategory::Light],
            Color::RED,
            Color::GREEN,
        )
    }
}

impl ColorFactor for SideOverride {
    fn name(&self) -> &str {
        &self.name
    }

    fn applies(&self, block: &Block, _scope: &mut FactorScope<'_, '_>) -> bool {
        self.categories.contains(&block.category)
    }

    fn transform(
        &self,
        block: &Block,
        _current: Color,
        scope: &mut FactorScope<'_, '_>,
    ) -> Result<Color> {
        let orientation = scope.analyzer::<OrientationAnalyzer>();
        Ok(match orientation.side(block.position) {
            Side::Port => self.port,
            Side::Starboard => self.starboard,
        })
    }
}
