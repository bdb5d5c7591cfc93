//! Blend factors driven by the spatial probe

use crate::algorithm::factor::{ColorFactor, FactorScope};
use crate::io::configuration::{DEFAULT_EDGE_LIGHTEN, DEFAULT_EXTERIOR_DARKEN, DEFAULT_INTERIOR_LIGHTEN};
use crate::io::error::{Result, invalid_argument};
use crate::math::color::Color;
use crate::spatial::block::Block;

fn check_amount(parameter: &'static str, amount: f32) -> Result<f32> {
    if !(0.0..=1.0).contains(&amount) {
        return Err(invalid_argument(
            parameter,
            &format!("must be within [0, 1], got {amount}"),
        ));
    }
    Ok(amount)
}

/// Darkens exterior blocks and lightens interior ones
#[derive(Debug, Clone, Copy)]
pub struct ShadingFactor {
    exterior_darken: f32,
    interior_lighten: f32,
}

impl Default for ShadingFactor {
    fn default() -> Self {
        Self {
            exterior_darken: DEFAULT_EXTERIOR_DARKEN,
            interior_lighten: DEFAULT_INTERIOR_LIGHTEN,
        }
    }
}

impl ShadingFactor {
    /// Shading with custom blend fractions
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if either fraction lies outside `[0, 1]`
    pub fn new(exterior_darken: f32, interior_lighten: f32) -> Result<Self> {
        Ok(Self {
            exterior_darken: check_amount("exterior_darken", exterior_darken)?,
            interior_lighten: check_amount("interior_lighten", interior_lighten)?,
        })
    }

    /// Fraction by which exterior blocks are darkened
    pub const fn exterior_darken(&self) -> f32 {
        self.exterior_darken
    }

    /// Fraction by which interior blocks are lightened
    pub const fn interior_lighten(&self) -> f32 {
        self.interior_lighten
    }
}

impl ColorFactor for ShadingFactor {
    fn name(&self) -> &str {
        "shading"
    }

    fn applies(&self, _block: &Block, _scope: &mut FactorScope<'_, '_>) -> bool {
        true
    }

    fn transform(
        &self,
        block: &Block,
        current: Color,
        scope: &mut FactorScope<'_, '_>,
    ) -> Result<Color> {
        if scope.is_exterior(block) {
            Ok(current.darken(self.exterior_darken))
        } else {
            Ok(current.lighten(self.interior_lighten))
        }
    }
}

/// Lightens blocks with two or more empty neighbours
#[derive(Debug, Clone, Copy)]
pub struct EdgeFactor {
    lighten: f32,
}

impl Default for EdgeFactor {
    fn default() -> Self {
        Self {
            lighten: DEFAULT_EDGE_LIGHTEN,
        }
    }
}

impl EdgeFactor {
    /// Edge highlight with a custom lighten fraction
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the fraction lies outside `[0, 1]`
    pub fn new(lighten: f32) -> Result<Self> {
        Ok(Self {
            lighten: check_amount("edge_lighten", lighten)?,
        })
    }

    /// Fraction by which edge blocks are lightened
    pub const fn lighten(&self) -> f32 {
        self.lighten
    }
}

impl ColorFactor for EdgeFactor {
    fn name(&self) -> &str {
        "edge"
    }

    fn applies(&self, block: &Block, scope: &mut FactorScope<'_, '_>) -> bool {
        scope.is_edge(block)
    }

    fn transform(
        &self,
        _block: &Block,
        current: Color,
        _scope: &mut FactorScope<'_, '_>,
    ) -> Result<Color> {
        Ok(current.lighten(self.lighten))
    }
}
