//! Base color from a block's position along the bounding diagonal

use crate::algorithm::factor::{ColorFactor, FactorScope};
use crate::analysis::shape::ShapeAnalyzer;
use crate::io::error::Result;
use crate::math::color::{Color, Palette};
use crate::spatial::block::Block;

/// What the gradient memoizes within one job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradientCacheMode {
    /// The first block of each category fixes that category's color
    #[default]
    PerCategory,
    /// Every block gets its own gradient color
    PerBlock,
}

/// Default factor supplying a palette color from the normalized position
/// along the structure's bounding diagonal
#[derive(Debug, Clone, Copy, Default)]
pub struct GradientFactor {
    mode: GradientCacheMode,
}

impl GradientFactor {
    /// Gradient cached per block category
    pub const fn new() -> Self {
        Self {
            mode: GradientCacheMode::PerCategory,
        }
    }

    /// Gradient with an explicit cache mode
    pub const fn with_mode(mode: GradientCacheMode) -> Self {
        Self { mode }
    }

    /// Configured cache mode
    pub const fn mode(&self) -> GradientCacheMode {
        self.mode
    }
}

fn gradient_color(shape: &ShapeAnalyzer, palette: &Palette, block: &Block) -> Color {
    let fraction = shape.diagonal_fraction(block.position);
    palette.get_clamped(palette.index_for_fraction(fraction))
}

impl ColorFactor for GradientFactor {
    fn name(&self) -> &str {
        "gradient"
    }

    fn applies(&self, _block: &Block, _scope: &mut FactorScope<'_, '_>) -> bool {
        true
    }

    fn transform(
        &self,
        block: &Block,
        _current: Color,
        scope: &mut FactorScope<'_, '_>,
    ) -> Result<Color> {
        let shape = scope.analyzer::<ShapeAnalyzer>();
        let palette = scope.palette;
        match self.mode {
            GradientCacheMode::PerCategory => scope
                .cache
                .get_or_compute_category(block.category, || Ok(gradient_color(&shape, palette, block))),
            GradientCacheMode::PerBlock => Ok(gradient_color(&shape, palette, block)),
        }
    }
}
