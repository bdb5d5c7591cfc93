//! JSON paint settings and pipeline construction from them

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::algorithm::gradient::{GradientCacheMode, GradientFactor};
use crate::algorithm::overlay::{ClusterFactor, PatternOverlay};
use crate::algorithm::overrides::{FixedIndexOverride, SideOverride};
use crate::algorithm::pipeline::FactorPipeline;
use crate::algorithm::selector::BlockSelector;
use crate::algorithm::shading::{EdgeFactor, ShadingFactor};
use crate::io::configuration::{DEFAULT_EDGE_LIGHTEN, DEFAULT_EXTERIOR_DARKEN, DEFAULT_INTERIOR_LIGHTEN};
use crate::io::error::{PaintError, Result};
use crate::math::color::{Color, Palette};
use crate::pattern::parameters::PatternParameters;
use crate::pattern::registry::PatternRegistry;

/// Pattern overlay requested by a settings document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlaySettings {
    /// Registered strategy name, matched case-insensitively
    pub strategy: String,
    /// Blocks the overlay paints
    #[serde(default = "default_selector")]
    pub selector: BlockSelector,
    /// Palette indices the strategy may assign; empty means every entry
    #[serde(default)]
    pub color_indices: Vec<usize>,
    /// Strategy parameters
    #[serde(default)]
    pub parameters: PatternParameters,
}

const fn default_selector() -> BlockSelector {
    BlockSelector::Exterior
}

/// User-facing configuration of a paint run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaintSettings {
    /// Palette as `#rrggbb` strings
    pub palette: Palette,
    /// Fraction by which exterior blocks are darkened
    pub exterior_darken: f32,
    /// Fraction by which interior blocks are lightened
    pub interior_lighten: f32,
    /// Fraction by which edge blocks are lightened; 0 disables the edge factor
    pub edge_lighten: f32,
    /// What the gradient memoizes per job
    pub gradient_cache: GradientCacheMode,
    /// Color each functional cluster separately
    pub color_clusters: bool,
    /// Apply thruster and navigation light overrides
    pub functional_overrides: bool,
    /// Optional pattern overlay, applied after shading
    pub overlay: Option<OverlaySettings>,
}

impl Default for PaintSettings {
    fn default() -> Self {
        Self {
            palette: default_palette(),
            exterior_darken: DEFAULT_EXTERIOR_DARKEN,
            interior_lighten: DEFAULT_INTERIOR_LIGHTEN,
            edge_lighten: DEFAULT_EDGE_LIGHTEN,
            gradient_cache: GradientCacheMode::default(),
            color_clusters: false,
            functional_overrides: true,
            overlay: None,
        }
    }
}

fn default_palette() -> Palette {
    Palette::new(vec![
        Color::new(0x3a, 0x4a, 0x5c),
        Color::new(0x6b, 0x7f, 0x94),
        Color::new(0xc8, 0xd2, 0xdc),
    ])
    .unwrap_or_else(|_| Palette::single(Color::WHITE))
}

impl PaintSettings {
    /// Read settings from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `FileSystem` if the file cannot be read and `Settings` if it is
    /// not a valid settings document
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| PaintError::FileSystem {
            path: path.to_path_buf(),
            operation: "read settings",
            source: e,
        })?;
        serde_json::from_str(&text).map_err(|e| PaintError::Settings {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Build the configured pipeline
    ///
    /// Factor order: gradient, shading, edge highlight, cluster colors,
    /// pattern overlay, then functional overrides.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for out-of-range shading amounts or invalid
    /// overlay parameters and `NotFound` for an unknown overlay strategy
    pub fn build_pipeline(&self, registry: &PatternRegistry) -> Result<FactorPipeline> {
        let mut pipeline = FactorPipeline::new();
        pipeline
            .register(Arc::new(GradientFactor::with_mode(self.gradient_cache)))
            .register(Arc::new(ShadingFactor::new(
                self.exterior_darken,
                self.interior_lighten,
            )?));
        let edge = EdgeFactor::new(self.edge_lighten)?;
        // Zero disables the highlight
        if self.edge_lighten > 0.0 {
            pipeline.register(Arc::new(edge));
        }
        if self.color_clusters {
            pipeline.register(Arc::new(ClusterFactor));
        }
        if let Some(overlay) = &self.overlay {
            let strategy = registry.get(&overlay.strategy)?;
            overlay.parameters.validate()?;
            let color_indices = if overlay.color_indices.is_empty() {
                (0..self.palette.len()).collect()
            } else {
                overlay.color_indices.clone()
            };
            pipeline.register(Arc::new(PatternOverlay::new(
                strategy,
                overlay.selector.clone(),
                color_indices,
                overlay.parameters.clone(),
            )));
        }
        if self.functional_overrides {
            pipeline
                .register(Arc::new(FixedIndexOverride::thrusters()))
                .register(Arc::new(SideOverride::navigation_lights()));
        }
        Ok(pipeline)
    }
}
