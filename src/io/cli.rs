//! Command-line interface for painting demo hulls

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::algorithm::job::{PaintJob, PaintReport};
use crate::algorithm::selector::BlockSelector;
use crate::io::configuration::{DEFAULT_DEMO_SIZE, OUTPUT_SUFFIX};
use crate::io::demo::DemoHull;
use crate::io::error::{PaintError, Result};
use crate::io::image::export_slices_as_png;
use crate::io::progress::ProgressManager;
use crate::io::settings::{OverlaySettings, PaintSettings};
use crate::math::color::Color;
use crate::pattern::parameters::PatternParameters;
use crate::pattern::registry::PatternRegistry;
use crate::spatial::raycast::VoxelRaycaster;
use crate::spatial::structure::Structure;

#[derive(Parser, Debug)]
#[command(name = "gridpaint")]
#[command(author, version, about = "Paint voxel structures from a color palette")]
/// Command-line arguments for the painting tool
pub struct Cli {
    /// Demo hull to paint (cube, hollow-box, sphere, ship)
    #[arg(value_name = "HULL", default_value = "ship")]
    pub hull: DemoHull,

    /// Edge length of the demo hull in blocks
    #[arg(short = 'n', long, default_value_t = DEFAULT_DEMO_SIZE)]
    pub size: u32,

    /// JSON settings file
    #[arg(short = 'c', long)]
    pub settings: Option<PathBuf>,

    /// Pattern strategy overlaid on exterior blocks, replacing any configured overlay
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Seed for the pattern overlay
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Directory for the PNG slice sheet and JSON color dump
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// List registered pattern strategies and exit
    #[arg(long)]
    pub list_patterns: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Block entry of the JSON color dump
#[derive(Debug, Serialize)]
struct PaintedBlock {
    position: [i32; 3],
    color: Color,
}

/// JSON color dump written next to the slice sheet
#[derive(Debug, Serialize)]
struct ColorDump<'a> {
    hull: &'a str,
    size: [u32; 3],
    factors: Vec<String>,
    blocks: Vec<PaintedBlock>,
    usage: BTreeMap<String, usize>,
}

/// Runs one paint job as configured on the command line
pub struct PaintProcessor {
    cli: Cli,
    registry: PatternRegistry,
}

impl PaintProcessor {
    /// Create a processor with the built-in pattern strategies
    pub fn new(cli: Cli) -> Self {
        Self {
            cli,
            registry: PatternRegistry::with_builtin(),
        }
    }

    /// Paint the hull and write the outputs
    ///
    /// # Errors
    ///
    /// Returns an error if settings cannot be loaded, the hull cannot be
    /// built, a factor fails or an output file cannot be written
    // Allow print for the pattern listing and the final summary
    #[allow(clippy::print_stdout)]
    pub fn process(&self) -> Result<()> {
        if self.cli.list_patterns {
            for name in self.registry.names() {
                let description = self
                    .registry
                    .get(&name)
                    .map(|strategy| strategy.description().to_string())
                    .unwrap_or_default();
                println!("{name:<10} {description}");
            }
            return Ok(());
        }

        let start_time = Instant::now();
        let settings = self.settings()?;
        let structure = self.cli.hull.build(self.cli.size)?;
        let pipeline = settings.build_pipeline(&self.registry)?;
        debug!(factors = ?pipeline.names(), "pipeline configured");

        let progress = if self.cli.should_show_progress() {
            ProgressManager::new(self.cli.hull.name())
        } else {
            ProgressManager::hidden()
        };
        let raycaster = VoxelRaycaster::new(&structure);
        let mut job = PaintJob::new(&structure, &settings.palette)
            .with_collision(&raycaster)
            .with_observer(&progress);
        let report = pipeline.apply(&mut job)?;

        let image_path = self.output_path("png");
        export_slices_as_png(&structure, &report.colors, &image_path)?;
        let dump_path = self.output_path("json");
        self.write_dump(&structure, &pipeline.names(), &report, &dump_path)?;

        info!(
            blocks = report.colors.len(),
            elapsed_ms = start_time.elapsed().as_millis(),
            "wrote {} and {}",
            image_path.display(),
            dump_path.display()
        );
        for failure in &report.cleanup_failures {
            warn!(%failure, "cleanup reported a failure");
        }
        if !self.cli.quiet {
            println!(
                "Painted {} blocks of {} in {:.2?}",
                report.colors.len(),
                self.cli.hull,
                start_time.elapsed()
            );
        }
        Ok(())
    }

    fn settings(&self) -> Result<PaintSettings> {
        let mut settings = match &self.cli.settings {
            Some(path) => PaintSettings::from_json_file(path)?,
            None => PaintSettings::default(),
        };

        if let Some(name) = &self.cli.pattern {
            settings.overlay = Some(OverlaySettings {
                strategy: name.clone(),
                selector: BlockSelector::Exterior,
                color_indices: Vec::new(),
                parameters: PatternParameters::default(),
            });
        }
        if let (Some(seed), Some(overlay)) = (self.cli.seed, settings.overlay.as_mut()) {
            overlay.parameters.seed = seed;
        }
        Ok(settings)
    }

    fn write_dump(
        &self,
        structure: &Structure,
        factors: &[String],
        report: &PaintReport,
        path: &Path,
    ) -> Result<()> {
        let mut usage = BTreeMap::new();
        let blocks = report
            .colors
            .iter()
            .map(|(&position, &color)| {
                *usage.entry(color.to_string()).or_insert(0) += 1;
                PaintedBlock { position, color }
            })
            .collect();
        let dump = ColorDump {
            hull: self.cli.hull.name(),
            size: structure.size(),
            factors: factors.to_vec(),
            blocks,
            usage,
        };

        let json = serde_json::to_string_pretty(&dump).map_err(|e| PaintError::Settings {
            path: path.to_path_buf(),
            source: e,
        })?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| PaintError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
        std::fs::write(path, json).map_err(|e| PaintError::FileSystem {
            path: path.to_path_buf(),
            operation: "write color dump",
            source: e,
        })
    }

    /// Output file for the current hull with the given extension
    pub fn output_path(&self, extension: &str) -> PathBuf {
        let name = format!(
            "{}_{}{}.{}",
            self.cli.hull.name(),
            self.cli.size,
            OUTPUT_SUFFIX,
            extension
        );
        self.cli.output.join(name)
    }
}
