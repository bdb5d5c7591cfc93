//! PNG export of painted structures as a sheet of horizontal slices
//!
//! Every Y layer of the structure becomes one tile, laid out left to right
//! from the lowest layer up. Empty cells stay transparent.

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::algorithm::job::ColorMap;
use crate::io::configuration::SLICE_PIXEL_SCALE;
use crate::io::error::{PaintError, Result, degenerate};
use crate::spatial::structure::Structure;

/// Transparent pixels between neighbouring slices
const SLICE_GAP: u32 = 1;

/// Render the painted structure into an in-memory slice sheet
///
/// Blocks missing from `colors` are left transparent.
///
/// # Errors
///
/// Returns `Degenerate` if the structure has no blocks
pub fn render_slices(structure: &Structure, colors: &ColorMap, pixel_scale: u32) -> Result<RgbaImage> {
    if structure.is_empty() {
        return Err(degenerate(&"cannot render a structure without blocks"));
    }

    let scale = pixel_scale.max(1);
    let [size_x, size_y, size_z] = structure.size();
    let tile_width = size_x * scale;
    let tile_height = size_z * scale;
    let width = size_y * tile_width + size_y.saturating_sub(1) * SLICE_GAP;

    let mut img: RgbaImage = ImageBuffer::new(width, tile_height);
    let min = structure.bounds().min;

    for block in structure.blocks() {
        let Some(color) = colors.get(&block.position) else {
            continue;
        };
        let local = [
            (block.position[0] - min[0]) as u32,
            (block.position[1] - min[1]) as u32,
            (block.position[2] - min[2]) as u32,
        ];
        let origin_x = local[1] * (tile_width + SLICE_GAP) + local[0] * scale;
        // Rows grow downwards, so +Z is drawn at the top of each tile
        let origin_y = (size_z - 1 - local[2]) * scale;
        let pixel = Rgba(color.to_rgba());

        for dy in 0..scale {
            for dx in 0..scale {
                img.put_pixel(origin_x + dx, origin_y + dy, pixel);
            }
        }
    }

    Ok(img)
}

/// Export the painted structure as a PNG slice sheet
///
/// # Errors
///
/// Returns an error if:
/// - The structure has no blocks
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_slices_as_png(structure: &Structure, colors: &ColorMap, output_path: &Path) -> Result<()> {
    let img = render_slices(structure, colors, SLICE_PIXEL_SCALE)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| PaintError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path).map_err(|e| PaintError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
