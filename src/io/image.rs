//! PNG rendering of charts with ragged-row padding and repeats

use std::path::Path;

use image::{Rgba, RgbaImage};
use log::info;

use crate::io::configuration::{DEFAULT_CELL_SIZE, MAX_CELL_SIZE, MAX_RENDER_PIXELS, MAX_REPEAT};
use crate::io::error::{ChartError, Result, file_system_error, invalid_parameter};
use crate::state::pattern::PatternState;

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// View parameters for chart rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Side length of one stitch in pixels (the zoom level)
    pub cell_size: u32,
    /// Number of chart copies across
    pub repeat_x: u32,
    /// Number of chart copies down
    pub repeat_y: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            repeat_x: 1,
            repeat_y: 1,
        }
    }
}

impl RenderOptions {
    /// Check every option is within its accepted range
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::InvalidParameter`] naming the first option out of range
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_CELL_SIZE).contains(&self.cell_size) {
            return Err(invalid_parameter(
                "cell_size",
                &self.cell_size,
                &format!("must be between 1 and {MAX_CELL_SIZE}"),
            ));
        }
        for (parameter, value) in [("repeat_x", self.repeat_x), ("repeat_y", self.repeat_y)] {
            if !(1..=MAX_REPEAT).contains(&value) {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must be between 1 and {MAX_REPEAT}"),
                ));
            }
        }
        Ok(())
    }
}

fn scaled(count: usize, cell_size: u32, repeat: u32) -> Result<(u32, u32)> {
    let too_large = || ChartError::InvalidPattern {
        reason: "chart is too large to render".to_string(),
    };
    let tile = u32::try_from(count)
        .ok()
        .and_then(|n| n.checked_mul(cell_size))
        .ok_or_else(too_large)?;
    let total = tile.checked_mul(repeat).ok_or_else(too_large)?;
    Ok((tile, total))
}

/// Paint the chart in its effective colours
///
/// Each stitch becomes a square of `cell_size` pixels. Cells past the end of
/// a short row stay transparent.
///
/// # Errors
///
/// Returns an error if:
/// - The options are out of range
/// - The chart has no stitches
/// - The image would exceed [`MAX_RENDER_PIXELS`]
pub fn render_chart(state: &PatternState, options: &RenderOptions) -> Result<RgbaImage> {
    options.validate()?;
    if state.matrix().is_empty() {
        return Err(ChartError::InvalidPattern {
            reason: "chart has no stitches".to_string(),
        });
    }

    let grid = state.matrix().to_padded_array();
    let colors = state.effective_colors();
    let (rows, cols) = grid.dim();
    let cell = options.cell_size;
    let (tile_width, width) = scaled(cols, cell, options.repeat_x)?;
    let (tile_height, height) = scaled(rows, cell, options.repeat_y)?;
    if u64::from(width) * u64::from(height) > MAX_RENDER_PIXELS {
        return Err(ChartError::InvalidPattern {
            reason: format!("{width}x{height} image exceeds {MAX_RENDER_PIXELS} pixels"),
        });
    }

    Ok(RgbaImage::from_fn(width, height, |x, y| {
        let col = ((x % tile_width) / cell) as usize;
        let row = ((y % tile_height) / cell) as usize;
        grid.get((row, col))
            .copied()
            .flatten()
            .and_then(|symbol| colors.get(&symbol))
            .map_or(TRANSPARENT, |color| Rgba(color.to_rgba()))
    }))
}

/// Render the chart and save it as a PNG, creating parent directories
///
/// # Errors
///
/// Returns an error if:
/// - Rendering fails (see [`render_chart`])
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_chart_as_png(
    state: &PatternState,
    options: &RenderOptions,
    output_path: &Path,
) -> Result<()> {
    let img = render_chart(state, options)?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system_error(parent, "create directory", e))?;
    }

    img.save(output_path)
        .map_err(|e| ChartError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    info!(
        "rendered {}x{} chart to {}",
        img.width(),
        img.height(),
        output_path.display()
    );
    Ok(())
}
