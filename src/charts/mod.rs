//! Chart rendering for the stock profile
//!
//! Every chart is drawn with [`plotters`] into an in-memory RGB buffer, then
//! written as an RGBA PNG whose background pixels are fully transparent.

pub mod bar;
pub mod dual_line;
pub mod scatter;
pub mod theme;
pub mod violin;

use std::path::Path;

use image::{Rgba, RgbaImage, RgbImage};
use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::info;

use crate::error::{ProfileError, Result};

pub use bar::{bar_positions, group_midpoints, group_positions, render_revenue_earnings, BarLayout};
pub use dual_line::render_price_comparison;
pub use scatter::render_eps_scatter;
pub use violin::{quarter_distributions, render_quarter_violins, QuarterDistribution};

pub const VIOLIN_FILE: &str = "netflix1.png";
pub const SCATTER_FILE: &str = "netflix2.png";
pub const BAR_FILE: &str = "netflix3.png";
pub const DUAL_LINE_FILE: &str = "netflix4.png";

/// 8x8 inches at 100 dpi
pub const CHART_SIZE: (u32, u32) = (800, 800);

pub type Canvas<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

/// Draw onto a fresh canvas and save it as a transparent PNG
pub fn render_png<F>(path: &Path, draw: F) -> Result<()>
where
    F: FnOnce(&Canvas<'_>) -> Result<()>,
{
    theme::ensure_fonts()?;

    let (width, height) = CHART_SIZE;
    let mut buffer = vec![0u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&theme::BACKGROUND)?;
        draw(&root)?;
        root.present()?;
    }

    save_transparent_png(buffer, CHART_SIZE, path)?;
    info!("🖼️  Saved {}", path.display());
    Ok(())
}

fn save_transparent_png(buffer: Vec<u8>, (width, height): (u32, u32), path: &Path) -> Result<()> {
    let rgb = RgbImage::from_raw(width, height, buffer)
        .ok_or_else(|| ProfileError::chart("pixel buffer does not match the chart size"))?;

    let key = theme::BACKGROUND;
    let mut rgba = RgbaImage::new(width, height);
    for (x, y, pixel) in rgb.enumerate_pixels() {
        let [r, g, b] = pixel.0;
        let alpha = if (r, g, b) == (key.0, key.1, key.2) { 0 } else { 255 };
        rgba.put_pixel(x, y, Rgba([r, g, b, alpha]));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    rgba.save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}
