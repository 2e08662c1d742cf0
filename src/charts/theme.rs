//! Dark chart theme, Set1 palette and the bundled font

use std::ops::Range;
use std::sync::OnceLock;

use plotters::coord::ranged1d::{DefaultFormatting, KeyPointHint, Ranged};
use plotters::prelude::*;
use plotters::style::register_font;

use crate::error::{ProfileError, Result};

/// Background fill; keyed out to transparent when the PNG is written
pub const BACKGROUND: RGBColor = RGBColor(0, 0, 0);
pub const FOREGROUND: RGBColor = RGBColor(255, 255, 255);
pub const GRID: RGBColor = RGBColor(70, 70, 70);

/// ColorBrewer Set1, first five entries
pub const SET1: [RGBColor; 5] = [
    RGBColor(228, 26, 28),
    RGBColor(55, 126, 184),
    RGBColor(77, 175, 74),
    RGBColor(152, 78, 163),
    RGBColor(255, 127, 0),
];

pub const FONT_FAMILY: &str = "sans-serif";

static DEJAVU_SANS: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");
static FONT_REGISTRATION: OnceLock<std::result::Result<(), String>> = OnceLock::new();

pub fn palette(index: usize) -> RGBColor {
    SET1[index % SET1.len()]
}

/// Register the bundled font under the family every chart uses
pub fn ensure_fonts() -> Result<()> {
    FONT_REGISTRATION
        .get_or_init(|| {
            register_font(FONT_FAMILY, FontStyle::Normal, DEJAVU_SANS)
                .map_err(|_| "bundled font is unreadable".to_string())
        })
        .clone()
        .map_err(ProfileError::Chart)
}

pub fn caption_style() -> TextStyle<'static> {
    (FONT_FAMILY, 30).into_font().color(&FOREGROUND)
}

pub fn panel_caption_style() -> TextStyle<'static> {
    (FONT_FAMILY, 24).into_font().color(&FOREGROUND)
}

pub fn axis_desc_style() -> TextStyle<'static> {
    (FONT_FAMILY, 20).into_font().color(&FOREGROUND)
}

pub fn tick_label_style() -> TextStyle<'static> {
    (FONT_FAMILY, 15).into_font().color(&FOREGROUND)
}

/// Linear f64 axis whose key points are exactly the category positions
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryAxis {
    range: Range<f64>,
    ticks: Vec<f64>,
}

impl CategoryAxis {
    pub fn new(range: Range<f64>, ticks: Vec<f64>) -> Self {
        Self { range, ticks }
    }

    pub fn ticks(&self) -> &[f64] {
        &self.ticks
    }
}

impl Ranged for CategoryAxis {
    type ValueType = f64;
    type FormatOption = DefaultFormatting;

    fn map(&self, value: &f64, limit: (i32, i32)) -> i32 {
        let span = self.range.end - self.range.start;
        if span <= 0.0 {
            return (limit.0 + limit.1) / 2;
        }
        let fraction = (value - self.range.start) / span;
        limit.0 + ((limit.1 - limit.0) as f64 * fraction).round() as i32
    }

    fn key_points<Hint: KeyPointHint>(&self, hint: Hint) -> Vec<f64> {
        if hint.max_num_points() == 0 {
            return Vec::new();
        }
        self.ticks.clone()
    }

    fn range(&self) -> Range<f64> {
        self.range.clone()
    }
}

/// Label of the category whose tick sits at `x`, or nothing between ticks
pub fn category_label(positions: &[f64], labels: &[String], x: f64) -> String {
    positions
        .iter()
        .zip(labels)
        .find(|(p, _)| (*p - x).abs() < 1e-6)
        .map(|(_, label)| label.clone())
        .unwrap_or_default()
}

/// Pad a value range so markers at the edges stay inside the plot
pub fn padded_range(min: f64, max: f64, fraction: f64) -> (f64, f64) {
    let span = max - min;
    let pad = if span > 0.0 { span * fraction } else { min.abs().max(1.0) * fraction };
    (min - pad, max + pad)
}
