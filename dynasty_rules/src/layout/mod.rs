//! Proportional timeline layout.
//!
//! Eras are placed on one horizontal axis where every year takes the same number of
//! pixels, so the gap between two cards reflects the gap between their eras.
//!
//! 1. **Parameters**: min/max year over every span boundary, timeline width
//! 2. **Mapping**: `year_to_pixel` turns a year into an x offset
//! 3. **Cards**: `span_to_rect` places one era, widening very short eras
//! 4. **Scrolling**: `scroll_affordance` and `scroll_target` drive the arrow buttons

mod scroll;
mod ticks;

pub use scroll::*;
pub use ticks::*;

use serde::{Deserialize, Serialize};

use crate::eras::EraSpan;
use crate::error::{RulesError, RulesResult};

/// Horizontal pixels given to one year.
pub const DEFAULT_PIXELS_PER_YEAR: f64 = 3.0;

/// Narrowest card width, so a fifteen-year era is still legible and clickable.
pub const DEFAULT_MIN_CARD_WIDTH_PX: f64 = 160.0;

/// Tunables for the timeline view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub pixels_per_year: f64,
    pub min_card_width_px: f64,

    /// Extra scrollable room after the last year.
    pub trailing_padding_px: f64,

    /// Fraction of the viewport one arrow click scrolls.
    pub scroll_step_ratio: f64,

    /// Spacing of year markers along the axis.
    pub tick_interval_years: i32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            pixels_per_year: DEFAULT_PIXELS_PER_YEAR,
            min_card_width_px: DEFAULT_MIN_CARD_WIDTH_PX,
            trailing_padding_px: 400.0,
            scroll_step_ratio: 0.8,
            tick_interval_years: 200,
        }
    }
}

/// Values derived from the whole span collection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutParameters {
    pub min_year: i32,
    pub max_year: i32,
    /// Always positive.
    pub total_years: i32,
    pub pixels_per_year: f64,
    pub timeline_width_px: f64,
}

/// Horizontal placement of one era card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CardRect {
    pub left: f64,
    pub width: f64,
}

impl CardRect {
    /// Right edge of the card.
    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

/// A card rect tagged with the era it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedCard {
    pub id: String,
    pub rect: CardRect,
}

/// Compute layout parameters at the default scale.
pub fn compute_layout_parameters(spans: &[EraSpan]) -> RulesResult<LayoutParameters> {
    compute_layout_parameters_with_scale(spans, DEFAULT_PIXELS_PER_YEAR)
}

/// Compute layout parameters for the given pixels-per-year scale.
///
/// The range covers every start and end year of every span, so an era that outlasts
/// a later era's start still fits. Fails with `InvalidInput` when `spans` is empty,
/// when all boundaries fall on one year, when the range does not fit in an `i32`, or
/// when the scale is not a positive number.
pub fn compute_layout_parameters_with_scale(
    spans: &[EraSpan],
    pixels_per_year: f64,
) -> RulesResult<LayoutParameters> {
    if spans.is_empty() {
        return Err(RulesError::InvalidInput(
            "cannot lay out an empty era collection".to_string(),
        ));
    }
    if !pixels_per_year.is_finite() || pixels_per_year <= 0.0 {
        return Err(RulesError::InvalidInput(format!(
            "pixels per year must be positive, got {}",
            pixels_per_year
        )));
    }

    let years = spans.iter().flat_map(|s| [s.start_year, s.end_year]);
    let min_year = years.clone().min().unwrap_or_default();
    let max_year = years.max().unwrap_or_default();

    let total_years = max_year.checked_sub(min_year).ok_or_else(|| {
        RulesError::InvalidInput(format!(
            "era collection from year {} to {} is too long to lay out",
            min_year, max_year
        ))
    })?;
    if total_years <= 0 {
        return Err(RulesError::InvalidInput(format!(
            "era collection spans no time (every boundary is year {})",
            min_year
        )));
    }

    Ok(LayoutParameters {
        min_year,
        max_year,
        total_years,
        pixels_per_year,
        timeline_width_px: f64::from(total_years) * pixels_per_year,
    })
}

/// Map a year to its x offset on the timeline.
///
/// Years outside `[min_year, max_year]` extrapolate linearly.
pub fn year_to_pixel(year: i32, params: &LayoutParameters) -> f64 {
    let offset = f64::from(year) - f64::from(params.min_year);
    offset / f64::from(params.total_years) * params.timeline_width_px
}

/// Place one era card, never narrower than `min_width_px`.
pub fn span_to_rect(span: &EraSpan, params: &LayoutParameters, min_width_px: f64) -> CardRect {
    let left = year_to_pixel(span.start_year, params);
    let width = (year_to_pixel(span.end_year, params) - left).max(min_width_px);
    CardRect { left, width }
}

/// Place every span, preserving input order.
pub fn place_cards(
    spans: &[EraSpan],
    params: &LayoutParameters,
    min_width_px: f64,
) -> Vec<PlacedCard> {
    spans
        .iter()
        .map(|span| PlacedCard {
            id: span.id.clone(),
            rect: span_to_rect(span, params, min_width_px),
        })
        .collect()
}
