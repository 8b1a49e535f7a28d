//! Year markers along the timeline axis.

use serde::{Deserialize, Serialize};

use super::{year_to_pixel, LayoutParameters};
use crate::eras::format_year;
use crate::error::{RulesError, RulesResult};

/// A labelled marker on the axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearTick {
    pub year: i32,
    pub x: f64,
    pub label: String,
}

/// Markers at every multiple of `interval_years` inside `[min_year, max_year]`.
pub fn year_ticks(params: &LayoutParameters, interval_years: i32) -> RulesResult<Vec<YearTick>> {
    if interval_years <= 0 {
        return Err(RulesError::InvalidInput(format!(
            "tick interval must be positive, got {}",
            interval_years
        )));
    }

    let interval = i64::from(interval_years);
    let min = i64::from(params.min_year);
    let max = i64::from(params.max_year);

    // First multiple at or after min_year.
    let first = -((-min).div_euclid(interval)) * interval;

    let ticks = (0..)
        .map(|step| first + step * interval)
        .take_while(|year| *year <= max)
        .filter_map(|year| i32::try_from(year).ok())
        .map(|year| YearTick {
            year,
            x: year_to_pixel(year, params),
            label: format_year(year),
        })
        .collect();

    Ok(ticks)
}
