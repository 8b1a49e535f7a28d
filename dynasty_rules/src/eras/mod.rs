//! Era definitions for the timeline.

mod catalog;
mod dynasty;

pub use catalog::*;
pub use dynasty::*;

use serde::{Deserialize, Serialize};

use crate::error::{RulesError, RulesResult};

/// A named historical interval. Negative years are BCE.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EraSpan {
    pub id: String,
    pub start_year: i32,
    pub end_year: i32,
}

impl EraSpan {
    /// Create a span, rejecting an end year that precedes the start year.
    pub fn new(id: impl Into<String>, start_year: i32, end_year: i32) -> RulesResult<Self> {
        let id = id.into();
        if end_year < start_year {
            return Err(RulesError::InvalidInput(format!(
                "era '{}' ends ({}) before it starts ({})",
                id, end_year, start_year
            )));
        }
        Ok(Self {
            id,
            start_year,
            end_year,
        })
    }

    /// Length of the span in years. Widened so any pair of `i32` years fits.
    pub fn duration(&self) -> i64 {
        i64::from(self.end_year) - i64::from(self.start_year)
    }

    /// Check if a year falls inside the span (inclusive on both ends).
    pub fn contains(&self, year: i32) -> bool {
        (self.start_year..=self.end_year).contains(&year)
    }
}

/// Render a year the way timeline labels show it.
///
/// Positive years are labelled as CE (`公元618年`); zero and negative years as BCE
/// (`公元前221年`).
pub fn format_year(year: i32) -> String {
    if year > 0 {
        format!("公元{}年", year)
    } else {
        format!("公元前{}年", year.unsigned_abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_rejects_reversed_years() {
        let result = EraSpan::new("broken", 100, 50);
        assert!(matches!(result, Err(RulesError::InvalidInput(_))));
    }

    #[test]
    fn test_zero_length_span_is_allowed() {
        let span = EraSpan::new("instant", 10, 10).unwrap();
        assert_eq!(span.duration(), 0);
        assert!(span.contains(10));
    }

    #[test]
    fn test_bce_duration() {
        let span = EraSpan::new("qin", -221, -206).unwrap();
        assert_eq!(span.duration(), 15);
        assert!(span.contains(-210));
        assert!(!span.contains(-205));
    }

    #[test]
    fn test_full_range_duration() {
        let span = EraSpan::new("all", i32::MIN, i32::MAX).unwrap();
        assert_eq!(span.duration(), i64::from(u32::MAX));
    }

    #[test]
    fn test_format_year() {
        assert_eq!(format_year(618), "公元618年");
        assert_eq!(format_year(-221), "公元前221年");
        assert_eq!(format_year(0), "公元前0年");
    }
}
