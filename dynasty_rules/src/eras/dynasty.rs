//! Dynasty records.

use serde::{Deserialize, Serialize};

use super::EraSpan;
use crate::error::RulesResult;

/// A dynasty as the timeline shows it on its card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dynasty {
    /// Stable key, also used as the theme key.
    pub id: String,
    pub name: String,
    pub english_name: String,
    pub start_year: i32,
    pub end_year: i32,
    pub capital: String,
    pub founder: String,
    /// Card accent color as a CSS hex string.
    pub color: String,
    pub symbol: String,
}

impl Dynasty {
    /// Create a dynasty with only the fields the layout needs; the rest stay empty.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        start_year: i32,
        end_year: i32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            english_name: String::new(),
            start_year,
            end_year,
            capital: String::new(),
            founder: String::new(),
            color: String::new(),
            symbol: String::new(),
        }
    }

    /// The validated era span of this dynasty.
    pub fn span(&self) -> RulesResult<EraSpan> {
        EraSpan::new(self.id.clone(), self.start_year, self.end_year)
    }

    /// Number of years the dynasty lasted.
    pub fn duration(&self) -> i64 {
        i64::from(self.end_year) - i64::from(self.start_year)
    }

    /// Card title, e.g. `唐朝`.
    pub fn title(&self) -> String {
        format!("{}朝", self.name)
    }
}
