//! Visual themes: which colors and particle shape belong to each era.

mod registry;
mod selection;

pub use registry::*;
pub use selection::*;

use serde::{Deserialize, Serialize};

use crate::error::RulesError;

/// The particle shapes a theme can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    #[default]
    Star,
    Cloud,
    Petal,
}

/// A palette and particle shape pairing.
///
/// The palette is never empty; both [`ThemeConfig::new`] and deserialization enforce it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawThemeConfig")]
pub struct ThemeConfig {
    palette: Vec<String>,
    shape: ShapeKind,
}

#[derive(Deserialize)]
struct RawThemeConfig {
    palette: Vec<String>,
    #[serde(default)]
    shape: ShapeKind,
}

impl TryFrom<RawThemeConfig> for ThemeConfig {
    type Error = RulesError;

    fn try_from(raw: RawThemeConfig) -> Result<Self, Self::Error> {
        Self::new(raw.palette, raw.shape)
    }
}

impl ThemeConfig {
    /// Create a theme. Fails with `InvalidInput` on an empty palette.
    pub fn new<I, C>(palette: I, shape: ShapeKind) -> Result<Self, RulesError>
    where
        I: IntoIterator<Item = C>,
        C: Into<String>,
    {
        let palette: Vec<String> = palette.into_iter().map(Into::into).collect();
        if palette.is_empty() {
            return Err(RulesError::InvalidInput(
                "theme palette must contain at least one color".to_string(),
            ));
        }
        Ok(Self { palette, shape })
    }

    /// The neutral warm theme used whenever a key cannot be resolved.
    pub fn fallback() -> Self {
        Self {
            palette: vec![
                "#FFD700".to_string(),
                "#87CEEB".to_string(),
                "#FFB6C1".to_string(),
            ],
            shape: ShapeKind::Star,
        }
    }

    /// Colors in palette order.
    pub fn palette(&self) -> &[String] {
        &self.palette
    }

    /// Shape every particle of this theme takes.
    pub fn shape(&self) -> ShapeKind {
        self.shape
    }

    /// Get a palette color by index, wrapping around the palette length.
    pub fn color(&self, index: usize) -> &str {
        &self.palette[index % self.palette.len()]
    }
}
