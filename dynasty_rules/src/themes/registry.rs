//! Theme registry - the id to theme table the animator resolves keys against.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

use super::{ShapeKind, ThemeConfig};
use crate::error::{RulesError, RulesResult};

/// Key the host passes when nothing is selected or hovered.
pub const DEFAULT_THEME_KEY: &str = "default";

/// An owned, read-only table of themes plus the theme used when a key is missing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeRegistry {
    #[serde(default = "ThemeConfig::fallback")]
    fallback: ThemeConfig,
    #[serde(default)]
    themes: HashMap<String, ThemeConfig>,
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new(ThemeConfig::fallback())
    }
}

impl ThemeRegistry {
    /// Create a registry holding only a fallback theme.
    pub fn new(fallback: ThemeConfig) -> Self {
        Self {
            fallback,
            themes: HashMap::new(),
        }
    }

    /// The palettes for the built-in dynasties.
    pub fn builtin() -> Self {
        let entries: [(&str, [&str; 3], ShapeKind); 7] = [
            ("qin", ["#FFD700", "#FFA500", "#FF6347"], ShapeKind::Star),
            ("han", ["#FFD700", "#FFFF00", "#FFA500"], ShapeKind::Star),
            ("tang", ["#FF69B4", "#FFB6C1", "#FFC0CB"], ShapeKind::Petal),
            ("song", ["#87CEEB", "#B0E0E6", "#E0F6FF"], ShapeKind::Cloud),
            ("yuan", ["#4169E1", "#6495ED", "#87CEFA"], ShapeKind::Star),
            ("ming", ["#DC143C", "#FF6347", "#FFB6C1"], ShapeKind::Petal),
            ("qing", ["#9370DB", "#BA55D3", "#DDA0DD"], ShapeKind::Star),
        ];

        let mut registry = Self::default();
        for (key, palette, shape) in entries {
            registry.themes.insert(
                key.to_string(),
                ThemeConfig {
                    palette: palette.iter().map(|c| c.to_string()).collect(),
                    shape,
                },
            );
        }
        registry
            .themes
            .insert(DEFAULT_THEME_KEY.to_string(), registry.fallback.clone());
        registry
    }

    /// Parse a registry from TOML.
    ///
    /// ```toml
    /// [fallback]
    /// palette = ["#FFD700"]
    ///
    /// [themes.tang]
    /// palette = ["#FF69B4", "#FFB6C1"]
    /// shape = "petal"
    /// ```
    pub fn from_toml(source: &str) -> RulesResult<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Register or replace a theme.
    pub fn insert(&mut self, key: impl Into<String>, theme: ThemeConfig) {
        self.themes.insert(key.into(), theme);
    }

    /// Look up a theme by key.
    pub fn resolve(&self, key: &str) -> RulesResult<&ThemeConfig> {
        self.themes
            .get(key)
            .ok_or_else(|| RulesError::UnknownTheme(key.to_string()))
    }

    /// Look up a theme, substituting the fallback for unknown keys.
    ///
    /// Returns the theme and whether the fallback was used.
    pub fn resolve_or_fallback(&self, key: &str) -> (&ThemeConfig, bool) {
        match self.resolve(key) {
            Ok(theme) => (theme, false),
            Err(err) => {
                warn!(error = %err, "using fallback theme");
                (&self.fallback, true)
            }
        }
    }

    /// The theme used for unknown keys.
    pub fn fallback(&self) -> &ThemeConfig {
        &self.fallback
    }

    /// Check if a key is registered.
    pub fn contains(&self, key: &str) -> bool {
        self.themes.contains_key(key)
    }

    /// Number of registered themes (the fallback is not counted unless registered).
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Check if no themes are registered.
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}
