//! Which theme key the host should hand to the animator.

use serde::{Deserialize, Serialize};

use super::DEFAULT_THEME_KEY;

/// The era the user clicked and the era under the pointer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeSelection {
    pub selected: Option<String>,
    pub hovered: Option<String>,
}

impl ThemeSelection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// A click wins over a hover; with neither, the default theme applies.
    pub fn current_key(&self) -> &str {
        self.selected
            .as_deref()
            .or(self.hovered.as_deref())
            .unwrap_or(DEFAULT_THEME_KEY)
    }

    pub fn select(&mut self, id: impl Into<String>) {
        self.selected = Some(id.into());
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Set or clear the hovered era.
    pub fn hover(&mut self, id: Option<String>) {
        self.hovered = id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_priority() {
        let mut selection = ThemeSelection::new();
        assert_eq!(selection.current_key(), DEFAULT_THEME_KEY);

        selection.hover(Some("song".to_string()));
        assert_eq!(selection.current_key(), "song");

        selection.select("tang");
        assert_eq!(selection.current_key(), "tang");

        selection.hover(None);
        selection.clear_selection();
        assert_eq!(selection.current_key(), DEFAULT_THEME_KEY);
    }
}
