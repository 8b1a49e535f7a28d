//! Scroll affordances for the horizontally scrolling timeline.

use serde::{Deserialize, Serialize};

use super::{LayoutConfig, LayoutParameters};

/// Which scroll arrows should be visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScrollAffordance {
    pub can_scroll_left: bool,
    pub can_scroll_right: bool,
}

/// Direction of an arrow-button scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollDirection {
    Left,
    Right,
}

/// Decide which arrows to show for the current scroll position.
///
/// Called on every scroll and resize event.
pub fn scroll_affordance(
    scroll_offset_px: f64,
    viewport_width_px: f64,
    content_width_px: f64,
) -> ScrollAffordance {
    ScrollAffordance {
        can_scroll_left: scroll_offset_px > 0.0,
        can_scroll_right: scroll_offset_px < content_width_px - viewport_width_px,
    }
}

/// Full scrollable width: the timeline plus trailing padding, at least one viewport.
pub fn content_width(params: &LayoutParameters, viewport_width_px: f64, config: &LayoutConfig) -> f64 {
    (params.timeline_width_px + config.trailing_padding_px).max(viewport_width_px)
}

/// Offset after one arrow click, kept inside the scrollable range.
pub fn scroll_target(
    scroll_offset_px: f64,
    viewport_width_px: f64,
    content_width_px: f64,
    direction: ScrollDirection,
    config: &LayoutConfig,
) -> f64 {
    let step = viewport_width_px * config.scroll_step_ratio;
    let max_offset = (content_width_px - viewport_width_px).max(0.0);
    let target = match direction {
        ScrollDirection::Left => scroll_offset_px - step,
        ScrollDirection::Right => scroll_offset_px + step,
    };
    target.clamp(0.0, max_offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eras::EraSpan;
    use crate::layout::compute_layout_parameters;

    #[test]
    fn test_scroll_affordance_cases() {
        assert_eq!(
            scroll_affordance(0.0, 500.0, 500.0),
            ScrollAffordance {
                can_scroll_left: false,
                can_scroll_right: false
            }
        );
        assert_eq!(
            scroll_affordance(0.0, 500.0, 1000.0),
            ScrollAffordance {
                can_scroll_left: false,
                can_scroll_right: true
            }
        );
        assert_eq!(
            scroll_affordance(500.0, 500.0, 1000.0),
            ScrollAffordance {
                can_scroll_left: true,
                can_scroll_right: false
            }
        );
    }

    #[test]
    fn test_content_width_padding() {
        let spans = vec![EraSpan::new("a", 0, 100).unwrap(), EraSpan::new("b", 100, 200).unwrap()];
        let params = compute_layout_parameters(&spans).unwrap();
        let config = LayoutConfig::default();

        assert!((content_width(&params, 800.0, &config) - 1000.0).abs() < 1e-9);
        assert!((content_width(&params, 1200.0, &config) - 1200.0).abs() < 1e-9);
    }

    #[test]
    fn test_scroll_target_steps_and_clamps() {
        let config = LayoutConfig::default();

        let right = scroll_target(0.0, 1000.0, 5000.0, ScrollDirection::Right, &config);
        assert!((right - 800.0).abs() < 1e-9);

        let left = scroll_target(300.0, 1000.0, 5000.0, ScrollDirection::Left, &config);
        assert_eq!(left, 0.0);

        let end = scroll_target(3900.0, 1000.0, 5000.0, ScrollDirection::Right, &config);
        assert_eq!(end, 4000.0);

        // Content narrower than the viewport never scrolls.
        let none = scroll_target(0.0, 1000.0, 600.0, ScrollDirection::Right, &config);
        assert_eq!(none, 0.0);
    }
}
