//! Card anchor positions
//!
//! Maps the discrete `CardPosition` onto an absolute positioning rule inside
//! the full-screen layer that sits above the backdrop, and resolves that rule
//! to a concrete frame for a given viewport and card size.

use scrim_core::{Rect, Size};
use serde::Deserialize;

/// Default distance between the card and the edge it is anchored to
pub const DEFAULT_EDGE_OFFSET: f32 = 50.0;

/// Where the modal card sits on screen
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum CardPosition {
    #[default]
    Center,
    Top,
    Bottom,
}

impl CardPosition {
    /// Parse a position name; unknown names fall back to `Center`
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            "top" => CardPosition::Top,
            "bottom" => CardPosition::Bottom,
            "center" | "" => CardPosition::Center,
            other => {
                tracing::debug!(name = other, "unknown card position, using center");
                CardPosition::Center
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CardPosition::Center => "center",
            CardPosition::Top => "top",
            CardPosition::Bottom => "bottom",
        }
    }

    /// Absolute positioning rule for this anchor
    pub fn rule(&self, edge_offset: f32) -> PositionRule {
        match self {
            CardPosition::Center => PositionRule {
                top: Some(0.0),
                bottom: Some(0.0),
                left: 0.0,
                right: 0.0,
                justify: Justify::Center,
            },
            CardPosition::Top => PositionRule {
                top: Some(edge_offset),
                bottom: None,
                left: 0.0,
                right: 0.0,
                justify: Justify::Start,
            },
            CardPosition::Bottom => PositionRule {
                top: None,
                bottom: Some(edge_offset),
                left: 0.0,
                right: 0.0,
                justify: Justify::End,
            },
        }
    }
}

impl From<&str> for CardPosition {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl From<String> for CardPosition {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

/// Main-axis placement of the card within its positioned container
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Justify {
    Start,
    Center,
    End,
}

/// Absolute positioning: edge insets plus vertical justification
///
/// An unset `top`/`bottom` leaves that edge free; the card is always centered
/// horizontally between `left` and `right`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PositionRule {
    pub top: Option<f32>,
    pub bottom: Option<f32>,
    pub left: f32,
    pub right: f32,
    pub justify: Justify,
}

impl PositionRule {
    /// True when the rule pins all four edges to the viewport
    pub fn is_full_bleed(&self) -> bool {
        self.top == Some(0.0) && self.bottom == Some(0.0) && self.left == 0.0 && self.right == 0.0
    }

    /// Resolve the card frame for a viewport and card size
    pub fn resolve(&self, viewport: Size, card: Size) -> Rect {
        let span = (viewport.width - self.left - self.right).max(0.0);
        let x = self.left + (span - card.width) / 2.0;

        let y = match self.justify {
            Justify::Start => self.top.unwrap_or(0.0),
            Justify::End => viewport.height - self.bottom.unwrap_or(0.0) - card.height,
            Justify::Center => {
                let top = self.top.unwrap_or(0.0);
                let bottom = self.bottom.unwrap_or(0.0);
                let space = (viewport.height - top - bottom).max(0.0);
                top + (space - card.height) / 2.0
            }
        };

        Rect::new(x, y, card.width, card.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Size = Size::new(400.0, 800.0);
    const CARD: Size = Size::new(300.0, 200.0);

    #[test]
    fn test_center_is_full_bleed() {
        let rule = CardPosition::Center.rule(DEFAULT_EDGE_OFFSET);
        assert!(rule.is_full_bleed());
        assert_eq!(rule.resolve(VIEWPORT, CARD), Rect::new(50.0, 300.0, 300.0, 200.0));
    }

    #[test]
    fn test_top_is_offset_from_top() {
        let rule = CardPosition::Top.rule(DEFAULT_EDGE_OFFSET);
        assert!(!rule.is_full_bleed());
        assert_eq!(rule.top, Some(50.0));
        assert_eq!(rule.bottom, None);
        assert_eq!(rule.resolve(VIEWPORT, CARD), Rect::new(50.0, 50.0, 300.0, 200.0));
    }

    #[test]
    fn test_bottom_is_offset_from_bottom() {
        let rule = CardPosition::Bottom.rule(DEFAULT_EDGE_OFFSET);
        assert_eq!(rule.bottom, Some(50.0));
        assert_eq!(rule.top, None);
        assert_eq!(rule.resolve(VIEWPORT, CARD), Rect::new(50.0, 550.0, 300.0, 200.0));
    }

    #[test]
    fn test_custom_edge_offset() {
        let rule = CardPosition::Top.rule(12.0);
        assert_eq!(rule.resolve(VIEWPORT, CARD).y(), 12.0);
    }

    #[test]
    fn test_position_mapping_is_exhaustive_with_center_fallback() {
        for position in [CardPosition::Center, CardPosition::Top, CardPosition::Bottom] {
            assert_eq!(CardPosition::from_name(position.name()), position);
        }
        assert_eq!(CardPosition::from("left"), CardPosition::Center);
        assert_eq!(CardPosition::from("default"), CardPosition::Center);
        assert_eq!(CardPosition::default(), CardPosition::Center);
    }
}
