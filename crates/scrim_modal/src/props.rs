//! Modal properties

use scrim_animation::{Easing, TimingConfig};
use scrim_core::Style;

use crate::animation_type::AnimationType;
use crate::backdrop::BackdropConfig;
use crate::position::{CardPosition, DEFAULT_EDGE_OFFSET};

/// Default transition duration in milliseconds
pub const DEFAULT_DURATION_MS: u32 = 300;

/// Easing used for every modal transition (cubic, t³)
pub const MODAL_EASING: Easing = Easing::EaseInCubic;

/// Everything the host passes to the modal on each render
#[derive(Clone, Debug, PartialEq)]
pub struct ModalProps {
    /// Target shown/hidden state
    pub visible: bool,
    /// Skip the interpolated opacity/transform entirely
    pub no_animation: bool,
    pub animation_type: AnimationType,
    pub card_position: CardPosition,
    /// Distance from the anchored edge for `Top`/`Bottom` positions
    pub edge_offset: f32,
    pub duration_ms: u32,
    /// Forwarded to the animation driver
    pub use_native_driver: bool,
    /// Passthrough style, merged after the computed animation style
    pub style: Style,
    pub backdrop: BackdropConfig,
}

impl Default for ModalProps {
    fn default() -> Self {
        Self {
            visible: false,
            no_animation: false,
            animation_type: AnimationType::Default,
            card_position: CardPosition::Center,
            edge_offset: DEFAULT_EDGE_OFFSET,
            duration_ms: DEFAULT_DURATION_MS,
            use_native_driver: false,
            style: Style::default(),
            backdrop: BackdropConfig::default(),
        }
    }
}

impl ModalProps {
    pub fn new(visible: bool) -> Self {
        Self {
            visible,
            ..Self::default()
        }
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn no_animation(mut self, disabled: bool) -> Self {
        self.no_animation = disabled;
        self
    }

    pub fn animation_type(mut self, animation_type: impl Into<AnimationType>) -> Self {
        self.animation_type = animation_type.into();
        self
    }

    pub fn card_position(mut self, position: impl Into<CardPosition>) -> Self {
        self.card_position = position.into();
        self
    }

    pub fn edge_offset(mut self, offset: f32) -> Self {
        self.edge_offset = offset;
        self
    }

    pub fn duration_ms(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn native_driver(mut self, enabled: bool) -> Self {
        self.use_native_driver = enabled;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn backdrop(mut self, backdrop: BackdropConfig) -> Self {
        self.backdrop = backdrop;
        self
    }

    /// Timing parameters for a visibility transition
    pub fn timing(&self) -> TimingConfig {
        TimingConfig::new(self.duration_ms)
            .easing(MODAL_EASING)
            .native_driver(self.use_native_driver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let props = ModalProps::default();
        assert!(!props.visible);
        assert!(!props.no_animation);
        assert_eq!(props.animation_type, AnimationType::Default);
        assert_eq!(props.card_position, CardPosition::Center);
        assert_eq!(props.duration_ms, 300);
        assert!(props.style.is_empty());
    }

    #[test]
    fn test_builder_accepts_names() {
        let props = ModalProps::new(true)
            .animation_type("horizontal")
            .card_position("bottom")
            .duration_ms(150)
            .native_driver(true);
        assert_eq!(props.animation_type, AnimationType::Horizontal);
        assert_eq!(props.card_position, CardPosition::Bottom);

        let timing = props.timing();
        assert_eq!(timing.duration_ms, 150);
        assert_eq!(timing.easing, Easing::EaseInCubic);
        assert!(timing.use_native_driver);
    }
}
