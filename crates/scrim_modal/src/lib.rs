//! Scrim Modal
//!
//! An animated modal overlay: a content card that fades and flips in and out
//! above a translucent full-screen backdrop, dismissed by pressing the
//! backdrop.
//!
//! # Architecture
//!
//! - **AnimatedModal**: owns the visibility scalar and the mounted flag
//! - **AnimationType**: four fixed opacity/transform recipes
//! - **CardPosition**: center, top or bottom anchoring above the backdrop
//! - **Backdrop**: press surface that forwards to the caller's dismiss callback
//! - **ModalConfig**: TOML-loadable presets for everything but visibility
//!
//! Transitions run on a `scrim_animation::AnimationScheduler`; the host ticks
//! it once per frame and paints whatever `AnimatedModal::render` returns.

pub mod animation_type;
pub mod backdrop;
pub mod config;
pub mod error;
pub mod modal;
pub mod position;
pub mod props;


pub use animation_type::{AnimationRecipe, AnimationType, Channel, ChannelKind};
pub use backdrop::{Backdrop, BackdropConfig, PressCallback};
pub use config::ModalConfig;
pub use error::{ModalError, Result};
pub use modal::{AnimatedModal, BackdropLayer, CardLayer, ModalFrame, ModalPhase};
pub use position::{CardPosition, Justify, PositionRule, DEFAULT_EDGE_OFFSET};
pub use props::{ModalProps, DEFAULT_DURATION_MS, MODAL_EASING};

/// Common imports for hosts embedding the modal
pub mod prelude {
    pub use crate::{
        AnimatedModal, AnimationType, BackdropConfig, CardPosition, ModalConfig, ModalFrame,
        ModalPhase, ModalProps,
    };
    pub use scrim_animation::{AnimationScheduler, SchedulerHandle};
    pub use scrim_core::{Color, Point, Rect, Size, Style, Transform};
}
