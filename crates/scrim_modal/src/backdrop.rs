//! Backdrop layer
//!
//! The backdrop is a full-screen translucent layer beneath the modal card.
//! It owns no dismissal policy: every press is forwarded to the caller's
//! callback, whatever the modal's visibility.

use std::sync::Arc;

use scrim_animation::Interpolation;
use scrim_core::Color;
use serde::Deserialize;

/// Callback invoked when the backdrop is pressed
pub type PressCallback = Arc<dyn Fn() + Send + Sync>;

/// Configuration for the modal backdrop
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct BackdropConfig {
    /// Backdrop color (usually semi-transparent black)
    pub color: Color,
    /// Opacity applied while a press is held (1.0 = no press feedback)
    #[serde(alias = "activeOpacity")]
    pub active_opacity: f32,
    /// Fade the backdrop together with the card instead of showing it at
    /// full color for as long as the content is mounted
    #[serde(alias = "fadeWithContent")]
    pub fade_with_content: bool,
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            color: Color::rgba(0.0, 0.0, 0.0, 0.5),
            active_opacity: 1.0,
            fade_with_content: false,
        }
    }
}

impl BackdropConfig {
    /// Create a dark semi-transparent backdrop
    pub fn dark() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn active_opacity(mut self, opacity: f32) -> Self {
        self.active_opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn fade_with_content(mut self, fade: bool) -> Self {
        self.fade_with_content = fade;
        self
    }

    /// Backdrop color at `visibility`
    pub fn color_at(&self, visibility: f32) -> Color {
        if !self.fade_with_content {
            return self.color;
        }
        Interpolation::new(self.color.with_alpha(0.0), self.color).sample(visibility)
    }
}

/// The press surface covering the viewport
pub struct Backdrop {
    on_press: PressCallback,
    pressed: bool,
}

impl Backdrop {
    pub fn new(on_press: PressCallback) -> Self {
        Self {
            on_press,
            pressed: false,
        }
    }

    /// Forward a press to the dismiss callback
    pub fn press(&self) {
        tracing::debug!("backdrop pressed");
        (self.on_press)();
    }

    /// Track whether a press is currently held, for feedback opacity
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Layer opacity given the current press state
    pub fn opacity(&self, config: &BackdropConfig) -> f32 {
        if self.pressed {
            config.active_opacity
        } else {
            1.0
        }
    }
}

impl std::fmt::Debug for Backdrop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Backdrop")
            .field("on_press", &"Fn()")
            .field("pressed", &self.pressed)
            .finish()
    }
}
