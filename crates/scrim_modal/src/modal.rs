//! Animated modal
//!
//! `AnimatedModal` turns a boolean "should be visible" prop into a continuous
//! style over time. It owns one animatable scalar, `visibility`, in `[0, 1]`,
//! and one flag, `rendered`, that says whether the card content is mounted.
//!
//! - Show: `rendered` flips to true immediately, then `visibility` eases to 1,
//!   so the entering content is visible through the fade-in.
//! - Hide: `visibility` eases to 0 and `rendered` flips to false only when
//!   that transition completes, so the exit animation plays before unmount.
//! - A new request mid-flight retargets from the current value. The
//!   superseded transition never unmounts content.
//!
//! # Example
//!
//! ```ignore
//! use scrim_modal::prelude::*;
//!
//! let scheduler = AnimationScheduler::new();
//! let mut modal = AnimatedModal::new(
//!     scheduler.handle(),
//!     ModalProps::new(false).animation_type(AnimationType::Vertical),
//!     "Are you sure?",
//!     || tracing::info!("dismiss requested"),
//! );
//!
//! modal.set_visible(true);
//! assert!(modal.is_rendered());
//!
//! // Each frame:
//! scheduler.tick();
//! if let Some(frame) = modal.render(Size::new(390.0, 844.0)) {
//!     // paint frame.backdrop, then frame.card with *frame.content
//! }
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use scrim_animation::{AnimatedValue, SchedulerHandle};
use scrim_core::{Color, Point, Rect, Size, Style};

use crate::backdrop::Backdrop;
use crate::position::PositionRule;
use crate::props::ModalProps;

// =============================================================================
// ModalPhase
// =============================================================================

/// Lifecycle phase, derived from the visibility scalar and the mounted flag
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ModalPhase {
    /// Content is unmounted
    #[default]
    Closed,
    /// Enter transition is playing
    Opening,
    /// Fully shown and at rest
    Open,
    /// Exit transition is playing (content still mounted)
    Closing,
}

impl ModalPhase {
    /// Check if the modal should be painted
    pub fn is_visible(&self) -> bool {
        !matches!(self, ModalPhase::Closed)
    }

    /// Check if the modal is fully open
    pub fn is_open(&self) -> bool {
        matches!(self, ModalPhase::Open)
    }

    /// Check if a transition is playing
    pub fn is_animating(&self) -> bool {
        matches!(self, ModalPhase::Opening | ModalPhase::Closing)
    }
}

// =============================================================================
// ModalFrame
// =============================================================================

/// The full-screen backdrop layer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackdropLayer {
    pub rect: Rect,
    pub color: Color,
    /// Press-feedback opacity
    pub opacity: f32,
}

/// The positioned card layer, stacked above the backdrop
#[derive(Clone, Debug, PartialEq)]
pub struct CardLayer {
    pub rect: Rect,
    pub rule: PositionRule,
    /// Animated style with the passthrough style merged on top
    pub style: Style,
}

/// One render of a mounted modal
#[derive(Debug)]
pub struct ModalFrame<'a, C> {
    pub phase: ModalPhase,
    pub backdrop: BackdropLayer,
    pub card: CardLayer,
    pub content: &'a C,
}

// =============================================================================
// AnimatedModal
// =============================================================================

/// An animated modal overlay holding content of type `C`
pub struct AnimatedModal<C> {
    props: ModalProps,
    visibility: AnimatedValue,
    /// Whether the content subtree is mounted
    rendered: Arc<AtomicBool>,
    /// Latest requested visibility, read by completion callbacks
    target_visible: Arc<AtomicBool>,
    backdrop: Backdrop,
    /// Measured card size reported by the host layout
    content_size: Option<Size>,
    children: C,
}

impl<C> AnimatedModal<C> {
    /// Create a modal
    ///
    /// The modal starts at rest in the state `props.visible` asks for: fully
    /// shown and mounted, or hidden and unmounted. No transition plays.
    pub fn new<F>(handle: SchedulerHandle, props: ModalProps, children: C, on_backdrop_press: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        let visible = props.visible;
        Self {
            props,
            visibility: AnimatedValue::new(handle, if visible { 1.0 } else { 0.0 }),
            rendered: Arc::new(AtomicBool::new(visible)),
            target_visible: Arc::new(AtomicBool::new(visible)),
            backdrop: Backdrop::new(Arc::new(on_backdrop_press)),
            content_size: None,
            children,
        }
    }

    /// Props as of the latest update
    pub fn props(&self) -> &ModalProps {
        &self.props
    }

    /// Apply a full prop update, as on a host re-render
    pub fn set_props(&mut self, props: ModalProps) {
        let visible = props.visible;
        self.props = ModalProps {
            visible: self.props.visible,
            ..props
        };
        self.set_visible(visible);
    }

    /// Request shown or hidden; no-op if already the requested target
    pub fn set_visible(&mut self, visible: bool) {
        if visible == self.props.visible {
            return;
        }
        self.props.visible = visible;
        self.start_transition(visible);
    }

    fn start_transition(&mut self, visible: bool) {
        self.target_visible.store(visible, Ordering::SeqCst);
        if visible {
            self.rendered.store(true, Ordering::SeqCst);
        }

        tracing::debug!(
            visible,
            from = self.visibility.get(),
            duration_ms = self.props.duration_ms,
            animation_type = self.props.animation_type.name(),
            "AnimatedModal: visibility requested"
        );

        let rendered = Arc::clone(&self.rendered);
        let target_visible = Arc::clone(&self.target_visible);
        let target = if visible { 1.0 } else { 0.0 };

        self.visibility
            .animate_to(target, self.props.timing(), move |finished| {
                if !finished {
                    tracing::trace!("AnimatedModal: transition superseded");
                    return;
                }
                if target_visible.load(Ordering::SeqCst) {
                    tracing::debug!("AnimatedModal: shown");
                } else {
                    rendered.store(false, Ordering::SeqCst);
                    tracing::debug!("AnimatedModal: hidden, content unmounted");
                }
            });
    }

    /// Current value of the visibility scalar
    pub fn visibility(&self) -> f32 {
        self.visibility.get()
    }

    /// Whether the content subtree is mounted
    pub fn is_rendered(&self) -> bool {
        self.rendered.load(Ordering::SeqCst)
    }

    /// Latest requested visibility
    pub fn is_visible(&self) -> bool {
        self.props.visible
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> ModalPhase {
        if !self.is_rendered() {
            return ModalPhase::Closed;
        }
        match (self.props.visible, self.visibility.is_animating()) {
            (true, true) => ModalPhase::Opening,
            (true, false) => ModalPhase::Open,
            // At rest but the completion hasn't been delivered yet
            (false, _) => ModalPhase::Closing,
        }
    }

    /// Style sampled from the selected family; `None` with `no_animation`
    pub fn animated_style(&self) -> Option<Style> {
        if self.props.no_animation {
            return None;
        }
        Some(self.props.animation_type.recipe().sample(self.visibility()))
    }

    /// Animated style with the passthrough style merged after it
    pub fn composed_style(&self) -> Style {
        match self.animated_style() {
            Some(animated) => animated.merge(&self.props.style),
            None => self.props.style.clone(),
        }
    }

    /// Content, only while mounted
    pub fn children(&self) -> Option<&C> {
        self.is_rendered().then_some(&self.children)
    }

    /// Record the card size measured by the host layout
    ///
    /// Explicit `width`/`height` in the passthrough style take precedence.
    pub fn set_content_size(&mut self, size: Size) {
        self.content_size = Some(size);
    }

    fn card_size(&self) -> Size {
        let measured = self.content_size.unwrap_or(Size::ZERO);
        Size::new(
            self.props.style.width.unwrap_or(measured.width),
            self.props.style.height.unwrap_or(measured.height),
        )
    }

    /// Frame of the card within `viewport`
    pub fn card_frame(&self, viewport: Size) -> Rect {
        self.props
            .card_position
            .rule(self.props.edge_offset)
            .resolve(viewport, self.card_size())
    }

    /// Build this frame's layers, or `None` while unmounted
    pub fn render(&self, viewport: Size) -> Option<ModalFrame<'_, C>> {
        if !self.is_rendered() {
            return None;
        }

        let backdrop_color = if self.props.no_animation {
            self.props.backdrop.color
        } else {
            self.props.backdrop.color_at(self.visibility())
        };

        Some(ModalFrame {
            phase: self.phase(),
            backdrop: BackdropLayer {
                rect: Rect::from_origin_size(Point::ZERO, viewport),
                color: backdrop_color,
                opacity: self.backdrop.opacity(&self.props.backdrop),
            },
            card: CardLayer {
                rect: self.card_frame(viewport),
                rule: self.props.card_position.rule(self.props.edge_offset),
                style: self.composed_style(),
            },
            content: &self.children,
        })
    }

    /// Invoke the dismiss callback
    pub fn press_backdrop(&self) {
        self.backdrop.press();
    }

    /// Track a held backdrop press for feedback opacity
    pub fn set_backdrop_pressed(&mut self, pressed: bool) {
        self.backdrop.set_pressed(pressed);
    }

    /// Route a press at `point`
    ///
    /// Returns true when the press landed on the backdrop (and the dismiss
    /// callback ran). Presses on the card, or while unmounted, return false.
    pub fn handle_press_at(&self, point: Point, viewport: Size) -> bool {
        if !self.is_rendered() {
            return false;
        }
        if self.card_frame(viewport).contains(point) {
            return false;
        }
        self.press_backdrop();
        true
    }
}

impl<C: std::fmt::Debug> std::fmt::Debug for AnimatedModal<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimatedModal")
            .field("props", &self.props)
            .field("visibility", &self.visibility())
            .field("rendered", &self.is_rendered())
            .field("backdrop", &self.backdrop)
            .field("children", &self.children)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrim_animation::AnimationScheduler;

    #[test]
    fn test_phase_predicates() {
        assert!(!ModalPhase::Closed.is_visible());
        assert!(ModalPhase::Opening.is_animating());
        assert!(ModalPhase::Closing.is_visible());
        assert!(ModalPhase::Open.is_open());
        assert!(!ModalPhase::Open.is_animating());
    }

    #[test]
    fn test_hidden_modal_renders_nothing() {
        let scheduler = AnimationScheduler::new();
        let modal = AnimatedModal::new(scheduler.handle(), ModalProps::new(false), (), || {});

        assert!(!modal.is_rendered());
        assert_eq!(modal.phase(), ModalPhase::Closed);
        assert!(modal.render(Size::new(100.0, 100.0)).is_none());
        assert!(modal.children().is_none());
    }

    #[test]
    fn test_initially_visible_starts_shown() {
        let scheduler = AnimationScheduler::new();
        let modal = AnimatedModal::new(scheduler.handle(), ModalProps::new(true), 7, || {});

        assert!(modal.is_rendered());
        assert_eq!(modal.visibility(), 1.0);
        assert_eq!(modal.phase(), ModalPhase::Open);
        assert_eq!(modal.children(), Some(&7));
        assert!(!scheduler.has_active_animations());

        let style = modal.animated_style().unwrap_or_default();
        assert_eq!(style.opacity, Some(1.0));
    }

    #[test]
    fn test_set_props_applies_non_visibility_fields() {
        let scheduler = AnimationScheduler::new();
        let mut modal = AnimatedModal::new(scheduler.handle(), ModalProps::new(false), (), || {});

        modal.set_props(ModalProps::new(false).animation_type("vertical").duration_ms(100));
        assert!(!modal.is_rendered());
        assert_eq!(modal.props().duration_ms, 100);

        modal.set_props(ModalProps::new(true).animation_type("vertical").duration_ms(100));
        assert!(modal.is_rendered());
        scheduler.tick_by(100.0);
        assert_eq!(modal.phase(), ModalPhase::Open);
    }
}
