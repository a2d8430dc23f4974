//! Scrim Animation System
//!
//! Timed transitions for animatable scalars, driven by a frame scheduler.
//!
//! # Features
//!
//! - **Easing**: named curves plus arbitrary cubic beziers
//! - **Interpolation**: linear output ranges sampled from a `[0, 1]` input
//! - **Timing Animations**: duration + easing transitions between two values
//! - **Scheduler**: ticks every registered animation, optionally on a
//!   background thread, and queues completion callbacks for the UI thread
//! - **Retargeting**: a new target replaces the in-flight transition, starting
//!   from the current value (last write wins)

pub mod easing;
pub mod scheduler;
pub mod timing;
pub mod values;

pub use easing::Easing;
pub use scheduler::{
    AnimatedValue, AnimationScheduler, CompletionCallback, SchedulerHandle, TimingId,
    WakeCallback,
};
pub use timing::{TimingAnimation, TimingConfig};
pub use values::{Interpolate, Interpolation};
