//! Scrim Core
//!
//! Foundational value types shared by the Scrim animation and modal crates:
//!
//! - **Color**: linear RGBA colors with alpha helpers
//! - **Geometry**: points, sizes and rectangles for layout and hit testing
//! - **Style**: an optional-property style descriptor with transform channels
//!   and last-write-wins merging
//!
//! # Example
//!
//! ```rust
//! use scrim_core::{Color, Style, Transform};
//!
//! let animated = Style::new()
//!     .opacity(0.5)
//!     .transform(Transform::new().scale(1.05));
//! let caller = Style::new().bg(Color::WHITE).rounded(12.0);
//!
//! let composed = animated.merge(&caller);
//! assert_eq!(composed.opacity, Some(0.5));
//! assert_eq!(composed.background, Some(Color::WHITE));
//! ```

pub mod color;
pub mod geometry;
pub mod style;

pub use color::Color;
pub use geometry::{Point, Rect, Size};
pub use style::{Style, Transform, TransformOp};
