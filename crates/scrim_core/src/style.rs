//! Style descriptors
//!
//! `Style` is a bag of optional visual properties. Every property is optional
//! so that styles compose: when merging, only properties that are set on the
//! later style override the earlier one. The modal uses this to lay the
//! caller's passthrough style on top of its computed animation style.
//!
//! Transforms are kept as an ordered list of channels (`TransformOp`) rather
//! than a flattened matrix, so hosts can map them onto whatever transform
//! primitive their renderer exposes.

use std::fmt;

use smallvec::SmallVec;

use crate::color::Color;

/// A single transform channel
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransformOp {
    /// Uniform scale factor
    Scale(f32),
    /// Rotation about the X axis, in degrees
    RotateX(f32),
    /// Rotation about the Y axis, in degrees
    RotateY(f32),
}

impl fmt::Display for TransformOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformOp::Scale(s) => write!(f, "scale({s})"),
            TransformOp::RotateX(deg) => write!(f, "rotateX({deg}deg)"),
            TransformOp::RotateY(deg) => write!(f, "rotateY({deg}deg)"),
        }
    }
}

/// An ordered list of transform channels, applied first to last
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transform {
    ops: SmallVec<[TransformOp; 2]>,
}

impl Transform {
    /// Create an identity transform
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a channel
    pub fn push(mut self, op: TransformOp) -> Self {
        self.ops.push(op);
        self
    }

    /// Append a uniform scale
    pub fn scale(self, factor: f32) -> Self {
        self.push(TransformOp::Scale(factor))
    }

    /// Append a rotation about the X axis (degrees)
    pub fn rotate_x(self, degrees: f32) -> Self {
        self.push(TransformOp::RotateX(degrees))
    }

    /// Append a rotation about the Y axis (degrees)
    pub fn rotate_y(self, degrees: f32) -> Self {
        self.push(TransformOp::RotateY(degrees))
    }

    pub fn ops(&self) -> &[TransformOp] {
        &self.ops
    }

    pub fn is_identity(&self) -> bool {
        self.ops.is_empty()
    }

    /// First scale channel, if any
    pub fn scale_factor(&self) -> Option<f32> {
        self.ops.iter().find_map(|op| match op {
            TransformOp::Scale(s) => Some(*s),
            _ => None,
        })
    }

    /// First X-axis rotation channel, if any
    pub fn rotation_x(&self) -> Option<f32> {
        self.ops.iter().find_map(|op| match op {
            TransformOp::RotateX(deg) => Some(*deg),
            _ => None,
        })
    }

    /// First Y-axis rotation channel, if any
    pub fn rotation_y(&self) -> Option<f32> {
        self.ops.iter().find_map(|op| match op {
            TransformOp::RotateY(deg) => Some(*deg),
            _ => None,
        })
    }
}

impl FromIterator<TransformOp> for Transform {
    fn from_iter<I: IntoIterator<Item = TransformOp>>(iter: I) -> Self {
        Self {
            ops: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for op in &self.ops {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{op}")?;
            first = false;
        }
        Ok(())
    }
}

/// Visual style properties for an element
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Style {
    /// Background fill
    pub background: Option<Color>,
    /// Uniform corner radius
    pub corner_radius: Option<f32>,
    /// Uniform inner padding
    pub padding: Option<f32>,
    /// Explicit width
    pub width: Option<f32>,
    /// Explicit height
    pub height: Option<f32>,
    /// Opacity (0.0 = transparent, 1.0 = opaque)
    pub opacity: Option<f32>,
    /// Transform channels
    pub transform: Option<Transform>,
}

impl Style {
    /// Create a new empty style
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn rounded(mut self, radius: f32) -> Self {
        self.corner_radius = Some(radius);
        self
    }

    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn w(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn h(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn transform(mut self, transform: Transform) -> Self {
        self.transform = Some(transform);
        self
    }

    /// True when no property is set
    pub fn is_empty(&self) -> bool {
        *self == Style::default()
    }

    /// Merge `other` on top of this style
    ///
    /// Properties set on `other` win; unset properties fall through to `self`.
    pub fn merge(&self, other: &Style) -> Style {
        Style {
            background: other.background.or(self.background),
            corner_radius: other.corner_radius.or(self.corner_radius),
            padding: other.padding.or(self.padding),
            width: other.width.or(self.width),
            height: other.height.or(self.height),
            opacity: other.opacity.or(self.opacity),
            transform: other.transform.clone().or_else(|| self.transform.clone()),
        }
    }
}
