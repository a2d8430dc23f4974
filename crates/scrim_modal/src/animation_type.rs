//! Animation families
//!
//! Each family is a fixed recipe: an opacity range plus zero or more transform
//! channels, all linearly interpolated from the modal's visibility scalar.
//!
//! | family         | opacity | transform                      |
//! |----------------|---------|--------------------------------|
//! | `Default`      | 0 → 1   | scale 1.1 → 1                  |
//! | `Vertical`     | 0 → 1   | rotateX 270° → 360°            |
//! | `Horizontal`   | 0 → 1   | rotateY 270° → 360°            |
//! | `FlipAndScale` | 0 → 1   | rotateX 0° → 360°, scale 0 → 1 |

use scrim_animation::Interpolation;
use scrim_core::{Style, Transform, TransformOp};
use serde::Deserialize;
use smallvec::{smallvec, SmallVec};

/// Which enter/exit animation the modal card uses
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum AnimationType {
    /// Fade with a slight zoom
    #[default]
    Default,
    /// Flip about the X axis
    Vertical,
    /// Flip about the Y axis
    Horizontal,
    /// Full X-axis spin while growing from nothing
    FlipAndScale,
}

impl AnimationType {
    /// Parse a family name; unknown names fall back to `Default`
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            "vertical" => AnimationType::Vertical,
            "horizontal" => AnimationType::Horizontal,
            "flipAndScale" | "flip_and_scale" | "flip-and-scale" => AnimationType::FlipAndScale,
            "default" | "" => AnimationType::Default,
            other => {
                tracing::debug!(name = other, "unknown animation type, using default");
                AnimationType::Default
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AnimationType::Default => "default",
            AnimationType::Vertical => "vertical",
            AnimationType::Horizontal => "horizontal",
            AnimationType::FlipAndScale => "flipAndScale",
        }
    }

    /// The interpolation recipe for this family
    pub fn recipe(&self) -> AnimationRecipe {
        let channels: SmallVec<[Channel; 2]> = match self {
            AnimationType::Default => smallvec![Channel::new(ChannelKind::Scale, 1.1, 1.0)],
            AnimationType::Vertical => smallvec![Channel::new(ChannelKind::RotateX, 270.0, 360.0)],
            AnimationType::Horizontal => {
                smallvec![Channel::new(ChannelKind::RotateY, 270.0, 360.0)]
            }
            AnimationType::FlipAndScale => smallvec![
                Channel::new(ChannelKind::RotateX, 0.0, 360.0),
                Channel::new(ChannelKind::Scale, 0.0, 1.0),
            ],
        };
        AnimationRecipe {
            opacity: Interpolation::new(0.0, 1.0),
            channels,
        }
    }
}

impl From<&str> for AnimationType {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl From<String> for AnimationType {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

/// Which transform a channel drives
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChannelKind {
    Scale,
    /// Degrees about the X axis
    RotateX,
    /// Degrees about the Y axis
    RotateY,
}

/// One interpolated transform channel
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Channel {
    pub kind: ChannelKind,
    pub range: Interpolation,
}

impl Channel {
    fn new(kind: ChannelKind, from: f32, to: f32) -> Self {
        Self {
            kind,
            range: Interpolation::new(from, to),
        }
    }

    fn sample(&self, visibility: f32) -> TransformOp {
        let v = self.range.sample(visibility);
        match self.kind {
            ChannelKind::Scale => TransformOp::Scale(v),
            ChannelKind::RotateX => TransformOp::RotateX(v),
            ChannelKind::RotateY => TransformOp::RotateY(v),
        }
    }
}

/// Opacity plus transform channels, sampled from a visibility scalar
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationRecipe {
    pub opacity: Interpolation,
    pub channels: SmallVec<[Channel; 2]>,
}

impl AnimationRecipe {
    /// Style at `visibility` (0 = hidden, 1 = shown)
    pub fn sample(&self, visibility: f32) -> Style {
        let transform: Transform = self.channels.iter().map(|c| c.sample(visibility)).collect();
        Style::new()
            .opacity(self.opacity.sample(visibility))
            .transform(transform)
    }
}
