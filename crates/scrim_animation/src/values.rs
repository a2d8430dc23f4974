//! Animatable value types
//!
//! Provides the `Interpolate` trait for values that can be linearly
//! interpolated, and `Interpolation`, a fixed output range sampled from an
//! animated scalar in `[0, 1]`.

use scrim_core::Color;

/// Trait for values that can be linearly interpolated
pub trait Interpolate: Clone {
    /// Linearly interpolate between self and other by factor t (0.0 to 1.0)
    fn lerp(&self, other: &Self, t: f32) -> Self;

    /// Check if two values are approximately equal (for settling detection)
    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool;
}

// ============================================================================
// f32 Implementation
// ============================================================================

impl Interpolate for f32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self - other).abs() < epsilon
    }
}

// ============================================================================
// Color Implementation
// ============================================================================

impl Interpolate for Color {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Color::rgba(
            self.r.lerp(&other.r, t),
            self.g.lerp(&other.g, t),
            self.b.lerp(&other.b, t),
            self.a.lerp(&other.a, t),
        )
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.r - other.r).abs() < epsilon
            && (self.g - other.g).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
            && (self.a - other.a).abs() < epsilon
    }
}

// ============================================================================
// Interpolation
// ============================================================================

/// A linear mapping from the input domain `[0, 1]` onto `from..to`
///
/// Input outside the domain is clamped, so the output never leaves the range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interpolation<T: Interpolate = f32> {
    pub from: T,
    pub to: T,
}

impl<T: Interpolate> Interpolation<T> {
    pub fn new(from: T, to: T) -> Self {
        Self { from, to }
    }

    /// Sample the output range at `input`
    pub fn sample(&self, input: f32) -> T {
        self.from.lerp(&self.to, input.clamp(0.0, 1.0))
    }

    /// The same range traversed in the opposite direction
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to.clone(),
            to: self.from.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_interpolation() {
        assert!((0.0_f32.lerp(&1.0, 0.5) - 0.5).abs() < 1e-6);
        assert!((10.0_f32.lerp(&20.0, 0.25) - 12.5).abs() < 1e-6);
    }

    #[test]
    fn test_color_interpolation() {
        let a = Color::rgba(0.0, 0.0, 0.0, 0.0);
        let b = Color::rgba(1.0, 0.5, 0.0, 0.5);
        let mid = a.lerp(&b, 0.5);
        assert!(mid.approx_eq(&Color::rgba(0.5, 0.25, 0.0, 0.25), 1e-6));
    }

    #[test]
    fn test_interpolation_range() {
        let rotate = Interpolation::new(270.0_f32, 360.0);
        assert_eq!(rotate.sample(0.0), 270.0);
        assert_eq!(rotate.sample(1.0), 360.0);
        assert!((rotate.sample(0.5) - 315.0).abs() < 1e-4);
    }

    #[test]
    fn test_interpolation_clamps_input() {
        let scale = Interpolation::new(1.1_f32, 1.0);
        assert_eq!(scale.sample(-0.5), 1.1);
        assert!((scale.sample(1.5) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_reversed() {
        let r = Interpolation::new(0.0_f32, 360.0).reversed();
        assert_eq!(r.sample(0.0), 360.0);
        assert_eq!(r.sample(1.0), 0.0);
    }
}
