//! L4 Atomic Layer: Pure easing functions for slide transitions
//!
//! Provides mathematical easing functions that map input [0, 1] to output [0, 1]
//! with various acceleration curves.

pub use crate::config::EasingType;

impl EasingType {
    /// Apply the easing function to a progress value
    ///
    /// # Arguments
    /// * `t` - Progress value in range [0, 1]
    ///
    /// # Returns
    /// Eased value in range [0, 1]
    #[inline]
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::None => if t < 1.0 { 0.0 } else { 1.0 },
            EasingType::Linear => t,
            EasingType::EaseInOutQuad => ease_in_out_quad(t),
            EasingType::Cubic => cubic_ease_out(t),
            EasingType::Quintic => quintic_ease_out(t),
            EasingType::EaseOut => exponential_ease_out(t),
        }
    }
}

/// Quadratic ease-in-out: 2t² below the midpoint, 1 - (-2t+2)²/2 above it
#[inline]
fn ease_in_out_quad(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u / 2.0
    }
}

/// Cubic ease-out: f(t) = 1 - (1-t)³
#[inline]
fn cubic_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Quintic ease-out: f(t) = 1 - (1-t)⁵
#[inline]
fn quintic_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv * inv * inv
}

/// Exponential ease-out: f(t) = 1 - 2^(-10t)
#[inline]
fn exponential_ease_out(t: f64) -> f64 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2.0_f64.powf(-10.0 * t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_out_curves_front_load_motion() {
        // Most of the slide distance is covered in the first half
        for easing in [EasingType::Cubic, EasingType::Quintic, EasingType::EaseOut] {
            assert!(easing.apply(0.5) > 0.85, "{:?} at t=0.5", easing);
            assert!(easing.apply(0.1) > EasingType::Linear.apply(0.1), "{:?}", easing);
        }
    }

    #[test]
    fn test_none_holds_until_the_end() {
        assert_eq!(EasingType::None.apply(0.0), 0.0);
        assert_eq!(EasingType::None.apply(0.99), 0.0);
        assert_eq!(EasingType::None.apply(1.0), 1.0);
    }

    #[test]
    fn test_ease_in_out_quad_shape() {
        let e = EasingType::EaseInOutQuad;
        assert!((e.apply(0.25) - 0.125).abs() < 1e-9);
        assert!((e.apply(0.5) - 0.5).abs() < 1e-9);
        assert!((e.apply(0.75) - 0.875).abs() < 1e-9);
        // Symmetric around the midpoint
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            assert!((e.apply(t) + e.apply(1.0 - t) - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_input_is_clamped() {
        assert_eq!(EasingType::Linear.apply(-0.5), 0.0);
        assert_eq!(EasingType::Linear.apply(1.5), 1.0);
        assert_eq!(EasingType::EaseInOutQuad.apply(2.0), 1.0);
    }
}
