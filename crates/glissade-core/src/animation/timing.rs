//! L4 Atomic Layer: Time calculation utilities for slide animations
//!
//! Provides pure functions for calculating animation progress and interpolation.

use std::time::Duration;

/// Calculate animation progress (0.0 to 1.0) from elapsed time and duration
///
/// # Arguments
/// * `elapsed` - Time since the animation started
/// * `duration` - Total animation duration
///
/// # Returns
/// Progress value clamped to [0.0, 1.0]
#[inline]
pub fn progress(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let ratio = elapsed.as_secs_f64() / duration.as_secs_f64();
    ratio.clamp(0.0, 1.0)
}

/// Linear interpolation between two values
///
/// # Arguments
/// * `from` - Start value
/// * `to` - End value
/// * `t` - Interpolation factor [0.0, 1.0]
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Time between animation frames for a target frame rate
#[inline]
pub fn frame_period(fps: u32) -> Duration {
    if fps == 0 {
        Duration::from_millis(16) // ~60fps fallback
    } else {
        Duration::from_millis((1000 / fps as u64).max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 100.0, 0.0) - 0.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 0.5) - 50.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 1.0) - 100.0).abs() < 0.001);
        assert!((lerp(100.0, -100.0, 0.25) - 50.0).abs() < 0.001);
    }

    #[test]
    fn test_progress_zero_duration() {
        assert!((progress(Duration::ZERO, Duration::ZERO) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_progress_clamps() {
        let d = Duration::from_millis(200);
        assert!((progress(Duration::from_millis(50), d) - 0.25).abs() < 0.001);
        assert!((progress(Duration::from_millis(900), d) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_frame_period() {
        assert_eq!(frame_period(60), Duration::from_millis(16));
        assert_eq!(frame_period(0), Duration::from_millis(16));
        assert_eq!(frame_period(5000), Duration::from_millis(1));
    }
}
