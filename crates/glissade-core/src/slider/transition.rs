use crate::animation::{AnimationOutcome, SlideAnimation};
use crate::animation::timing::frame_period;
use crate::config::SliderConfig;

/// Offset of slide `index` when slide `base` is active, in percent of viewport width
#[inline]
pub fn offset(index: usize, base: usize) -> f64 {
    (index as f64 - base as f64) * 100.0
}

/// Start and end offsets for every slide in one transition
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionRequest {
    pub target_index: usize,
    pub start_offsets: Vec<f64>,
    pub end_offsets: Vec<f64>,
}

impl TransitionRequest {
    pub fn new(len: usize, current: usize, target: usize) -> Self {
        Self {
            target_index: target,
            start_offsets: (0..len).map(|i| offset(i, current)).collect(),
            end_offsets: (0..len).map(|i| offset(i, target)).collect(),
        }
    }

    /// One animation per slide
    pub fn animations<'a>(
        &'a self,
        config: &'a SliderConfig,
    ) -> impl Iterator<Item = SlideAnimation> + 'a {
        self.start_offsets
            .iter()
            .zip(&self.end_offsets)
            .enumerate()
            .map(move |(slide, (&from, &to))| SlideAnimation {
                slide,
                from,
                to,
                duration: config.transition_duration(),
                easing: config.easing,
                frame_period: frame_period(config.animation_fps),
            })
    }
}

/// Counts slide animations as they finish; the transition resolves once all have arrived
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionBarrier {
    expected: usize,
    completed: usize,
    arrived: usize,
}

impl TransitionBarrier {
    pub fn new(expected: usize) -> Self {
        Self {
            expected,
            completed: 0,
            arrived: 0,
        }
    }

    /// Record one finished animation. Returns true when the last one arrives.
    pub fn arrive(&mut self, outcome: Option<AnimationOutcome>) -> bool {
        self.arrived += 1;
        if outcome == Some(AnimationOutcome::Completed) {
            self.completed += 1;
        }
        self.is_released()
    }

    pub fn is_released(&self) -> bool {
        self.arrived >= self.expected
    }

    /// Every animation snapped to its final offset
    pub fn all_completed(&self) -> bool {
        self.completed == self.expected
    }

    pub fn arrived(&self) -> usize {
        self.arrived
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets() {
        let request = TransitionRequest::new(3, 0, 2);
        assert_eq!(request.target_index, 2);
        assert_eq!(request.start_offsets, vec![0.0, 100.0, 200.0]);
        assert_eq!(request.end_offsets, vec![-200.0, -100.0, 0.0]);
    }

    #[test]
    fn test_animations_follow_config() {
        let config = SliderConfig {
            transition_duration_ms: 300,
            animation_fps: 50,
            ..Default::default()
        };
        let request = TransitionRequest::new(2, 1, 0);
        let anims: Vec<_> = request.animations(&config).collect();
        assert_eq!(anims.len(), 2);
        assert_eq!(anims[0].from, -100.0);
        assert_eq!(anims[0].to, 0.0);
        assert_eq!(anims[1].slide, 1);
        assert_eq!(anims[1].to, 100.0);
        assert_eq!(anims[1].duration.as_millis(), 300);
        assert_eq!(anims[1].frame_period.as_millis(), 20);
    }

    #[test]
    fn test_barrier_waits_for_all() {
        let mut barrier = TransitionBarrier::new(3);
        assert!(!barrier.arrive(Some(AnimationOutcome::Completed)));
        assert!(!barrier.arrive(Some(AnimationOutcome::Completed)));
        assert!(!barrier.is_released());
        assert!(barrier.arrive(Some(AnimationOutcome::Completed)));
        assert!(barrier.all_completed());
        assert_eq!(barrier.arrived(), 3);
    }

    #[test]
    fn test_barrier_tracks_failures() {
        let mut barrier = TransitionBarrier::new(2);
        barrier.arrive(None);
        assert!(barrier.arrive(Some(AnimationOutcome::Completed)));
        assert!(!barrier.all_completed());
    }
}
