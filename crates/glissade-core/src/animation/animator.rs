//! L3 Molecular Layer: Per-slide animation
//!
//! Drives one slide from a start offset to an end offset, once per frame,
//! combining the easing and timing atoms.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::{Instant, MissedTickBehavior};

use super::easing::EasingType;
use super::generation::Generation;
use super::timing::{lerp, progress};
use crate::surface::SlideSurface;

/// One slide's movement within a transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideAnimation {
    pub slide: usize,
    /// Starting offset in percent of viewport width
    pub from: f64,
    /// Final offset in percent of viewport width
    pub to: f64,
    pub duration: Duration,
    pub easing: EasingType,
    /// Time between frames
    pub frame_period: Duration,
}

/// How a slide animation ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationOutcome {
    /// Reached the end and snapped to the exact final offset
    Completed,
    /// A newer transition took over; the final offset was not applied
    Superseded,
}

impl SlideAnimation {
    /// Offset at normalized time `t`
    pub fn sample(&self, t: f64) -> f64 {
        lerp(self.from, self.to, self.easing.apply(t))
    }

    /// Run the animation against `surface`.
    ///
    /// Every frame checks `tag` against `generation`; once it is stale the
    /// animation returns without touching the surface again.
    pub async fn run(
        self,
        surface: Arc<dyn SlideSurface>,
        generation: Generation,
        tag: u64,
    ) -> AnimationOutcome {
        let start = Instant::now();
        let mut frames = tokio::time::interval(self.frame_period);
        frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            frames.tick().await;

            if !generation.is_current(tag) {
                return AnimationOutcome::Superseded;
            }

            let t = progress(start.elapsed(), self.duration);
            if t < 1.0 {
                surface.set_offset(self.slide, self.sample(t));
            } else {
                // Snap so rounding never leaves a slide a fraction off
                surface.set_offset(self.slide, self.to);
                return AnimationOutcome::Completed;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::testing::{Call, Recorder};

    fn animation(from: f64, to: f64) -> SlideAnimation {
        SlideAnimation {
            slide: 0,
            from,
            to,
            duration: Duration::from_millis(100),
            easing: EasingType::EaseInOutQuad,
            frame_period: Duration::from_millis(10),
        }
    }

    #[test]
    fn test_sample_endpoints() {
        let anim = animation(100.0, 0.0);
        assert!((anim.sample(0.0) - 100.0).abs() < 1e-9);
        assert!((anim.sample(0.5) - 50.0).abs() < 1e-9);
        assert!((anim.sample(1.0) - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_every_curve_stays_between_start_and_end() {
        for easing in [
            EasingType::None,
            EasingType::Linear,
            EasingType::EaseInOutQuad,
            EasingType::Cubic,
            EasingType::Quintic,
            EasingType::EaseOut,
        ] {
            let anim = SlideAnimation {
                easing,
                ..animation(100.0, 0.0)
            };
            let mut prev = anim.sample(0.0);
            assert_eq!(prev, 100.0, "{:?}", easing);
            for i in 1..=20 {
                let offset = anim.sample(i as f64 / 20.0);
                assert!((0.0..=100.0).contains(&offset), "{:?} overshot: {}", easing, offset);
                assert!(offset <= prev, "{:?} moved backwards at step {}", easing, i);
                prev = offset;
            }
            assert_eq!(prev, 0.0, "{:?}", easing);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_snaps_to_end() {
        let recorder = Recorder::new();
        let generation = Generation::new();
        let tag = generation.advance();

        let outcome = animation(0.0, -100.0)
            .run(recorder.clone(), generation, tag)
            .await;

        assert_eq!(outcome, AnimationOutcome::Completed);
        let calls = recorder.calls();
        assert!(calls.len() > 2, "expected intermediate frames, got {:?}", calls);
        assert_eq!(calls.first(), Some(&Call::Offset(0, 0.0)));
        assert_eq!(calls.last(), Some(&Call::Offset(0, -100.0)));

        // Positions move monotonically toward the end value
        let mut prev = f64::MAX;
        for call in calls {
            if let Call::Offset(_, v) = call {
                assert!(v <= prev);
                prev = v;
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_zero_duration_completes_on_first_frame() {
        let recorder = Recorder::new();
        let generation = Generation::new();
        let tag = generation.advance();
        let mut anim = animation(200.0, 100.0);
        anim.duration = Duration::ZERO;

        let outcome = anim.run(recorder.clone(), generation, tag).await;
        assert_eq!(outcome, AnimationOutcome::Completed);
        assert_eq!(recorder.calls(), vec![Call::Offset(0, 100.0)]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_generation_never_snaps() {
        let recorder = Recorder::new();
        let generation = Generation::new();
        let tag = generation.advance();

        let task = tokio::spawn(animation(0.0, 100.0).run(
            recorder.clone(),
            generation.clone(),
            tag,
        ));

        tokio::time::sleep(Duration::from_millis(35)).await;
        generation.advance();

        assert_eq!(task.await.unwrap(), AnimationOutcome::Superseded);
        assert!(!recorder.calls().contains(&Call::Offset(0, 100.0)));
    }
}
