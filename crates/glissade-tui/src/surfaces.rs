//! Terminal-backed slider surfaces.
//!
//! The slider writes into a shared [`ViewModel`]; the render loop reads a
//! snapshot of it every frame.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use glissade_core::surface::{ControlSurface, FullscreenSurface, IndicatorSurface, SlideSurface};
use glissade_core::Result;

/// Everything the slider has told the terminal to show
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    /// Horizontal offset of each slide, percent of viewport width
    pub offsets: Vec<f64>,
    /// Number of indicator dots
    pub indicator_count: usize,
    /// Highlighted indicator
    pub active: usize,
    /// Navigation buttons accept clicks
    pub controls_enabled: bool,
    /// Play/pause label shows "Pause"
    pub playing: bool,
    /// Chrome hidden, slides take the whole screen
    pub fullscreen: bool,
}

impl ViewModel {
    fn new(slides: usize) -> Self {
        Self {
            offsets: vec![0.0; slides],
            indicator_count: 0,
            active: 0,
            controls_enabled: true,
            playing: false,
            fullscreen: false,
        }
    }
}

/// Shared handle implementing every slider surface
#[derive(Debug, Clone)]
pub struct TerminalSurfaces {
    view: Arc<Mutex<ViewModel>>,
}

impl TerminalSurfaces {
    pub fn new(slides: usize) -> Self {
        Self {
            view: Arc::new(Mutex::new(ViewModel::new(slides))),
        }
    }

    /// Copy of the current view model for rendering
    pub fn snapshot(&self) -> ViewModel {
        self.view().clone()
    }

    fn view(&self) -> MutexGuard<'_, ViewModel> {
        // A panic mid-update leaves plain data behind; keep drawing it
        self.view.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SlideSurface for TerminalSurfaces {
    fn set_offset(&self, slide: usize, percent: f64) {
        let mut view = self.view();
        if slide >= view.offsets.len() {
            view.offsets.resize(slide + 1, 0.0);
        }
        view.offsets[slide] = percent;
    }
}

impl IndicatorSurface for TerminalSurfaces {
    fn render(&self, count: usize) {
        let mut view = self.view();
        view.indicator_count = count;
        view.active = 0;
    }

    fn set_active(&self, index: usize) {
        self.view().active = index;
    }
}

impl ControlSurface for TerminalSurfaces {
    fn set_enabled(&self, enabled: bool) {
        self.view().controls_enabled = enabled;
    }

    fn set_playing(&self, playing: bool) {
        self.view().playing = playing;
    }
}

#[async_trait]
impl FullscreenSurface for TerminalSurfaces {
    async fn is_fullscreen(&self) -> bool {
        self.view().fullscreen
    }

    async fn enter(&self) -> Result<()> {
        self.view().fullscreen = true;
        Ok(())
    }

    async fn exit(&self) -> Result<()> {
        self.view().fullscreen = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_updates_view_model() {
        let surfaces = TerminalSurfaces::new(3);
        surfaces.render(3);
        surfaces.set_offset(1, 42.5);
        surfaces.set_active(2);
        surfaces.set_enabled(false);
        surfaces.set_playing(true);

        let view = surfaces.snapshot();
        assert_eq!(view.offsets, vec![0.0, 42.5, 0.0]);
        assert_eq!(view.indicator_count, 3);
        assert_eq!(view.active, 2);
        assert!(!view.controls_enabled);
        assert!(view.playing);
    }

    #[tokio::test]
    async fn test_fullscreen_toggle() {
        let surfaces = TerminalSurfaces::new(1);
        assert!(!surfaces.is_fullscreen().await);
        surfaces.enter().await.unwrap();
        assert!(surfaces.snapshot().fullscreen);
        surfaces.exit().await.unwrap();
        assert!(!surfaces.is_fullscreen().await);
    }
}
