//! Rendering surfaces the slider drives.
//!
//! The coordinator never looks anything up on its own: every output it
//! produces goes through one of these traits, handed over at construction.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::{Error, Result};

/// Positions slides horizontally
pub trait SlideSurface: Send + Sync {
    /// Place `slide` at `percent` of the viewport width relative to the active slide
    fn set_offset(&self, slide: usize, percent: f64);
}

/// The row of indicator markers, one per slide
pub trait IndicatorSurface: Send + Sync {
    /// Create `count` indicator markers, replacing any existing ones
    fn render(&self, count: usize);
    /// Mark `index` active and clear every other marker
    fn set_active(&self, index: usize);
}

/// Navigation buttons and the play/pause label
pub trait ControlSurface: Send + Sync {
    /// Enable or disable all navigation controls as one group
    fn set_enabled(&self, enabled: bool);
    /// Reflect the autoplay state in the play/pause label
    fn set_playing(&self, playing: bool);
}

/// Optional fullscreen capability. Calls are best effort.
#[async_trait]
pub trait FullscreenSurface: Send + Sync {
    async fn is_fullscreen(&self) -> bool;
    async fn enter(&self) -> Result<()>;
    async fn exit(&self) -> Result<()>;
}

/// The set of surfaces injected into a slider
#[derive(Clone)]
pub struct Surfaces {
    pub slides: Arc<dyn SlideSurface>,
    pub indicators: Arc<dyn IndicatorSurface>,
    pub controls: Arc<dyn ControlSurface>,
    pub fullscreen: Option<Arc<dyn FullscreenSurface>>,
}

impl Surfaces {
    pub fn builder() -> SurfacesBuilder {
        SurfacesBuilder::default()
    }

    /// Use one object for every surface, fullscreen included
    pub fn shared<T>(surface: Arc<T>) -> Self
    where
        T: SlideSurface + IndicatorSurface + ControlSurface + FullscreenSurface + 'static,
    {
        Self {
            slides: surface.clone(),
            indicators: surface.clone(),
            controls: surface.clone(),
            fullscreen: Some(surface),
        }
    }
}

/// Collects surfaces and checks the required ones are present
#[derive(Default)]
pub struct SurfacesBuilder {
    slides: Option<Arc<dyn SlideSurface>>,
    indicators: Option<Arc<dyn IndicatorSurface>>,
    controls: Option<Arc<dyn ControlSurface>>,
    fullscreen: Option<Arc<dyn FullscreenSurface>>,
}

impl SurfacesBuilder {
    pub fn slides(mut self, surface: Arc<dyn SlideSurface>) -> Self {
        self.slides = Some(surface);
        self
    }

    pub fn indicators(mut self, surface: Arc<dyn IndicatorSurface>) -> Self {
        self.indicators = Some(surface);
        self
    }

    pub fn controls(mut self, surface: Arc<dyn ControlSurface>) -> Self {
        self.controls = Some(surface);
        self
    }

    pub fn fullscreen(mut self, surface: Arc<dyn FullscreenSurface>) -> Self {
        self.fullscreen = Some(surface);
        self
    }

    pub fn build(self) -> Result<Surfaces> {
        Ok(Surfaces {
            slides: self.slides.ok_or(Error::MissingSurface("slides"))?,
            indicators: self.indicators.ok_or(Error::MissingSurface("indicators"))?,
            controls: self.controls.ok_or(Error::MissingSurface("controls"))?,
            fullscreen: self.fullscreen,
        })
    }
}

/// Surface that reports everything through `tracing`, for headless playback
#[derive(Debug, Default)]
pub struct TracingSurface;

impl SlideSurface for TracingSurface {
    fn set_offset(&self, slide: usize, percent: f64) {
        debug!(slide, percent, "slide offset");
    }
}

impl IndicatorSurface for TracingSurface {
    fn render(&self, count: usize) {
        debug!("Rendering {} indicators", count);
    }

    fn set_active(&self, index: usize) {
        info!("Showing slide {}", index + 1);
    }
}

impl ControlSurface for TracingSurface {
    fn set_enabled(&self, enabled: bool) {
        debug!(enabled, "controls");
    }

    fn set_playing(&self, playing: bool) {
        info!("Autoplay {}", if playing { "playing" } else { "paused" });
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use super::*;

    /// One observed side effect
    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        Offset(usize, f64),
        Render(usize),
        Active(usize),
        Enabled(bool),
        Playing(bool),
        EnterFullscreen,
        ExitFullscreen,
    }

    /// Records every surface call in order
    #[derive(Debug, Default)]
    pub struct Recorder {
        calls: Mutex<Vec<Call>>,
        fullscreen: Mutex<bool>,
        fail_fullscreen: bool,
    }

    impl Recorder {
        pub fn new() -> Arc<Self> {
            Arc::new(Self::default())
        }

        pub fn failing_fullscreen() -> Arc<Self> {
            Arc::new(Self {
                fail_fullscreen: true,
                ..Default::default()
            })
        }

        pub fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        pub fn clear(&self) {
            self.calls.lock().unwrap().clear();
        }

        /// Last offset applied to each of `n` slides
        pub fn offsets(&self, n: usize) -> Vec<Option<f64>> {
            let mut out = vec![None; n];
            for call in self.calls() {
                if let Call::Offset(i, v) = call {
                    if i < n {
                        out[i] = Some(v);
                    }
                }
            }
            out
        }

        fn push(&self, call: Call) {
            self.calls.lock().unwrap().push(call);
        }
    }

    impl SlideSurface for Recorder {
        fn set_offset(&self, slide: usize, percent: f64) {
            self.push(Call::Offset(slide, percent));
        }
    }

    impl IndicatorSurface for Recorder {
        fn render(&self, count: usize) {
            self.push(Call::Render(count));
        }

        fn set_active(&self, index: usize) {
            self.push(Call::Active(index));
        }
    }

    impl ControlSurface for Recorder {
        fn set_enabled(&self, enabled: bool) {
            self.push(Call::Enabled(enabled));
        }

        fn set_playing(&self, playing: bool) {
            self.push(Call::Playing(playing));
        }
    }

    #[async_trait]
    impl FullscreenSurface for Recorder {
        async fn is_fullscreen(&self) -> bool {
            *self.fullscreen.lock().unwrap()
        }

        async fn enter(&self) -> Result<()> {
            if self.fail_fullscreen {
                return Err(Error::Fullscreen("not allowed".to_string()));
            }
            *self.fullscreen.lock().unwrap() = true;
            self.push(Call::EnterFullscreen);
            Ok(())
        }

        async fn exit(&self) -> Result<()> {
            if self.fail_fullscreen {
                return Err(Error::Fullscreen("not allowed".to_string()));
            }
            *self.fullscreen.lock().unwrap() = false;
            self.push(Call::ExitFullscreen);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::Recorder;
    use super::*;

    #[test]
    fn test_builder_requires_surfaces() {
        let recorder = Recorder::new();
        let err = Surfaces::builder()
            .slides(recorder.clone())
            .controls(recorder.clone())
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, Error::MissingSurface("indicators")));

        let err = Surfaces::builder().build().err().unwrap();
        assert!(matches!(err, Error::MissingSurface("slides")));
    }

    #[test]
    fn test_builder_fullscreen_is_optional() {
        let recorder = Recorder::new();
        let surfaces = Surfaces::builder()
            .slides(recorder.clone())
            .indicators(recorder.clone())
            .controls(recorder)
            .build()
            .unwrap();
        assert!(surfaces.fullscreen.is_none());
    }
}
