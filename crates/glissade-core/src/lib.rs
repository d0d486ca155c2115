pub mod animation;
pub mod config;
pub mod error;
pub mod slider;
pub mod surface;

pub use config::{AppConfig, EasingType, SliderConfig};
pub use error::{Error, Result};
pub use slider::{CoordinatorState, Slide, SlideSet, Slider, SliderHandle};
pub use surface::{ControlSurface, FullscreenSurface, IndicatorSurface, SlideSurface, Surfaces};
