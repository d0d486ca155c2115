mod autoplay;
mod coordinator;
mod handle;
mod slides;
mod state;
pub mod transition;

pub use autoplay::AutoplayTimer;
pub use coordinator::Slider;
pub use handle::SliderHandle;
pub use slides::{Slide, SlideSet};
pub use state::CoordinatorState;
pub use transition::{offset, TransitionBarrier, TransitionRequest};
