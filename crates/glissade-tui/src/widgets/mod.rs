mod controls;
mod indicators;
mod slides;
mod status_bar;

pub use controls::ControlsWidget;
pub use indicators::IndicatorsWidget;
pub use slides::{column_shift, SlidesWidget};
pub use status_bar::StatusBarWidget;
