pub mod app;
pub mod event;
pub mod input;
pub mod keymap;
pub mod layout;
pub mod surfaces;
pub mod theme;
pub mod themes;
pub mod widgets;

pub use app::App;
pub use surfaces::{TerminalSurfaces, ViewModel};
pub use theme::Theme;
pub use themes::{available_themes, load_theme};
