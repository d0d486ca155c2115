use std::sync::Arc;

use crossterm::event::{KeyEvent, MouseEvent};
use glissade_core::{AppConfig, Result, SlideSet, SliderHandle};
use ratatui::Frame;
use tracing::debug;

use crate::input::{handle_key_event, handle_mouse_event, Action};
use crate::keymap::Keymap;
use crate::layout::ScreenLayout;
use crate::surfaces::TerminalSurfaces;
use crate::theme::Theme;
use crate::widgets::{ControlsWidget, IndicatorsWidget, SlidesWidget, StatusBarWidget};

/// Main application state
pub struct App {
    pub config: Arc<AppConfig>,
    pub slides: SlideSet,
    /// Control channel into the running slider
    pub handle: SliderHandle,
    /// What the slider last told the terminal to show
    pub surfaces: TerminalSurfaces,
    pub keymap: Keymap,
    pub theme: Theme,
    /// Layout of the last drawn frame, used for mouse hit testing
    pub layout: ScreenLayout,
    pub should_quit: bool,
    pub status_message: Option<String>,
}

impl App {
    pub fn new(
        config: Arc<AppConfig>,
        slides: SlideSet,
        handle: SliderHandle,
        surfaces: TerminalSurfaces,
        theme: Theme,
    ) -> Self {
        let keymap = Keymap::from_config(&config.keymap);
        Self {
            config,
            slides,
            handle,
            surfaces,
            keymap,
            theme,
            layout: ScreenLayout::default(),
            should_quit: false,
            status_message: None,
        }
    }

    /// Whether slides are moving and the screen needs frequent redraws
    pub fn is_animating(&self) -> bool {
        self.handle.state().is_transitioning
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let fullscreen = self.surfaces.snapshot().fullscreen;
        let action = handle_key_event(key, &self.keymap, fullscreen);
        self.dispatch(action)
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        let action = handle_mouse_event(mouse, &self.layout, &self.surfaces.snapshot());
        self.dispatch(action)
    }

    /// Forward an action to the slider
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        if action != Action::None {
            debug!("Action: {:?}", action);
            self.clear_status();
        }

        match action {
            Action::Quit => {
                self.should_quit = true;
                Ok(())
            }
            Action::Next => self.handle.next(),
            Action::Prev => self.handle.prev(),
            Action::First => self.handle.first(),
            Action::Last => self.handle.last(),
            Action::GoTo(index) => {
                if index >= self.slides.len() {
                    self.set_status(format!("No slide {}", index + 1));
                    return Ok(());
                }
                self.handle.go_to(index as i64)
            }
            Action::ToggleAutoplay => self.handle.toggle_autoplay(),
            Action::ToggleFullscreen => self.handle.toggle_fullscreen(),
            Action::Interact => self.handle.interact(),
            Action::None => Ok(()),
        }
    }

    /// Lay out and draw one frame from the current view model
    pub fn draw(&mut self, frame: &mut Frame) {
        let view = self.surfaces.snapshot();
        self.layout = ScreenLayout::compute(
            frame.area(),
            self.slides.len(),
            view.fullscreen,
            self.config.ui.show_indicators,
            self.config.ui.show_controls,
        );

        SlidesWidget::render(frame, self.layout.slides, &self.slides, &view.offsets, &self.theme);

        if let Some(row) = self.layout.indicators {
            let cells = &self.layout.indicator_hits[..self.layout.indicator_hits.len().min(view.indicator_count)];
            IndicatorsWidget::render(frame, row, cells, view.active, &self.theme);
        }
        if let Some(row) = self.layout.controls {
            ControlsWidget::render(frame, row, &self.layout.button_hits, &view, &self.theme);
        }
        if let Some(area) = self.layout.status {
            StatusBarWidget::render(frame, area, self);
        }
    }
}
