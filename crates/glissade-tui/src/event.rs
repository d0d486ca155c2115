use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent};
use glissade_core::animation::timing::frame_period;

/// Event handler for terminal events
pub struct EventHandler {
    tick_rate: Duration,
    /// Poll timeout while slides are moving
    animation_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        let tick_rate = Duration::from_millis(tick_rate_ms.max(1));
        Self {
            tick_rate,
            animation_rate: tick_rate,
        }
    }

    /// Poll at the animation frame rate while a transition is running
    pub fn with_animation_fps(tick_rate_ms: u64, fps: u32) -> Self {
        let handler = Self::new(tick_rate_ms);
        Self {
            animation_rate: frame_period(fps).min(handler.tick_rate),
            ..handler
        }
    }

    /// Poll for the next event at the idle tick rate
    pub fn next(&self) -> Result<Option<AppEvent>> {
        self.poll(self.tick_rate)
    }

    /// Poll for the next event at the animation frame rate
    pub fn next_animation(&self) -> Result<Option<AppEvent>> {
        self.poll(self.animation_rate)
    }

    fn poll(&self, timeout: Duration) -> Result<Option<AppEvent>> {
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    // Only handle key press events, ignore release events
                    // (crossterm 0.27+ sends release events on some systems)
                    if key.kind == KeyEventKind::Press {
                        Ok(Some(AppEvent::Key(key)))
                    } else {
                        Ok(None)
                    }
                }
                Event::Mouse(mouse) => Ok(Some(AppEvent::Mouse(mouse))),
                Event::Resize(w, h) => Ok(Some(AppEvent::Resize(w, h))),
                _ => Ok(None),
            }
        } else {
            Ok(Some(AppEvent::Tick))
        }
    }
}

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// Mouse button, move or scroll
    Mouse(MouseEvent),
    /// Terminal was resized
    Resize(u16, u16),
    /// Tick event for periodic redraws
    Tick,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animation_rate_follows_fps() {
        let handler = EventHandler::with_animation_fps(50, 60);
        assert_eq!(handler.tick_rate, Duration::from_millis(50));
        assert_eq!(handler.animation_rate, Duration::from_millis(16));
    }

    #[test]
    fn test_animation_rate_never_slower_than_tick() {
        let handler = EventHandler::with_animation_fps(10, 30);
        assert_eq!(handler.animation_rate, Duration::from_millis(10));
    }
}
