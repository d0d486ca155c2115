use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::keymap::{KeyBinding, Keymap};
use crate::layout::{Button, Hit, ScreenLayout};
use crate::surfaces::ViewModel;

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Next,
    Prev,
    First,
    Last,
    /// Jump to a slide by zero-based index
    GoTo(usize),
    ToggleAutoplay,
    ToggleFullscreen,
    /// Click on the slide area; only pauses autoplay
    Interact,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, keymap: &Keymap, fullscreen: bool) -> Action {
    if let Some(action) = keymap.get(&KeyBinding::new(key.code, key.modifiers)) {
        return *action;
    }

    match (key.code, key.modifiers) {
        // Esc leaves fullscreen like a browser does
        (KeyCode::Esc, KeyModifiers::NONE) if fullscreen => Action::ToggleFullscreen,
        // Digits jump straight to a slide, 1-based
        (KeyCode::Char(c @ '1'..='9'), KeyModifiers::NONE) => {
            Action::GoTo(c as usize - '1' as usize)
        }
        _ => Action::None,
    }
}

/// Handle a mouse event against the last drawn layout
pub fn handle_mouse_event(mouse: MouseEvent, layout: &ScreenLayout, view: &ViewModel) -> Action {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return Action::None;
    }

    match layout.hit(mouse.column, mouse.row) {
        Some(Hit::Indicator(index)) => Action::GoTo(index),
        Some(Hit::Button(_)) if !view.controls_enabled => Action::None,
        Some(Hit::Button(button)) => button_action(button),
        Some(Hit::Slides) => Action::Interact,
        None => Action::None,
    }
}

fn button_action(button: Button) -> Action {
    match button {
        Button::First => Action::First,
        Button::Prev => Action::Prev,
        Button::PlayPause => Action::ToggleAutoplay,
        Button::Next => Action::Next,
        Button::Last => Action::Last,
        Button::Fullscreen => Action::ToggleFullscreen,
    }
}
