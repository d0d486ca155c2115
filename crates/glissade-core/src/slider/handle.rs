use tokio::sync::{mpsc, watch};

use super::state::CoordinatorState;
use crate::{Error, Result};

/// Requests accepted by the slider loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Command {
    Next,
    Prev,
    First,
    Last,
    GoTo(i64),
    StartAutoplay,
    StopAutoplay,
    ToggleAutoplay,
    ToggleFullscreen,
    /// Pointer pressed on the slide area
    Interact,
    Shutdown,
}

/// Cheap, cloneable front door to a running [`Slider`](super::Slider).
///
/// Navigation requests are fire-and-forget; watch [`SliderHandle::state`]
/// or use [`SliderHandle::wait_for`] to observe their effect.
#[derive(Debug, Clone)]
pub struct SliderHandle {
    commands: mpsc::UnboundedSender<Command>,
    state: watch::Receiver<CoordinatorState>,
    len: usize,
}

impl SliderHandle {
    pub(crate) fn new(
        commands: mpsc::UnboundedSender<Command>,
        state: watch::Receiver<CoordinatorState>,
        len: usize,
    ) -> Self {
        Self { commands, state, len }
    }

    fn send(&self, command: Command) -> Result<()> {
        self.commands
            .send(command)
            .map_err(|_| Error::SliderClosed)
    }

    /// Advance one slide, wrapping from the last to the first
    pub fn next(&self) -> Result<()> {
        self.send(Command::Next)
    }

    /// Go back one slide, wrapping from the first to the last
    pub fn prev(&self) -> Result<()> {
        self.send(Command::Prev)
    }

    pub fn first(&self) -> Result<()> {
        self.send(Command::First)
    }

    pub fn last(&self) -> Result<()> {
        self.send(Command::Last)
    }

    /// Go to `index`; indices outside the slide set are ignored
    pub fn go_to(&self, index: i64) -> Result<()> {
        self.send(Command::GoTo(index))
    }

    pub fn start_autoplay(&self) -> Result<()> {
        self.send(Command::StartAutoplay)
    }

    pub fn stop_autoplay(&self) -> Result<()> {
        self.send(Command::StopAutoplay)
    }

    pub fn toggle_autoplay(&self) -> Result<()> {
        self.send(Command::ToggleAutoplay)
    }

    pub fn toggle_fullscreen(&self) -> Result<()> {
        self.send(Command::ToggleFullscreen)
    }

    /// Report direct user interaction with the slides (stops autoplay)
    pub fn interact(&self) -> Result<()> {
        self.send(Command::Interact)
    }

    /// Stop the slider; in-flight animations end without snapping
    pub fn shutdown(&self) -> Result<()> {
        self.send(Command::Shutdown)
    }

    /// Latest published state
    pub fn state(&self) -> CoordinatorState {
        *self.state.borrow()
    }

    /// Number of slides
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Wait until the published state satisfies `predicate`
    pub async fn wait_for(
        &self,
        predicate: impl FnMut(&CoordinatorState) -> bool,
    ) -> Result<CoordinatorState> {
        let mut state = self.state.clone();
        let matched = state
            .wait_for(predicate)
            .await
            .map_err(|_| Error::SliderClosed)?;
        Ok(*matched)
    }

    /// Wait until the next state change
    pub async fn changed(&mut self) -> Result<CoordinatorState> {
        self.state.changed().await.map_err(|_| Error::SliderClosed)?;
        Ok(*self.state.borrow_and_update())
    }
}
