use tokio::sync::{mpsc, watch};
use tokio::task::{JoinError, JoinSet};
use tracing::{debug, info, warn};

use super::autoplay::AutoplayTimer;
use super::handle::{Command, SliderHandle};
use super::slides::SlideSet;
use super::state::CoordinatorState;
use super::transition::{offset, TransitionBarrier, TransitionRequest};
use crate::animation::{AnimationOutcome, Generation};
use crate::config::SliderConfig;
use crate::surface::Surfaces;

/// Who asked for a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    User,
    Autoplay,
}

/// A transition whose slide animations are still running
struct InFlight {
    request: TransitionRequest,
    origin: Origin,
    barrier: TransitionBarrier,
    tasks: JoinSet<AnimationOutcome>,
}

/// Slide-set coordinator.
///
/// Owns the current index, the transition flag and the autoplay timer, and is
/// the only writer of any of them. Runs as a single task: see [`Slider::run`].
pub struct Slider {
    len: usize,
    surfaces: Surfaces,
    config: SliderConfig,
    state: CoordinatorState,
    state_tx: watch::Sender<CoordinatorState>,
    commands: mpsc::UnboundedReceiver<Command>,
    autoplay: AutoplayTimer,
    generation: Generation,
    transition: Option<InFlight>,
}

impl Slider {
    /// Bind a coordinator to `slides`, lay the slides out around slide 0 and
    /// render the indicators.
    pub fn new(slides: &SlideSet, surfaces: Surfaces, config: SliderConfig) -> (Self, SliderHandle) {
        let len = slides.len();
        // Autoplay-on-start is part of the first published state; `run` arms the timer
        let state = CoordinatorState {
            is_autoplaying: config.autoplay_on_start,
            ..Default::default()
        };
        let (state_tx, state_rx) = watch::channel(state);
        let (command_tx, command_rx) = mpsc::unbounded_channel();

        for i in 0..len {
            surfaces.slides.set_offset(i, offset(i, state.current_index));
        }
        surfaces.indicators.render(len);
        surfaces.indicators.set_active(state.current_index);
        surfaces.controls.set_playing(state.is_autoplaying);

        let slider = Self {
            len,
            surfaces,
            autoplay: AutoplayTimer::new(config.autoplay_interval()),
            config,
            state,
            state_tx,
            commands: command_rx,
            generation: Generation::new(),
            transition: None,
        };
        let handle = SliderHandle::new(command_tx, state_rx, len);

        (slider, handle)
    }

    /// Process commands, autoplay ticks and animation completions until
    /// shutdown or until every handle is dropped.
    pub async fn run(mut self) {
        info!("Slider started with {} slides", self.len);

        if self.state.is_autoplaying {
            info!("Autoplay started");
            self.autoplay.start();
        }

        loop {
            tokio::select! {
                command = self.commands.recv() => {
                    match command {
                        Some(Command::Shutdown) | None => break,
                        Some(command) => self.handle_command(command).await,
                    }
                }

                _ = self.autoplay.tick() => {
                    self.on_autoplay_tick();
                }

                joined = next_completion(&mut self.transition) => {
                    self.on_animation_finished(joined);
                }
            }
        }

        // Retire any running animations before they can snap
        self.generation.advance();
        self.transition = None;
        self.autoplay.stop();
        info!("Slider stopped");
    }

    async fn handle_command(&mut self, command: Command) {
        debug!("Slider command: {:?}", command);
        match command {
            Command::Next => {
                self.stop_autoplay();
                self.go_to_index((self.state.current_index + 1) % self.len, Origin::User);
            }
            Command::Prev => {
                self.stop_autoplay();
                self.go_to_index((self.state.current_index + self.len - 1) % self.len, Origin::User);
            }
            Command::First => {
                self.stop_autoplay();
                self.go_to_index(0, Origin::User);
            }
            Command::Last => {
                self.stop_autoplay();
                self.go_to_index(self.len - 1, Origin::User);
            }
            Command::GoTo(index) => {
                if index < 0 || index >= self.len as i64 {
                    debug!("Ignoring out-of-range slide index {}", index);
                    return;
                }
                self.stop_autoplay();
                self.go_to_index(index as usize, Origin::User);
            }
            Command::StartAutoplay => self.start_autoplay(),
            Command::StopAutoplay => self.stop_autoplay(),
            Command::ToggleAutoplay => {
                if self.state.is_autoplaying {
                    self.stop_autoplay();
                } else {
                    self.start_autoplay();
                }
            }
            Command::ToggleFullscreen => {
                self.stop_autoplay();
                self.toggle_fullscreen().await;
            }
            Command::Interact => self.stop_autoplay(),
            Command::Shutdown => {}
        }
    }

    /// Start a transition to `target`.
    ///
    /// A request for the current slide is a no-op. Any request that arrives
    /// while a transition is running is dropped, including one for the same
    /// target: the running transition already gets there.
    fn go_to_index(&mut self, target: usize, origin: Origin) {
        if let Some(in_flight) = &self.transition {
            debug!(
                "Dropping request for slide {} during transition to {}",
                target, in_flight.request.target_index
            );
            return;
        }
        if target == self.state.current_index {
            return;
        }

        match origin {
            Origin::User => self.stop_autoplay(),
            // Paused for the duration; re-armed when the transition lands
            Origin::Autoplay => {
                self.autoplay.stop();
            }
        }

        debug!("Transition {} -> {}", self.state.current_index, target);
        self.state.is_transitioning = true;
        self.publish();
        self.surfaces.controls.set_enabled(false);

        let tag = self.generation.advance();
        let request = TransitionRequest::new(self.len, self.state.current_index, target);
        let mut tasks = JoinSet::new();
        for animation in request.animations(&self.config) {
            tasks.spawn(animation.run(
                self.surfaces.slides.clone(),
                self.generation.clone(),
                tag,
            ));
        }

        self.transition = Some(InFlight {
            barrier: TransitionBarrier::new(self.len),
            request,
            origin,
            tasks,
        });
    }

    fn on_animation_finished(&mut self, joined: Option<Result<AnimationOutcome, JoinError>>) {
        let Some(in_flight) = self.transition.as_mut() else {
            return;
        };

        let released = match joined {
            Some(Ok(outcome)) => in_flight.barrier.arrive(Some(outcome)),
            Some(Err(e)) => {
                warn!("Slide animation task failed: {}", e);
                in_flight.barrier.arrive(None)
            }
            // Join set drained without the barrier noticing
            None => true,
        };

        if released {
            self.finish_transition();
        }
    }

    fn finish_transition(&mut self) {
        let Some(in_flight) = self.transition.take() else {
            return;
        };

        if !in_flight.barrier.all_completed() {
            warn!(
                "Only some slide animations completed ({} of {}); snapping to final offsets",
                in_flight.barrier.arrived(),
                self.len
            );
            for (slide, &end) in in_flight.request.end_offsets.iter().enumerate() {
                self.surfaces.slides.set_offset(slide, end);
            }
        }

        self.state.current_index = in_flight.request.target_index;
        self.state.is_transitioning = false;
        self.surfaces.controls.set_enabled(true);
        self.surfaces.indicators.set_active(self.state.current_index);
        debug!(
            "Transition to {} finished ({:?})",
            self.state.current_index, in_flight.origin
        );

        // Autoplay may also have been switched on while a user transition ran
        if self.state.is_autoplaying && !self.autoplay.is_running() {
            if self.is_at_last() {
                info!("Autoplay reached the last slide");
                self.stop_autoplay();
            } else {
                self.autoplay.start();
            }
        }

        self.publish();
    }

    fn on_autoplay_tick(&mut self) {
        if self.is_at_last() {
            self.stop_autoplay();
            return;
        }
        let target = (self.state.current_index + 1) % self.len;
        self.go_to_index(target, Origin::Autoplay);
    }

    fn start_autoplay(&mut self) {
        if self.state.is_autoplaying {
            return;
        }
        info!("Autoplay started");
        self.state.is_autoplaying = true;
        if self.transition.is_none() {
            self.autoplay.start();
        }
        self.surfaces.controls.set_playing(true);
        self.publish();
    }

    fn stop_autoplay(&mut self) {
        self.autoplay.stop();
        if !self.state.is_autoplaying {
            return;
        }
        info!("Autoplay stopped");
        self.state.is_autoplaying = false;
        self.surfaces.controls.set_playing(false);
        self.publish();
    }

    async fn toggle_fullscreen(&self) {
        let Some(fullscreen) = &self.surfaces.fullscreen else {
            debug!("Fullscreen is not available");
            return;
        };

        if fullscreen.is_fullscreen().await {
            if let Err(e) = fullscreen.exit().await {
                warn!("Exit fullscreen failed: {}", e);
            }
        } else if let Err(e) = fullscreen.enter().await {
            warn!("Fullscreen failed: {}", e);
        }
    }

    fn is_at_last(&self) -> bool {
        self.state.current_index == self.len - 1
    }

    fn publish(&self) {
        self.state_tx.send_replace(self.state);
    }
}

/// Next finished slide animation of the running transition; pends while idle
async fn next_completion(
    transition: &mut Option<InFlight>,
) -> Option<Result<AnimationOutcome, JoinError>> {
    match transition {
        Some(in_flight) => in_flight.tasks.join_next().await,
        None => std::future::pending().await,
    }
}
