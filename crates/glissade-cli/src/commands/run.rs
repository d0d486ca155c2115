use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};

use glissade_core::{AppConfig, Slider, Surfaces};
use glissade_tui::{
    event::{AppEvent, EventHandler},
    load_theme, App, TerminalSurfaces,
};

use super::load_slides;

pub async fn run(config: Arc<AppConfig>, files: &[PathBuf], no_autoplay: bool) -> Result<()> {
    // Fail before touching the terminal
    let slides = load_slides(&config, files)?;

    let mut slider_config = config.slider.clone();
    if no_autoplay {
        slider_config.autoplay_on_start = false;
    }

    let surfaces = TerminalSurfaces::new(slides.len());
    let (slider, handle) = Slider::new(
        &slides,
        Surfaces::shared(Arc::new(surfaces.clone())),
        slider_config,
    );
    let slider_task = tokio::spawn(slider.run());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("Glissade"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let theme = load_theme(&config.ui.theme);
    let event_handler = EventHandler::with_animation_fps(
        config.ui.tick_rate_ms,
        config.slider.animation_fps,
    );
    let mut app = App::new(config, slides, handle.clone(), surfaces, theme);

    let result = event_loop(&mut terminal, &mut app, &event_handler);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = handle.shutdown() {
        warn!("Slider already stopped: {}", e);
    }
    slider_task.await?;
    info!("Bye");

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| app.draw(frame))?;

        // Redraw at the animation frame rate while slides are moving
        let event = if app.is_animating() {
            events.next_animation()?
        } else {
            events.next()?
        };

        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => app.handle_key(key)?,
                AppEvent::Mouse(mouse) => app.handle_mouse(mouse)?,
                // Layout is recomputed on the next draw
                AppEvent::Resize(_, _) => {}
                AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
