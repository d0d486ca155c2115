use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use glissade_core::surface::TracingSurface;
use glissade_core::{AppConfig, CoordinatorState, SlideSet, Slider, SliderConfig, SliderHandle, Surfaces};
use tokio::task::JoinHandle;
use tracing::info;

use super::load_slides;

/// Autoplay through the slides with logging surfaces until autoplay stops itself
pub async fn run(config: Arc<AppConfig>, files: &[PathBuf], interval_ms: Option<u64>) -> Result<()> {
    let slides = load_slides(&config, files)?;

    let mut slider_config = config.slider.clone();
    if let Some(ms) = interval_ms {
        slider_config.autoplay_interval_ms = ms;
    }

    info!("Playing {} slides", slides.len());
    for (i, slide) in slides.iter().enumerate() {
        info!("  {}. {}", i + 1, slide.title);
    }

    let (handle, slider_task) = start(&slides, slider_config)?;

    tokio::select! {
        result = until_autoplay_stops(&handle) => {
            let state = result?;
            info!("Finished on slide {}", state.current_index + 1);
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupted");
        }
    }

    handle.shutdown()?;
    slider_task.await?;

    Ok(())
}

/// Spawn a headless slider with autoplay on from its first published state
fn start(slides: &SlideSet, mut config: SliderConfig) -> Result<(SliderHandle, JoinHandle<()>)> {
    config.autoplay_on_start = true;

    let surface = Arc::new(TracingSurface);
    let surfaces = Surfaces::builder()
        .slides(surface.clone())
        .indicators(surface.clone())
        .controls(surface)
        .build()?;

    let (slider, handle) = Slider::new(slides, surfaces, config);
    Ok((handle, tokio::spawn(slider.run())))
}

/// Settled with autoplay off. Autoplay is on from the start, so this cannot
/// match before playback began.
async fn until_autoplay_stops(handle: &SliderHandle) -> glissade_core::Result<CoordinatorState> {
    handle
        .wait_for(|s| !s.is_autoplaying && !s.is_transitioning)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use glissade_core::Slide;

    fn deck(n: usize) -> SlideSet {
        SlideSet::new((0..n).map(|i| Slide::new(format!("Slide {}", i + 1), "")).collect()).unwrap()
    }

    fn fast() -> SliderConfig {
        SliderConfig {
            autoplay_interval_ms: 1,
            autoplay_on_start: false,
            ..Default::default()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_play_ends_on_last_slide() {
        let (handle, task) = start(&deck(3), fast()).unwrap();
        assert!(handle.state().is_autoplaying);

        let state = until_autoplay_stops(&handle).await.unwrap();
        assert_eq!(state.current_index, 2);

        handle.shutdown().unwrap();
        task.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_slide_stops_after_one_period() {
        let (handle, task) = start(&deck(1), fast()).unwrap();

        // Let the slider start and stop autoplay before anyone waits
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        assert!(!handle.state().is_autoplaying);

        let state = until_autoplay_stops(&handle).await.unwrap();
        assert_eq!(state.current_index, 0);

        handle.shutdown().unwrap();
        task.await.unwrap();
    }
}
