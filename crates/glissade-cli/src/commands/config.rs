use std::path::Path;

use anyhow::{bail, Result};
use glissade_core::config::SlideConfig;
use glissade_core::AppConfig;

pub fn path(config_path: &Path) -> Result<()> {
    println!("{}", config_path.display());
    Ok(())
}

pub fn show(config: &AppConfig) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}

pub fn init(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Config already exists at {}\nUse --force to overwrite it.",
            config_path.display()
        );
    }

    let config = AppConfig {
        slides: sample_slides(),
        ..AppConfig::default()
    };
    config.save_to(config_path)?;

    println!("Wrote default config to {}", config_path.display());
    Ok(())
}

fn sample_slides() -> Vec<SlideConfig> {
    [
        ("Welcome", "Slides glide in from the right.\nPress l or → for the next one."),
        ("Navigation", "h/l move one slide, Home/End jump.\nDigits 1-9 or a click on a dot go straight there."),
        ("Autoplay", "Space starts and stops autoplay.\nIt pauses on its own at the last slide."),
        ("Fullscreen", "f hides the controls, Esc brings them back."),
    ]
    .into_iter()
    .map(|(title, body)| SlideConfig {
        title: title.to_string(),
        body: body.to_string(),
    })
    .collect()
}
