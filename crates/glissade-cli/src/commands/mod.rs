pub mod config;
pub mod list;
pub mod play;
pub mod run;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use glissade_core::{AppConfig, SlideSet};

/// Slides from the given files, or from `[[slides]]` in the config when none are given
pub fn load_slides(config: &AppConfig, files: &[PathBuf]) -> Result<SlideSet> {
    if !files.is_empty() {
        return SlideSet::from_files(files).context("Failed to read slide files");
    }

    if config.slides.is_empty() {
        bail!(
            "No slides to show.\nPass slide files, e.g.:\n  glissade run intro.txt outro.txt\n\nOr add [[slides]] to the config with:\n  glissade config init"
        );
    }

    Ok(SlideSet::from_config(&config.slides)?)
}
