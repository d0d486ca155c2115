use std::path::PathBuf;

use anyhow::Result;
use glissade_core::AppConfig;

use super::load_slides;

pub fn run(config: &AppConfig, files: &[PathBuf]) -> Result<()> {
    let slides = load_slides(config, files)?;

    println!("Slides ({}):\n", slides.len());

    for (i, slide) in slides.iter().enumerate() {
        let lines = slide.body.lines().count();
        println!("  {:>2}. {} ({} lines)", i + 1, slide.title, lines);
        if let Some(first) = slide.body.lines().find(|l| !l.trim().is_empty()) {
            println!("      {}", first.trim());
        }
    }

    Ok(())
}
