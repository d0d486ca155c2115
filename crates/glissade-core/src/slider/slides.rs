use std::path::Path;

use crate::config::SlideConfig;
use crate::{Error, Result};

/// A single slide
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub title: String,
    pub body: String,
}

impl Slide {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

impl From<&SlideConfig> for Slide {
    fn from(config: &SlideConfig) -> Self {
        Self::new(config.title.clone(), config.body.clone())
    }
}

/// Ordered, fixed set of slides. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideSet {
    slides: Vec<Slide>,
}

impl SlideSet {
    pub fn new(slides: Vec<Slide>) -> Result<Self> {
        if slides.is_empty() {
            return Err(Error::EmptySlideSet);
        }
        Ok(Self { slides })
    }

    /// Build from the `[[slides]]` config section
    pub fn from_config(slides: &[SlideConfig]) -> Result<Self> {
        Self::new(slides.iter().map(Slide::from).collect())
    }

    /// Read one slide per file: the file stem becomes the title, the contents the body
    pub fn from_files<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let mut slides = Vec::with_capacity(paths.len());
        for path in paths {
            let path = path.as_ref();
            let body = std::fs::read_to_string(path)?;
            let title = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            slides.push(Slide::new(title, body.trim_end()));
        }
        Self::new(slides)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.slides.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slide> {
        self.slides.iter()
    }
}
