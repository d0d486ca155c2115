use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No slides found")]
    EmptySlideSet,

    #[error("Slider surface not provided: {0}")]
    MissingSurface(&'static str),

    #[error("Fullscreen request failed: {0}")]
    Fullscreen(String),

    #[error("Slider is no longer running")]
    SliderClosed,
}

pub type Result<T> = std::result::Result<T, Error>;
