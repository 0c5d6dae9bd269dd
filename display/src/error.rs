use thiserror::Error;

/// SDL2 reports failures as strings; this gives them a type
#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("sdl2 video: {0}")]
    Video(String),

    #[error("sdl2 audio: {0}")]
    Audio(String),
}
