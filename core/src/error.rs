use thiserror::Error;

/// Reasons a ROM can't be loaded
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("ROM is {size} bytes but at most {max} fit in memory")]
    RomTooLarge { size: usize, max: usize },

    #[error("unable to read ROM")]
    Io(#[from] std::io::Error),
}
