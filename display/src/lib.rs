pub use audio::Beeper;
pub use display::Display;
pub use error::DisplayError;

mod audio;
mod display;
mod error;
