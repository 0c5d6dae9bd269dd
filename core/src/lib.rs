pub use chip8::Chip8;
pub use constants::{CLOCK_SPEED, TIMER_HZ};
pub use error::LoadError;
pub use state::{FrameBuffer, State};

mod chip8;
pub mod constants;
mod error;
pub mod font;
pub mod instruction;
pub mod opcode;
mod operations;
pub mod state;
