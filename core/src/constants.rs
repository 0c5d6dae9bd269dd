/// Bytes of addressable memory
pub const MEMORY_SIZE: usize = 4096;

/// Addresses wrap to 12 bits
pub const ADDRESS_MASK: u16 = 0x0FFF;

/// Where ROMs are loaded and execution begins
pub const PROGRAM_START: u16 = 0x200;

/// The largest ROM that fits between `PROGRAM_START` and the end of memory
pub const MAX_ROM_SIZE: usize = MEMORY_SIZE - PROGRAM_START as usize;

/// Where the hex digit sprites live
pub const FONT_START: u16 = 0x50;

/// Bytes per hex digit sprite
pub const GLYPH_HEIGHT: u16 = 5;

pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;
pub const DISPLAY_SIZE: usize = DISPLAY_WIDTH * DISPLAY_HEIGHT;

/// Maximum depth of nested subroutine calls
pub const STACK_DEPTH: usize = 16;

/// Size of the hexadecimal keypad
pub const KEY_COUNT: usize = 16;

/// Default instructions executed per second
pub const CLOCK_SPEED: u32 = 700;

/// Rate at which the delay and sound timers count down
pub const TIMER_HZ: u32 = 60;
