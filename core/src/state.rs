use log::warn;

use crate::constants::{
    ADDRESS_MASK, DISPLAY_SIZE, DISPLAY_WIDTH, KEY_COUNT, MEMORY_SIZE, PROGRAM_START, STACK_DEPTH,
};
use crate::font::load_font;

/// The FrameBuffer is row-major and indexed as [y * DISPLAY_WIDTH + x]; every cell is 0 or 1
pub type FrameBuffer = [u8; DISPLAY_SIZE];

/// The Chip8 machine state
///
/// ## CPU
/// Registers
/// - (v) 16 8-bit registers (V0..VF)
///     - VF doubles as the carry, borrow and collision flag
/// - (i) a 16-bit memory address register
///
/// Counter
/// - (pc) a 16-bit program counter, starting at 0x200
///
/// Stack
/// - 16 return addresses and (sp) the index of the next free slot
///
/// Timers
/// - 2 8-bit timers (delay & sound) counting down towards 0 at 60Hz
/// - a tone is audible while the sound timer is above 0
///
/// ## Memory
/// - 4096 bytes of addressable memory; the font lives at 0x50
/// - 64x32 frame buffer of on/off pixels
///
/// ## Input
/// - the pressed status of keys 0..F, written only by the host
#[derive(Clone)]
pub struct State {
    pub memory: [u8; MEMORY_SIZE],
    pub pc: u16,
    pub i: u16,
    pub v: [u8; 16],
    pub stack: [u16; STACK_DEPTH],
    pub sp: u8,
    pub delay_timer: u8,
    pub sound_timer: u8,
    pub frame_buffer: FrameBuffer,
    pub keys: [bool; KEY_COUNT],
    pub draw_flag: bool,
}

impl State {
    pub fn new() -> Self {
        let mut state = State {
            memory: [0; MEMORY_SIZE],
            pc: PROGRAM_START,
            i: 0,
            v: [0; 16],
            stack: [0; STACK_DEPTH],
            sp: 0,
            delay_timer: 0,
            sound_timer: 0,
            frame_buffer: [0; DISPLAY_SIZE],
            keys: [false; KEY_COUNT],
            draw_flag: false,
        };
        load_font(&mut state);
        state
    }

    /// Read the byte at `addr`, wrapping past the end of memory
    pub fn read(&self, addr: u16) -> u8 {
        self.memory[(addr & ADDRESS_MASK) as usize]
    }

    /// Write `value` to `addr`, wrapping past the end of memory
    pub fn write(&mut self, addr: u16, value: u8) {
        self.memory[(addr & ADDRESS_MASK) as usize] = value;
    }

    /// Set VF to 1 or 0
    pub fn set_flag(&mut self, flag: bool) {
        self.v[0xF] = flag as u8;
    }

    /// Skip the next instruction; the pc has already moved past the current one
    pub fn skip(&mut self) {
        self.pc = self.pc.wrapping_add(2);
    }

    /// Store a return address and advance the stack pointer
    pub fn push(&mut self, addr: u16) {
        if self.sp as usize >= STACK_DEPTH {
            warn!("stack overflow at pc {:04X}; wrapping", self.pc);
            self.sp = 0;
        }
        self.stack[self.sp as usize] = addr;
        self.sp += 1;
    }

    /// Step the stack pointer back and return the address it pointed at
    pub fn pop(&mut self) -> u16 {
        if self.sp == 0 {
            warn!("stack underflow at pc {:04X}; wrapping", self.pc);
            self.sp = STACK_DEPTH as u8;
        }
        self.sp -= 1;
        self.stack[self.sp as usize]
    }

    /// Whether the pixel at (x, y) is on
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        self.frame_buffer[y * DISPLAY_WIDTH + x] == 1
    }

    /// XOR the pixel at (x, y) on; returns true if it was already on
    pub fn flip_pixel(&mut self, x: usize, y: usize) -> bool {
        let cell = &mut self.frame_buffer[y * DISPLAY_WIDTH + x];
        let was_on = *cell == 1;
        *cell ^= 1;
        was_on
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_starts_at_program_start() {
        let state = State::new();
        assert_eq!(state.pc, 0x200);
        assert_eq!(state.sp, 0);
        assert!(state.frame_buffer.iter().all(|&p| p == 0));
        assert!(!state.draw_flag);
    }

    #[test]
    fn test_memory_wraps() {
        let mut state = State::new();
        state.write(0x1000, 0xAB);
        assert_eq!(state.memory[0], 0xAB);
        assert_eq!(state.read(0x1000), 0xAB);
    }

    #[test]
    fn test_push_pop() {
        let mut state = State::new();
        state.push(0x202);
        state.push(0x304);
        assert_eq!(state.sp, 2);
        assert_eq!(state.pop(), 0x304);
        assert_eq!(state.pop(), 0x202);
        assert_eq!(state.sp, 0);
    }

    #[test]
    fn test_stack_overflow_wraps_without_touching_memory() {
        let mut state = State::new();
        let memory = state.memory;
        for addr in 0..17 {
            state.push(addr);
        }
        assert_eq!(state.sp, 1);
        assert_eq!(state.stack[0], 16);
        assert_eq!(state.memory[..], memory[..]);
    }

    #[test]
    fn test_stack_underflow_wraps() {
        let mut state = State::new();
        state.stack[15] = 0xABC;
        assert_eq!(state.pop(), 0xABC);
        assert_eq!(state.sp, 15);
    }

    #[test]
    fn test_flip_pixel_reports_collision() {
        let mut state = State::new();
        assert!(!state.flip_pixel(63, 31));
        assert!(state.pixel(63, 31));
        assert!(state.flip_pixel(63, 31));
        assert!(!state.pixel(63, 31));
    }
}
