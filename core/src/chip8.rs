use log::{debug, info};

use crate::constants::{KEY_COUNT, MAX_ROM_SIZE, PROGRAM_START};
use crate::error::LoadError;
use crate::instruction;
use crate::opcode;
use crate::state::{FrameBuffer, State};

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Owns the machine `state` and supplies interfaces for:
/// - loading roms
/// - pressing and releasing keys
/// - fetching and executing instructions
/// - advancing its timers
/// - inspecting its frame buffer for rendering by some display
pub struct Chip8 {
    state: State,
}

impl Chip8 {
    pub fn new() -> Self {
        Chip8 {
            state: State::new(),
        }
    }

    /// Load a rom into memory at 0x200
    ///
    /// # Arguments
    /// * `reader` a source of raw ROM bytes
    pub fn load_rom(&mut self, reader: &mut dyn std::io::Read) -> Result<usize, LoadError> {
        let mut rom = Vec::new();
        reader.read_to_end(&mut rom)?;
        if rom.len() > MAX_ROM_SIZE {
            return Err(LoadError::RomTooLarge {
                size: rom.len(),
                max: MAX_ROM_SIZE,
            });
        }
        let start = PROGRAM_START as usize;
        self.state.memory[start..start + rom.len()].copy_from_slice(&rom);
        info!("loaded {} byte ROM", rom.len());
        Ok(rom.len())
    }

    /// Gets the opcode currently pointed at by the pc.
    /// Memory is stored as bytes, but opcodes are 16 bits so we combine two subsequent bytes.
    pub fn fetch(&self) -> u16 {
        let pc = self.state.pc;
        opcode::from_bytes(self.state.read(pc), self.state.read(pc.wrapping_add(1)))
    }

    /// Executes an opcode that has already been fetched; the pc must already be past it
    pub fn execute(&mut self, op: u16) {
        instruction::execute(op, &mut self.state);
    }

    /// Advances the CPU by a single cycle and returns the opcode it ran
    pub fn step(&mut self) -> u16 {
        let op = self.fetch();
        self.state.pc = self.state.pc.wrapping_add(2);
        self.execute(op);
        op
    }

    /// Counts both timers down towards 0.
    ///
    /// Returns true on the one tick where the sound timer runs out, which is the cue
    /// for a short tone.
    pub fn tick_timers(&mut self) -> bool {
        if self.state.delay_timer > 0 {
            self.state.delay_timer -= 1;
        }

        let beep = self.state.sound_timer == 1;
        if self.state.sound_timer > 0 {
            self.state.sound_timer -= 1;
        }
        if beep {
            debug!("sound timer expired");
        }
        beep
    }

    /// Whether a tone should currently be playing
    pub fn sound_active(&self) -> bool {
        self.state.sound_timer > 0
    }

    /// Set the pressed status of key
    ///
    /// # Arguments
    /// * `key` the hex keypad value; only the low nibble is used
    pub fn key_press(&mut self, key: u8) {
        self.state.keys[key as usize % KEY_COUNT] = true;
    }

    /// Unset the pressed status of key
    ///
    /// # Arguments
    /// * `key` the hex keypad value; only the low nibble is used
    pub fn key_release(&mut self, key: u8) {
        self.state.keys[key as usize % KEY_COUNT] = false;
    }

    /// Returns the FrameBuffer if the display should be redrawn
    pub fn frame(&self) -> Option<&FrameBuffer> {
        if self.state.draw_flag {
            Some(&self.state.frame_buffer)
        } else {
            None
        }
    }

    /// Marks the current frame as drawn
    pub fn clear_redraw(&mut self) {
        self.state.draw_flag = false;
    }

    pub fn state(&self) -> &State {
        &self.state
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new()
    }
}
