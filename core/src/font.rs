use crate::constants::FONT_START;
use crate::state::State;

/// # Font
/// Sprites for the hexadecimal digits 0..F.
///
/// Each glyph is 4 pixels wide and 5 rows tall; a row is the high nibble of its byte.
/// ```text
/// 0xF0  ####
/// 0x90  #..#
/// 0x90  #..#
/// 0x90  #..#
/// 0xF0  ####
/// ```
pub const FONT: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];

/// Copy the font into memory at `FONT_START`.
///
/// `FX29` addresses glyphs as `5 * digit` counted from zero, so the interpreter
/// area at 0x000 carries a second copy that those addresses land on.
pub fn load_font(state: &mut State) {
    let start = FONT_START as usize;
    state.memory[start..start + FONT.len()].copy_from_slice(&FONT);
    state.memory[..FONT.len()].copy_from_slice(&FONT);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_is_loaded_at_font_start() {
        let mut state = State::new();
        state.memory.iter_mut().for_each(|b| *b = 0);
        load_font(&mut state);
        assert_eq!(state.memory[0x50..0xA0], FONT[..]);
        assert_eq!(state.memory[0xA0], 0);
    }

    #[test]
    fn test_glyphs_are_five_bytes_apart() {
        let state = State::new();
        // F
        let f = 0x50 + 0xF * 5;
        assert_eq!(state.memory[f..f + 5], [0xF0, 0x80, 0xF0, 0x80, 0x80]);
    }

    #[test]
    fn test_digit_times_five_addresses_a_glyph() {
        let state = State::new();
        assert_eq!(state.memory[0..5], [0xF0, 0x90, 0x90, 0x90, 0xF0]);
        // 7
        assert_eq!(state.memory[35..40], [0xF0, 0x10, 0x20, 0x40, 0x40]);
    }
}
