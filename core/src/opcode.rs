/// # Opcodes
///
/// Chip-8 opcodes are 16 bits each, stored big-endian. Their behavior is cased on some combination of:
/// - `(n, _, _, _)` broad categorization; applies to all opcodes
/// - `(_, _, _, n)` specific behavior within a category
/// - `(_, _, n, n)` more specific behavior within a category
/// - `(_, n, n, n)` some fixed function that doesn't require variables (e.g. CLS; clear screen)
///
/// Nibbles not used to determine the operation often (but not always) carry important data.
/// - `(_, n, n, n)` a 12-bit address
/// - `(_, _, n, n)` a byte that is assigned to and/or compared with Vx
/// - `(_, n, _, _)` either the register Vx or a range of registers V0..=Vx
/// - `(_, _, n, _)` the register Vy
pub trait Opcode {
    /// The opcode's component nibbles, most significant first.
    fn nibbles(&self) -> (u8, u8, u8, u8);

    /// `[x___]`
    fn kind(&self) -> u8;

    /// `[_x__]`
    fn x(&self) -> usize;

    /// `[__y_]`
    fn y(&self) -> usize;

    /// `[___n]`
    fn n(&self) -> u8;

    /// `[__nn]`
    fn nn(&self) -> u8;

    /// `[_nnn]`
    fn nnn(&self) -> u16;
}

impl Opcode for u16 {
    fn nibbles(&self) -> (u8, u8, u8, u8) {
        (self.kind(), self.x() as u8, self.y() as u8, self.n())
    }

    fn kind(&self) -> u8 {
        ((self & 0xF000) >> 12) as u8
    }

    fn x(&self) -> usize {
        ((self & 0x0F00) >> 8) as usize
    }

    fn y(&self) -> usize {
        ((self & 0x00F0) >> 4) as usize
    }

    fn n(&self) -> u8 {
        (self & 0x000F) as u8
    }

    fn nn(&self) -> u8 {
        (self & 0x00FF) as u8
    }

    fn nnn(&self) -> u16 {
        self & 0x0FFF
    }
}

/// Combine two bytes from memory into an opcode
pub fn from_bytes(high: u8, low: u8) -> u16 {
    u16::from(high) << 8 | u16::from(low)
}

#[cfg(test)]
mod test_opcode {
    use super::*;

    #[test]
    fn test_nibbles() {
        let op: u16 = 0xABCD;
        assert_eq!(op.nibbles(), (0xA, 0xB, 0xC, 0xD));
    }

    #[test]
    fn test_fields() {
        let op: u16 = 0xD1F4;
        assert_eq!(op.kind(), 0xD);
        assert_eq!(op.x(), 0x1);
        assert_eq!(op.y(), 0xF);
        assert_eq!(op.n(), 0x4);
    }

    #[test]
    fn test_nn() {
        let op: u16 = 0x6A05;
        assert_eq!(op.nn(), 0x05);
    }

    #[test]
    fn test_nnn() {
        let op: u16 = 0x2BCD;
        assert_eq!(op.nnn(), 0x0BCD);
    }

    #[test]
    fn test_from_bytes_is_big_endian() {
        assert_eq!(from_bytes(0x8A, 0xB4), 0x8AB4);
    }
}
