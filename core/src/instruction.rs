use log::{trace, warn};

use crate::opcode::Opcode;
use crate::operations::*;
use crate::state::State;

/// A single state transition selected by an opcode
pub type Operation = fn(op: u16, state: &mut State);

/// Selects the Operation for a given opcode, if there is one
pub fn decode(op: u16) -> Option<Operation> {
    let operation: Operation = match op.nibbles() {
        (0x0, 0x0, 0xE, 0x0) => clr,
        (0x0, 0x0, 0xE, 0xE) => rts,
        (0x1, ..) => jump,
        (0x2, ..) => call,
        (0x3, ..) => ske,
        (0x4, ..) => skne,
        (0x5, .., 0x0) => skre,
        (0x6, ..) => load,
        (0x7, ..) => add,
        (0x8, .., 0x0) => mv,
        (0x8, .., 0x1) => or,
        (0x8, .., 0x2) => and,
        (0x8, .., 0x3) => xor,
        (0x8, .., 0x4) => addr,
        (0x8, .., 0x5) => sub,
        (0x8, .., 0x6) => shr,
        (0x8, .., 0x7) => subn,
        (0x8, .., 0xE) => shl,
        (0x9, .., 0x0) => skrne,
        (0xA, ..) => loadi,
        (0xB, ..) => jumpi,
        (0xC, ..) => rand,
        (0xD, ..) => draw,
        (0xE, _, 0x9, 0xE) => skpr,
        (0xE, _, 0xA, 0x1) => skup,
        (0xF, _, 0x0, 0x7) => moved,
        (0xF, _, 0x0, 0xA) => keyd,
        (0xF, _, 0x1, 0x5) => loadd,
        (0xF, _, 0x1, 0x8) => loads,
        (0xF, _, 0x1, 0xE) => addi,
        (0xF, _, 0x2, 0x9) => ldspr,
        (0xF, _, 0x3, 0x3) => bcd,
        (0xF, _, 0x5, 0x5) => stor,
        (0xF, _, 0x6, 0x5) => read,
        _ => return None,
    };
    Some(operation)
}

/// Decodes and applies one opcode; unknown opcodes are skipped
pub fn execute(op: u16, state: &mut State) {
    trace!(
        "{:04X} v{:02X?} i{:04X} pc{:04X}",
        op,
        state.v,
        state.i,
        state.pc
    );
    match decode(op) {
        Some(operation) => operation(op, state),
        None => warn!("ignoring unknown opcode {:04X} before pc {:04X}", op, state.pc),
    }
}
