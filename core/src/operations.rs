//! Every operation runs after the pc has moved past its own two bytes, so jumps
//! overwrite the pc and skips add 2 more.

use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH, GLYPH_HEIGHT};
use crate::opcode::Opcode;
use crate::state::State;

/// clear
pub fn clr(_op: u16, state: &mut State) {
    state.frame_buffer.iter_mut().for_each(|p| *p = 0);
    state.draw_flag = true;
}

/// PC = STACK.pop()
pub fn rts(_op: u16, state: &mut State) {
    state.pc = state.pop();
}

/// PC = nnn
pub fn jump(op: u16, state: &mut State) {
    state.pc = op.nnn();
}

/// STACK.push(PC); PC = nnn
pub fn call(op: u16, state: &mut State) {
    state.push(state.pc);
    state.pc = op.nnn();
}

/// if Vx == nn then skip
pub fn ske(op: u16, state: &mut State) {
    if state.v[op.x()] == op.nn() {
        state.skip();
    }
}

/// if Vx != nn then skip
pub fn skne(op: u16, state: &mut State) {
    if state.v[op.x()] != op.nn() {
        state.skip();
    }
}

/// if Vx == Vy then skip
pub fn skre(op: u16, state: &mut State) {
    if state.v[op.x()] == state.v[op.y()] {
        state.skip();
    }
}

/// Vx = nn
pub fn load(op: u16, state: &mut State) {
    state.v[op.x()] = op.nn();
}

/// Vx += nn
/// Overflow wraps and VF is left alone
pub fn add(op: u16, state: &mut State) {
    state.v[op.x()] = state.v[op.x()].wrapping_add(op.nn());
}

/// Vx = Vy
pub fn mv(op: u16, state: &mut State) {
    state.v[op.x()] = state.v[op.y()];
}

/// Vx |= Vy
pub fn or(op: u16, state: &mut State) {
    state.v[op.x()] |= state.v[op.y()];
}

/// Vx &= Vy
pub fn and(op: u16, state: &mut State) {
    state.v[op.x()] &= state.v[op.y()];
}

/// Vx ^= Vy
pub fn xor(op: u16, state: &mut State) {
    state.v[op.x()] ^= state.v[op.y()];
}

/// Vx += Vy; VF = carry
pub fn addr(op: u16, state: &mut State) {
    let (res, carry) = state.v[op.x()].overflowing_add(state.v[op.y()]);
    state.set_flag(carry);
    state.v[op.x()] = res;
}

/// Vx -= Vy; VF = Vx >= Vy
pub fn sub(op: u16, state: &mut State) {
    let (vx, vy) = (state.v[op.x()], state.v[op.y()]);
    state.set_flag(vx >= vy);
    state.v[op.x()] = vx.wrapping_sub(vy);
}

/// Vx >>= 1; VF = lsb
/// Vy is ignored, as on the classic interpreter
pub fn shr(op: u16, state: &mut State) {
    let vx = state.v[op.x()];
    state.v[0xF] = vx & 0x1;
    state.v[op.x()] = vx >> 1;
}

/// Vx = Vy - Vx; VF = Vy >= Vx
/// A negative result wraps to 8 bits
pub fn subn(op: u16, state: &mut State) {
    let (vx, vy) = (state.v[op.x()], state.v[op.y()]);
    state.set_flag(vy >= vx);
    state.v[op.x()] = vy.wrapping_sub(vx);
}

/// Vx <<= 1; VF = msb
pub fn shl(op: u16, state: &mut State) {
    let vx = state.v[op.x()];
    state.v[0xF] = vx >> 7;
    state.v[op.x()] = vx << 1;
}

/// if Vx != Vy then skip
pub fn skrne(op: u16, state: &mut State) {
    if state.v[op.x()] != state.v[op.y()] {
        state.skip();
    }
}

/// I = nnn
pub fn loadi(op: u16, state: &mut State) {
    state.i = op.nnn();
}

/// PC = V0 + nnn
pub fn jumpi(op: u16, state: &mut State) {
    state.pc = u16::from(state.v[0x0]) + op.nnn();
}

/// Vx = rand_byte & nn
pub fn rand(op: u16, state: &mut State) {
    let rand_byte: u8 = rand::random();
    state.v[op.x()] = rand_byte & op.nn();
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs the n-row sprite at memory[I..I+n] onto the FrameBuffer at (Vx, Vy).
/// Coordinates wrap around both edges. VF is set if any pixel is switched off.
pub fn draw(op: u16, state: &mut State) {
    let x = state.v[op.x()] as usize % DISPLAY_WIDTH;
    let y = state.v[op.y()] as usize % DISPLAY_HEIGHT;

    // Reset the flag (used for collision detection)
    state.v[0xF] = 0x0;

    for row in 0..u16::from(op.n()) {
        let sprite = state.read(state.i.wrapping_add(row));
        let py = (y + row as usize) % DISPLAY_HEIGHT;
        for col in 0..8 {
            if sprite & (0x80 >> col) == 0 {
                continue;
            }
            let px = (x + col) % DISPLAY_WIDTH;
            if state.flip_pixel(px, py) {
                state.v[0xF] = 0x1;
            }
        }
    }

    state.draw_flag = true;
}

/// if key[Vx].pressed then skip
pub fn skpr(op: u16, state: &mut State) {
    if key_pressed(state, op.x()) {
        state.skip();
    }
}

/// if !key[Vx].pressed then skip
pub fn skup(op: u16, state: &mut State) {
    if !key_pressed(state, op.x()) {
        state.skip();
    }
}

/// Only the low nibble of Vx names a key
fn key_pressed(state: &State, x: usize) -> bool {
    state.keys[(state.v[x] & 0xF) as usize]
}

/// Vx = DT
pub fn moved(op: u16, state: &mut State) {
    state.v[op.x()] = state.delay_timer;
}

/// await keypress for Vx
/// Takes the lowest pressed key, or rewinds the pc so this instruction runs again next cycle
pub fn keyd(op: u16, state: &mut State) {
    match state.keys.iter().position(|&pressed| pressed) {
        Some(key) => state.v[op.x()] = key as u8,
        None => state.pc = state.pc.wrapping_sub(2),
    }
}

/// DT = Vx
pub fn loadd(op: u16, state: &mut State) {
    state.delay_timer = state.v[op.x()];
}

/// ST = Vx
pub fn loads(op: u16, state: &mut State) {
    state.sound_timer = state.v[op.x()];
}

/// I += Vx
pub fn addi(op: u16, state: &mut State) {
    state.i = state.i.wrapping_add(u16::from(state.v[op.x()]));
}

/// I = Vx * 5
/// Set I to the memory address of the font glyph for Vx
pub fn ldspr(op: u16, state: &mut State) {
    state.i = u16::from(state.v[op.x()]) * GLYPH_HEIGHT;
}

/// mem[I..I+3] = bcd(Vx)
pub fn bcd(op: u16, state: &mut State) {
    let vx = state.v[op.x()];
    let digits = [vx / 100, vx / 10 % 10, vx % 10];
    for (offset, digit) in (0u16..).zip(digits) {
        state.write(state.i.wrapping_add(offset), digit);
    }
}

/// mem[I..=I+x] = V0..=Vx; I += x + 1
pub fn stor(op: u16, state: &mut State) {
    for r in 0..=op.x() {
        state.write(state.i.wrapping_add(r as u16), state.v[r]);
    }
    state.i = state.i.wrapping_add(op.x() as u16 + 1);
}

/// V0..=Vx = mem[I..=I+x]; I += x + 1
pub fn read(op: u16, state: &mut State) {
    for r in 0..=op.x() {
        state.v[r] = state.read(state.i.wrapping_add(r as u16));
    }
    state.i = state.i.wrapping_add(op.x() as u16 + 1);
}
