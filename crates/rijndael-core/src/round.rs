//! Round transformations on the state matrix.

use crate::block::State;
use crate::gf;
use crate::sbox::{inv_sbox, sbox};

/// Circulant matrix used by MixColumns.
const MIX: [[u8; 4]; 4] = [
    [0x02, 0x03, 0x01, 0x01],
    [0x01, 0x02, 0x03, 0x01],
    [0x01, 0x01, 0x02, 0x03],
    [0x03, 0x01, 0x01, 0x02],
];

/// Inverse of [`MIX`] over GF(2^8).
const INV_MIX: [[u8; 4]; 4] = [
    [0x0e, 0x0b, 0x0d, 0x09],
    [0x09, 0x0e, 0x0b, 0x0d],
    [0x0d, 0x09, 0x0e, 0x0b],
    [0x0b, 0x0d, 0x09, 0x0e],
];

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut State) {
    for row in state.rows.iter_mut() {
        for byte in row.iter_mut() {
            *byte = sbox(*byte);
        }
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut State) {
    for row in state.rows.iter_mut() {
        for byte in row.iter_mut() {
            *byte = inv_sbox(*byte);
        }
    }
}

/// Rotates row `i` left by `i` positions.
#[inline]
pub fn shift_rows(state: &mut State) {
    for (i, row) in state.rows.iter_mut().enumerate() {
        row.rotate_left(i);
    }
}

/// Rotates row `i` right by `i` positions.
#[inline]
pub fn inv_shift_rows(state: &mut State) {
    for (i, row) in state.rows.iter_mut().enumerate() {
        row.rotate_right(i);
    }
}

fn multiply_column(matrix: &[[u8; 4]; 4], column: [u8; 4]) -> [u8; 4] {
    let mut out = [0u8; 4];
    for (o, coeffs) in out.iter_mut().zip(matrix.iter()) {
        *o = coeffs
            .iter()
            .zip(column.iter())
            .fold(0, |acc, (&c, &b)| acc ^ gf::mul(c, b));
    }
    out
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut State) {
    for col in 0..4 {
        let mixed = multiply_column(&MIX, state.column(col));
        state.set_column(col, mixed);
    }
}

/// Inverse MixColumns over all four columns.
#[inline]
pub fn inv_mix_columns(state: &mut State) {
    for col in 0..4 {
        let mixed = multiply_column(&INV_MIX, state.column(col));
        state.set_column(col, mixed);
    }
}

/// Adds (XORs) a round key into the state.
#[inline]
pub fn add_round_key(state: &mut State, round_key: &State) {
    state.xor_in_place(round_key);
}
