//! Forward and inverse substitution tables.
//!
//! The tables are computed at compile time from the closed form
//! `S(x) = A(x^-1) ^ 0x63`, where `A` XORs the byte with its left rotations
//! by one to four bits. [`cycle_tables`] builds the same tables by walking
//! the multiplicative group generated by 3, and is kept for cross-checking.

use crate::gf;

/// Affine transform over the bits of `q`, without the 0x63 constant.
#[inline]
const fn affine(q: u8) -> u8 {
    q ^ q.rotate_left(1) ^ q.rotate_left(2) ^ q.rotate_left(3) ^ q.rotate_left(4)
}

const fn gen_sbox() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = affine(gf::inv(i as u8)) ^ 0x63;
        i += 1;
    }
    table
}

const fn gen_inv_sbox(forward: &[u8; 256]) -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[forward[i] as usize] = i as u8;
        i += 1;
    }
    table
}

const FORWARD: [u8; 256] = gen_sbox();
const INVERSE: [u8; 256] = gen_inv_sbox(&FORWARD);

/// Forward substitution table.
pub static SBOX: [u8; 256] = FORWARD;

/// Inverse substitution table: `INV_SBOX[SBOX[x]] == x`.
pub static INV_SBOX: [u8; 256] = INVERSE;

/// Substitutes a byte through the forward table.
#[inline]
pub fn sbox(byte: u8) -> u8 {
    SBOX[byte as usize]
}

/// Substitutes a byte through the inverse table.
#[inline]
pub fn inv_sbox(byte: u8) -> u8 {
    INV_SBOX[byte as usize]
}

/// Builds `(forward, inverse)` tables by walking the cycle of the generator 3.
///
/// `p` steps through powers of 3 while `q` steps through powers of 3^-1, so
/// `q` is always the inverse of `p`. The walk ends when `p` returns to 1.
pub fn cycle_tables() -> ([u8; 256], [u8; 256]) {
    let mut forward = [0u8; 256];
    let mut p = 1u8;
    let mut q = 1u8;

    loop {
        // p *= 3
        p ^= gf::xtime(p);

        // q /= 3
        q ^= q << 1;
        q ^= q << 2;
        q ^= q << 4;
        if q & 0x80 != 0 {
            q ^= 0x09;
        }

        forward[p as usize] = affine(q) ^ 0x63;

        if p == 1 {
            break;
        }
    }

    // 0 has no inverse.
    forward[0] = 0x63;

    let inverse = gen_inv_sbox(&forward);
    (forward, inverse)
}
