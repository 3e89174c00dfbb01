//! Block representation and the 4x4 state matrix.

use zeroize::Zeroize;

use crate::error::{Error, Result};

/// Number of bytes in one cipher block.
pub const BLOCK_SIZE: usize = 16;

/// Cipher block of 16 bytes.
pub type Block = [u8; BLOCK_SIZE];

/// Copies a slice into a [`Block`], failing if it is not exactly 16 bytes.
pub fn block_from_slice(bytes: &[u8]) -> Result<Block> {
    bytes
        .try_into()
        .map_err(|_| Error::InvalidBlockLength {
            actual: bytes.len(),
        })
}

/// 4x4 byte matrix holding one block while it moves through the rounds.
///
/// Bytes are loaded column-major: `rows[row][col] == block[col * 4 + row]`.
/// Round keys use the same shape and the same mapping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Zeroize)]
pub struct State {
    pub(crate) rows: [[u8; 4]; 4],
}

impl State {
    /// Loads a flat block into matrix form.
    pub fn load(block: &Block) -> Self {
        let mut rows = [[0u8; 4]; 4];
        for (row, out) in rows.iter_mut().enumerate() {
            for (col, byte) in out.iter_mut().enumerate() {
                *byte = block[col * 4 + row];
            }
        }
        Self { rows }
    }

    /// Flattens the matrix back into a block; the exact inverse of [`State::load`].
    pub fn unload(&self) -> Block {
        let mut block = [0u8; BLOCK_SIZE];
        for col in 0..4 {
            for row in 0..4 {
                block[col * 4 + row] = self.rows[row][col];
            }
        }
        block
    }

    /// Byte at `row`, `col`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.rows[row][col]
    }

    /// Column `col` as a top-to-bottom array.
    #[inline]
    pub(crate) fn column(&self, col: usize) -> [u8; 4] {
        [
            self.rows[0][col],
            self.rows[1][col],
            self.rows[2][col],
            self.rows[3][col],
        ]
    }

    #[inline]
    pub(crate) fn set_column(&mut self, col: usize, column: [u8; 4]) {
        for (row, byte) in column.into_iter().enumerate() {
            self.rows[row][col] = byte;
        }
    }

    /// XORs `rhs` into `self` element-wise.
    #[inline]
    pub fn xor_in_place(&mut self, rhs: &State) {
        for (dst, src) in self.rows.iter_mut().zip(rhs.rows.iter()) {
            for (d, s) in dst.iter_mut().zip(src.iter()) {
                *d ^= *s;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_is_column_major() {
        let block: Block = core::array::from_fn(|i| i as u8);
        let state = State::load(&block);
        assert_eq!(state.rows[0], [0, 4, 8, 12]);
        assert_eq!(state.rows[1], [1, 5, 9, 13]);
        assert_eq!(state.rows[3], [3, 7, 11, 15]);
        assert_eq!(state.column(2), [8, 9, 10, 11]);
    }

    #[test]
    fn unload_inverts_load() {
        let block: Block = core::array::from_fn(|i| (i as u8).wrapping_mul(37) ^ 0xa5);
        assert_eq!(State::load(&block).unload(), block);
    }

    #[test]
    fn block_from_slice_rejects_wrong_length() {
        assert_eq!(
            block_from_slice(&[0u8; 15]),
            Err(Error::InvalidBlockLength { actual: 15 })
        );
        assert_eq!(
            block_from_slice(&[0u8; 17]),
            Err(Error::InvalidBlockLength { actual: 17 })
        );
        assert_eq!(block_from_slice(&[7u8; 16]), Ok([7u8; 16]));
    }
}
