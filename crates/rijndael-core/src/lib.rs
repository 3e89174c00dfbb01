//! Rijndael (AES-128/192/256) block cipher built from field arithmetic up.
//!
//! This crate provides:
//! - GF(2^8) arithmetic and compile-time substitution tables.
//! - Key normalization of arbitrary key strings and the Rijndael key schedule.
//! - Single-block encryption and decryption.
//! - ECB processing of arbitrary-length byte streams with caller-chosen padding.
//!
//! The implementation aims for clarity and testability rather than constant-time
//! guarantees; it should not be treated as side-channel hardened. ECB leaks
//! equality of plaintext blocks.
//!
//! ```
//! use rijndael_core::{Cipher, KeySize, Padding};
//!
//! let cipher = Cipher::new(b"0123456789ABCDEF", KeySize::Aes128);
//! let ct = cipher.encrypt(b"attack at dawn", Padding::Text);
//! assert_eq!(ct.len(), 16);
//! assert_eq!(cipher.decrypt(&ct).unwrap(), b"attack at dawn  ");
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
pub mod gf;
mod key;
mod round;
pub mod sbox;
mod schedule;
mod stream;

pub use crate::block::{block_from_slice, Block, State, BLOCK_SIZE};
pub use crate::cipher::{decrypt_block, decrypt_block_slice, encrypt_block, encrypt_block_slice};
pub use crate::error::{Error, Result};
pub use crate::key::{normalize_key, KeySize, NormalizedKey, RoundKeys, KEY_FILL};
pub use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
pub use crate::schedule::{expand_key, round_constant};
pub use crate::stream::{
    decrypt_stream, decrypt_stream_with_progress, encrypt_stream, encrypt_stream_with_progress,
    padded_chunks, Padding, Progress,
};

/// A raw key normalized and expanded once, ready for block and stream work.
#[derive(Clone, Debug)]
pub struct Cipher {
    round_keys: RoundKeys,
    fill_len: usize,
}

impl Cipher {
    /// Normalizes `raw_key` for `size` and expands it.
    pub fn new(raw_key: &[u8], size: KeySize) -> Self {
        let key = normalize_key(raw_key, size);
        Self {
            round_keys: expand_key(&key),
            fill_len: key.fill_len(),
        }
    }

    /// Builds a cipher from an already-normalized key.
    pub fn from_key(key: &NormalizedKey) -> Self {
        Self {
            round_keys: expand_key(key),
            fill_len: key.fill_len(),
        }
    }

    /// Expanded round keys.
    pub fn round_keys(&self) -> &RoundKeys {
        &self.round_keys
    }

    /// Key size in use.
    pub fn size(&self) -> KeySize {
        self.round_keys.size()
    }

    /// Number of `'0'` characters that were prepended to the raw key.
    pub fn fill_len(&self) -> usize {
        self.fill_len
    }

    /// Encrypts one block.
    pub fn encrypt_block(&self, block: &Block) -> Block {
        encrypt_block(block, &self.round_keys)
    }

    /// Decrypts one block.
    pub fn decrypt_block(&self, block: &Block) -> Block {
        decrypt_block(block, &self.round_keys)
    }

    /// Encrypts a byte stream in ECB mode.
    pub fn encrypt(&self, data: &[u8], padding: Padding) -> Vec<u8> {
        encrypt_stream(data, &self.round_keys, padding)
    }

    /// Decrypts a block-aligned byte stream in ECB mode.
    pub fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>> {
        decrypt_stream(data, &self.round_keys)
    }
}
