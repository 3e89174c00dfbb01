//! Error types for the cipher engine.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors reported to the immediate caller on invalid input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Key size selector outside {128, 192, 256}.
    #[error("unsupported key size {0}: expected 128, 192 or 256")]
    InvalidVariant(u16),

    /// A single-block operation was handed something other than 16 bytes.
    #[error("block must be exactly 16 bytes, got {actual}")]
    InvalidBlockLength {
        /// Length of the rejected input.
        actual: usize,
    },

    /// Ciphertext handed to the stream decryptor is not block aligned.
    #[error("ciphertext length must be a multiple of 16 bytes, got {actual}")]
    InvalidCiphertextLength {
        /// Length of the rejected input.
        actual: usize,
    },
}
