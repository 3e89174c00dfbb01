//! Electronic-codebook processing of arbitrary-length byte streams.
//!
//! Data is cut into 16-byte chunks and each chunk goes through the block
//! cipher on its own, with no chaining and no IV. Only the final chunk is
//! padded, and the padding is never removed on the way back.

use crate::block::{Block, BLOCK_SIZE};
use crate::cipher::{decrypt_block, encrypt_block};
use crate::error::{Error, Result};
use crate::key::RoundKeys;

/// Fill byte used to complete a short final chunk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Padding {
    /// ASCII space, for free text.
    Text,
    /// Zero byte, for binary file content.
    #[default]
    Binary,
    /// Any other fill byte.
    Byte(u8),
}

impl Padding {
    /// The byte written into unused positions of the last block.
    pub const fn byte(self) -> u8 {
        match self {
            Padding::Text => b' ',
            Padding::Binary => 0x00,
            Padding::Byte(b) => b,
        }
    }
}

/// Position reached by a stream operation, reported once per chunk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Progress {
    /// Chunks finished so far (1-based once reported).
    pub chunk: usize,
    /// Total number of chunks in the stream.
    pub total: usize,
}

impl Progress {
    /// Completed fraction as a percentage in `0.0..=100.0`.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            self.chunk as f64 * 100.0 / self.total as f64
        }
    }
}

/// Number of 16-byte chunks `len` bytes occupy once padded.
pub fn padded_chunks(len: usize) -> usize {
    len.div_ceil(BLOCK_SIZE)
}

/// Encrypts `data`, padding the last chunk with `padding`.
///
/// The output length is `16 * ceil(len / 16)`; empty input gives empty output.
pub fn encrypt_stream(data: &[u8], round_keys: &RoundKeys, padding: Padding) -> Vec<u8> {
    encrypt_stream_with_progress(data, round_keys, padding, |_| {})
}

/// [`encrypt_stream`] that calls `observe` after every chunk.
pub fn encrypt_stream_with_progress<F>(
    data: &[u8],
    round_keys: &RoundKeys,
    padding: Padding,
    mut observe: F,
) -> Vec<u8>
where
    F: FnMut(Progress),
{
    let total = padded_chunks(data.len());
    let mut out = Vec::with_capacity(total * BLOCK_SIZE);

    for (idx, chunk) in data.chunks(BLOCK_SIZE).enumerate() {
        let mut block: Block = [padding.byte(); BLOCK_SIZE];
        block[..chunk.len()].copy_from_slice(chunk);
        out.extend_from_slice(&encrypt_block(&block, round_keys));
        observe(Progress {
            chunk: idx + 1,
            total,
        });
    }

    out
}

/// Decrypts block-aligned ciphertext. Padding added on encryption is left in place.
pub fn decrypt_stream(data: &[u8], round_keys: &RoundKeys) -> Result<Vec<u8>> {
    decrypt_stream_with_progress(data, round_keys, |_| {})
}

/// [`decrypt_stream`] that calls `observe` after every chunk.
pub fn decrypt_stream_with_progress<F>(
    data: &[u8],
    round_keys: &RoundKeys,
    mut observe: F,
) -> Result<Vec<u8>>
where
    F: FnMut(Progress),
{
    if data.len() % BLOCK_SIZE != 0 {
        return Err(Error::InvalidCiphertextLength { actual: data.len() });
    }

    let total = data.len() / BLOCK_SIZE;
    let mut out = Vec::with_capacity(data.len());

    for (idx, chunk) in data.chunks_exact(BLOCK_SIZE).enumerate() {
        let mut block: Block = [0u8; BLOCK_SIZE];
        block.copy_from_slice(chunk);
        out.extend_from_slice(&decrypt_block(&block, round_keys));
        observe(Progress {
            chunk: idx + 1,
            total,
        });
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::{normalize_key, KeySize};
    use crate::schedule::expand_key;

    fn keys() -> RoundKeys {
        expand_key(&normalize_key(b"0123456789ABCDEF", KeySize::Aes128))
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(encrypt_stream(&[], &keys(), Padding::Text).is_empty());
        assert_eq!(decrypt_stream(&[], &keys()), Ok(Vec::new()));
    }

    #[test]
    fn output_is_always_block_aligned() {
        let rks = keys();
        for len in 1..=49 {
            let data = vec![0xabu8; len];
            let ct = encrypt_stream(&data, &rks, Padding::Binary);
            assert_eq!(ct.len() % 16, 0);
            assert_eq!(ct.len(), padded_chunks(len) * 16);
        }
    }

    #[test]
    fn text_padding_uses_spaces_and_is_kept_on_decrypt() {
        let rks = keys();
        let ct = encrypt_stream(b"hello world", &rks, Padding::Text);
        assert_eq!(hex::encode(&ct), "e1e18131dc27aa7b6694f40d0d7e3a4a");
        let pt = decrypt_stream(&ct, &rks).unwrap();
        assert_eq!(&pt, b"hello world     ");
    }

    #[test]
    fn binary_padding_uses_zero_bytes() {
        let rks = keys();
        let data = b"\x01\x02\x03";
        let ct = encrypt_stream(data, &rks, Padding::Binary);
        let pt = decrypt_stream(&ct, &rks).unwrap();
        assert_eq!(&pt[..3], data);
        assert!(pt[3..].iter().all(|&b| b == 0));
        assert_eq!(Padding::Byte(0x7f).byte(), 0x7f);
    }

    #[test]
    fn identical_chunks_encrypt_identically() {
        let rks = keys();
        let mut data = b"AAAAAAAAAAAAAAAA".repeat(2);
        data.extend_from_slice(b"BBBBBBBBBBBBBBBB");
        let ct = encrypt_stream(&data, &rks, Padding::Binary);
        assert_eq!(ct[..16], ct[16..32]);
        assert_ne!(ct[..16], ct[32..48]);
        assert_eq!(hex::encode(&ct[..16]), "5c9ebfc5ea0afa075b1bccf7e66ab3a4");
    }

    #[test]
    fn multi_chunk_round_trip() {
        let rks = expand_key(&normalize_key(b"stream key", KeySize::Aes256));
        let data: Vec<u8> = (0..1000u32).map(|i| (i * 7 % 251) as u8).collect();
        let ct = encrypt_stream(&data, &rks, Padding::Binary);
        let pt = decrypt_stream(&ct, &rks).unwrap();
        assert_eq!(&pt[..data.len()], &data[..]);
        assert_eq!(pt.len(), 1008);
    }

    #[test]
    fn unaligned_ciphertext_is_rejected() {
        assert_eq!(
            decrypt_stream(&[0u8; 17], &keys()),
            Err(Error::InvalidCiphertextLength { actual: 17 })
        );
    }

    #[test]
    fn progress_is_reported_once_per_chunk() {
        let rks = keys();
        let mut seen = Vec::new();
        let ct = encrypt_stream_with_progress(&[1u8; 40], &rks, Padding::Binary, |p| {
            seen.push(p)
        });
        assert_eq!(
            seen,
            vec![
                Progress { chunk: 1, total: 3 },
                Progress { chunk: 2, total: 3 },
                Progress { chunk: 3, total: 3 },
            ]
        );

        let mut last = None;
        decrypt_stream_with_progress(&ct, &rks, |p| last = Some(p)).unwrap();
        assert_eq!(last.map(|p| p.percent()), Some(100.0));
    }
}
