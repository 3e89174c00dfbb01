//! Key sizes, key normalization and the expanded round-key schedule.

use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::State;
use crate::error::{Error, Result};

/// Character prepended to short keys.
pub const KEY_FILL: u8 = b'0';

/// Supported Rijndael key sizes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum KeySize {
    /// 128-bit key, 10 rounds.
    #[default]
    Aes128,
    /// 192-bit key, 12 rounds.
    Aes192,
    /// 256-bit key, 14 rounds.
    Aes256,
}

impl KeySize {
    /// Key length in bytes (16, 24 or 32).
    pub const fn key_len(self) -> usize {
        match self {
            KeySize::Aes128 => 16,
            KeySize::Aes192 => 24,
            KeySize::Aes256 => 32,
        }
    }

    /// Number of 32-bit words in the key (`Nk`).
    pub const fn words(self) -> usize {
        self.key_len() / 4
    }

    /// Number of rounds (`Nr`).
    pub const fn rounds(self) -> usize {
        self.words() + 6
    }

    /// Key size in bits.
    pub const fn bits(self) -> u16 {
        (self.key_len() * 8) as u16
    }
}

impl TryFrom<u16> for KeySize {
    type Error = Error;

    fn try_from(bits: u16) -> Result<Self> {
        match bits {
            128 => Ok(KeySize::Aes128),
            192 => Ok(KeySize::Aes192),
            256 => Ok(KeySize::Aes256),
            other => Err(Error::InvalidVariant(other)),
        }
    }
}

impl fmt::Display for KeySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AES-{}", self.bits())
    }
}

/// Key bytes coerced to the exact length of a [`KeySize`].
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct NormalizedKey {
    bytes: Vec<u8>,
    #[zeroize(skip)]
    size: KeySize,
    #[zeroize(skip)]
    fill_len: usize,
}

impl NormalizedKey {
    /// Normalized key bytes; always `size().key_len()` long.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Key size this key was normalized for.
    pub fn size(&self) -> KeySize {
        self.size
    }

    /// Number of fill characters prepended to the raw key.
    ///
    /// Anything above zero means the raw key was short; an empty raw key is
    /// all fill.
    pub fn fill_len(&self) -> usize {
        self.fill_len
    }
}

impl fmt::Debug for NormalizedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NormalizedKey")
            .field("size", &self.size)
            .field("fill_len", &self.fill_len)
            .finish_non_exhaustive()
    }
}

/// Coerces an arbitrary raw key to the length required by `size`.
///
/// Longer keys keep only their trailing bytes. Shorter keys are left-padded
/// with ASCII `'0'` characters, not NUL bytes.
pub fn normalize_key(raw: &[u8], size: KeySize) -> NormalizedKey {
    let len = size.key_len();
    let (bytes, fill_len) = if raw.len() >= len {
        (raw[raw.len() - len..].to_vec(), 0)
    } else {
        let fill_len = len - raw.len();
        let mut bytes = Vec::with_capacity(len);
        bytes.resize(fill_len, KEY_FILL);
        bytes.extend_from_slice(raw);
        (bytes, fill_len)
    };
    NormalizedKey {
        bytes,
        size,
        fill_len,
    }
}

/// Expanded round keys: `rounds() + 1` state-shaped keys.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct RoundKeys {
    keys: Vec<State>,
    #[zeroize(skip)]
    size: KeySize,
}

impl RoundKeys {
    pub(crate) fn new(keys: Vec<State>, size: KeySize) -> Self {
        debug_assert_eq!(keys.len(), size.rounds() + 1);
        Self { keys, size }
    }

    /// Returns the round key at the requested index (`0..=rounds()`).
    #[inline]
    pub fn get(&self, round: usize) -> &State {
        &self.keys[round]
    }

    /// Number of rounds (`Nr`); the schedule holds one more key than this.
    #[inline]
    pub fn rounds(&self) -> usize {
        self.keys.len() - 1
    }

    /// Key size the schedule was expanded for.
    pub fn size(&self) -> KeySize {
        self.size
    }

    /// Number of round keys in the schedule.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Always false; a schedule holds at least 11 keys.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterates over the round keys in round order.
    pub fn iter(&self) -> impl Iterator<Item = &State> {
        self.keys.iter()
    }
}

impl fmt::Debug for RoundKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoundKeys")
            .field("size", &self.size)
            .field("len", &self.keys.len())
            .finish_non_exhaustive()
    }
}
