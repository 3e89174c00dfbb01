//! Rijndael key expansion.

use crate::block::State;
use crate::key::{KeySize, NormalizedKey, RoundKeys};
use crate::sbox::sbox;

/// Four key bytes, most significant first.
type Word = [u8; 4];

/// Highest round index any key size asks a constant for.
const MAX_RCON_ROUND: usize = 14;

const fn gen_rcon() -> [u8; MAX_RCON_ROUND + 1] {
    let mut table = [0u8; MAX_RCON_ROUND + 1];
    let mut value: u16 = 1;
    let mut r = 1;
    while r <= MAX_RCON_ROUND {
        table[r] = value as u8;
        value = if value < 0x80 {
            value << 1
        } else {
            (value << 1) ^ 0x11b
        };
        r += 1;
    }
    table
}

/// `RCON[r]` is the round constant for 1-based round `r`; index 0 is unused.
const RCON: [u8; MAX_RCON_ROUND + 1] = gen_rcon();

/// Round constant for 1-based round `r` (1..=14).
pub fn round_constant(r: usize) -> u8 {
    RCON[r]
}

fn rot_word(word: Word) -> Word {
    let [a, b, c, d] = word;
    [b, c, d, a]
}

fn sub_word(word: Word) -> Word {
    word.map(sbox)
}

fn xor_word(lhs: Word, rhs: Word) -> Word {
    [lhs[0] ^ rhs[0], lhs[1] ^ rhs[1], lhs[2] ^ rhs[2], lhs[3] ^ rhs[3]]
}

/// Rotate, substitute, then add the round constant to the leading byte.
fn g(word: Word, r: usize) -> Word {
    let mut out = sub_word(rot_word(word));
    out[0] ^= round_constant(r);
    out
}

/// Packs four consecutive words into a round key, one word per column.
fn round_key(words: &[Word]) -> State {
    let mut state = State::default();
    for (col, word) in words.iter().enumerate() {
        state.set_column(col, *word);
    }
    state
}

/// Expands a normalized key into `rounds() + 1` round keys.
///
/// For 128-bit keys each round's four words come from the previous four:
/// `w0' = w0 ^ g(w3, r)` and `wi' = wi ^ w(i-1)'`. Longer keys run the same
/// recurrence over `Nk` words, with an extra S-box pass on the middle word of
/// each 256-bit group.
pub fn expand_key(key: &NormalizedKey) -> RoundKeys {
    let size = key.size();
    let nk = size.words();
    let total = 4 * (size.rounds() + 1);

    let mut w: Vec<Word> = Vec::with_capacity(total);
    for chunk in key.as_bytes().chunks_exact(4) {
        w.push([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    for i in nk..total {
        let mut temp = w[i - 1];
        if i % nk == 0 {
            temp = g(temp, i / nk);
        } else if size == KeySize::Aes256 && i % nk == 4 {
            temp = sub_word(temp);
        }
        w.push(xor_word(w[i - nk], temp));
    }

    let keys = w.chunks_exact(4).map(round_key).collect();
    RoundKeys::new(keys, size)
}
