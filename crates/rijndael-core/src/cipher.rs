//! Single-block encryption and decryption.

use crate::block::{block_from_slice, Block, State};
use crate::error::Result;
use crate::key::RoundKeys;
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let rounds = round_keys.rounds();
    let mut state = State::load(block);

    add_round_key(&mut state, round_keys.get(0));

    for round in 1..rounds {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, round_keys.get(round));
    }

    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, round_keys.get(rounds));

    state.unload()
}

/// Decrypts a single 16-byte block with pre-expanded round keys.
pub fn decrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let rounds = round_keys.rounds();
    let mut state = State::load(block);

    add_round_key(&mut state, round_keys.get(rounds));
    for round in (1..rounds).rev() {
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        add_round_key(&mut state, round_keys.get(round));
        inv_mix_columns(&mut state);
    }
    inv_shift_rows(&mut state);
    inv_sub_bytes(&mut state);
    add_round_key(&mut state, round_keys.get(0));

    state.unload()
}

/// [`encrypt_block`] for callers holding a slice; rejects anything but 16 bytes.
pub fn encrypt_block_slice(block: &[u8], round_keys: &RoundKeys) -> Result<Block> {
    Ok(encrypt_block(&block_from_slice(block)?, round_keys))
}

/// [`decrypt_block`] for callers holding a slice; rejects anything but 16 bytes.
pub fn decrypt_block_slice(block: &[u8], round_keys: &RoundKeys) -> Result<Block> {
    Ok(decrypt_block(&block_from_slice(block)?, round_keys))
}
