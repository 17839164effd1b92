//! AES-128 block cipher built from first principles.
//!
//! This crate follows FIPS-197 and provides:
//! - GF(2^8) multiplication and the column-mixing matrices built on it.
//! - The generic 4-byte rotation shared by the key schedule and ShiftRows.
//! - The AES-128 key schedule (44 words).
//! - In-place single-block encryption and decryption.
//!
//! The implementation aims for clarity and testability rather than constant-time
//! guarantees; it should not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod gf;
mod key;
mod rotate;
mod round;
mod sbox;

pub use crate::block::{state_to_words, words_to_state, Block, BLOCK_SIZE};
pub use crate::cipher::{cipher, decipher, decrypt_block, encrypt_block, expand_key};
pub use crate::gf::multiply;
pub use crate::key::{Aes128Key, KeySchedule, KEY_SIZE, ROUNDS, SCHEDULE_WORDS};
pub use crate::rotate::{rotate, Direction};
pub use crate::round::{
    add_round_key, inv_sub_bytes, matrix_mul, mix_columns, shift_rows, sub_bytes, MixMatrix,
    INV_MIX_MATRIX, MIX_MATRIX,
};
pub use crate::sbox::{inv_sbox, sbox, sub_word, substitute, INV_SBOX, SBOX};
