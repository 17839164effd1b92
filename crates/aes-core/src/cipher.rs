//! AES-128 key schedule and block encryption/decryption.

use crate::block::Block;
use crate::key::{Aes128Key, KeySchedule, ROUNDS, SCHEDULE_WORDS};
use crate::rotate::{rotate, Direction};
use crate::round::{
    add_round_key, inv_sub_bytes, mix_columns, shift_rows, sub_bytes, INV_MIX_MATRIX, MIX_MATRIX,
};
use crate::sbox::sub_word;

const RCON: [u32; ROUNDS] = [
    0x0100_0000,
    0x0200_0000,
    0x0400_0000,
    0x0800_0000,
    0x1000_0000,
    0x2000_0000,
    0x4000_0000,
    0x8000_0000,
    0x1b00_0000,
    0x3600_0000,
];

fn rot_word(word: u32) -> u32 {
    let mut bytes = word.to_be_bytes();
    rotate(&mut bytes, 0, 1, 1, Direction::Left);
    u32::from_be_bytes(bytes)
}

/// Expands a 128-bit key into the 44-word schedule.
pub fn expand_key(key: &Aes128Key) -> KeySchedule {
    let mut w = [0u32; SCHEDULE_WORDS];
    w[..4].copy_from_slice(&key.words());

    for i in 4..SCHEDULE_WORDS {
        let mut temp = w[i - 1];
        if i % 4 == 0 {
            temp = sub_word(rot_word(temp)) ^ RCON[(i / 4) - 1];
        }
        w[i] = w[i - 4] ^ temp;
    }

    let mut round_keys = [[0u32; 4]; ROUNDS + 1];
    for (round_key, words) in round_keys.iter_mut().zip(w.chunks_exact(4)) {
        round_key.copy_from_slice(words);
    }

    KeySchedule(round_keys)
}

/// Encrypts a single 16-byte block in place.
pub fn cipher(state: &mut Block, schedule: &KeySchedule) {
    add_round_key(state, schedule.round_key(0));

    for round in 1..ROUNDS {
        sub_bytes(state);
        shift_rows(state, Direction::Left);
        mix_columns(state, &MIX_MATRIX);
        add_round_key(state, schedule.round_key(round));
    }

    sub_bytes(state);
    shift_rows(state, Direction::Left);
    add_round_key(state, schedule.round_key(ROUNDS));
}

/// Decrypts a single 16-byte block in place.
///
/// InvMixColumns runs after the round key is added, so the schedule is the
/// same one used by [`cipher`].
pub fn decipher(state: &mut Block, schedule: &KeySchedule) {
    add_round_key(state, schedule.round_key(ROUNDS));

    for round in (1..ROUNDS).rev() {
        shift_rows(state, Direction::Right);
        inv_sub_bytes(state);
        add_round_key(state, schedule.round_key(round));
        mix_columns(state, &INV_MIX_MATRIX);
    }

    shift_rows(state, Direction::Right);
    inv_sub_bytes(state);
    add_round_key(state, schedule.round_key(0));
}

/// Encrypts a copy of `block` and returns it.
pub fn encrypt_block(block: &Block, schedule: &KeySchedule) -> Block {
    let mut state = *block;
    cipher(&mut state, schedule);
    state
}

/// Decrypts a copy of `block` and returns it.
pub fn decrypt_block(block: &Block, schedule: &KeySchedule) -> Block {
    let mut state = *block;
    decipher(&mut state, schedule);
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::Aes128Key;
    use rand::RngCore;

    const NIST_KEY: [u8; 16] = [
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
        0x0f,
    ];
    const NIST_PLAIN: [u8; 16] = [
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee,
        0xff,
    ];
    const NIST_CIPHER: [u8; 16] = [
        0x69, 0xc4, 0xe0, 0xd8, 0x6a, 0x7b, 0x04, 0x30, 0xd8, 0xcd, 0xb7, 0x80, 0x70, 0xb4, 0xc5,
        0x5a,
    ];

    fn bytes16(hex_str: &str) -> [u8; 16] {
        hex::decode(hex_str).unwrap().try_into().unwrap()
    }

    #[test]
    fn encrypt_matches_nist_vector() {
        let schedule = expand_key(&Aes128Key::from(NIST_KEY));
        let mut block = NIST_PLAIN;
        cipher(&mut block, &schedule);
        assert_eq!(block, NIST_CIPHER);
    }

    #[test]
    fn decrypt_matches_nist_vector() {
        let schedule = expand_key(&Aes128Key::from(NIST_KEY));
        let mut block = NIST_CIPHER;
        decipher(&mut block, &schedule);
        assert_eq!(block, NIST_PLAIN);
    }

    #[test]
    fn appendix_b_vector() {
        let schedule = expand_key(&Aes128Key::from(bytes16("2b7e151628aed2a6abf7158809cf4f3c")));
        let plain = bytes16("3243f6a8885a308d313198a2e0370734");
        let ct = encrypt_block(&plain, &schedule);
        assert_eq!(ct, bytes16("3925841d02dc09fbdc118597196a0b32"));
        assert_eq!(decrypt_block(&ct, &schedule), plain);
    }

    #[test]
    fn schedule_matches_appendix_a() {
        let key = Aes128Key::from(bytes16("2b7e151628aed2a6abf7158809cf4f3c"));
        let schedule = expand_key(&key);
        assert_eq!(schedule.round_key(0), &key.words());
        assert_eq!(schedule.word(4), 0xa0fa_fe17);
        assert_eq!(
            schedule.round_key(10),
            &[0xd014_f9a8, 0xc9ee_2589, 0xe13f_0cc8, 0xb663_0ca6]
        );
    }

    #[test]
    fn schedule_word_recurrence() {
        let mut rng = rand::thread_rng();
        let mut key_bytes = [0u8; 16];
        rng.fill_bytes(&mut key_bytes);
        let key = Aes128Key::from(key_bytes);
        let w = expand_key(&key).words();
        assert_eq!(w[..4], key.words());
        for i in (4..SCHEDULE_WORDS).filter(|i| i % 4 != 0) {
            assert_eq!(w[i], w[i - 4] ^ w[i - 1]);
        }
    }

    #[test]
    fn encrypt_decrypt_round_trip_random() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let mut key_bytes = [0u8; 16];
            let mut block = [0u8; 16];
            rng.fill_bytes(&mut key_bytes);
            rng.fill_bytes(&mut block);
            let schedule = expand_key(&Aes128Key::from(key_bytes));
            let ct = encrypt_block(&block, &schedule);
            let pt = decrypt_block(&ct, &schedule);
            assert_eq!(pt, block);
        }
    }
}
