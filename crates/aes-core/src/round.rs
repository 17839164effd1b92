//! AES round transformations.

use crate::block::{state_to_words, words_to_state, Block};
use crate::gf::multiply;
use crate::rotate::{rotate, Direction};
use crate::sbox::{substitute, INV_SBOX, SBOX};

/// A 4x4 matrix over GF(2^8), indexed `[row][column]`.
pub type MixMatrix = [[u8; 4]; 4];

/// MixColumns matrix.
pub const MIX_MATRIX: MixMatrix = [
    [0x02, 0x03, 0x01, 0x01],
    [0x01, 0x02, 0x03, 0x01],
    [0x01, 0x01, 0x02, 0x03],
    [0x03, 0x01, 0x01, 0x02],
];

/// InvMixColumns matrix.
pub const INV_MIX_MATRIX: MixMatrix = [
    [0x0e, 0x0b, 0x0d, 0x09],
    [0x09, 0x0e, 0x0b, 0x0d],
    [0x0d, 0x09, 0x0e, 0x0b],
    [0x0b, 0x0d, 0x09, 0x0e],
];

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut Block) {
    substitute(state, &SBOX);
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut Block) {
    substitute(state, &INV_SBOX);
}

/// Rotates row `r` of the state by `r` positions.
///
/// `Direction::Left` is ShiftRows, `Direction::Right` its inverse.
#[inline]
pub fn shift_rows(state: &mut Block, direction: Direction) {
    for row in 1..4 {
        rotate(state, row, 4, row, direction);
    }
}

/// Replaces `column` with `matrix * column` over GF(2^8).
pub fn matrix_mul(matrix: &MixMatrix, column: &mut [u8; 4]) {
    let input = *column;
    for (out, row) in column.iter_mut().zip(matrix.iter()) {
        *out = row
            .iter()
            .zip(input.iter())
            .fold(0, |acc, (&m, &x)| acc ^ multiply(x, m));
    }
}

/// Multiplies each of the four state columns by `matrix`.
///
/// Pass [`MIX_MATRIX`] for MixColumns and [`INV_MIX_MATRIX`] for its inverse.
pub fn mix_columns(state: &mut Block, matrix: &MixMatrix) {
    for chunk in state.chunks_exact_mut(4) {
        let mut column = [chunk[0], chunk[1], chunk[2], chunk[3]];
        matrix_mul(matrix, &mut column);
        chunk.copy_from_slice(&column);
    }
}

/// Adds (XORs) a round key into the state through the column-word view.
#[inline]
pub fn add_round_key(state: &mut Block, round_key: &[u32; 4]) {
    let mut words = state_to_words(state);
    for (word, key) in words.iter_mut().zip(round_key.iter()) {
        *word ^= *key;
    }
    *state = words_to_state(&words);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(hex_str: &str) -> Block {
        hex::decode(hex_str).unwrap().try_into().unwrap()
    }

    #[test]
    fn fips_round_one_steps() {
        let mut state = block("193de3bea0f4e22b9ac68d2ae9f84808");
        sub_bytes(&mut state);
        assert_eq!(state, block("d42711aee0bf98f1b8b45de51e415230"));
        shift_rows(&mut state, Direction::Left);
        assert_eq!(state, block("d4bf5d30e0b452aeb84111f11e2798e5"));
        mix_columns(&mut state, &MIX_MATRIX);
        assert_eq!(state, block("046681e5e0cb199a48f8d37a2806264c"));
        add_round_key(&mut state, &[0xa0fa_fe17, 0x8854_2cb1, 0x23a3_3939, 0x2a6c_7605]);
        assert_eq!(state, block("a49c7ff2689f352b6b5bea43026a5049"));
    }

    #[test]
    fn single_column_mix() {
        let mut column = [0xdb, 0x13, 0x53, 0x45];
        matrix_mul(&MIX_MATRIX, &mut column);
        assert_eq!(column, [0x8e, 0x4d, 0xa1, 0xbc]);
        matrix_mul(&INV_MIX_MATRIX, &mut column);
        assert_eq!(column, [0xdb, 0x13, 0x53, 0x45]);
    }

    #[test]
    fn inverse_steps_undo_forward_steps() {
        let original: Block = core::array::from_fn(|i| (i as u8).wrapping_mul(37));
        let mut state = original;
        sub_bytes(&mut state);
        shift_rows(&mut state, Direction::Left);
        mix_columns(&mut state, &MIX_MATRIX);
        mix_columns(&mut state, &INV_MIX_MATRIX);
        shift_rows(&mut state, Direction::Right);
        inv_sub_bytes(&mut state);
        assert_eq!(state, original);
    }

    #[test]
    fn shift_rows_leaves_row_zero() {
        let mut state: Block = core::array::from_fn(|i| i as u8);
        shift_rows(&mut state, Direction::Left);
        assert_eq!([state[0], state[4], state[8], state[12]], [0, 4, 8, 12]);
        assert_eq!([state[3], state[7], state[11], state[15]], [15, 3, 7, 11]);
    }
}
