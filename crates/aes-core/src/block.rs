//! Block representation and the column-word view of the state.

/// Size of an AES block in bytes.
pub const BLOCK_SIZE: usize = 16;

/// AES block of 16 bytes, laid out column-major: row `r` of column `c` is byte `4c + r`.
pub type Block = [u8; BLOCK_SIZE];

/// Packs the four state columns into words.
///
/// Column `c` (bytes `4c..4c + 4`) becomes word `c`, with byte `4c` as the
/// most significant byte. Key schedule words share this packing.
#[inline]
pub fn state_to_words(state: &Block) -> [u32; 4] {
    let mut words = [0u32; 4];
    for (word, column) in words.iter_mut().zip(state.chunks_exact(4)) {
        *word = u32::from_be_bytes([column[0], column[1], column[2], column[3]]);
    }
    words
}

/// Inverse of [`state_to_words`].
#[inline]
pub fn words_to_state(words: &[u32; 4]) -> Block {
    let mut state = [0u8; BLOCK_SIZE];
    for (column, word) in state.chunks_exact_mut(4).zip(words.iter()) {
        column.copy_from_slice(&word.to_be_bytes());
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_packs_big_endian() {
        let state: Block = core::array::from_fn(|i| i as u8);
        let words = state_to_words(&state);
        assert_eq!(words, [0x0001_0203, 0x0405_0607, 0x0809_0a0b, 0x0c0d_0e0f]);
        assert_eq!(words_to_state(&words), state);
    }
}
