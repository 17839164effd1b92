//! Key types for AES-128.

/// Size of an AES-128 key in bytes.
pub const KEY_SIZE: usize = 16;

/// Number of rounds in AES-128.
pub const ROUNDS: usize = 10;

/// Number of 32-bit words in an expanded AES-128 key.
pub const SCHEDULE_WORDS: usize = 4 * (ROUNDS + 1);

/// AES-128 key wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aes128Key(pub [u8; KEY_SIZE]);

impl From<[u8; KEY_SIZE]> for Aes128Key {
    fn from(value: [u8; KEY_SIZE]) -> Self {
        Self(value)
    }
}

impl Aes128Key {
    /// Returns the key as four big-endian words.
    pub fn words(&self) -> [u32; 4] {
        crate::block::state_to_words(&self.0)
    }
}

/// Expanded AES-128 key: 44 words grouped as 11 round keys of 4 words.
///
/// Built once per key and only ever read afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeySchedule(pub(crate) [[u32; 4]; ROUNDS + 1]);

impl KeySchedule {
    /// Returns the round key at the requested index (0..=10).
    #[inline]
    pub fn round_key(&self, round: usize) -> &[u32; 4] {
        &self.0[round]
    }

    /// Returns schedule word `index` (0..44).
    #[inline]
    pub fn word(&self, index: usize) -> u32 {
        self.0[index / 4][index % 4]
    }

    /// Returns all 44 words in schedule order.
    pub fn words(&self) -> [u32; SCHEDULE_WORDS] {
        core::array::from_fn(|i| self.word(i))
    }
}
