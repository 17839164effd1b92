//! Folding a password into an AES-128 key.

use aes_core::{Aes128Key, KEY_SIZE};

/// Folds `password` into a 16-byte key by XOR.
///
/// Every full 16-byte chunk is XOR-ed into the key. The remaining `n < 16`
/// bytes are then XOR-ed in as a window at each offset `0..=16 - n`, i.e.
/// `17 - n` overlapping passes.
///
/// This is not a key-derivation function: passwords that differ by a
/// repeated 16-byte chunk, or by XOR-cancelling chunks, fold to the same key.
pub fn derive_key(password: &[u8]) -> Aes128Key {
    let mut key = [0u8; KEY_SIZE];

    let mut chunks = password.chunks_exact(KEY_SIZE);
    for chunk in &mut chunks {
        for (k, p) in key.iter_mut().zip(chunk) {
            *k ^= *p;
        }
    }

    let tail = chunks.remainder();
    for offset in 0..=KEY_SIZE - tail.len() {
        for (k, p) in key[offset..].iter_mut().zip(tail) {
            *k ^= *p;
        }
    }

    Aes128Key::from(key)
}
