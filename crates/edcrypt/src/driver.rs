//! Block driver: one schedule, every block of a buffer, in order.

use aes_core::{cipher, decipher, expand_key, Aes128Key, Block, KeySchedule, BLOCK_SIZE};

use crate::error::{Error, Result};
use crate::password::derive_key;

/// Direction of a pass over a buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Apply the forward cipher to each block.
    Encrypt,
    /// Apply the inverse cipher to each block.
    Decrypt,
}

impl From<bool> for Mode {
    fn from(encrypt: bool) -> Self {
        if encrypt {
            Mode::Encrypt
        } else {
            Mode::Decrypt
        }
    }
}

/// A key schedule bound to one password, reused for every block it touches.
#[derive(Clone, Debug)]
pub struct Session {
    schedule: KeySchedule,
}

impl Session {
    /// Folds `password` into a key and expands it.
    pub fn new(password: impl AsRef<[u8]>) -> Self {
        Self::from_key(&derive_key(password.as_ref()))
    }

    /// Expands an explicit key, bypassing password folding.
    pub fn from_key(key: &Aes128Key) -> Self {
        Self {
            schedule: expand_key(key),
        }
    }

    /// Returns the expanded schedule.
    pub fn schedule(&self) -> &KeySchedule {
        &self.schedule
    }

    /// Transforms every block of `buffer` in place.
    ///
    /// The buffer is left untouched if its length is not a multiple of
    /// [`BLOCK_SIZE`]. An empty buffer is accepted and left as is.
    pub fn apply(&self, mode: Mode, buffer: &mut [u8]) -> Result<()> {
        check_len(buffer)?;

        for chunk in buffer.chunks_exact_mut(BLOCK_SIZE) {
            let mut block: Block = [0u8; BLOCK_SIZE];
            block.copy_from_slice(chunk);
            match mode {
                Mode::Encrypt => cipher(&mut block, &self.schedule),
                Mode::Decrypt => decipher(&mut block, &self.schedule),
            }
            chunk.copy_from_slice(&block);
        }
        Ok(())
    }
}

fn check_len(buffer: &[u8]) -> Result<()> {
    if buffer.len() % BLOCK_SIZE != 0 {
        return Err(Error::InvalidBlockSize { len: buffer.len() });
    }
    Ok(())
}

/// Encrypts (`encrypt == true`) or decrypts `buffer` in place under `password`.
///
/// Fails with [`Error::InvalidBlockSize`] when the length is not a whole
/// number of blocks. The length is checked here as well as in
/// [`Session::apply`] so a bad buffer never pays for key derivation.
pub fn process(encrypt: bool, buffer: &mut [u8], password: impl AsRef<[u8]>) -> Result<()> {
    check_len(buffer)?;
    Session::new(password).apply(Mode::from(encrypt), buffer)
}

/// Shorthand for `process(true, ..)`.
pub fn encrypt(buffer: &mut [u8], password: impl AsRef<[u8]>) -> Result<()> {
    process(true, buffer, password)
}

/// Shorthand for `process(false, ..)`.
pub fn decrypt(buffer: &mut [u8], password: impl AsRef<[u8]>) -> Result<()> {
    process(false, buffer, password)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aes_core::encrypt_block;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn round_trip_multi_block() {
        let mut rng = ChaCha20Rng::from_seed([7u8; 32]);
        for len in [16, 32, 160] {
            let mut data = vec![0u8; len];
            rng.fill_bytes(&mut data);
            let original = data.clone();

            encrypt(&mut data, "hunter2").unwrap();
            assert_ne!(data, original);
            decrypt(&mut data, "hunter2").unwrap();
            assert_eq!(data, original);
        }
    }

    #[test]
    fn rejects_partial_block_untouched() {
        for len in [1, 15, 17, 31, 33] {
            let mut data = vec![0xabu8; len];
            let err = process(true, &mut data, "pw").unwrap_err();
            assert_eq!(err, Error::InvalidBlockSize { len });
            assert!(data.iter().all(|&b| b == 0xab));
        }
    }

    #[test]
    fn empty_buffer_is_a_no_op() {
        let mut data: Vec<u8> = Vec::new();
        process(true, &mut data, "pw").unwrap();
        assert!(data.is_empty());
    }

    #[test]
    fn blocks_are_independent() {
        let mut data = [0x42u8; 48];
        encrypt(&mut data, "same block").unwrap();
        assert_eq!(data[..16], data[16..32]);
        assert_eq!(data[16..32], data[32..]);
    }

    #[test]
    fn each_block_matches_single_block_cipher() {
        let session = Session::new("block by block");
        let mut data: Vec<u8> = (0..64).collect();
        let original = data.clone();
        session.apply(Mode::Encrypt, &mut data).unwrap();
        for (ct, pt) in data.chunks_exact(16).zip(original.chunks_exact(16)) {
            let pt: Block = pt.try_into().unwrap();
            assert_eq!(ct, encrypt_block(&pt, session.schedule()));
        }
    }

    #[test]
    fn explicit_key_matches_nist_vector() {
        let key: [u8; 16] = core::array::from_fn(|i| i as u8);
        let session = Session::from_key(&Aes128Key::from(key));
        let mut data = hex::decode("00112233445566778899aabbccddeeff").unwrap();
        session.apply(Mode::Encrypt, &mut data).unwrap();
        assert_eq!(hex::encode(&data), "69c4e0d86a7b0430d8cdb78070b4c55a");
    }

    #[test]
    fn full_block_password_acts_as_raw_key() {
        let password: [u8; 16] = core::array::from_fn(|i| i as u8);
        let mut data = hex::decode("00112233445566778899aabbccddeeff").unwrap();
        process(true, &mut data, password).unwrap();
        assert_eq!(hex::encode(&data), "69c4e0d86a7b0430d8cdb78070b4c55a");
    }

    #[test]
    fn wrong_password_does_not_decrypt() {
        let original = [0x11u8; 32];
        let mut data = original;
        encrypt(&mut data, "right").unwrap();
        decrypt(&mut data, "wrong").unwrap();
        assert_ne!(data, original);
    }

    #[test]
    fn mode_from_bool() {
        assert_eq!(Mode::from(true), Mode::Encrypt);
        assert_eq!(Mode::from(false), Mode::Decrypt);
    }
}
