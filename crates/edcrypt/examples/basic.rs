//! Encrypts two blocks under a password and checks them against the cipher core.

use aes_core::{encrypt_block, expand_key};
use edcrypt::{decrypt, derive_key, encrypt};

fn main() {
    let mut buffer = [0u8; 32];
    buffer[..16].copy_from_slice(b"first block here");
    buffer[16..].copy_from_slice(b"second blockhere");
    let original = buffer;

    let schedule = expand_key(&derive_key(b"example password"));
    let expected_first = encrypt_block(&buffer[..16].try_into().unwrap(), &schedule);
    let expected_second = encrypt_block(&buffer[16..].try_into().unwrap(), &schedule);

    encrypt(&mut buffer, "example password").unwrap();
    assert_eq!(&buffer[..16], &expected_first);
    assert_eq!(&buffer[16..], &expected_second);

    decrypt(&mut buffer, "example password").unwrap();
    assert_eq!(buffer, original);

    println!("example succeeded; ciphertext matches AES reference");
}
