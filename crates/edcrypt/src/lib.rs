//! Password-keyed AES-128 over whole buffers.
//!
//! A password is folded into a 128-bit key, the key is expanded once, and
//! every 16-byte block of the buffer is enciphered or deciphered in place with
//! that one schedule. Blocks are independent (electronic codebook); there is
//! no padding, chaining or integrity tag, so callers own the block count and
//! the password.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod driver;
mod error;
mod password;

pub use aes_core::{Aes128Key, Block, KeySchedule, BLOCK_SIZE};

pub use crate::driver::{decrypt, encrypt, process, Mode, Session};
pub use crate::error::{Error, Result};
pub use crate::password::derive_key;
