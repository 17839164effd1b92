//! Error types for buffer processing.

use thiserror::Error;

/// Result type for driver operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Error type for driver operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Buffer length is not a whole number of blocks.
    #[error("buffer length {len} is not a multiple of the 16-byte block size")]
    InvalidBlockSize {
        /// Length of the rejected buffer.
        len: usize,
    },
}
