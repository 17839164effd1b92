//! Cyclic rotation of four bytes spaced by a stride.

/// Rotation direction for [`rotate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Byte at position `k + amount` moves into position `k`.
    Left,
    /// Byte at position `k` moves into position `k + amount`.
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn reverse(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Rotates the four bytes at `offset`, `offset + stride`, `offset + 2 * stride`
/// and `offset + 3 * stride` by `amount` positions (taken modulo 4).
///
/// A stride of 1 rotates a packed word; a stride of 4 rotates one row of a
/// column-major state.
///
/// # Panics
///
/// Panics if `offset + 3 * stride` is out of bounds for `bytes`.
pub fn rotate(bytes: &mut [u8], offset: usize, stride: usize, amount: usize, direction: Direction) {
    let mut lane = [0u8; 4];
    for (k, slot) in lane.iter_mut().enumerate() {
        *slot = bytes[offset + k * stride];
    }

    let amount = amount % 4;
    for (k, &byte) in lane.iter().enumerate() {
        let dst = match direction {
            Direction::Left => (k + 4 - amount) % 4,
            Direction::Right => (k + amount) % 4,
        };
        bytes[offset + dst * stride] = byte;
    }
}
