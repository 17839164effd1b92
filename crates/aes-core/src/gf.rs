//! Arithmetic in GF(2^8) modulo the AES polynomial.

/// x^8 + x^4 + x^3 + x + 1.
const MODULUS: u16 = 0x11b;

/// Multiplies two field elements.
///
/// The carry-less product is formed in 16 bits, then every bit from 14 down
/// to 8 that is set is cleared by XOR-ing in the modulus shifted under it.
pub fn multiply(a: u8, b: u8) -> u8 {
    let mut product = 0u16;
    for bit in 0..8 {
        if b & (1 << bit) != 0 {
            product ^= u16::from(a) << bit;
        }
    }

    for bit in (8..15).rev() {
        if product & (1 << bit) != 0 {
            product ^= MODULUS << (bit - 8);
        }
    }

    product as u8
}
