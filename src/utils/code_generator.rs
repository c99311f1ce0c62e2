//! Short code generation.
//!
//! Codes are drawn from the OS CSPRNG and rendered in base 62
//! (`0-9`, `a-z`, `A-Z`). Each 8-byte random block is encoded at a fixed
//! width and only its low-order digits are kept, so every character of a code
//! carries entropy and no filler characters are appended.

/// Base-62 alphabet in digit order.
pub const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Random bytes drawn per block.
const BLOCK_BYTES: usize = 8;

/// Base-62 digits needed to represent any 64-bit value.
const BLOCK_WIDTH: usize = 11;

/// Digits kept from each block. The top digit of an 11-digit block is
/// heavily skewed, so it is never used.
const DIGITS_PER_BLOCK: usize = 10;

/// Source of candidate short codes.
///
/// The service only requires that `generate(n)` returns exactly `n`
/// characters; uniqueness is enforced by the collision check against storage.
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    /// Produces a candidate code of exactly `length` characters.
    ///
    /// A `length` of zero yields an empty string.
    fn generate(&self, length: usize) -> String;
}

/// Cryptographically random base-62 code generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomCodeGenerator;

impl RandomCodeGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl CodeGenerator for RandomCodeGenerator {
    /// # Panics
    ///
    /// Panics if the system random number generator fails (extremely rare).
    fn generate(&self, length: usize) -> String {
        let mut code = String::with_capacity(length);

        while code.len() < length {
            let take = (length - code.len()).min(DIGITS_PER_BLOCK);
            let block = to_base62_padded(&random_block(), BLOCK_WIDTH);
            code.push_str(&block[BLOCK_WIDTH - take..]);
        }

        code
    }
}

fn random_block() -> [u8; BLOCK_BYTES] {
    let mut buffer = [0u8; BLOCK_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    buffer
}

/// Encodes a big-endian unsigned integer of arbitrary size in base 62.
///
/// The byte string is divided by 62 with schoolbook long division until the
/// quotient is zero; remainders become digits, most significant first.
/// Returns `"0"` only when every byte is zero (or `bytes` is empty).
///
/// # Examples
///
/// ```ignore
/// assert_eq!(to_base62(&[0x00]), "0");
/// assert_eq!(to_base62(&[61]), "Z");
/// assert_eq!(to_base62(&[62]), "10");
/// ```
pub fn to_base62(bytes: &[u8]) -> String {
    let mut value: Vec<u8> = bytes.iter().copied().skip_while(|&b| b == 0).collect();

    if value.is_empty() {
        return "0".to_string();
    }

    let mut digits = Vec::new();

    while !value.is_empty() {
        let mut remainder: u32 = 0;
        let mut quotient = Vec::with_capacity(value.len());

        for &byte in &value {
            let acc = (remainder << 8) | u32::from(byte);
            let q = acc / 62;
            remainder = acc % 62;

            // acc < 62 * 256, so q always fits in a byte
            if !quotient.is_empty() || q != 0 {
                quotient.push(q as u8);
            }
        }

        digits.push(ALPHABET[remainder as usize]);
        value = quotient;
    }

    digits.iter().rev().map(|&d| char::from(d)).collect()
}

/// Like [`to_base62`], left-padded with `'0'` (the zero digit) to at least
/// `width` characters. Padding here does not change the encoded value.
pub fn to_base62_padded(bytes: &[u8], width: usize) -> String {
    let encoded = to_base62(bytes);

    if encoded.len() >= width {
        return encoded;
    }

    let mut padded = "0".repeat(width - encoded.len());
    padded.push_str(&encoded);
    padded
}
