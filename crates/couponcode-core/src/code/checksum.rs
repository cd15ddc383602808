//! Check symbol computation.
//!
//! Each part of a code ends in a check symbol derived from the part's
//! payload and its 1-based position in the code (the seed):
//!
//! ```text
//! acc = seed
//! for each payload symbol with value k:  acc = acc * 19 + k
//! check = ALPHABET[acc mod 31]
//! ```
//!
//! Symbols outside the alphabet count as `k = -1`, so stray characters make
//! validation fail on the checksum rather than erroring out. Seeding with the
//! position catches swapped parts.

use super::alphabet::{index_of, symbol_at, CHECK_MODULUS};

/// Multiplier applied to the accumulator for each payload symbol.
pub const CHECK_MULTIPLIER: i64 = 19;

/// Value used for symbols that are not in the alphabet.
const NOT_FOUND: i64 = -1;

/// Compute the check symbol for `payload` at 1-based part position `seed`.
///
/// The accumulator is reduced after every step. For `seed >= 1` the
/// unreduced accumulator never goes negative, so this agrees with reducing
/// once at the end while staying in range for payloads of any length.
// Values stay within 0..31 except the transient -1 for unknown symbols.
#[allow(
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation
)]
pub fn checksum(payload: &str, seed: usize) -> char {
    let modulus = CHECK_MODULUS as i64;
    let mut acc = (seed % CHECK_MODULUS) as i64;

    for symbol in payload.chars() {
        let k = index_of(symbol).map_or(NOT_FOUND, |k| k as i64);
        acc = (acc * CHECK_MULTIPLIER + k).rem_euclid(modulus);
    }

    symbol_at(acc as usize)
}

/// Returns whether `part` ends in the correct check symbol for position `seed`.
pub fn verify(part: &str, seed: usize) -> bool {
    let mut chars = part.chars();
    match chars.next_back() {
        Some(check) => checksum(chars.as_str(), seed) == check,
        None => false,
    }
}
