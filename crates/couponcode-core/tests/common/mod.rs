//! Common test utilities for couponcode integration tests.

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use couponcode_core::code::alphabet::{index_of, symbol_at, ALPHABET_LEN};

/// Create a deterministic RNG so statistical tests are repeatable.
pub fn test_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Pick an alphabet symbol different from `current`.
pub fn other_symbol<R: Rng>(rng: &mut R, current: char) -> char {
    let current = index_of(current).expect("symbol should be in the alphabet");
    let offset = rng.gen_range(1..ALPHABET_LEN);
    symbol_at(current + offset)
}

/// Replace the character at byte `index` of an ASCII string.
pub fn replace_at(code: &str, index: usize, replacement: char) -> String {
    let mut chars: Vec<char> = code.chars().collect();
    chars[index] = replacement;
    chars.into_iter().collect()
}

/// Byte indexes of the check symbols in a canonical code.
pub fn check_positions(code: &str) -> Vec<usize> {
    let bytes = code.as_bytes();
    (0..bytes.len())
        .filter(|&i| bytes[i] != b'-' && (i + 1 == bytes.len() || bytes[i + 1] == b'-'))
        .collect()
}

/// Byte indexes of the payload symbols in a canonical code.
pub fn payload_positions(code: &str) -> Vec<usize> {
    let checks = check_positions(code);
    code.bytes()
        .enumerate()
        .filter(|&(i, b)| b != b'-' && !checks.contains(&i))
        .map(|(i, _)| i)
        .collect()
}
