//! The symbol alphabet shared by generation and validation.

/// The 32 symbols a code is built from, in value order.
/// Excludes look-alikes: I, O, S, Z
pub const ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKLMNPQRTUVWXY";

/// Number of symbols in [`ALPHABET`].
pub const ALPHABET_LEN: usize = ALPHABET.len();

/// Wraparound modulus for check symbols.
///
/// One less than [`ALPHABET_LEN`], so `Y` never appears as a check symbol.
/// Changing it would invalidate every code already issued.
pub const CHECK_MODULUS: usize = ALPHABET_LEN - 1;

/// Returns the numeric value of `symbol`, or `None` if it is not in the alphabet.
pub fn index_of(symbol: char) -> Option<usize> {
    if !symbol.is_ascii() {
        return None;
    }
    let byte = symbol as u8;
    ALPHABET.iter().position(|&s| s == byte)
}

/// Returns the symbol with value `position mod ALPHABET_LEN`.
pub fn symbol_at(position: usize) -> char {
    ALPHABET[position % ALPHABET_LEN] as char
}

/// Returns whether `symbol` belongs to the alphabet.
pub fn contains(symbol: char) -> bool {
    index_of(symbol).is_some()
}
