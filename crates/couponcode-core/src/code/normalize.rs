//! Input normalization and segmentation.
//!
//! Users type codes with the wrong case, with spaces or slashes instead of
//! dashes, or with letters that look like digits. [`normalize`] folds all of
//! that into a run of candidate symbols and [`segment`] cuts the run back
//! into parts.

/// Separator used in the canonical display form.
pub const SEPARATOR: char = '-';

/// Letters users type in place of the digits they resemble.
const LOOKALIKES: [(char, char); 4] = [('O', '0'), ('I', '1'), ('Z', '2'), ('S', '5')];

/// Fold raw user input into candidate symbols.
///
/// Uppercases, drops everything outside `0-9A-Z` (separators, whitespace,
/// punctuation), then maps `O→0`, `I→1`, `Z→2`, `S→5`. Every character of
/// the result is an alphabet symbol; whether it forms a code is left to the
/// validator.
///
/// Uppercasing is per character: `ı` becomes `I` (and so `1`), `ſ` becomes
/// `S` (and so `5`). Characters whose uppercase form is more than one
/// character, like `ß`, are kept as they are and then dropped.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .map(uppercase)
        .filter(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
        .map(substitute)
        .collect()
}

fn uppercase(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

fn substitute(c: char) -> char {
    LOOKALIKES
        .iter()
        .find_map(|&(from, to)| (from == c).then_some(to))
        .unwrap_or(c)
}

/// Split `canonical` into chunks of `part_len` characters.
///
/// The last chunk is shorter when the length is not a multiple of
/// `part_len`. Empty input gives no chunks.
///
/// # Panics
///
/// Panics if `part_len` is zero.
pub fn segment(canonical: &str, part_len: usize) -> Vec<String> {
    let chars: Vec<char> = canonical.chars().collect();
    chars
        .chunks(part_len)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Join parts with [`SEPARATOR`].
pub fn join_parts<S: AsRef<str>>(parts: &[S]) -> String {
    let mut joined = String::new();
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            joined.push(SEPARATOR);
        }
        joined.push_str(part.as_ref());
    }
    joined
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_uppercases() {
        assert_eq!(normalize("55g2dhm0"), "55G2DHM0");
    }

    #[test]
    fn test_normalize_strips_separators() {
        assert_eq!(normalize("55G2-DHM0-50NN"), "55G2DHM050NN");
        assert_eq!(normalize(" 55G2 DHM0 50NN "), "55G2DHM050NN");
        assert_eq!(normalize("55G2_DHM0/50NN"), "55G2DHM050NN");
        assert_eq!(normalize("55G2.DHM0\t50NN!"), "55G2DHM050NN");
    }

    #[test]
    fn test_normalize_substitutes_lookalikes() {
        assert_eq!(normalize("OIZS"), "0125");
        assert_eq!(normalize("oizs"), "0125");
        assert_eq!(normalize("i9oD/V467/8Dsz"), "190DV4678D52");
    }

    #[test]
    fn test_normalize_output_is_alphabet() {
        let all_ascii: String = (0u8..128).map(char::from).collect();
        let normalized = normalize(&all_ascii);

        assert_eq!(normalized.len(), 62);
        assert!(normalized.chars().all(crate::code::alphabet::contains));
    }

    #[test]
    fn test_normalize_uppercases_unicode_lookalikes() {
        assert_eq!(normalize("\u{131}"), "1");
        assert_eq!(normalize("\u{17f}"), "5");
        assert_eq!(normalize("\u{131}9oD/V467/8D\u{17f}z"), "190DV4678D52");
    }

    #[test]
    fn test_normalize_output_is_alphabet_for_any_char() {
        let sample: String = ('\0'..='\u{2FF}').collect();
        let normalized = normalize(&sample);

        assert!(normalized.contains('1'));
        assert!(normalized.contains('5'));
        assert!(normalized.chars().all(crate::code::alphabet::contains));
    }

    #[test]
    fn test_normalize_drops_non_ascii() {
        assert_eq!(normalize("55G2ß"), "55G2");
        assert_eq!(normalize("ÉDHM0"), "DHM0");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_segment_exact() {
        assert_eq!(segment("55G2DHM050NN", 4), vec!["55G2", "DHM0", "50NN"]);
    }

    #[test]
    fn test_segment_short_tail() {
        assert_eq!(segment("55G2DHM50NN", 4), vec!["55G2", "DHM5", "0NN"]);
        assert_eq!(segment("AB", 4), vec!["AB"]);
    }

    #[test]
    fn test_segment_empty() {
        assert!(segment("", 4).is_empty());
    }

    #[test]
    fn test_join_parts() {
        assert_eq!(join_parts(&["55G2", "DHM0", "50NN"]), "55G2-DHM0-50NN");
        assert_eq!(join_parts(&["1K7Q"]), "1K7Q");
        assert_eq!(join_parts::<&str>(&[]), "");
    }
}
