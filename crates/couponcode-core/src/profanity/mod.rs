//! Profanity avoidance for generated codes.
//!
//! Random alphanumerics occasionally spell something rude. The generator
//! asks a [`ProfanityFilter`] about every candidate and throws the candidate
//! away when it is flagged.
//!
//! The built-in [`BlockList`] is stored ROT13-encoded so the words do not
//! show up in plain text in the source or binary.

use std::sync::LazyLock;

/// Decides whether a flattened candidate code must be rejected.
pub trait ProfanityFilter: Send + Sync {
    /// Returns `true` if `candidate` contains a blocked substring.
    fn contains(&self, candidate: &str) -> bool;
}

impl<F> ProfanityFilter for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn contains(&self, candidate: &str) -> bool {
        self(candidate)
    }
}

/// ROT13-encoded built-in block list, space separated.
const ENCODED_BLOCKLIST: &str = "SHPX PHAG JNAX JNAT CVFF PBPX FUVG GJNG GVGF SNEG URYY ZHSS \
     QVPX XABO NEFR FUNT GBFF FYHG GHEQ FYNT PENC CBBC OHGG SRPX OBBO WVFZ WVMM CUNG";

static BUILTIN: LazyLock<Vec<String>> = LazyLock::new(|| {
    ENCODED_BLOCKLIST
        .split_whitespace()
        .map(|word| word.chars().map(rot13).collect())
        .collect()
});

fn rot13(c: char) -> char {
    match c {
        'A'..='M' | 'a'..='m' => char::from(c as u8 + 13),
        'N'..='Z' | 'n'..='z' => char::from(c as u8 - 13),
        _ => c,
    }
}

/// Case-sensitive literal substring filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockList {
    words: Vec<String>,
}

impl BlockList {
    /// The built-in list of 28 four-letter uppercase words.
    pub fn builtin() -> Self {
        Self {
            words: BUILTIN.clone(),
        }
    }

    /// Build a filter from custom words. Empty words are ignored.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words
                .into_iter()
                .map(Into::into)
                .filter(|w: &String| !w.is_empty())
                .collect(),
        }
    }

    /// The blocked substrings.
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl Default for BlockList {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ProfanityFilter for BlockList {
    fn contains(&self, candidate: &str) -> bool {
        self.words.iter().any(|word| candidate.contains(word.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_decodes() {
        let list = BlockList::builtin();
        assert_eq!(list.words().len(), 28);
        assert!(list.words().iter().any(|w| w == "BOOB"));
        assert!(list
            .words()
            .iter()
            .all(|w| w.len() == 4 && w.chars().all(|c| c.is_ascii_uppercase())));
    }

    #[test]
    fn test_clean_word() {
        assert!(!BlockList::builtin().contains("LOVE"));
    }

    #[test]
    fn test_blocked_substring() {
        assert!(BlockList::builtin().contains("BOOBIES"));
        assert!(BlockList::builtin().contains("55G2HELL0NN"));
    }

    #[test]
    fn test_case_sensitive() {
        assert!(!BlockList::builtin().contains("boob"));
    }

    #[test]
    fn test_rot13_is_involution() {
        for c in ('A'..='Z').chain('a'..='z').chain('0'..='9') {
            assert_eq!(rot13(rot13(c)), c);
        }
        assert_eq!(rot13('-'), '-');
    }

    #[test]
    fn test_custom_list_ignores_empty_words() {
        let list = BlockList::new(["", "ABC"]);
        assert_eq!(list.words(), ["ABC".to_string()]);
        assert!(!list.contains("XYZ"));
        assert!(list.contains("XABCX"));
    }

    #[test]
    fn test_closure_filter() {
        let filter = |candidate: &str| candidate.starts_with('0');
        assert!(filter.contains("0ABC"));
        assert!(!ProfanityFilter::contains(&filter, "ABC0"));
    }
}
