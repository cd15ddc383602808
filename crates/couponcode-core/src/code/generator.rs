//! Code generation.

use super::alphabet::symbol_at;
use super::checksum::checksum;
use super::validator::CodeValidator;
use super::Code;
use crate::config::CodeConfig;
use crate::error::Result;
use crate::profanity::{BlockList, ProfanityFilter};
use crate::random::{FastSource, SymbolSource};

/// Generator for checksummed codes.
///
/// Each part is `part_len - 1` random symbols followed by the check symbol
/// for its 1-based position. A code whose flattened form trips the
/// profanity filter is discarded whole and every part is drawn again.
#[derive(Debug, Clone)]
pub struct CodeGenerator<S = FastSource, F = BlockList> {
    config: CodeConfig,
    source: S,
    filter: F,
}

impl CodeGenerator {
    /// Create a generator using the fast random source and built-in block list.
    #[must_use]
    pub fn new(config: CodeConfig) -> Self {
        Self::with_collaborators(config, FastSource, BlockList::builtin())
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new(CodeConfig::DEFAULT)
    }
}

impl<S: SymbolSource, F: ProfanityFilter> CodeGenerator<S, F> {
    /// Create a generator drawing from `source` and screening with `filter`.
    pub const fn with_collaborators(config: CodeConfig, source: S, filter: F) -> Self {
        Self {
            config,
            source,
            filter,
        }
    }

    /// Returns the configuration of generated codes.
    pub const fn config(&self) -> &CodeConfig {
        &self.config
    }

    /// Generate a new code.
    ///
    /// Retries until the profanity filter accepts a candidate. There is no
    /// attempt limit; rejections are rare.
    pub fn generate(&self) -> Code {
        let mut attempt: u64 = 1;
        loop {
            let parts: Vec<String> = (1..=self.config.parts())
                .map(|seed| self.build_part(seed))
                .collect();

            if !self.filter.contains(&parts.concat()) {
                let code = Code::from_parts(&parts);
                tracing::trace!(code = %code, attempt, "Generated code");
                return code;
            }

            tracing::debug!(attempt, "Discarding code containing a blocked word");
            attempt += 1;
        }
    }

    /// Validate `raw` against this generator's configuration.
    ///
    /// # Errors
    ///
    /// See [`CodeValidator::validate`].
    pub fn validate(&self, raw: &str) -> Result<Code> {
        self.validator().validate(raw)
    }

    /// A validator for codes produced by this generator.
    pub const fn validator(&self) -> CodeValidator {
        CodeValidator::new(self.config)
    }

    fn build_part(&self, seed: usize) -> String {
        let mut part: String = self
            .source
            .next(self.config.payload_len())
            .into_iter()
            .map(symbol_at)
            .collect();
        let check = checksum(&part, seed);
        part.push(check);
        part
    }
}
