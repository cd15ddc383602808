//! Code validation.

use super::checksum::checksum;
use super::normalize::{join_parts, normalize, segment};
use super::Code;
use crate::config::CodeConfig;
use crate::error::{Error, Result, ValidationFailure};

/// Checks user input against a [`CodeConfig`].
///
/// Stateless apart from the configuration, so one validator can be shared
/// freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CodeValidator {
    config: CodeConfig,
}

impl CodeValidator {
    /// Create a validator for codes of the given shape.
    #[must_use]
    pub const fn new(config: CodeConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this validator checks against.
    pub const fn config(&self) -> &CodeConfig {
        &self.config
    }

    /// Validate `raw` and return it in canonical form.
    ///
    /// Input is normalized first (see [`normalize`]), so `55g2 dhm0 50nn`
    /// and `SSGZ/DHMO/SONN` both come back as `55G2-DHM0-50NN`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCode`] carrying the normalized form that was
    /// checked and the first [`ValidationFailure`] found.
    pub fn validate(&self, raw: &str) -> Result<Code> {
        let parts = segment(&normalize(raw), self.config.part_len());
        let code = join_parts(&parts);

        match self.check_parts(&parts) {
            Ok(()) => Ok(Code::from_canonical(code)),
            Err(reason) => {
                tracing::debug!(code = %code, %reason, "Code failed validation");
                Err(Error::InvalidCode { code, reason })
            }
        }
    }

    /// Returns whether `raw` is a valid code.
    pub fn is_valid(&self, raw: &str) -> bool {
        self.validate(raw).is_ok()
    }

    /// Part count, then every part's length, then every checksum.
    ///
    /// Lengths come first because a dropped symbol shifts every later part:
    /// `55G2-DHM-50NN` segments as `55G2 DHM5 0NN`, and the short last part
    /// is the real fault, not the checksum of `DHM5`.
    fn check_parts(&self, parts: &[String]) -> std::result::Result<(), ValidationFailure> {
        if parts.len() != self.config.parts() {
            return Err(ValidationFailure::WrongPartCount {
                expected: self.config.parts(),
                actual: parts.len(),
            });
        }

        // Normalized input is ASCII, so byte length is symbol count.
        if let Some((i, part)) = parts
            .iter()
            .enumerate()
            .find(|(_, part)| part.len() != self.config.part_len())
        {
            return Err(ValidationFailure::WrongPartLength {
                part: i + 1,
                expected: self.config.part_len(),
                actual: part.len(),
            });
        }

        for (i, part) in parts.iter().enumerate() {
            let seed = i + 1;
            let (payload, check) = part.split_at(part.len() - 1);
            let expected = checksum(payload, seed);
            let actual = check.chars().next().unwrap_or_default();
            if actual != expected {
                return Err(ValidationFailure::ChecksumMismatch {
                    part: seed,
                    expected,
                    actual,
                });
            }
        }

        Ok(())
    }
}
