//! Coupon code generation and validation.
//!
//! ## Code Format
//!
//! Codes are made of parts separated by `-`, e.g. `55G2-DHM0-50NN`. Each
//! part ends in a check symbol computed from the rest of the part and the
//! part's position, so typos and swapped parts are caught on entry.
//!
//! Codes use a 32-character alphabet without look-alike letters:
//! - Valid characters: `0-9`, `A-H`, `J-N`, `P-R`, `T-Y`
//! - Excluded: `I`, `O`, `S`, `Z` (typed as `1`, `0`, `5`, `2` when validating)
//!
//! ## Example
//!
//! ```rust,ignore
//! use couponcode_core::code::{self, CodeGenerator};
//! use couponcode_core::CodeConfig;
//!
//! let code = code::generate();
//! println!("Generated code: {code}");
//!
//! let code = code::validate("55g2 dhm0 5onn")?;
//! assert_eq!(code.as_str(), "55G2-DHM0-50NN");
//!
//! let generator = CodeGenerator::new(CodeConfig::new(7, 12)?);
//! let code = generator.generate();
//! ```

pub mod alphabet;
pub mod checksum;
pub mod generator;
pub mod normalize;
pub mod validator;

pub use generator::CodeGenerator;
pub use normalize::SEPARATOR;
pub use validator::CodeValidator;

use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::config::{CodeConfig, MIN_PART_LEN};
use crate::error::{Error, Result, ValidationFailure};

/// Process-wide generator for the default 3 × 4 shape.
pub static DEFAULT: LazyLock<CodeGenerator> =
    LazyLock::new(|| CodeGenerator::new(CodeConfig::DEFAULT));

/// Generate a code with the default generator.
pub fn generate() -> Code {
    DEFAULT.generate()
}

/// Validate `raw` as a default-shaped code.
///
/// # Errors
///
/// Returns [`Error::InvalidCode`] if the code does not validate.
pub fn validate(raw: &str) -> Result<Code> {
    DEFAULT.validate(raw)
}

/// A validated code in canonical form.
///
/// Uppercase, alphabet symbols only, parts joined with [`SEPARATOR`].
/// Parsing and deserializing go through [`Code::parse`], which reads the
/// shape from the code itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Code {
    code: String,
}

impl Code {
    pub(crate) fn from_canonical(code: String) -> Self {
        Self { code }
    }

    pub(crate) fn from_parts(parts: &[String]) -> Self {
        Self::from_canonical(normalize::join_parts(parts))
    }

    /// Parse a code of any shape.
    ///
    /// The number of parts comes from the [`SEPARATOR`]s and the part length
    /// from the first part. Each part is normalized on its own, so case and
    /// look-alike letters are forgiven, but the separators must be present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCode`] if the parts differ in length, are
    /// shorter than [`MIN_PART_LEN`], or fail their checksums.
    pub fn parse(raw: &str) -> Result<Self> {
        let parts: Vec<String> = raw
            .trim()
            .split(SEPARATOR)
            .map(normalize::normalize)
            .collect();
        let expected = parts.first().map_or(0, String::len).max(MIN_PART_LEN);

        if let Some((i, part)) = parts
            .iter()
            .enumerate()
            .find(|(_, part)| part.len() != expected)
        {
            return Err(Error::InvalidCode {
                code: normalize::join_parts(&parts),
                reason: ValidationFailure::WrongPartLength {
                    part: i + 1,
                    expected,
                    actual: part.len(),
                },
            });
        }

        let config = CodeConfig::new(parts.len(), expected)?;
        CodeValidator::new(config).validate(&parts.concat())
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.code
    }

    /// Iterate over the parts of the code.
    pub fn parts(&self) -> impl Iterator<Item = &str> {
        self.code.split(SEPARATOR)
    }

    /// The code without separators.
    #[must_use]
    pub fn flattened(&self) -> String {
        self.parts().collect()
    }

    /// Consumes the code, returning the canonical string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.code
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}

impl AsRef<str> for Code {
    fn as_ref(&self) -> &str {
        &self.code
    }
}

impl FromStr for Code {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Code {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Code> for String {
    fn from(code: Code) -> Self {
        code.code
    }
}
