//! Code shape configuration.
//!
//! A [`CodeConfig`] fixes how many parts a code has and how many symbols
//! each part carries. It can be built in code or read from TOML:
//!
//! ```toml
//! parts = 4
//! part_len = 6
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use couponcode_core::config::CodeConfig;
//!
//! let config = CodeConfig::new(4, 6)?;
//! let config = CodeConfig::load("coupons.toml")?;
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default number of parts per code.
pub const DEFAULT_PARTS: usize = 3;

/// Default number of symbols per part.
pub const DEFAULT_PART_LEN: usize = 4;

/// Smallest part length: one payload symbol plus the check symbol.
pub const MIN_PART_LEN: usize = 2;

/// Shape of a code: `parts` parts of `part_len` symbols each.
///
/// Always valid once constructed: `parts >= 1` and `part_len >= 2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCodeConfig")]
pub struct CodeConfig {
    parts: usize,
    part_len: usize,
}

/// Unvalidated on-disk form, missing keys take the defaults.
#[derive(Deserialize)]
#[serde(default)]
struct RawCodeConfig {
    parts: usize,
    part_len: usize,
}

impl Default for RawCodeConfig {
    fn default() -> Self {
        Self {
            parts: DEFAULT_PARTS,
            part_len: DEFAULT_PART_LEN,
        }
    }
}

impl TryFrom<RawCodeConfig> for CodeConfig {
    type Error = Error;

    fn try_from(raw: RawCodeConfig) -> Result<Self> {
        Self::new(raw.parts, raw.part_len)
    }
}

impl CodeConfig {
    /// The 3 × 4 shape, e.g. `55G2-DHM0-50NN`.
    pub const DEFAULT: Self = Self {
        parts: DEFAULT_PARTS,
        part_len: DEFAULT_PART_LEN,
    };

    /// Create a configuration for `parts` parts of `part_len` symbols.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if `parts` is zero or `part_len` is
    /// below [`MIN_PART_LEN`].
    pub fn new(parts: usize, part_len: usize) -> Result<Self> {
        if parts == 0 {
            return Err(Error::invalid_config("parts", "must be at least 1"));
        }
        if part_len < MIN_PART_LEN {
            return Err(Error::invalid_config(
                "part_len",
                format!("must be at least {MIN_PART_LEN}, got {part_len}"),
            ));
        }
        Ok(Self { parts, part_len })
    }

    /// Number of parts per code.
    pub const fn parts(&self) -> usize {
        self.parts
    }

    /// Number of symbols per part, including the check symbol.
    pub const fn part_len(&self) -> usize {
        self.part_len
    }

    /// Number of random payload symbols per part.
    pub const fn payload_len(&self) -> usize {
        self.part_len - 1
    }

    /// Length of a formatted code, separators included.
    pub const fn display_len(&self) -> usize {
        self.parts * self.part_len + (self.parts - 1)
    }

    /// Parse a configuration from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the document is malformed or the
    /// values are out of range.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::ConfigError(e.to_string()))
    }

    /// Load a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            parts = config.parts,
            part_len = config.part_len,
            "Loaded code configuration"
        );
        Ok(config)
    }

    /// Serialize the configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::ConfigError(e.to_string()))
    }
}

impl Default for CodeConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
