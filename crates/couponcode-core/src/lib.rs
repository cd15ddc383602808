//! # couponcode core library
//!
//! `couponcode-core` generates and validates short codes people can read
//! off a flyer and type back in, like `55G2-DHM0-50NN`.
//!
//! ## Features
//!
//! - **Typo detection**: every part ends in a position-seeded check symbol
//! - **Forgiving input**: case, separators and look-alike letters are normalized
//! - **Clean output**: candidates containing blocked words are regenerated
//! - **Pluggable randomness**: fast, OS-backed or seeded sources
//!
//! Check symbols catch accidental mistakes. They do not stop deliberate
//! forgery.
//!
//! ## Modules
//!
//! - [`code`] - Alphabet, checksum, normalization, generation and validation
//! - [`config`] - Code shape configuration
//! - [`error`] - Error types
//! - [`profanity`] - Blocked-word filtering
//! - [`random`] - Random symbol sources
//!
//! ## Example
//!
//! ```rust,ignore
//! use couponcode_core::{CodeConfig, CodeGenerator};
//!
//! let code = couponcode_core::generate();
//! let checked = couponcode_core::validate(code.as_str())?;
//!
//! let generator = CodeGenerator::new(CodeConfig::new(4, 6)?);
//! println!("{}", generator.generate());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::must_use_candidate)]

pub mod code;
pub mod config;
pub mod error;
pub mod profanity;
pub mod random;

pub use code::{generate, validate, Code, CodeGenerator, CodeValidator};
pub use config::CodeConfig;
pub use error::{Error, Result, ValidationFailure};
pub use profanity::{BlockList, ProfanityFilter};
pub use random::{FastSource, OsSource, SeededSource, SymbolSource};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
