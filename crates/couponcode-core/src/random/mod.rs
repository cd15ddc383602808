//! Random symbol sources.
//!
//! The generator draws payload symbols from a [`SymbolSource`]. Pick the
//! trade-off when wiring the generator:
//!
//! - [`FastSource`]: thread-local PRNG, fine for casual promo codes
//! - [`OsSource`]: operating-system CSPRNG, for codes that gate something valuable
//! - [`SeededSource`]: reproducible output for tests and demos
//!
//! ## Example
//!
//! ```rust,ignore
//! use couponcode_core::{CodeConfig, CodeGenerator, BlockList, OsSource};
//!
//! let generator = CodeGenerator::with_collaborators(CodeConfig::DEFAULT, OsSource, BlockList::builtin());
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use rand::rngs::{OsRng, StdRng};
use rand::{Rng, SeedableRng};

use crate::code::alphabet::ALPHABET_LEN;

/// Supplies symbol positions uniformly distributed over `0..ALPHABET_LEN`.
///
/// Implementations must be callable concurrently from many threads.
pub trait SymbolSource: Send + Sync {
    /// Draw `count` independent symbol positions.
    fn next(&self, count: usize) -> Vec<usize>;
}

fn draw<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<usize> {
    (0..count).map(|_| rng.gen_range(0..ALPHABET_LEN)).collect()
}

/// Non-cryptographic source backed by `rand::thread_rng`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FastSource;

impl SymbolSource for FastSource {
    fn next(&self, count: usize) -> Vec<usize> {
        draw(&mut rand::thread_rng(), count)
    }
}

/// Cryptographically secure source backed by the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsSource;

impl SymbolSource for OsSource {
    fn next(&self, count: usize) -> Vec<usize> {
        draw(&mut OsRng, count)
    }
}

/// Deterministic source seeded from a `u64`.
///
/// Draws are serialized through a mutex, so concurrent callers see one
/// shared sequence.
#[derive(Debug)]
pub struct SeededSource {
    rng: Mutex<StdRng>,
}

impl SeededSource {
    /// Create a source that replays the same sequence for the same seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl SymbolSource for SeededSource {
    fn next(&self, count: usize) -> Vec<usize> {
        // A panic mid-draw cannot leave the RNG state inconsistent.
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        draw(&mut *rng, count)
    }
}

impl<S: SymbolSource + ?Sized> SymbolSource for Arc<S> {
    fn next(&self, count: usize) -> Vec<usize> {
        (**self).next(count)
    }
}

impl<S: SymbolSource + ?Sized> SymbolSource for &S {
    fn next(&self, count: usize) -> Vec<usize> {
        (**self).next(count)
    }
}
