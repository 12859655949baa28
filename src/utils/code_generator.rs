//! Short identifier generation.
//!
//! Identifiers are drawn uniformly, with replacement, from a 62-character
//! alphanumeric alphabet. The generator owns one PRNG seeded once from the
//! operating system; callers on different threads share it through a mutex
//! instead of reseeding per call.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, PoisonError};

/// Characters an identifier may contain.
pub const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Random identifier source shared by all request handlers.
///
/// Uniqueness is not guaranteed here; see
/// [`crate::domain::store::LinkStore::insert_unique`].
pub struct CodeGenerator {
    rng: Mutex<StdRng>,
}

impl CodeGenerator {
    /// Creates a generator seeded from operating system entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Creates a deterministic generator. Intended for tests.
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    /// Generates an identifier of exactly `length` characters.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let code = CodeGenerator::new().generate(6);
    /// assert_eq!(code.len(), 6);
    /// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    /// ```
    pub fn generate(&self, length: usize) -> String {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);

        (0..length)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect()
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}
