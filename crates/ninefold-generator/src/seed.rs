//! Reproducible seeds for puzzle generation.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};
use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// A 32-byte seed that fully determines a generation run.
///
/// Generating with the same seed reproduces the same solved grid and the
/// same carved puzzle, which is what makes puzzles shareable and benchmarks
/// stable. Seeds render as 64 lowercase hex characters and parse back from
/// the same form; [`PuzzleSeed::from_phrase`] derives a seed from arbitrary
/// text by hashing it with SHA-256.
///
/// # Examples
///
/// ```
/// use ninefold_generator::PuzzleSeed;
///
/// let seed = PuzzleSeed::from_phrase("rainy sunday");
/// let text = seed.to_string();
/// assert_eq!(text.len(), 64);
/// assert_eq!(text.parse::<PuzzleSeed>().unwrap(), seed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed {
    bytes: [u8; 32],
}

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Draws a fresh seed from the thread-local entropy source.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0u8; 32];
        rand::rng().fill_bytes(&mut bytes);
        Self { bytes }
    }

    /// Derives a seed from arbitrary text by hashing it with SHA-256.
    ///
    /// The same phrase always yields the same seed, so a memorable string
    /// can stand in for the 64-character hex form.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self {
            bytes: Sha256::digest(phrase.as_bytes()).into(),
        }
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.bytes
    }

    /// Creates the deterministic random number generator driven by this
    /// seed.
    #[must_use]
    pub(crate) fn rng(&self) -> Pcg64 {
        Pcg64::from_seed(self.bytes)
    }
}

impl fmt::Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.bytes {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Error returned when parsing a [`PuzzleSeed`] from hex fails.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("invalid puzzle seed: expected 64 hex characters")]
pub struct ParseSeedError;

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 64 || !s.is_ascii() {
            return Err(ParseSeedError);
        }
        let mut bytes = [0u8; 32];
        for (byte, pair) in bytes.iter_mut().zip(s.as_bytes().chunks_exact(2)) {
            let pair = std::str::from_utf8(pair).map_err(|_| ParseSeedError)?;
            *byte = u8::from_str_radix(pair, 16).map_err(|_| ParseSeedError)?;
        }
        Ok(Self { bytes })
    }
}
