use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// A 256-bit seed that makes generation reproducible.
///
/// Seeds are written as 64 lowercase hexadecimal digits.
///
/// # Examples
///
/// ```
/// use bridges_generator::PuzzleSeed;
///
/// let seed: PuzzleSeed = "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef"
///     .parse()?;
/// assert_eq!(seed.to_string().parse::<PuzzleSeed>()?, seed);
/// # Ok::<(), bridges_generator::ParseSeedError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from the thread-local random number generator.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::rng().random())
    }

    /// Returns the raw bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns the random number generator for generation attempt `attempt`.
    ///
    /// Each attempt hashes the seed together with the attempt number, so a
    /// retry never replays the layout that just failed.
    pub(crate) fn attempt_rng(&self, attempt: usize) -> Pcg64 {
        let digest: [u8; 32] = Sha256::new()
            .chain_update(self.0)
            .chain_update((attempt as u64).to_le_bytes())
            .finalize()
            .into();
        Pcg64::from_seed(digest)
    }
}

impl From<[u8; 32]> for PuzzleSeed {
    fn from(bytes: [u8; 32]) -> Self {
        Self::new(bytes)
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Error returned when parsing a [`PuzzleSeed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The string is not 64 characters long.
    #[display("seed must be 64 hex digits, got {len}")]
    InvalidLength {
        /// Length of the input in bytes.
        len: usize,
    },
    /// The string contains a non-hexadecimal character.
    #[display("invalid hex digit {ch:?} in seed")]
    InvalidDigit {
        /// Offending character.
        ch: char,
    },
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() != 64 {
            return Err(ParseSeedError::InvalidLength { len: s.len() });
        }
        let digit = |ch: char| {
            ch.to_digit(16)
                .and_then(|d| u8::try_from(d).ok())
                .ok_or(ParseSeedError::InvalidDigit { ch })
        };
        let mut bytes = [0; 32];
        let mut chars = s.chars();
        for byte in &mut bytes {
            let (Some(hi), Some(lo)) = (chars.next(), chars.next()) else {
                return Err(ParseSeedError::InvalidLength { len: s.len() });
            };
            *byte = (digit(hi)? << 4) | digit(lo)?;
        }
        Ok(Self(bytes))
    }
}
