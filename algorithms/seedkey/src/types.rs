//! Shared types used across the seedkey library.

use core::fmt;
#[cfg(feature = "std")]
use std::error;

use crate::kernels::constants::{CHALLENGE_SIZE, PRIMARY_TABLE, SECONDARY_TABLE};

// =============================================================================
// CANDIDATE KEY
// =============================================================================

/// A 16-bit key, handed to the algorithm as a (high, low) byte pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CandidateKey(u16);

impl CandidateKey {
    /// Smallest key in the search domain.
    pub const MIN: Self = Self(u16::MIN);
    /// Largest key in the search domain.
    pub const MAX: Self = Self(u16::MAX);

    /// Wrap a raw 16-bit key.
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Build a key from its high and low bytes.
    pub const fn from_bytes(high: u8, low: u8) -> Self {
        Self(u16::from_be_bytes([high, low]))
    }

    /// Raw 16-bit value.
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Upper 8 bits.
    pub const fn high(self) -> u8 {
        self.0.to_be_bytes()[0]
    }

    /// Lower 8 bits.
    pub const fn low(self) -> u8 {
        self.0.to_be_bytes()[1]
    }

    /// `[high, low]`
    pub const fn to_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

impl From<u16> for CandidateKey {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl From<CandidateKey> for u16 {
    fn from(key: CandidateKey) -> Self {
        key.0
    }
}

impl fmt::Display for CandidateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04X}", self.0)
    }
}

// =============================================================================
// CHALLENGE
// =============================================================================

/// A 4-byte challenge. Byte positions are meaningful and never reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Challenge([u8; CHALLENGE_SIZE]);

impl Challenge {
    /// Wrap four challenge bytes.
    pub const fn new(bytes: [u8; CHALLENGE_SIZE]) -> Self {
        Self(bytes)
    }

    /// Borrow the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; CHALLENGE_SIZE] {
        &self.0
    }
}

impl From<[u8; CHALLENGE_SIZE]> for Challenge {
    fn from(bytes: [u8; CHALLENGE_SIZE]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for Challenge {
    type Error = SeedKeyError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        <[u8; CHALLENGE_SIZE]>::try_from(bytes)
            .map(Self)
            .map_err(|_| SeedKeyError::InvalidChallengeLength {
                actual: bytes.len(),
            })
    }
}

impl fmt::Display for Challenge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02X}")?;
        }
        Ok(())
    }
}

// =============================================================================
// SECRET TABLE
// =============================================================================

/// Three-entry table parameterizing the mixing primitive.
///
/// Entries are `(modulus, subtrahend, multiplier)`. The modulus is the divisor
/// of the primitive and is never zero for a constructed table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SecretTable {
    modulus: u8,
    subtrahend: u8,
    multiplier: u8,
}

impl SecretTable {
    /// Table applied to the key bytes and to challenge bytes 1 and 2.
    pub const PRIMARY: Self = Self::from_const(PRIMARY_TABLE);
    /// Table applied to challenge bytes 0 and 3 and to the feedback half.
    pub const SECONDARY: Self = Self::from_const(SECONDARY_TABLE);

    /// Build a table from its three entries.
    ///
    /// # Errors
    /// Returns [`SeedKeyError::ZeroModulus`] if `modulus` is 0.
    pub const fn new(modulus: u8, subtrahend: u8, multiplier: u8) -> Result<Self, SeedKeyError> {
        if modulus == 0 {
            return Err(SeedKeyError::ZeroModulus);
        }
        Ok(Self {
            modulus,
            subtrahend,
            multiplier,
        })
    }

    // Compile-time path for the built-in tables; a zero modulus fails const evaluation.
    const fn from_const(entries: [u8; 3]) -> Self {
        assert!(entries[0] != 0, "secret table modulus must be non-zero");
        Self {
            modulus: entries[0],
            subtrahend: entries[1],
            multiplier: entries[2],
        }
    }

    /// Divisor of the primitive (`table[0]`).
    pub const fn modulus(&self) -> u8 {
        self.modulus
    }

    /// Weight applied to the quotient (`table[1]`).
    pub const fn subtrahend(&self) -> u8 {
        self.subtrahend
    }

    /// Weight applied to the remainder (`table[2]`).
    pub const fn multiplier(&self) -> u8 {
        self.multiplier
    }

    /// `[modulus, subtrahend, multiplier]`
    pub const fn to_bytes(&self) -> [u8; 3] {
        [self.modulus, self.subtrahend, self.multiplier]
    }
}

impl TryFrom<[u8; 3]> for SecretTable {
    type Error = SeedKeyError;

    fn try_from(entries: [u8; 3]) -> Result<Self, Self::Error> {
        Self::new(entries[0], entries[1], entries[2])
    }
}

// =============================================================================
// OBSERVATION PAIR
// =============================================================================

/// A captured challenge together with the response the real key produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObservationPair {
    /// Challenge sent by the authenticating party.
    pub challenge: Challenge,
    /// Response observed for that challenge.
    pub expected: u32,
}

impl ObservationPair {
    /// Create a new observation pair.
    pub const fn new(challenge: Challenge, expected: u32) -> Self {
        Self {
            challenge,
            expected,
        }
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors raised while building algorithm inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedKeyError {
    /// The first table entry is the divisor and may not be zero.
    ZeroModulus,
    /// A challenge must be exactly four bytes.
    InvalidChallengeLength {
        /// Length that was supplied.
        actual: usize,
    },
}

impl fmt::Display for SeedKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroModulus => write!(f, "secret table modulus (first entry) must be non-zero"),
            Self::InvalidChallengeLength { actual } => write!(
                f,
                "challenge must be {CHALLENGE_SIZE} bytes, got {actual}"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl error::Error for SeedKeyError {}
