//! Public API Layer
//!
//! Free functions bound to the built-in secret tables.

use crate::engine::{ScanReport, ScanStrategy, SearchEngine, REFERENCE_PAIRS};
use crate::kernels::constants::CHALLENGE_SIZE;
use crate::kernels::transform as primitive;
use crate::response::ResponseComputer;
use crate::types::{CandidateKey, Challenge, ObservationPair, SecretTable};

// =============================================================================
// PRIMITIVE
// =============================================================================

/// Apply the mixing primitive to `(high, low)` with `table`.
///
/// # Example
/// ```rust
/// use seedkey::SecretTable;
///
/// assert_eq!(seedkey::transform(0x00, 0x01, &SecretTable::PRIMARY), 170);
/// // 0xFFFF is -1 as a signed word
/// assert_eq!(seedkey::transform(0xFF, 0xFF, &SecretTable::PRIMARY), 30153);
/// ```
#[must_use]
#[inline]
pub fn transform(high: u8, low: u8, table: &SecretTable) -> i16 {
    primitive::transform(high, low, table)
}

// =============================================================================
// RESPONSE
// =============================================================================

/// Compute the response of `key` to `challenge` with the built-in tables.
///
/// # Example
/// ```rust
/// let response = seedkey::compute_response(0x0107, [0xD5, 0xDA, 0x2A, 0xE9]);
/// assert_eq!(response, 0x3F3F_77FF);
/// ```
#[must_use]
#[inline]
pub fn compute_response(key: u16, challenge: [u8; CHALLENGE_SIZE]) -> u32 {
    ResponseComputer::default().compute(CandidateKey::new(key), &Challenge::new(challenge))
}

/// Check in constant time whether `key` answers `challenge` with `expected`.
///
/// # Example
/// ```rust
/// assert!(seedkey::verify_response(0xED89, [0x12, 0x44, 0x9A, 0xC8], 0x3B3B_7E3E));
/// assert!(!seedkey::verify_response(0x0000, [0x12, 0x44, 0x9A, 0xC8], 0x3B3B_7E3E));
/// ```
#[must_use]
pub fn verify_response(key: u16, challenge: [u8; CHALLENGE_SIZE], expected: u32) -> bool {
    let pair = ObservationPair::new(Challenge::new(challenge), expected);
    ResponseComputer::default().verify(CandidateKey::new(key), &pair)
}

// =============================================================================
// KEY RECOVERY
// =============================================================================

/// Recover every key consistent with the two reference observation pairs.
///
/// # Example
/// ```rust
/// let report = seedkey::recover_keys();
/// assert_eq!(report.match_count(), 35);
/// ```
#[must_use]
pub fn recover_keys() -> ScanReport {
    recover_keys_with(REFERENCE_PAIRS)
}

/// Recover every key consistent with `pairs` using the built-in tables.
///
/// Uses the sharded scan (parallel with the `multithread` feature).
#[must_use]
pub fn recover_keys_with(pairs: [ObservationPair; 2]) -> ScanReport {
    SearchEngine::new(ResponseComputer::default(), pairs).run(ScanStrategy::Sharded)
}
