//! Seedkey Kernel Constants
//!
//! Fixed inputs of the challenge-response scheme: the two secret tables,
//! the structural sizes, and the two reference observation pairs captured
//! from the target.

// =============================================================================
// SECRET TABLES
// =============================================================================

/// `(modulus, subtrahend, multiplier)` applied to the key and challenge bytes 1..=2.
pub const PRIMARY_TABLE: [u8; 3] = [0xB2, 0x3F, 0xAA];

/// `(modulus, subtrahend, multiplier)` applied to challenge bytes 0/3 and the feedback half.
pub const SECONDARY_TABLE: [u8; 3] = [0xB1, 0x02, 0xAB];

// =============================================================================
// STRUCTURAL CONSTANTS
// =============================================================================

/// Challenge length in bytes.
pub const CHALLENGE_SIZE: usize = 4;

/// Number of candidate keys (the full 16-bit domain).
pub const KEYSPACE_SIZE: u32 = 1 << 16;

/// Keys per shard in the sharded scan.
pub const SHARD_SIZE: u16 = 4096;

/// Number of shards covering the keyspace.
pub const SHARD_COUNT: u16 = 16;

// =============================================================================
// REFERENCE OBSERVATIONS
// =============================================================================

/// First captured challenge.
pub const REFERENCE_CHALLENGE_1: [u8; CHALLENGE_SIZE] = [0xD5, 0xDA, 0x2A, 0xE9];
/// Response observed for [`REFERENCE_CHALLENGE_1`].
pub const REFERENCE_RESPONSE_1: u32 = 0x3F3F_77FF;

/// Second captured challenge.
pub const REFERENCE_CHALLENGE_2: [u8; CHALLENGE_SIZE] = [0x12, 0x44, 0x9A, 0xC8];
/// Response observed for [`REFERENCE_CHALLENGE_2`].
pub const REFERENCE_RESPONSE_2: u32 = 0x3B3B_7E3E;

#[allow(clippy::cast_lossless)]
const _: () = assert!(SHARD_SIZE as u32 * SHARD_COUNT as u32 == KEYSPACE_SIZE);
