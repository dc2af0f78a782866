#![cfg_attr(not(feature = "std"), no_std)]

//! # Seedkey
//!
//! Challenge-response computation for a 16-bit seed/key scheme, and
//! exhaustive recovery of the key from two captured observations.

//! # Usage
//! ```rust
//! use seedkey::{CandidateKey, Challenge, ObservationPair, SearchEngine, ResponseComputer};
//!
//! // 1. One response
//! let response = seedkey::compute_response(0x0107, [0xD5, 0xDA, 0x2A, 0xE9]);
//! assert_eq!(response, 0x3F3F_77FF);
//!
//! // 2. Key recovery against the reference observations
//! let report = seedkey::recover_keys();
//! assert!(report.contains(CandidateKey::new(0x0107)));
//!
//! // 3. Custom observations
//! let pairs = [
//!     ObservationPair::new(Challenge::new([0xD5, 0xDA, 0x2A, 0xE9]), 0x3F3F_77FF),
//!     ObservationPair::new(Challenge::new([0x12, 0x44, 0x9A, 0xC8]), 0x3B3B_7E3E),
//! ];
//! let engine = SearchEngine::new(ResponseComputer::default(), pairs);
//! let report = engine.scan_with(|key| println!("[MATCH FOUND] Key: {key}"));
//! assert_eq!(report.match_count(), 35);
//! ```

// =============================================================================
// MODULES
// =============================================================================

extern crate alloc;

mod engine;
// Public for test/bench use: explicit word conversions and the raw primitive.
#[doc(hidden)]
pub mod kernels;
mod oneshot;
mod response;
pub(crate) mod types;

// =============================================================================
// EXPORTS
// =============================================================================

pub use engine::{ScanReport, ScanStrategy, SearchEngine, Verdict, REFERENCE_PAIRS};
pub use kernels::constants::{CHALLENGE_SIZE, KEYSPACE_SIZE};
pub use oneshot::{compute_response, recover_keys, recover_keys_with, transform, verify_response};
pub use response::ResponseComputer;
pub use types::{CandidateKey, Challenge, ObservationPair, SecretTable, SeedKeyError};
