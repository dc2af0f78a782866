//! Response Computer
//!
//! Builds the 32-bit response from four applications of the mixing primitive.
//! The high half mixes the key with challenge bytes 0 and 3; the low half mixes
//! challenge bytes 1 and 2 with the high half fed back through the secondary
//! table.

use subtle::ConstantTimeEq;

use crate::kernels::transform::transform;
use crate::kernels::word::{split, to_unsigned};
use crate::types::{CandidateKey, Challenge, ObservationPair, SecretTable};

// =============================================================================
// RESPONSE COMPUTER
// =============================================================================

/// Computes responses for a fixed pair of secret tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseComputer {
    primary: SecretTable,
    secondary: SecretTable,
}

impl Default for ResponseComputer {
    fn default() -> Self {
        Self::new(SecretTable::PRIMARY, SecretTable::SECONDARY)
    }
}

impl ResponseComputer {
    /// Create a computer from the primary and secondary tables.
    pub const fn new(primary: SecretTable, secondary: SecretTable) -> Self {
        Self { primary, secondary }
    }

    /// Table applied to the key and challenge bytes 1 and 2.
    pub const fn primary(&self) -> &SecretTable {
        &self.primary
    }

    /// Table applied to challenge bytes 0 and 3 and to the feedback half.
    pub const fn secondary(&self) -> &SecretTable {
        &self.secondary
    }

    /// Compute the response `key` gives for `challenge`.
    #[inline]
    pub fn compute(&self, key: CandidateKey, challenge: &Challenge) -> u32 {
        let [c0, c1, c2, c3] = *challenge.as_bytes();

        // ORs combine the already-narrowed signed halves.
        let high = transform(key.high(), key.low(), &self.primary)
            | transform(c0, c3, &self.secondary);

        let (feedback_high, feedback_low) = split(to_unsigned(high));
        let low = transform(c1, c2, &self.primary)
            | transform(feedback_high, feedback_low, &self.secondary);

        (u32::from(to_unsigned(high)) << 16) | u32::from(to_unsigned(low))
    }

    /// Check whether `key` reproduces the pair's expected response.
    ///
    /// The comparison runs in constant time.
    #[inline]
    pub fn verify(&self, key: CandidateKey, pair: &ObservationPair) -> bool {
        self.compute(key, &pair.challenge)
            .ct_eq(&pair.expected)
            .into()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::kernels::constants::{REFERENCE_CHALLENGE_1, REFERENCE_CHALLENGE_2};

    const CH1: Challenge = Challenge::new(REFERENCE_CHALLENGE_1);
    const CH2: Challenge = Challenge::new(REFERENCE_CHALLENGE_2);

    #[test]
    fn known_responses() {
        let computer = ResponseComputer::default();

        assert_eq!(computer.compute(CandidateKey::new(0x0000), &CH1), 0x0F2C_7FFB);
        assert_eq!(computer.compute(CandidateKey::new(0x0000), &CH2), 0x1329_77FE);
        assert_eq!(computer.compute(CandidateKey::new(0xFFFF), &CH1), 0x7FED_53BB);
        assert_eq!(computer.compute(CandidateKey::new(0xFFFF), &CH2), 0x77E9_377E);
        assert_eq!(computer.compute(CandidateKey::new(0x1234), &CH1), 0x0FFE_5FBF);
        assert_eq!(computer.compute(CandidateKey::new(0x1234), &CH2), 0x1FFB_3FBF);
    }

    #[test]
    fn high_half_feeds_low_half() {
        let computer = ResponseComputer::default();
        let key = CandidateKey::new(0x0107);
        let response = computer.compute(key, &CH1);

        let high = transform(0x01, 0x07, &SecretTable::PRIMARY)
            | transform(0xD5, 0xE9, &SecretTable::SECONDARY);
        let [hh, hl] = to_unsigned(high).to_be_bytes();
        let low = transform(0xDA, 0x2A, &SecretTable::PRIMARY)
            | transform(hh, hl, &SecretTable::SECONDARY);

        assert_eq!(response >> 16, u32::from(to_unsigned(high)));
        assert_eq!(response & 0xFFFF, u32::from(to_unsigned(low)));
    }

    #[test]
    fn verify_matches_compute() {
        let computer = ResponseComputer::default();
        let key = CandidateKey::new(0xED89);
        let pair = ObservationPair::new(CH1, 0x3F3F_77FF);

        assert!(computer.verify(key, &pair));
        assert!(!computer.verify(
            key,
            &ObservationPair::new(CH1, 0x3F3F_77FE)
        ));
        assert!(!computer.verify(CandidateKey::new(0x0000), &pair));
    }

    #[test]
    fn tables_are_injected() {
        let swapped = ResponseComputer::new(SecretTable::SECONDARY, SecretTable::PRIMARY);
        let key = CandidateKey::new(0x0107);

        assert_eq!(swapped.primary(), &SecretTable::SECONDARY);
        assert_ne!(
            swapped.compute(key, &CH1),
            ResponseComputer::default().compute(key, &CH1)
        );
    }

    #[test]
    fn degenerate_table_zeroes_the_operand_terms() {
        // modulus 1: every remainder is 0, quotient = data; subtrahend 0 kills it.
        let flat = SecretTable::new(1, 0, 0).unwrap();
        let computer = ResponseComputer::new(flat, flat);

        assert_eq!(computer.compute(CandidateKey::MAX, &CH1), 0);
    }
}
