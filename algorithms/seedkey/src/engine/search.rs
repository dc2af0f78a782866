//! Search Engine
//!
//! Exhaustive scan of the 16-bit keyspace against two observation pairs.
//! Each candidate maps to a [`Verdict`] independently of every other
//! candidate; the scan strategies only differ in how that mapping is applied
//! over the domain.

use alloc::vec::Vec;

use crate::kernels::constants::{
    KEYSPACE_SIZE, REFERENCE_CHALLENGE_1, REFERENCE_CHALLENGE_2, REFERENCE_RESPONSE_1,
    REFERENCE_RESPONSE_2,
};
use crate::response::ResponseComputer;
use crate::types::{CandidateKey, Challenge, ObservationPair};

/// The two observation pairs captured from the reference target.
pub const REFERENCE_PAIRS: [ObservationPair; 2] = [
    ObservationPair::new(Challenge::new(REFERENCE_CHALLENGE_1), REFERENCE_RESPONSE_1),
    ObservationPair::new(Challenge::new(REFERENCE_CHALLENGE_2), REFERENCE_RESPONSE_2),
];

// =============================================================================
// VERDICT
// =============================================================================

/// Outcome of testing one candidate key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Failed the first pair; the second pair was never evaluated.
    RejectedFirst,
    /// Passed the first pair, failed the second.
    RejectedSecond,
    /// Reproduced both expected responses.
    Accepted,
}

impl Verdict {
    /// True if the candidate reproduced the first pair's response.
    pub const fn passed_first(self) -> bool {
        !matches!(self, Self::RejectedFirst)
    }

    /// True if the candidate reproduced both responses.
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }
}

// =============================================================================
// STRATEGY
// =============================================================================

/// How the keyspace is walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanStrategy {
    /// Single ascending loop; matches are reported as they are found.
    #[default]
    Sequential,
    /// Fixed shards, processed on the rayon pool when `multithread` is enabled.
    Sharded,
}

// =============================================================================
// REPORT
// =============================================================================

/// Result of a full keyspace scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanReport {
    matches: Vec<CandidateKey>,
    candidates: u32,
    first_pair_hits: u32,
}

impl ScanReport {
    /// Accepted keys, ascending.
    pub fn matches(&self) -> &[CandidateKey] {
        &self.matches
    }

    /// Consume the report, keeping the accepted keys.
    pub fn into_matches(self) -> Vec<CandidateKey> {
        self.matches
    }

    /// Number of accepted keys.
    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    /// True when no key satisfied both pairs.
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// True if `key` was accepted.
    pub fn contains(&self, key: CandidateKey) -> bool {
        self.matches.binary_search(&key).is_ok()
    }

    /// Number of candidates evaluated against the first pair.
    pub const fn candidates(&self) -> u32 {
        self.candidates
    }

    /// Number of candidates that reproduced the first pair.
    pub const fn first_pair_hits(&self) -> u32 {
        self.first_pair_hits
    }
}

/// Running counts for a contiguous run of candidates.
#[derive(Debug, Default)]
pub struct Tally {
    matches: Vec<CandidateKey>,
    candidates: u32,
    first_pair_hits: u32,
}

impl Tally {
    /// Count one verdict. Returns `true` if the key was accepted.
    pub fn record(&mut self, key: CandidateKey, verdict: Verdict) -> bool {
        self.candidates += 1;
        if verdict.passed_first() {
            self.first_pair_hits += 1;
        }
        if verdict.is_accepted() {
            self.matches.push(key);
            return true;
        }
        false
    }

    /// Append a tally covering the keys right after this one.
    pub fn append(&mut self, mut next: Self) {
        self.candidates += next.candidates;
        self.first_pair_hits += next.first_pair_hits;
        self.matches.append(&mut next.matches);
    }

    /// Close a tally that covered the whole keyspace.
    pub fn finish(self) -> ScanReport {
        debug_assert_eq!(self.candidates, KEYSPACE_SIZE);
        ScanReport {
            matches: self.matches,
            candidates: self.candidates,
            first_pair_hits: self.first_pair_hits,
        }
    }
}

// =============================================================================
// SEARCH ENGINE
// =============================================================================

/// Brute-force key recovery against two observation pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchEngine {
    computer: ResponseComputer,
    pairs: [ObservationPair; 2],
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(ResponseComputer::default(), REFERENCE_PAIRS)
    }
}

impl SearchEngine {
    /// Create an engine testing candidates against `pairs`, first pair first.
    pub const fn new(computer: ResponseComputer, pairs: [ObservationPair; 2]) -> Self {
        Self { computer, pairs }
    }

    /// The response computer in use.
    pub const fn computer(&self) -> &ResponseComputer {
        &self.computer
    }

    /// The observation pairs, in evaluation order.
    pub const fn pairs(&self) -> &[ObservationPair; 2] {
        &self.pairs
    }

    /// Test one candidate. The second pair is only evaluated if the first passes.
    #[inline]
    pub fn evaluate(&self, key: CandidateKey) -> Verdict {
        let [first, second] = &self.pairs;

        if !self.computer.verify(key, first) {
            return Verdict::RejectedFirst;
        }
        if !self.computer.verify(key, second) {
            return Verdict::RejectedSecond;
        }
        Verdict::Accepted
    }

    /// Scan the keyspace with the given strategy.
    pub fn run(&self, strategy: ScanStrategy) -> ScanReport {
        match strategy {
            ScanStrategy::Sequential => self.scan(),
            ScanStrategy::Sharded => self.scan_sharded(),
        }
    }

    /// Sequential scan of `0x0000..=0xFFFF`.
    pub fn scan(&self) -> ScanReport {
        self.scan_with(|_| {})
    }

    /// Sequential scan, calling `on_match` for each accepted key in ascending order.
    pub fn scan_with<F>(&self, mut on_match: F) -> ScanReport
    where
        F: FnMut(CandidateKey),
    {
        tracing::debug!(strategy = ?ScanStrategy::Sequential, "starting keyspace scan");

        let tally = self.scan_range(0..=u16::MAX, |key| {
            tracing::trace!(key = %key, "key accepted");
            on_match(key);
        });

        let report = tally.finish();
        log_complete(&report);
        report
    }

    /// Scan an inclusive sub-range of the keyspace.
    pub(crate) fn scan_range<F>(
        &self,
        range: core::ops::RangeInclusive<u16>,
        mut on_match: F,
    ) -> Tally
    where
        F: FnMut(CandidateKey),
    {
        let mut tally = Tally::default();
        for value in range {
            let key = CandidateKey::new(value);
            if tally.record(key, self.evaluate(key)) {
                on_match(key);
            }
        }
        tally
    }
}

/// Emit the completion event for a finished scan.
pub fn log_complete(report: &ScanReport) {
    tracing::debug!(
        candidates = report.candidates(),
        first_pair_hits = report.first_pair_hits(),
        matches = report.match_count(),
        "keyspace scan complete"
    );
}
