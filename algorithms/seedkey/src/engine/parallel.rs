//! Sharded Execution Engine
//!
//! Splits the keyspace into `SHARD_COUNT` contiguous shards of `SHARD_SIZE`
//! keys. Shards are scanned independently (in parallel via Rayon if the
//! `multithread` feature is enabled, otherwise serially) and their tallies are
//! appended in shard order, so the merged match list is ascending and
//! identical to the sequential scan.

use alloc::vec::Vec;
use core::ops::{Range, RangeInclusive};

use super::search::{log_complete, ScanReport, ScanStrategy, SearchEngine, Tally};
use crate::kernels::constants::{SHARD_COUNT, SHARD_SIZE};

// =============================================================================
// SHARDED SCAN
// =============================================================================

impl SearchEngine {
    /// Scan the keyspace shard by shard and merge the results.
    pub fn scan_sharded(&self) -> ScanReport {
        tracing::debug!(
            strategy = ?ScanStrategy::Sharded,
            shards = SHARD_COUNT,
            "starting keyspace scan"
        );

        let tallies = (0..SHARD_COUNT).process_shards(|shard| {
            self.scan_range(shard_keys(shard), |key| {
                tracing::trace!(key = %key, shard, "key accepted");
            })
        });

        let mut merged = Tally::default();
        for tally in tallies {
            merged.append(tally);
        }

        let report = merged.finish();
        log_complete(&report);
        report
    }
}

/// Keys covered by `shard`.
///
/// `shard < SHARD_COUNT`, so neither bound overflows: the last shard ends at `0xFFFF`.
#[inline]
const fn shard_keys(shard: u16) -> RangeInclusive<u16> {
    let start = shard * SHARD_SIZE;
    start..=start + (SHARD_SIZE - 1)
}

/// Helper for feature-agnostic shard processing
trait ShardProcessor {
    fn process_shards<F, R>(self, f: F) -> Vec<R>
    where
        F: Fn(u16) -> R + Sync + Send,
        R: Send;
}

impl ShardProcessor for Range<u16> {
    fn process_shards<F, R>(self, f: F) -> Vec<R>
    where
        F: Fn(u16) -> R + Sync + Send,
        R: Send,
    {
        #[cfg(feature = "multithread")]
        {
            use rayon::prelude::*;
            self.into_par_iter().map(f).collect()
        }
        #[cfg(not(feature = "multithread"))]
        {
            self.map(f).collect()
        }
    }
}
