//! Execution Engine
//!
//! Keyspace search and sharded processing.

pub mod parallel;
pub mod search;

pub use search::{ScanReport, ScanStrategy, SearchEngine, Verdict, REFERENCE_PAIRS};
