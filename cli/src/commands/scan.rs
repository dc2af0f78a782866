//! Scan Command
//!
//! Full keyspace scan, reporting every key that satisfies both pairs.

use anyhow::Result;
use seedkey::{ScanReport, ScanStrategy};
use std::io::Write;

use crate::config::Settings;

const RULE: &str = "----------------------------------------";

// =============================================================================
// SCAN
// =============================================================================

/// Scan `0x0000..=0xFFFF`, write each match and then the total to `out`.
pub fn scan_keys<W: Write>(
    out: &mut W,
    settings: &Settings,
    strategy: ScanStrategy,
) -> Result<ScanReport> {
    let engine = settings.engine();

    writeln!(out, "Starting Full Scan (0x0000 - 0xFFFF)...")?;
    writeln!(out, "{RULE}")?;

    let report = match strategy {
        // Matches are written as the loop reaches them.
        ScanStrategy::Sequential => {
            let mut written = Ok(());
            let report = engine.scan_with(|key| {
                if written.is_ok() {
                    written = writeln!(out, "[MATCH FOUND] Key: {key}");
                }
            });
            written?;
            report
        }
        ScanStrategy::Sharded => {
            let report = engine.run(ScanStrategy::Sharded);
            for key in report.matches() {
                writeln!(out, "[MATCH FOUND] Key: {key}")?;
            }
            report
        }
    };

    writeln!(out, "{RULE}")?;
    writeln!(out, "Scan Complete.")?;
    if report.is_empty() {
        writeln!(out, "Result: No keys found.")?;
    } else {
        writeln!(out, "Result: Found {} valid key(s).", report.match_count())?;
    }

    tracing::info!(
        matches = report.match_count(),
        first_pair_hits = report.first_pair_hits(),
        "scan finished"
    );

    Ok(report)
}
