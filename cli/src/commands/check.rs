//! Check Command
//!
//! Verify one key against both observation pairs.

use anyhow::Result;
use seedkey::CandidateKey;
use std::io::Write;

use crate::config::Settings;

// =============================================================================
// CHECK
// =============================================================================

/// Verify `key` against each pair, writing one line per pair to `out`.
///
/// Returns `true` if every pair passed.
pub fn check_key<W: Write>(
    out: &mut W,
    settings: &Settings,
    key: CandidateKey,
) -> Result<bool> {
    let mut failed = 0;

    for pair in &settings.pairs {
        if settings.computer.verify(key, pair) {
            writeln!(out, "{}: OK", pair.challenge)?;
        } else {
            let actual = settings.computer.compute(key, &pair.challenge);
            writeln!(
                out,
                "{}: FAILED (expected {:08X}, got {actual:08X})",
                pair.challenge, pair.expected
            )?;
            failed += 1;
        }
    }

    writeln!(out)?;
    if failed == 0 {
        writeln!(out, "Key {key} satisfies all {} pairs", settings.pairs.len())?;
    } else {
        writeln!(
            out,
            "WARNING: key {key} failed {failed} of {} pairs",
            settings.pairs.len()
        )?;
    }

    Ok(failed == 0)
}
