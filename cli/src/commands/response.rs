//! Response Command
//!
//! Compute the response a key gives for one challenge.

use anyhow::Result;
use seedkey::{CandidateKey, Challenge};
use std::io::Write;

use crate::config::Settings;

/// Write the 32-bit response as 8 upper-case hex digits.
pub fn print_response<W: Write>(
    out: &mut W,
    settings: &Settings,
    key: CandidateKey,
    challenge: &Challenge,
) -> Result<()> {
    let response = settings.computer.compute(key, challenge);
    tracing::debug!(key = %key, challenge = %challenge, response, "response computed");
    writeln!(out, "{response:08X}")?;
    Ok(())
}
