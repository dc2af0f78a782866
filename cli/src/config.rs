//! Configuration
//!
//! Secret tables and observation pairs, from a JSON file, `--pair` flags,
//! or the built-in reference values (in that order of precedence for pairs).

use anyhow::{bail, Context, Result};
use seedkey::{
    CandidateKey, Challenge, ObservationPair, ResponseComputer, SearchEngine, SecretTable,
    REFERENCE_PAIRS,
};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

// =============================================================================
// FILE FORMAT
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    tables: Option<TablesConfig>,
    #[serde(default)]
    pairs: Option<Vec<PairConfig>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TablesConfig {
    primary: [u8; 3],
    secondary: [u8; 3],
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PairConfig {
    challenge: String,
    expected: String,
}

// =============================================================================
// RESOLVED SETTINGS
// =============================================================================

/// Tables and pairs after merging every source.
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    pub computer: ResponseComputer,
    pub pairs: [ObservationPair; 2],
}

impl Settings {
    /// Search engine over these settings.
    pub const fn engine(&self) -> SearchEngine {
        SearchEngine::new(self.computer, self.pairs)
    }
}

/// Merge the optional config file with command-line pairs.
pub fn load(config: Option<&Path>, cli_pairs: &[ObservationPair]) -> Result<Settings> {
    let file = config.map(read_file).transpose()?;

    let computer = match file.as_ref().and_then(|f| f.tables.as_ref()) {
        Some(tables) => ResponseComputer::new(
            SecretTable::try_from(tables.primary).context("Invalid primary table")?,
            SecretTable::try_from(tables.secondary).context("Invalid secondary table")?,
        ),
        None => ResponseComputer::default(),
    };

    let pairs = if !cli_pairs.is_empty() {
        exactly_two(cli_pairs.to_vec(), "--pair")?
    } else if let Some(file_pairs) = file.and_then(|f| f.pairs) {
        let parsed = file_pairs
            .iter()
            .map(|p| Ok(ObservationPair::new(parse_challenge(&p.challenge)?, parse_response(&p.expected)?)))
            .collect::<Result<Vec<_>>>()?;
        exactly_two(parsed, "config pairs")?
    } else {
        REFERENCE_PAIRS
    };

    tracing::debug!(
        primary = ?computer.primary().to_bytes(),
        secondary = ?computer.secondary().to_bytes(),
        first = %pairs[0].challenge,
        second = %pairs[1].challenge,
        "configuration resolved"
    );

    Ok(Settings { computer, pairs })
}

fn read_file(path: &Path) -> Result<ConfigFile> {
    let file =
        File::open(path).with_context(|| format!("Failed to open: {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse config: {}", path.display()))
}

fn exactly_two(pairs: Vec<ObservationPair>, source: &str) -> Result<[ObservationPair; 2]> {
    let count = pairs.len();
    match <[ObservationPair; 2]>::try_from(pairs) {
        Ok(pairs) => Ok(pairs),
        Err(_) => bail!("{source}: exactly 2 observation pairs required, got {count}"),
    }
}

// =============================================================================
// PARSERS
// =============================================================================

fn strip_hex_prefix(s: &str) -> &str {
    let s = s.trim();
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

fn is_hex(digits: &str) -> bool {
    digits.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Parse 8 hex digits into a challenge.
pub fn parse_challenge(s: &str) -> Result<Challenge> {
    let bytes = hex::decode(strip_hex_prefix(s))
        .with_context(|| format!("Invalid challenge hex: {s}"))?;
    Challenge::try_from(bytes.as_slice()).with_context(|| format!("Invalid challenge: {s}"))
}

/// Parse a 32-bit response written as 8 hex digits.
pub fn parse_response(s: &str) -> Result<u32> {
    let digits = strip_hex_prefix(s);
    if digits.len() != 8 || !is_hex(digits) {
        bail!("Invalid response: {s} (expected 8 hex digits)");
    }
    u32::from_str_radix(digits, 16).with_context(|| format!("Invalid response: {s}"))
}

/// Parse a 16-bit key written in hex.
pub fn parse_key(s: &str) -> Result<CandidateKey> {
    let digits = strip_hex_prefix(s);
    if digits.is_empty() || digits.len() > 4 || !is_hex(digits) {
        bail!("Invalid key: {s} (expected up to 4 hex digits)");
    }
    u16::from_str_radix(digits, 16)
        .map(CandidateKey::new)
        .with_context(|| format!("Invalid key: {s}"))
}

/// Parse `CHALLENGE:EXPECTED`.
pub fn parse_pair(s: &str) -> Result<ObservationPair> {
    let Some((challenge, expected)) = s.split_once(':') else {
        bail!("Invalid pair: {s} (expected CHALLENGE:RESPONSE)");
    };
    Ok(ObservationPair::new(
        parse_challenge(challenge)?,
        parse_response(expected)?,
    ))
}
