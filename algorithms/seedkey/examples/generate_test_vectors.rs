//! Generator for Seedkey test vectors
//!
//! Generates the canonical JSON test vectors used by `tests/test_vectors.json`.
//! Includes built-in table cases, negative operands, custom tables that leave
//! the corrected result negative or wrap it, responses and the reference scan.
#![allow(clippy::unwrap_used)]
use seedkey::{CandidateKey, ResponseComputer, SecretTable, REFERENCE_PAIRS};
use serde_json::json;

fn main() {
    let mut transforms = Vec::new();

    // =========================================================================
    // 1. TRANSFORM VECTORS
    // =========================================================================

    let primary = SecretTable::PRIMARY.to_bytes();
    let secondary = SecretTable::SECONDARY.to_bytes();
    let cases: [(&str, [u8; 3], u8, u8); 16] = [
        ("zero_primary", primary, 0x00, 0x00),
        ("one_primary", primary, 0x00, 0x01),
        ("one_secondary", secondary, 0x00, 0x01),
        ("mid_primary", primary, 0x12, 0x34),
        // Positive operand, negative raw result
        ("max_positive_corrected", primary, 0x7F, 0xFF),
        ("modulus_multiple_corrected", primary, 0x00, 0xB2),
        // Operand >= 0x8000 (negative signed word)
        ("min_negative_primary", primary, 0x80, 0x00),
        ("min_negative_secondary_corrected", secondary, 0x80, 0x00),
        ("minus_one_primary", primary, 0xFF, 0xFF),
        ("minus_one_secondary", secondary, 0xFF, 0xFF),
        ("negative_challenge_word", primary, 0xD5, 0xE9),
        ("negative_challenge_word_secondary", secondary, 0xD5, 0xE9),
        ("high_byte_only_secondary", secondary, 0xB2, 0x00),
        // Custom tables: correction insufficient / 16-bit wrap
        ("custom_correction_stays_negative", [7, 3, 5], 0x12, 0x34),
        ("custom_wraps_positive_overflow", [255, 0, 255], 0x00, 0xFE),
        ("custom_wraps_negative_overflow", [1, 255, 1], 0x01, 0x00),
    ];

    for (name, table, high, low) in cases {
        let output = seedkey::transform(high, low, &SecretTable::try_from(table).unwrap());
        transforms.push(json!({
            "name": name,
            "table": table,
            "high": high,
            "low": low,
            "output": output
        }));
    }

    // =========================================================================
    // 2. RESPONSE VECTORS
    // =========================================================================

    let computer = ResponseComputer::default();
    let mut responses = Vec::new();
    for key in [0x0000, 0xFFFF, 0x1234, 0x0107, 0xED89, 0x8000, 0x7FFF] {
        for pair in REFERENCE_PAIRS {
            let response = computer.compute(CandidateKey::new(key), &pair.challenge);
            responses.push(json!({
                "key": format!("{key:04X}"),
                "challenge": pair.challenge.to_string(),
                "response": format!("{response:08X}")
            }));
        }
    }

    // =========================================================================
    // 3. REFERENCE SCAN
    // =========================================================================

    let report = seedkey::recover_keys();
    let pairs: Vec<_> = REFERENCE_PAIRS
        .iter()
        .map(|pair| {
            json!({
                "challenge": pair.challenge.to_string(),
                "expected": format!("{:08X}", pair.expected)
            })
        })
        .collect();
    let matches: Vec<String> = report.matches().iter().map(CandidateKey::to_string).collect();

    let output = json!({
        "transform": transforms,
        "responses": responses,
        "scan": {
            "pairs": pairs,
            "first_pair_hits": report.first_pair_hits(),
            "matches": matches
        }
    });
    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}
