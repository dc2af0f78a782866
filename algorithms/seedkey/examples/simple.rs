//! Seedkey Basic Example
//!
//! Minimal usage: `let report = seedkey::recover_keys();`

#![allow(clippy::pedantic, clippy::nursery)]

fn main() {
    // One response with the built-in tables:
    let challenge = [0xD5, 0xDA, 0x2A, 0xE9];
    let response = seedkey::compute_response(0x0107, challenge);
    println!("Challenge: {}", hex::encode_upper(challenge));
    println!("Response:  {response:08X}");

    // Every key consistent with both reference observations:
    let report = seedkey::recover_keys();
    for key in report.matches() {
        println!("[MATCH FOUND] Key: {key}");
    }
    println!("Found {} valid key(s).", report.match_count());
}
