#![no_main]

use libfuzzer_sys::fuzz_target;
use seedkey::{CandidateKey, Challenge, ObservationPair, ResponseComputer, SecretTable};

fuzz_target!(|data: &[u8]| {
    if data.len() < 12 {
        return;
    }

    let (Ok(primary), Ok(secondary)) = (
        SecretTable::try_from([data[0], data[1], data[2]]),
        SecretTable::try_from([data[3], data[4], data[5]]),
    ) else {
        return;
    };

    let computer = ResponseComputer::new(primary, secondary);
    let key = CandidateKey::from_bytes(data[6], data[7]);
    let challenge = Challenge::new([data[8], data[9], data[10], data[11]]);

    // Whatever the tables, a key must verify against its own response.
    let response = computer.compute(key, &challenge);
    assert!(
        computer.verify(key, &ObservationPair::new(challenge, response)),
        "key rejected against its own response"
    );
});
