use bolero::check;
use seedkey::kernels::word::{split, to_unsigned};
use seedkey::{CandidateKey, Challenge, ResponseComputer, SecretTable};

#[test]
fn fuzz_response_halves() {
    check!()
        .with_type::<(u16, [u8; 4])>()
        .for_each(|input| {
            let (raw_key, bytes) = *input;
            let key = CandidateKey::new(raw_key);
            let challenge = Challenge::new(bytes);
            let computer = ResponseComputer::default();

            let response = computer.compute(key, &challenge);

            // =============================================================================
            // HIGH HALF
            // =============================================================================

            let high = seedkey::transform(key.high(), key.low(), &SecretTable::PRIMARY)
                | seedkey::transform(bytes[0], bytes[3], &SecretTable::SECONDARY);
            assert_eq!(response >> 16, u32::from(to_unsigned(high)));

            // =============================================================================
            // LOW HALF (FEEDBACK)
            // =============================================================================

            let (fb_high, fb_low) = split(to_unsigned(high));
            let low = seedkey::transform(bytes[1], bytes[2], &SecretTable::PRIMARY)
                | seedkey::transform(fb_high, fb_low, &SecretTable::SECONDARY);
            assert_eq!(response & 0xFFFF, u32::from(to_unsigned(low)));

            // =============================================================================
            // DETERMINISM
            // =============================================================================

            assert_eq!(response, computer.compute(key, &challenge));
            assert_eq!(response, seedkey::compute_response(raw_key, bytes));
        });
}
