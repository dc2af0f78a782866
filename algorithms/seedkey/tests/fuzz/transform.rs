use bolero::check;
use seedkey::kernels::word;
use seedkey::SecretTable;

/// Independent model of the primitive in 64-bit arithmetic.
fn model(high: u8, low: u8, entries: [u8; 3]) -> i16 {
    let raw = (u16::from(high) << 8) | u16::from(low);
    let data = i64::from(raw) - if raw >= 0x8000 { 0x1_0000 } else { 0 };
    let (m, s, k) = (
        i64::from(entries[0]),
        i64::from(entries[1]),
        i64::from(entries[2]),
    );

    let quotient = data.signum() * (data.abs() / m);
    let remainder = data - quotient * m;
    let mut result = remainder * k - quotient * s;
    if result < 0 {
        result += m * k + s;
    }

    let bits = result.rem_euclid(0x1_0000);
    if bits >= 0x8000 {
        (bits - 0x1_0000) as i16
    } else {
        bits as i16
    }
}

#[test]
fn fuzz_transform_matches_model() {
    check!()
        .with_type::<(u8, u8, [u8; 3])>()
        .for_each(|input| {
            let (high, low, entries) = *input;

            // =============================================================================
            // TABLE VALIDATION
            // =============================================================================

            let Ok(table) = SecretTable::try_from(entries) else {
                assert_eq!(entries[0], 0, "only a zero modulus may be rejected");
                return;
            };

            // =============================================================================
            // ARITHMETIC
            // =============================================================================

            let output = seedkey::transform(high, low, &table);
            assert_eq!(
                output,
                model(high, low, entries),
                "transform diverged from the 64-bit model"
            );
            assert_eq!(output, seedkey::transform(high, low, &table));
        });
}

#[test]
fn fuzz_word_round_trip() {
    check!().with_type::<u16>().for_each(|raw| {
        let raw = *raw;
        assert_eq!(word::to_unsigned(word::to_signed(raw)), raw);

        let (high, low) = word::split(raw);
        assert_eq!(word::compose(high, low), raw);
    });
}
