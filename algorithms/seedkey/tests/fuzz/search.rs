use bolero::check;
use seedkey::{CandidateKey, Challenge, ObservationPair, SearchEngine, Verdict};

#[test]
fn fuzz_verdict_logic() {
    check!()
        .with_type::<(u16, [u8; 4], u32, [u8; 4], u32)>()
        .for_each(|input| {
            let (raw_key, c1, e1, c2, e2) = *input;
            let key = CandidateKey::new(raw_key);
            let first = ObservationPair::new(Challenge::new(c1), e1);
            let second = ObservationPair::new(Challenge::new(c2), e2);
            let engine = SearchEngine::new(Default::default(), [first, second]);

            let passes_first = engine.computer().verify(key, &first);
            let passes_second = engine.computer().verify(key, &second);

            let expected = match (passes_first, passes_second) {
                (false, _) => Verdict::RejectedFirst,
                (true, false) => Verdict::RejectedSecond,
                (true, true) => Verdict::Accepted,
            };
            assert_eq!(engine.evaluate(key), expected);
        });
}

#[test]
fn fuzz_planted_key_is_accepted() {
    check!()
        .with_type::<(u16, [u8; 4], [u8; 4])>()
        .for_each(|input| {
            let (raw_key, c1, c2) = *input;
            let key = CandidateKey::new(raw_key);
            let engine = SearchEngine::default();
            let computer = engine.computer();

            let pairs = [c1, c2].map(|bytes| {
                let challenge = Challenge::new(bytes);
                ObservationPair::new(challenge, computer.compute(key, &challenge))
            });
            let planted = SearchEngine::new(*computer, pairs);

            assert_eq!(planted.evaluate(key), Verdict::Accepted);
        });
}
