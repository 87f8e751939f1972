use proptest::prelude::*;
use salted_entropy::seed::SeedInputs;
use salted_entropy::{
    digest, secure_random_bytes, system_random_bytes, EntropyError, Generator, MockSource,
    SaltState,
};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn output_length_matches_request(n in 0usize..4096) {
        prop_assert_eq!(secure_random_bytes(n).unwrap().len(), n);
        prop_assert_eq!(system_random_bytes(n).unwrap().len(), n);
    }

    #[test]
    fn digest_changes_on_any_bit_flip(
        data in proptest::collection::vec(any::<u8>(), 1..256),
        bit in any::<usize>(),
    ) {
        let bit = bit % (data.len() * 8);
        let mut flipped = data.clone();
        flipped[bit / 8] ^= 1 << (bit % 8);

        prop_assert_eq!(digest(&data), digest(&data));
        prop_assert_ne!(digest(&data), digest(&flipped));
    }
}

#[test]
fn zero_length_requests_succeed() {
    assert_eq!(secure_random_bytes(0), Ok(Vec::new()));
    assert_eq!(system_random_bytes(0), Ok(Vec::new()));
}

#[test]
fn no_collisions_across_ten_thousand_draws() {
    let mut seen = HashSet::with_capacity(10_000);
    for _ in 0..10_000 {
        let bytes = secure_random_bytes(32).unwrap();
        assert!(seen.insert(bytes), "secure output repeated");
    }
}

#[test]
fn salt_differs_across_processes_with_same_os_stream() {
    // Two simulated processes: identical OS output, different env and pid
    let first = SeedInputs {
        time_nanos: 1_700_000_000_000_000_000,
        environment: b"HOME=/home/aUSER=a".to_vec(),
        pid: 100,
    };
    let second = SeedInputs {
        environment: b"HOME=/home/bUSER=b".to_vec(),
        pid: 200,
        ..first.clone()
    };

    let a = Generator::with_parts(
        MockSource::fixed(vec![0x42u8; 8]),
        Arc::new(SaltState::from_inputs(&first)),
    );
    let b = Generator::with_parts(
        MockSource::fixed(vec![0x42u8; 8]),
        Arc::new(SaltState::from_inputs(&second)),
    );

    assert_eq!(a.system_bytes(32).unwrap(), b.system_bytes(32).unwrap());
    assert_ne!(a.secure_bytes(32).unwrap(), b.secure_bytes(32).unwrap());
}

#[test]
fn concurrent_draws_never_overlap() {
    // Shared salt state with an all-zero source: output is the salt itself.
    let shared = Arc::new(SaltState::from_seed(0xfeed));
    let generator = Arc::new(Generator::with_parts(
        MockSource::fixed(vec![0u8]),
        Arc::clone(&shared),
    ));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let generator = Arc::clone(&generator);
            thread::spawn(move || {
                (0..50)
                    .map(|_| generator.secure_bytes(16).unwrap())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut outputs = HashSet::new();
    for handle in handles {
        for out in handle.join().unwrap() {
            assert!(outputs.insert(out), "two callers received the same salt");
        }
    }

    assert_eq!(shared.draw_count(), 8 * 50 * 16);
}

#[test]
fn failing_source_never_returns_bytes() {
    let generator = Generator::with_parts(
        MockSource::failing("not seeded yet"),
        Arc::new(SaltState::from_seed(1)),
    );

    let err = generator.secure_bytes(32).unwrap_err();
    assert!(matches!(err, EntropyError::Source { .. }));
    assert!(err.is_unrecoverable());
}
