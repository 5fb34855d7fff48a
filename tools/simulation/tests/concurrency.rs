//! Concurrency test
//!
//! Verifies that independent simulation runs can execute in parallel
//! without interfering (each run owns its config, balance, and draws).

use simulation::engine::run_simulation;
use simulation::rng::ChaChaSource;
use simulation::validator::validate_request;
use std::thread;
use types::request::CasinoRequest;

#[test]
fn test_concurrent_runs_match_sequential() {
    let cfg = validate_request(&CasinoRequest::new(100.0, 5.0, 0.49, 5_000)).unwrap();
    let seeds: Vec<u64> = (0..8).collect();

    let sequential: Vec<_> = seeds
        .iter()
        .map(|&seed| run_simulation(&cfg, &mut ChaChaSource::seeded(seed)))
        .collect();

    let handles: Vec<_> = seeds
        .iter()
        .map(|&seed| {
            thread::spawn(move || run_simulation(&cfg, &mut ChaChaSource::seeded(seed)))
        })
        .collect();

    let parallel: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    assert_eq!(sequential, parallel);
}

#[test]
fn test_concurrent_forced_outcomes() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            thread::spawn(move || {
                let rounds = 10 * (i + 1);
                let cfg = validate_request(&CasinoRequest::new(1.0, 1.0, 1.0, rounds)).unwrap();
                let result = run_simulation(&cfg, &mut ChaChaSource::from_entropy());
                (rounds, result)
            })
        })
        .collect();

    for handle in handles {
        let (rounds, result) = handle.join().unwrap();
        assert_eq!(result.ending_amount, 1.0 + rounds as f64);
        assert_eq!(result.bankrupt_round, None);
    }
}
