//! Random draw sources
//!
//! The engine asks for one uniform sample in [0, 1) per round. Production
//! runs draw from an entropy-seeded ChaCha stream; tests either pin a seed
//! or replay an exact sequence of draws.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Supplier of uniform samples in [0.0, 1.0).
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

impl<S: RandomSource + ?Sized> RandomSource for Box<S> {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// ChaCha8-backed source.
pub struct ChaChaSource {
    rng: ChaCha8Rng,
}

impl ChaChaSource {
    /// Seed from OS entropy. Each call yields an independent stream.
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Deterministic stream for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for ChaChaSource {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Replays a fixed list of draws, wrapping around at the end.
///
/// An empty list behaves like a constant `0.0`. Values are clamped into
/// [0, 1) so a hand-written sequence cannot step outside the contract.
#[derive(Debug, Clone)]
pub struct FixedDraws {
    draws: Vec<f64>,
    cursor: usize,
}

impl FixedDraws {
    pub fn new(draws: impl Into<Vec<f64>>) -> Self {
        Self {
            draws: draws.into(),
            cursor: 0,
        }
    }

    /// Every draw returns `value`.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of draws handed out so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for FixedDraws {
    fn next_unit(&mut self) -> f64 {
        if self.draws.is_empty() {
            self.cursor += 1;
            return 0.0;
        }
        let value = self.draws[self.cursor % self.draws.len()];
        self.cursor += 1;
        value.clamp(0.0, MAX_UNIT)
    }
}

/// Largest f64 strictly below 1.0.
const MAX_UNIT: f64 = 1.0 - f64::EPSILON / 2.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_is_repeatable() {
        let mut a = ChaChaSource::seeded(42);
        let mut b = ChaChaSource::seeded(42);
        for _ in 0..100 {
            assert_eq!(a.next_unit(), b.next_unit());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = ChaChaSource::seeded(1);
        let mut b = ChaChaSource::seeded(2);
        let xs: Vec<f64> = (0..10).map(|_| a.next_unit()).collect();
        let ys: Vec<f64> = (0..10).map(|_| b.next_unit()).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn test_samples_in_unit_interval() {
        let mut source = ChaChaSource::from_entropy();
        for _ in 0..10_000 {
            let u = source.next_unit();
            assert!((0.0..1.0).contains(&u), "sample {} out of range", u);
        }
    }

    #[test]
    fn test_fixed_draws_cycle() {
        let mut source = FixedDraws::new(vec![0.1, 0.9]);
        assert_eq!(source.next_unit(), 0.1);
        assert_eq!(source.next_unit(), 0.9);
        assert_eq!(source.next_unit(), 0.1);
        assert_eq!(source.consumed(), 3);
    }

    #[test]
    fn test_fixed_draws_clamped() {
        let mut source = FixedDraws::new(vec![1.0, -0.5]);
        let high = source.next_unit();
        assert!(high < 1.0);
        assert_eq!(source.next_unit(), 0.0);
    }

    #[test]
    fn test_empty_fixed_draws() {
        let mut source = FixedDraws::new(Vec::new());
        assert_eq!(source.next_unit(), 0.0);
        assert_eq!(source.consumed(), 1);
    }

    fn first_draw<R: RandomSource>(mut source: R) -> f64 {
        source.next_unit()
    }

    #[test]
    fn test_forwarding_impls() {
        let mut inner = FixedDraws::constant(0.25);
        assert_eq!(first_draw(&mut inner), 0.25);
        assert_eq!(inner.consumed(), 1);
        let boxed: Box<dyn RandomSource> = Box::new(inner);
        assert_eq!(first_draw(boxed), 0.25);
    }
}
