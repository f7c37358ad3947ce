use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform draws in `[0, 1)` used to resolve matches
pub trait RandomSource: Send {
    fn next_uniform(&mut self) -> f64;
}

/// `StdRng`-backed source, entropy-seeded unless a seed is given
#[derive(Debug, Clone)]
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for StdRandom {
    fn next_uniform(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Always returns the same value. Useful to pin match outcomes.
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom(pub f64);

impl RandomSource for FixedRandom {
    fn next_uniform(&mut self) -> f64 {
        self.0
    }
}

/// Replays a fixed sequence, repeating the last value once exhausted
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<f64>,
    position: usize,
}

impl SequenceRandom {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, position: 0 }
    }
}

impl RandomSource for SequenceRandom {
    fn next_uniform(&mut self) -> f64 {
        let value = self
            .values
            .get(self.position)
            .or_else(|| self.values.last())
            .copied()
            .unwrap_or(1.0);
        self.position += 1;
        value
    }
}
