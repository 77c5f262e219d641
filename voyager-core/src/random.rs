use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Source of uniform randomness for offer synthesis.
///
/// The generators only ever need draws from [0, 1); everything else (price
/// jitter, departure hours, amenity counts) is derived from that. Keeping the
/// surface this small lets tests swap in a seeded or scripted source and
/// assert exact offers instead of ranges.
pub trait RandomSource: Send {
    /// Next uniform draw in [0, 1).
    fn unit(&mut self) -> f64;

    /// Uniform f64 in [low, high).
    fn range_f64(&mut self, low: f64, high: f64) -> f64 {
        low + self.unit() * (high - low)
    }

    /// Uniform integer in [low, high).
    fn range_u32(&mut self, low: u32, high: u32) -> u32 {
        low + (self.unit() * (high - low) as f64) as u32
    }
}

/// Production source backed by the thread-local generator.
#[derive(Debug, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn unit(&mut self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Reproducible source for tests and demos.
#[derive(Debug)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Scripted source that replays a fixed sequence of draws, cycling when
/// exhausted. Lets tests pin every generated field.
#[derive(Debug)]
pub struct SequenceRandom {
    values: Vec<f64>,
    queue: VecDeque<f64>,
}

impl SequenceRandom {
    pub fn new(values: &[f64]) -> Self {
        Self {
            values: values.to_vec(),
            queue: values.iter().copied().collect(),
        }
    }
}

impl RandomSource for SequenceRandom {
    fn unit(&mut self) -> f64 {
        if self.queue.is_empty() {
            self.queue = self.values.iter().copied().collect();
        }
        self.queue.pop_front().unwrap_or(0.0)
    }
}
