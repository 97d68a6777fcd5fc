//! Random number source shared by the simulation components
//!
//! Uses a seeded RNG when one was provided so runs can be reproduced,
//! otherwise the thread-local generator.

use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use rand::SeedableRng;
use std::ops::RangeInclusive;

#[derive(Debug, Clone, Default)]
pub struct SimRng {
    rng: Option<StdRng>,
}

impl SimRng {
    pub fn new() -> Self {
        Self { rng: None }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Some(StdRng::seed_from_u64(seed)),
        }
    }

    /// Uniform value in [0, 1)
    pub fn unit(&mut self) -> f64 {
        match &mut self.rng {
            Some(rng) => rng.random::<f64>(),
            None => rand::rng().random::<f64>(),
        }
    }

    pub fn range_i32(&mut self, range: RangeInclusive<i32>) -> i32 {
        match &mut self.rng {
            Some(rng) => rng.random_range(range),
            None => rand::rng().random_range(range),
        }
    }

    /// Choose a random element from a slice
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        match &mut self.rng {
            Some(rng) => slice.choose(rng),
            None => slice.choose(&mut rand::rng()),
        }
    }

    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        match &mut self.rng {
            Some(rng) => slice.shuffle(rng),
            None => slice.shuffle(&mut rand::rng()),
        }
    }
}
