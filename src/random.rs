use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const DEFAULT_SEED: u64 = 3819201;

/// A source of uniform randomness threaded through expansion and rollouts.
pub trait RandomGenerator {
    /// Returns a uniformly distributed value in `from..to`.
    fn next_range(&mut self, from: usize, to: usize) -> usize;

    /// Picks one element uniformly at random, or `None` when `items` is empty.
    fn pick_random<'a, K>(&mut self, items: &'a [K]) -> Option<&'a K> {
        if items.is_empty() {
            return None;
        }
        items.get(self.next_range(0, items.len()))
    }
}

impl<K: RandomGenerator> RandomGenerator for &mut K {
    fn next_range(&mut self, from: usize, to: usize) -> usize {
        (**self).next_range(from, to)
    }
}

/// Draws from the thread-local generator. Not reproducible.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardRandomGenerator;

impl RandomGenerator for StandardRandomGenerator {
    fn next_range(&mut self, from: usize, to: usize) -> usize {
        rand::rng().random_range(from..to)
    }
}

/// A deterministic generator: the same seed always yields the same sequence.
#[derive(Debug, Clone)]
pub struct SeededRandomGenerator {
    rng: StdRng,
}

impl Default for SeededRandomGenerator {
    fn default() -> Self {
        SeededRandomGenerator::new(DEFAULT_SEED)
    }
}

impl RandomGenerator for SeededRandomGenerator {
    fn next_range(&mut self, from: usize, to: usize) -> usize {
        self.rng.random_range(from..to)
    }
}

impl SeededRandomGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeds from the operating system, for when no fixed seed is configured.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}
