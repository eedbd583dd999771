use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded RNG owned by a single game session; the seed is kept for replaying.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }

    pub fn random_bool(&mut self) -> bool {
        self.rng.random()
    }

    /// Two distinct items: the first uniformly from `items`, the second
    /// uniformly from what is left.
    pub fn pick_distinct_pair<T: Copy>(&mut self, items: &[T]) -> Option<(T, T)> {
        if items.len() < 2 {
            return None;
        }
        let first = self.random_range(0..items.len());
        let mut second = self.random_range(0..items.len() - 1);
        if second >= first {
            second += 1;
        }
        Some((items[first], items[second]))
    }
}
