use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded random source for one game: drives the shuffle and the random policy
#[derive(Clone)]
pub struct GameRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// If seed is None, a random one is drawn from the thread rng
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
        GameRng {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed for game `index` of a batch started from `base_seed`
    pub fn game_seed(base_seed: u64, index: usize) -> u64 {
        base_seed.wrapping_add(index as u64)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform integer in [0, max)
    pub fn random_range(&mut self, max: usize) -> usize {
        self.rng.gen_range(0..max)
    }

    /// Fisher-Yates
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.random_range(i + 1);
            items.swap(i, j);
        }
    }
}
