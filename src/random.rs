use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

/// Seedable source of every random draw made during generation.
///
/// A single source is threaded through one generation call so that a fixed seed
/// always reproduces the same maze.
pub struct RandomSource {
    rng: StdRng,
    seed: u64,
}

impl RandomSource {
    /// Creates a source seeded with `seed`.
    pub fn from_seed(seed: u64) -> Self {
        RandomSource {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a source seeded with the current wall-clock time in microseconds.
    pub fn from_time() -> Self {
        let micros = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_micros() as u64)
            .unwrap_or_default();
        RandomSource::from_seed(micros)
    }

    /// Get a random source, optionally seeded for reproducibility.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => RandomSource::from_seed(s),
            None => RandomSource::from_time(),
        }
    }

    /// Resets the engine so the following draws are those of a fresh `from_seed(seed)`.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
        self.seed = seed;
    }

    /// The seed this source was created or last reseeded with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns an integer uniformly distributed in `[0, max)`.
    ///
    /// # Panics
    /// If `max` is zero.
    pub fn uniform(&mut self, max: usize) -> usize {
        self.rng.random_range(0..max)
    }

    /// Fair coin flip.
    pub fn coin(&mut self) -> bool {
        self.uniform(2) == 1
    }

    /// Picks one of the set bits of `mask` uniformly and returns its index.
    ///
    /// Only the set bits are candidates, so a mask with a single bit always yields that
    /// bit. An empty mask returns 0, which callers must not interpret as a direction.
    pub fn select_set_bit(&mut self, mask: u8) -> u8 {
        let candidates = mask.count_ones() as usize;
        if candidates == 0 {
            return 0;
        }
        let mut remaining = self.uniform(candidates);
        for bit in 0..u8::BITS as u8 {
            if mask & (1 << bit) == 0 {
                continue;
            }
            if remaining == 0 {
                return bit;
            }
            remaining -= 1;
        }
        unreachable!("fewer set bits than counted")
    }

    /// Shuffles `items` in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_draws() {
        let mut a = RandomSource::from_seed(42);
        let mut b = RandomSource::from_seed(42);
        let draws_a = (0..32).map(|_| a.uniform(1000)).collect::<Vec<_>>();
        let draws_b = (0..32).map(|_| b.uniform(1000)).collect::<Vec<_>>();
        assert_eq!(draws_a, draws_b);
    }

    #[test]
    fn test_reseed_restarts_sequence() {
        let mut rng = RandomSource::from_seed(7);
        let first = (0..8).map(|_| rng.uniform(100)).collect::<Vec<_>>();
        rng.reseed(7);
        let second = (0..8).map(|_| rng.uniform(100)).collect::<Vec<_>>();
        assert_eq!(first, second);
        assert_eq!(rng.seed(), 7);
    }

    #[test]
    fn test_uniform_in_range() {
        let mut rng = RandomSource::from_seed(1);
        assert!((0..1000).all(|_| rng.uniform(3) < 3));
        assert!((0..100).all(|_| rng.uniform(1) == 0));
    }

    #[test]
    fn test_select_set_bit_only_returns_set_bits() {
        let mut rng = RandomSource::from_seed(3);
        for mask in 1u8..16 {
            for _ in 0..64 {
                let bit = rng.select_set_bit(mask);
                assert!(mask & (1 << bit) != 0, "bit {bit} not set in {mask:#06b}");
            }
        }
    }

    #[test]
    fn test_select_set_bit_empty_mask() {
        let mut rng = RandomSource::from_seed(3);
        assert_eq!(rng.select_set_bit(0), 0);
    }

    #[test]
    fn test_select_set_bit_is_not_biased_to_low_bits() {
        let mut rng = RandomSource::from_seed(99);
        let mut counts = [0usize; 4];
        // bits 1 and 3 only
        for _ in 0..20_000 {
            counts[rng.select_set_bit(0b1010) as usize] += 1;
        }
        assert_eq!(counts[0], 0);
        assert_eq!(counts[2], 0);
        let ratio = counts[1] as f64 / counts[3] as f64;
        assert!((0.9..1.1).contains(&ratio), "counts: {counts:?}");
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut rng = RandomSource::from_seed(5);
        let mut items = (0..50).collect::<Vec<_>>();
        rng.shuffle(&mut items);
        items.sort_unstable();
        assert_eq!(items, (0..50).collect::<Vec<_>>());
    }
}
