use rand::{seq::SliceRandom, Rng as _};
use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};

use crate::config::MIN_ORDER;

/// Seedable source of randomness for building test workloads.
pub struct Rng {
    rng: ChaCha8Rng,
}
impl Rng {
    /// Creates a new generator using a random seed.
    pub fn new() -> Self {
        let seed: u64 = rand::random();
        Rng::from_seed(seed)
    }

    /// Creates a new generator using the provided seed
    pub fn from_seed(seed: u64) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(seed);
        Rng { rng }
    }

    /// A requested tree order in `[low, high]`, never below the minimum.
    pub fn order_between(&mut self, low: usize, high: usize) -> usize {
        self.rng.gen_range(low.max(MIN_ORDER)..=high.max(MIN_ORDER))
    }

    pub fn count_between(&mut self, low: i32, high: i32) -> i32 {
        self.rng.gen_range(low..=high)
    }
}
impl Default for Rng {
    fn default() -> Self {
        Self::new()
    }
}

/// Key/value pairs `(i, i.to_string())` for `i` in `0..count`. A negative
/// count yields nothing.
pub struct Workload;
impl Workload {
    pub fn sequential(count: i32) -> Vec<(i32, String)> {
        (0..count).map(|key| (key, key.to_string())).collect()
    }

    pub fn shuffled(count: i32, rng: &mut Rng) -> Vec<(i32, String)> {
        let mut pairs = Self::sequential(count);
        pairs.shuffle(&mut rng.rng);
        pairs
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::{Rng, Workload};

    #[test]
    fn same_seed_same_workload() {
        let a = Workload::shuffled(50, &mut Rng::from_seed(11));
        let b = Workload::shuffled(50, &mut Rng::from_seed(11));
        assert_eq!(a, b);
    }

    #[test]
    fn shuffled_is_a_permutation() {
        let pairs = Workload::shuffled(300, &mut Rng::new());
        let keys: Vec<i32> = pairs.iter().map(|(k, _)| *k).sorted().collect();
        assert_eq!(keys, (0..300).collect::<Vec<_>>());
        assert!(pairs.iter().all(|(k, v)| k.to_string() == *v));
    }

    #[test]
    fn sequential_keys_are_distinct() {
        let pairs = Workload::sequential(1000);
        assert_eq!(pairs.len(), 1000);
        assert!(pairs.iter().map(|(k, _)| k).all_unique());
        assert_eq!(pairs.last(), Some(&(999, "999".to_string())));
        assert!(Workload::sequential(-5).is_empty());
    }

    #[test]
    fn orders_respect_bounds() {
        let mut rng = Rng::from_seed(1);
        for _ in 0..100 {
            let order = rng.order_between(0, 10);
            assert!((3..=10).contains(&order));
        }
    }
}
