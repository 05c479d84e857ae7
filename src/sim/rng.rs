//! Injectable randomness for maze generation
//!
//! Generation only ever needs "a uniform index below `bound`", so that is the
//! whole interface. Every seeded `rand` generator qualifies; tests plug in
//! scripted sources to force specific mazes.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Source of uniform random indices
pub trait RandomSource {
    /// Uniform index in `[0, bound)`. `bound` is always at least 1.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn next_index(&mut self, bound: usize) -> usize {
        self.random_range(0..bound)
    }
}

/// Durstenfeld (Fisher-Yates) shuffle driven by an explicit source.
///
/// Walks the index down from `len - 1` to 1, swapping each slot with a
/// uniformly drawn slot in `[0, i]`.
pub fn shuffle<T>(items: &mut [T], rng: &mut impl RandomSource) {
    for i in (1..items.len()).rev() {
        let j = rng.next_index(i + 1);
        items.swap(i, j);
    }
}

/// RNG seed wrapper for serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Always draws index 0
    struct Zeros;

    impl RandomSource for Zeros {
        fn next_index(&mut self, _bound: usize) -> usize {
            0
        }
    }

    /// Always draws the largest index allowed
    struct Maxes;

    impl RandomSource for Maxes {
        fn next_index(&mut self, bound: usize) -> usize {
            bound - 1
        }
    }

    #[test]
    fn test_shuffle_all_zero_draws() {
        let mut items = ['u', 'r', 'd', 'l'];
        shuffle(&mut items, &mut Zeros);
        assert_eq!(items, ['r', 'd', 'l', 'u']);
    }

    #[test]
    fn test_shuffle_max_draws_is_identity() {
        let mut items = [1, 2, 3, 4, 5];
        shuffle(&mut items, &mut Maxes);
        assert_eq!(items, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_shuffle_short_slices() {
        let mut empty: [u8; 0] = [];
        shuffle(&mut empty, &mut Zeros);
        let mut one = [7];
        shuffle(&mut one, &mut Zeros);
        assert_eq!(one, [7]);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = RngState::new(42).to_rng();
        let mut items: Vec<u32> = (0..32).collect();
        shuffle(&mut items, &mut rng);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..32).collect::<Vec<_>>());
    }

    #[test]
    fn test_seeded_source_in_range() {
        let mut rng = RngState::new(7).to_rng();
        for bound in 1..50 {
            assert!(rng.next_index(bound) < bound);
        }
    }
}
