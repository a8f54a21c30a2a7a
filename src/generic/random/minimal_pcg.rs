//! A small pseudorandom number generator.
//!
//! A translation of the minimal C PCG32 implementation from <https://www.pcg-random.org/>, implementing [RngCore] and [SeedableRng].
//!
//! A [context](crate::context) is generic over its source of randomness, and [MinimalPCG32] is the source used by the default [Context](crate::context::Context).
//! Randomness is only consulted when [branching](crate::procedures::decision) with a non-zero random decision bias.

use rand::SeedableRng;
use rand_core::{impls, RngCore};

/// State and increment.
#[derive(Default)]
pub struct MinimalPCG32 {
    state: u64,
    inc: u64,
}

impl RngCore for MinimalPCG32 {
    fn next_u32(&mut self) -> u32 {
        let old_state = self.state;

        self.state = old_state
            .wrapping_mul(6364136223846793005_u64)
            .wrapping_add(self.inc | 1);

        let xorshifted = (((old_state >> 18) ^ old_state) >> 27) as u32;
        let rot = (old_state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }
}

impl SeedableRng for MinimalPCG32 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        const INCREMENT: u64 = 1442695040888963407;
        Self {
            state: u64::from_le_bytes(seed).wrapping_add(INCREMENT),
            inc: INCREMENT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_repeat() {
        let mut a = MinimalPCG32::from_seed(73u64.to_le_bytes());
        let mut b = MinimalPCG32::from_seed(73u64.to_le_bytes());
        for _ in 0..16 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn seeds_differ() {
        let mut a = MinimalPCG32::from_seed(2u64.to_le_bytes());
        let mut b = MinimalPCG32::from_seed(3u64.to_le_bytes());
        let a_draws = (0..8).map(|_| a.next_u32()).collect::<Vec<_>>();
        let b_draws = (0..8).map(|_| b.next_u32()).collect::<Vec<_>>();
        assert_ne!(a_draws, b_draws);
    }

    #[test]
    fn default_is_usable() {
        let mut rng = MinimalPCG32::default();
        let mut bytes = [0u8; 11];
        rng.fill_bytes(&mut bytes);
        let _ = rng.next_u64();
    }
}
