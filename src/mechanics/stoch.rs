/// Stochastic mechanics: seeded RNG and uniform draws for random search.
/// Note: uses `bevy_prng::WyRand`; searches own their generator, so a
/// plain `&mut` is enough here.
use bevy_prng::WyRand;
use rand_core::{RngCore, SeedableRng};

/// WyRand seeded from a `u64`.
#[inline]
pub fn seeded(seed: u64) -> WyRand {
    WyRand::from_seed(seed.to_le_bytes())
}

/// Uniform integer in `[0, n)` by widening multiply. `n == 0` yields 0.
#[inline]
pub fn uniform_below(rng: &mut WyRand, n: u64) -> u64 {
    ((u128::from(rng.next_u64()) * u128::from(n)) >> 64) as u64
}

