use crate::curve::GroupSize;
use crate::probability::DAYS;
use rand::Rng;
use rand_xoshiro::rand_core::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

/// Estimate the shared-birthday probability for one group size by random
/// sampling: the fraction of `iter` groups of `n` uniform birthdays that
/// contain a collision. Deterministic for a fixed seed.
pub fn estimate(n: GroupSize, iter: u64, seed: u64) -> f64 {
    assert!(iter > 0);
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let mut seen = vec![false; DAYS as usize];
    let mut hits = 0;
    for _ in 0..iter {
        for e in seen.iter_mut() {
            *e = false;
        }
        if has_collision(n, &mut seen, &mut rng) {
            hits += 1;
        }
    }
    hits as f64 / iter as f64
}

fn has_collision<R: Rng>(n: GroupSize, seen: &mut [bool], rng: &mut R) -> bool {
    for _ in 0..n {
        let day = rng.gen_range(0..seen.len());
        if seen[day] {
            return true;
        }
        seen[day] = true;
    }
    false
}
