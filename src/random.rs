//! Random number generator construction.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a generator seeded from `seed`.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator from `seed`, or from fresh entropy when `None`.
pub fn seeded_or_random(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => create_rng(s),
        None => create_rng(rand::random()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = create_rng(7);
        let mut b = create_rng(7);
        let xs: Vec<u64> = (0..8).map(|_| a.random()).collect();
        let ys: Vec<u64> = (0..8).map(|_| b.random()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_seeded_or_random_respects_seed() {
        let mut a = seeded_or_random(Some(11));
        let mut b = create_rng(11);
        assert_eq!(a.random::<u64>(), b.random::<u64>());
    }
}
