//! Random sampling without replacement

use std::collections::HashSet;

use rand::Rng;

use crate::error::{AppError, AppResult};

/// Draw `count` distinct items from `pool`, uniformly over combinations.
///
/// Indices are drawn with rejection on duplicates; for the pool sizes this
/// runs against (count far below pool size) that terminates in expected
/// O(count) draws.
pub fn sample_without_replacement<T: Clone, R: Rng + ?Sized>(
    pool: &[T],
    count: usize,
    rng: &mut R,
) -> AppResult<Vec<T>> {
    if pool.len() < count {
        return Err(AppError::InsufficientPool {
            requested: count,
            available: pool.len(),
        });
    }

    let mut chosen = Vec::with_capacity(count);
    let mut used = HashSet::with_capacity(count);
    while chosen.len() < count {
        let idx = rng.random_range(0..pool.len());
        if used.insert(idx) {
            chosen.push(pool[idx].clone());
        }
    }

    Ok(chosen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_returns_exactly_k_distinct_items() {
        let pool: Vec<u32> = (0..100).collect();
        let mut rng = StdRng::seed_from_u64(7);

        for k in [0, 1, 5, 50, 100] {
            let sample = sample_without_replacement(&pool, k, &mut rng).unwrap();
            assert_eq!(sample.len(), k);
            let distinct: HashSet<u32> = sample.iter().copied().collect();
            assert_eq!(distinct.len(), k);
        }
    }

    #[test]
    fn test_full_pool_draw_is_a_permutation() {
        let pool: Vec<u32> = (0..10).collect();
        let mut rng = StdRng::seed_from_u64(42);

        let mut sample = sample_without_replacement(&pool, 10, &mut rng).unwrap();
        sample.sort_unstable();
        assert_eq!(sample, pool);
    }

    #[test]
    fn test_fails_when_pool_too_small() {
        let pool: Vec<u32> = (0..3).collect();
        let mut rng = StdRng::seed_from_u64(1);

        let err = sample_without_replacement(&pool, 4, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            AppError::InsufficientPool {
                requested: 4,
                available: 3
            }
        ));
    }
}
