//! Deterministic sampling without replacement.

/// Pick up to `n` distinct elements of `pool`.
///
/// Each step draws one float from `draw`, takes `floor(x * remaining)` as the
/// index into what is left of the pool, and moves that element to the output.
/// Stops after `n` picks or when the pool runs dry, so a short pool comes back
/// whole (shuffled) rather than padded.
///
/// `draw` must return values in `[0, 1)`; it is called exactly once per pick.
pub fn pick_n<T: Clone>(pool: &[T], n: usize, mut draw: impl FnMut() -> f64) -> Vec<T> {
    let mut remaining = pool.to_vec();
    let mut out = Vec::with_capacity(n.min(pool.len()));
    while out.len() < n && !remaining.is_empty() {
        let i = (draw() * remaining.len() as f64).floor() as usize;
        out.push(remaining.remove(i));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::Mulberry32;
    use itertools::Itertools;

    #[test]
    fn test_reference_picks_for_new_year_seed() {
        let mut rng = Mulberry32::new(20240101);
        let first = pick_n(&(0..8).collect::<Vec<_>>(), 6, || rng.next_f64());
        let second = pick_n(&(0..6).collect::<Vec<_>>(), 4, || rng.next_f64());
        assert_eq!(first, vec![4, 2, 3, 7, 0, 6]);
        assert_eq!(second, vec![5, 2, 1, 0]);
    }

    #[test]
    fn test_never_returns_duplicates() {
        let pool: Vec<u32> = (0..50).collect();
        let mut rng = Mulberry32::new(7);
        for n in 0..60 {
            let picked = pick_n(&pool, n, || rng.next_f64());
            assert_eq!(picked.len(), n.min(pool.len()));
            assert_eq!(picked.iter().unique().count(), picked.len());
        }
    }

    #[test]
    fn test_short_pool_returns_permutation() {
        let pool = vec!["a", "b", "c"];
        let mut rng = Mulberry32::new(20240101);
        let mut picked = pick_n(&pool, 10, || rng.next_f64());
        assert_eq!(picked.len(), 3);
        picked.sort();
        assert_eq!(picked, pool);
    }

    #[test]
    fn test_one_draw_per_pick() {
        let pool: Vec<u32> = (0..10).collect();
        let mut calls = 0;
        let picked = pick_n(&pool, 4, || {
            calls += 1;
            0.0
        });
        assert_eq!(calls, 4);
        assert_eq!(picked, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_empty_pool_and_zero_n() {
        let empty: Vec<u8> = Vec::new();
        assert!(pick_n(&empty, 3, || 0.5).is_empty());
        assert!(pick_n(&[1, 2, 3], 0, || 0.5).is_empty());
    }

    #[test]
    fn test_high_draw_picks_last_remaining() {
        let picked = pick_n(&['x', 'y', 'z'], 1, || 0.999_999);
        assert_eq!(picked, vec!['z']);
    }
}
