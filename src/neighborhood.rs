//! 2-swap neighborhood.
//!
//! A neighbor of a tour exchanges the items at exactly two positions.
//!
//! - [`random_neighbor`]: one uniformly random neighbor (SA, GA mutation)
//! - [`all_swap_neighbors`]: the full neighborhood, `N(N-1)/2` tours (TS)

use rand::Rng;

use crate::random::distinct_pair;

/// Swaps two distinct random positions in place.
///
/// Returns the swapped positions, or `None` for tours shorter than 2.
pub fn swap_in_place<R: Rng>(tour: &mut [usize], rng: &mut R) -> Option<(usize, usize)> {
    let (i, j) = distinct_pair(tour.len(), rng)?;
    tour.swap(i, j);
    Some((i, j))
}

/// Returns a copy of `tour` with two distinct random positions swapped.
pub fn random_neighbor<R: Rng>(tour: &[usize], rng: &mut R) -> Vec<usize> {
    let mut neighbor = tour.to_vec();
    swap_in_place(&mut neighbor, rng);
    neighbor
}

/// Every unordered position pair `(i, j)` with `i < j`, `i` ascending then
/// `j` ascending.
///
/// This order fixes tie-breaking for searches that keep the first minimum.
pub fn swap_pairs(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n).flat_map(move |i| ((i + 1)..n).map(move |j| (i, j)))
}

/// The full 2-swap neighborhood, in [`swap_pairs`] order.
pub fn all_swap_neighbors(tour: &[usize]) -> Vec<Vec<usize>> {
    swap_pairs(tour.len())
        .map(|(i, j)| {
            let mut neighbor = tour.to_vec();
            neighbor.swap(i, j);
            neighbor
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use crate::tour::is_permutation;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn differing_positions(a: &[usize], b: &[usize]) -> Vec<usize> {
        (0..a.len()).filter(|&k| a[k] != b[k]).collect()
    }

    #[test]
    fn test_random_neighbor_is_one_transposition() {
        let mut rng = create_rng(42);
        let tour = vec![3, 0, 4, 1, 2];
        for _ in 0..200 {
            let neighbor = random_neighbor(&tour, &mut rng);
            assert!(is_permutation(&neighbor, 5));
            let diff = differing_positions(&tour, &neighbor);
            assert_eq!(diff.len(), 2);
            assert_eq!(tour[diff[0]], neighbor[diff[1]]);
            assert_eq!(tour[diff[1]], neighbor[diff[0]]);
        }
    }

    #[test]
    fn test_random_neighbor_short_tour() {
        let mut rng = create_rng(42);
        assert_eq!(random_neighbor(&[0], &mut rng), vec![0]);
        assert_eq!(random_neighbor(&[], &mut rng), Vec::<usize>::new());
    }

    #[test]
    fn test_swap_pairs_order() {
        let pairs: Vec<_> = swap_pairs(4).collect();
        assert_eq!(pairs, vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
        assert_eq!(swap_pairs(1).count(), 0);
    }

    #[test]
    fn test_all_swap_neighbors_small() {
        let neighbors = all_swap_neighbors(&[0, 1, 2]);
        assert_eq!(neighbors, vec![vec![1, 0, 2], vec![2, 1, 0], vec![0, 2, 1]]);
    }

    #[test]
    fn test_all_swap_neighbors_size_and_distinct() {
        for n in 2..9 {
            let tour: Vec<usize> = (0..n).rev().collect();
            let neighbors = all_swap_neighbors(&tour);
            assert_eq!(neighbors.len(), n * (n - 1) / 2);

            let unique: HashSet<_> = neighbors.iter().cloned().collect();
            assert_eq!(unique.len(), neighbors.len());

            for nb in &neighbors {
                assert!(is_permutation(nb, n));
                assert_eq!(differing_positions(&tour, nb).len(), 2);
            }
        }
    }

    proptest! {
        #[test]
        fn prop_random_neighbor_preserves_permutation(n in 2usize..40, seed in any::<u64>()) {
            let mut rng = create_rng(seed);
            let tour = crate::random::random_permutation(n, &mut rng);
            let neighbor = random_neighbor(&tour, &mut rng);
            prop_assert!(is_permutation(&neighbor, n));
            prop_assert_eq!(differing_positions(&tour, &neighbor).len(), 2);
        }
    }
}
