//! Permutation crossover and mutation operators.
//!
//! Every operator takes two permutations of the same value set `0..N` and
//! returns a permutation of that set. Parents with different value sets
//! are a caller error and are not checked per call.
//!
//! # Crossover Operators
//!
//! - [`uniform_crossover`]: per-position coin flip, then duplicate repair
//! - [`one_point_crossover`]: prefix of parent1, remainder in parent2 order
//! - [`two_point_crossover`]: middle segment of parent1, remainder filled
//!   from parent2 starting after the segment and wrapping around
//!
//! # Mutation
//!
//! - [`swap_mutation`]: with probability `rate`, exchange two distinct positions
//!
//! # References
//!
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::error::SearchError;
use crate::neighborhood::swap_in_place;
use crate::random::distinct_pair;

/// Crossover strategy applied to every parent pair of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Crossover {
    /// See [`uniform_crossover`].
    #[default]
    Uniform,
    /// See [`one_point_crossover`].
    OnePoint,
    /// See [`two_point_crossover`].
    TwoPoint,
}

impl Crossover {
    /// Produces one child from two parents.
    pub fn apply<R: Rng>(&self, parent1: &[usize], parent2: &[usize], rng: &mut R) -> Vec<usize> {
        match self {
            Crossover::Uniform => uniform_crossover(parent1, parent2, rng),
            Crossover::OnePoint => one_point_crossover(parent1, parent2, rng),
            Crossover::TwoPoint => two_point_crossover(parent1, parent2, rng),
        }
    }
}

impl fmt::Display for Crossover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Crossover::Uniform => f.write_str("uniform"),
            Crossover::OnePoint => f.write_str("one-point"),
            Crossover::TwoPoint => f.write_str("two-point"),
        }
    }
}

/// Accepts the strategy names and the menu digits `1`, `2`, `3`.
impl FromStr for Crossover {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "uniform" => Ok(Crossover::Uniform),
            "2" | "one-point" | "onepoint" | "1-point" => Ok(Crossover::OnePoint),
            "3" | "two-point" | "twopoint" | "2-point" => Ok(Crossover::TwoPoint),
            other => Err(SearchError::invalid_config(format!(
                "unknown crossover '{other}' (expected uniform, one-point or two-point)"
            ))),
        }
    }
}

// ============================================================================
// Crossover operators
// ============================================================================

/// Uniform crossover with duplicate repair.
///
/// Each position is copied from `parent1` with probability 0.5, else from
/// `parent2`. See [`uniform_crossover_with_mask`] for the repair step.
///
/// # Panics
/// Panics if parents have different lengths.
pub fn uniform_crossover<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Vec<usize> {
    let from_first: Vec<bool> = (0..parent1.len()).map(|_| rng.random_bool(0.5)).collect();
    uniform_crossover_with_mask(parent1, parent2, &from_first)
}

/// Uniform crossover driven by an explicit coin-flip pattern.
///
/// `from_first[i]` selects `parent1[i]` (true) or `parent2[i]` (false).
/// Scanning left to right, the first occurrence of each value is kept and
/// every later duplicate is replaced by the next value of `parent1` that
/// the coin flips left out, in `parent1` order.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if the three slices have different lengths.
pub fn uniform_crossover_with_mask(
    parent1: &[usize],
    parent2: &[usize],
    from_first: &[bool],
) -> Vec<usize> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert_eq!(n, from_first.len(), "mask must match parent length");

    let mut child: Vec<usize> = (0..n)
        .map(|i| if from_first[i] { parent1[i] } else { parent2[i] })
        .collect();

    let mut present = vec![false; n];
    for &v in &child {
        present[v] = true;
    }
    let mut unused: VecDeque<usize> = parent1.iter().copied().filter(|&v| !present[v]).collect();

    let mut seen = vec![false; n];
    for slot in child.iter_mut() {
        if seen[*slot] {
            // one unused value exists per surplus duplicate
            *slot = unused
                .pop_front()
                .expect("parents share a value set: every duplicate has an unused value");
        }
        seen[*slot] = true;
    }

    child
}

/// One-point crossover with a random cut `k` in `[1, N-1]`.
///
/// Parents shorter than 2 yield a copy of `parent1`.
pub fn one_point_crossover<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Vec<usize> {
    let n = parent1.len();
    if n < 2 {
        return parent1.to_vec();
    }
    let k = rng.random_range(1..n);
    one_point_crossover_at(parent1, parent2, k)
}

/// One-point crossover at cut `k`.
///
/// The child is `parent1[..k]` followed by the values of `parent2` not yet
/// present, in `parent2` order. The result is always a permutation, no
/// repair needed.
///
/// # Panics
/// Panics if `k > parent1.len()` or parents have different lengths.
pub fn one_point_crossover_at(parent1: &[usize], parent2: &[usize], k: usize) -> Vec<usize> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(k <= n, "cut point {k} out of range for length {n}");

    let mut placed = vec![false; n];
    let mut child = Vec::with_capacity(n);
    for &v in &parent1[..k] {
        placed[v] = true;
        child.push(v);
    }
    for &v in parent2 {
        if !placed[v] {
            placed[v] = true;
            child.push(v);
        }
    }
    child
}

/// Two-point crossover with random cuts `a < b`, both in `[1, N-1]`.
///
/// With `N = 2` there are no two distinct cuts; the operator falls back to
/// one-point crossover at `k = 1`. Parents shorter than 2 yield a copy of
/// `parent1`.
pub fn two_point_crossover<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Vec<usize> {
    let n = parent1.len();
    if n < 2 {
        return parent1.to_vec();
    }
    if n == 2 {
        return one_point_crossover_at(parent1, parent2, 1);
    }
    // distinct pair over 1..n
    let (x, y) = distinct_pair(n - 1, rng).expect("n >= 3 gives at least two cut points");
    let (a, b) = if x < y { (x + 1, y + 1) } else { (y + 1, x + 1) };
    two_point_crossover_at(parent1, parent2, a, b)
}

/// Two-point crossover with segment `[a, b)`.
///
/// The segment is copied from `parent1` verbatim. The remaining positions,
/// starting at `b` and wrapping to 0 after `N - 1`, are filled with the
/// values of `parent2` not in the segment, in `parent2` order.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics unless `a < b <= N` and parents have equal length.
pub fn two_point_crossover_at(parent1: &[usize], parent2: &[usize], a: usize, b: usize) -> Vec<usize> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(a < b && b <= n, "invalid segment [{a}, {b}) for length {n}");

    let sentinel = usize::MAX;
    let mut child = vec![sentinel; n];
    let mut placed = vec![false; n];

    for i in a..b {
        child[i] = parent1[i];
        placed[parent1[i]] = true;
    }

    let mut pos = b % n;
    for &v in parent2 {
        if !placed[v] {
            child[pos] = v;
            placed[v] = true;
            pos = (pos + 1) % n;
        }
    }

    child
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Swap mutation: with probability `rate`, exchange two distinct random
/// positions.
///
/// Returns `true` if the tour was changed.
pub fn swap_mutation<R: Rng>(tour: &mut [usize], rate: f64, rng: &mut R) -> bool {
    if rng.random::<f64>() < rate {
        swap_in_place(tour, rng).is_some()
    } else {
        false
    }
}
