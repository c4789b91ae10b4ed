//! Selection strategies for the GA.
//!
//! Both strategies draw parents by inverse-CDF sampling: the selection
//! weights are normalized to probabilities, accumulated, and a single
//! uniform draw in `[0, 1)` picks the first individual whose cumulative
//! probability reaches the draw.
//!
//! # References
//!
//! - Baker (1985), "Adaptive Selection Methods for Genetic Algorithms"
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1 (roulette wheel)

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::error::SearchError;

/// Selection strategy for choosing parents.
///
/// Fitness values passed in are "higher is better" (`1 / cost`).
///
/// # Examples
///
/// ```
/// use tour_metaheur::ga::Selection;
///
/// let sel: Selection = "roulette".parse().unwrap();
/// assert_eq!(sel, Selection::Roulette);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Rank-based selection.
    ///
    /// The population is sorted by descending fitness and the k-th ranked
    /// individual gets weight `n - k` (best gets `n`, worst gets `1`).
    /// Selection pressure depends on order only, not on fitness spread.
    #[default]
    Rank,

    /// Fitness-proportional (roulette wheel) selection.
    ///
    /// Weights are the raw fitness values, in population order.
    Roulette,
}

impl Selection {
    /// Builds the sampling wheel for one generation.
    ///
    /// Building the wheel once per generation (the sort for [`Rank`]
    /// included) and sampling it repeatedly gives the same distribution as
    /// rebuilding it for every parent.
    ///
    /// # Errors
    ///
    /// - [`SearchError::InvalidState`] if `fitness` is empty or its values
    ///   do not sum to a positive finite number.
    ///
    /// [`Rank`]: Selection::Rank
    pub fn wheel(&self, fitness: &[f64]) -> Result<SelectionWheel, SearchError> {
        if fitness.is_empty() {
            return Err(SearchError::InvalidState("cannot select from empty population"));
        }

        let (order, weights): (Vec<usize>, Vec<f64>) = match self {
            Selection::Rank => {
                let n = fitness.len();
                let mut order: Vec<usize> = (0..n).collect();
                // Stable: equal fitness keeps population order.
                order.sort_by(|&a, &b| fitness[b].total_cmp(&fitness[a]));
                let weights = (1..=n).rev().map(|w| w as f64).collect();
                (order, weights)
            }
            Selection::Roulette => ((0..fitness.len()).collect(), fitness.to_vec()),
        };

        Ok(SelectionWheel {
            order,
            cumulative: cumulative_probabilities(&weights)?,
        })
    }

    /// Selects one parent index from a population's fitness values.
    pub fn select<R: Rng>(&self, fitness: &[f64], rng: &mut R) -> Result<usize, SearchError> {
        Ok(self.wheel(fitness)?.sample(rng))
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Rank => f.write_str("rank"),
            Selection::Roulette => f.write_str("roulette"),
        }
    }
}

impl FromStr for Selection {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rank" => Ok(Selection::Rank),
            "roulette" | "proportional" => Ok(Selection::Roulette),
            other => Err(SearchError::invalid_config(format!(
                "unknown selection strategy '{other}' (expected rank or roulette)"
            ))),
        }
    }
}

/// Precomputed inverse-CDF sampler over a population.
#[derive(Debug, Clone)]
pub struct SelectionWheel {
    /// Population index for each wheel slot.
    order: Vec<usize>,
    /// Cumulative selection probability per slot.
    cumulative: Vec<f64>,
}

impl SelectionWheel {
    /// Population index chosen by a uniform draw in `[0, 1)`.
    pub fn pick(&self, draw: f64) -> usize {
        self.order[first_reaching(&self.cumulative, draw)]
    }

    /// Draws one population index.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        self.pick(rng.random::<f64>())
    }

    /// Probability of each wheel slot, best-ranked first for rank selection.
    pub fn probabilities(&self) -> impl Iterator<Item = f64> + '_ {
        let mut prev = 0.0;
        self.cumulative.iter().map(move |&c| {
            let p = c - prev;
            prev = c;
            p
        })
    }
}

/// Inverse-CDF sampling over raw weights.
///
/// Returns the index of the first weight whose cumulative probability is
/// `>= draw`. If rounding leaves `draw` above the last cumulative value,
/// the last index is returned.
///
/// # Errors
/// [`SearchError::InvalidState`] for empty weights or a non-positive /
/// non-finite total.
pub fn select_by_cdf(weights: &[f64], draw: f64) -> Result<usize, SearchError> {
    let cumulative = cumulative_probabilities(weights)?;
    Ok(first_reaching(&cumulative, draw))
}

fn cumulative_probabilities(weights: &[f64]) -> Result<Vec<f64>, SearchError> {
    if weights.is_empty() {
        return Err(SearchError::InvalidState("cannot select from empty population"));
    }
    let total: f64 = weights.iter().sum();
    if !(total.is_finite() && total > 0.0) {
        return Err(SearchError::InvalidState(
            "selection weights must sum to a positive finite value",
        ));
    }

    let mut sum = 0.0;
    Ok(weights
        .iter()
        .map(|w| {
            sum += w / total;
            sum
        })
        .collect())
}

fn first_reaching(cumulative: &[f64], draw: f64) -> usize {
    cumulative
        .iter()
        .position(|&cp| draw <= cp)
        .unwrap_or(cumulative.len() - 1) // floating-point fallback
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_rank_weights_and_best_probability() {
        // best is index 1, then 2, then 0
        let fitness = [0.1, 0.3, 0.2];
        let wheel = Selection::Rank.wheel(&fitness).unwrap();
        let probs: Vec<f64> = wheel.probabilities().collect();
        assert!((probs[0] - 3.0 / 6.0).abs() < 1e-12);
        assert!((probs[1] - 2.0 / 6.0).abs() < 1e-12);
        assert!((probs[2] - 1.0 / 6.0).abs() < 1e-12);

        // 0.4 <= 0.5: the best individual
        assert_eq!(wheel.pick(0.4), 1);
        assert_eq!(wheel.pick(0.6), 2);
        assert_eq!(wheel.pick(0.9), 0);
    }

    #[test]
    fn test_rank_boundary_draw_is_inclusive() {
        let wheel = Selection::Rank.wheel(&[0.5, 0.25]).unwrap();
        // weights 2,1 -> cumulative 2/3, 1
        assert_eq!(wheel.pick(2.0 / 3.0), 0);
    }

    #[test]
    fn test_rank_ties_keep_population_order() {
        let wheel = Selection::Rank.wheel(&[0.2, 0.2, 0.2]).unwrap();
        assert_eq!(wheel.pick(0.0), 0);
        assert_eq!(wheel.pick(0.7), 1);
        assert_eq!(wheel.pick(0.99), 2);
    }

    #[test]
    fn test_roulette_uses_raw_fitness() {
        let wheel = Selection::Roulette.wheel(&[0.2, 0.1, 0.7]).unwrap();
        assert_eq!(wheel.pick(0.1), 0);
        assert_eq!(wheel.pick(0.25), 1);
        assert_eq!(wheel.pick(0.31), 2);
    }

    #[test]
    fn test_select_by_cdf_fallback() {
        assert_eq!(select_by_cdf(&[1.0, 1.0, 1.0], 1.5).unwrap(), 2);
        assert_eq!(select_by_cdf(&[1.0, 3.0], 0.25).unwrap(), 0);
        assert_eq!(select_by_cdf(&[1.0, 3.0], 0.2500001).unwrap(), 1);
    }

    #[test]
    fn test_empty_population_is_invalid_state() {
        for sel in [Selection::Rank, Selection::Roulette] {
            let err = sel.wheel(&[]).unwrap_err();
            assert!(matches!(err, SearchError::InvalidState(_)));
        }
        assert!(matches!(
            select_by_cdf(&[], 0.5),
            Err(SearchError::InvalidState(_))
        ));
    }

    #[test]
    fn test_zero_total_weight_is_invalid_state() {
        assert!(matches!(
            Selection::Roulette.wheel(&[0.0, 0.0]),
            Err(SearchError::InvalidState(_))
        ));
    }

    #[test]
    fn test_single_individual() {
        let mut rng = create_rng(42);
        assert_eq!(Selection::Rank.select(&[0.5], &mut rng).unwrap(), 0);
        assert_eq!(Selection::Roulette.select(&[0.5], &mut rng).unwrap(), 0);
    }

    #[test]
    fn test_rank_favors_best() {
        let fitness = [0.01, 0.02, 1.0, 0.0125];
        let wheel = Selection::Rank.wheel(&fitness).unwrap();
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        let n = 10000;
        for _ in 0..n {
            counts[wheel.sample(&mut rng)] += 1;
        }
        // expected share of the best: 4/10
        assert!(
            counts[2] > 3500 && counts[2] < 4500,
            "best share off: {counts:?}"
        );
        assert!(counts[2] > counts[0], "{counts:?}");
    }

    #[test]
    fn test_roulette_favors_best() {
        let fitness = [1.0 / 100.0, 1.0 / 50.0, 1.0, 1.0 / 80.0];
        let wheel = Selection::Roulette.wheel(&fitness).unwrap();
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        for _ in 0..10000 {
            counts[wheel.sample(&mut rng)] += 1;
        }
        assert!(counts[2] > 9000, "{counts:?}");
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("rank".parse::<Selection>().unwrap(), Selection::Rank);
        assert_eq!(" Roulette ".parse::<Selection>().unwrap(), Selection::Roulette);
        assert!("tournament".parse::<Selection>().is_err());
        assert_eq!(Selection::Rank.to_string(), "rank");
        assert_eq!(Selection::default(), Selection::Rank);
    }
}
