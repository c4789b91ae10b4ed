//! Metropolis acceptance criterion.

/// Probability of accepting a move that changes the cost by `delta` at
/// `temperature`.
///
/// - `delta < 0`: 1 (improvements are always accepted)
/// - otherwise: `exp(-delta / temperature)`
///
/// Never returns NaN and never overflows. A non-positive or non-finite
/// temperature accepts only non-worsening moves, and an exponent that is
/// not finite (temperature underflowed towards 0) gives 0.
///
/// # Examples
///
/// ```
/// use tour_metaheur::sa::metropolis_probability;
///
/// assert_eq!(metropolis_probability(-3.0, 10.0), 1.0);
/// assert!((metropolis_probability(5.0, 100.0) - (-0.05f64).exp()).abs() < 1e-12);
/// assert_eq!(metropolis_probability(5.0, 1e-320), 0.0);
/// ```
///
/// # References
///
/// Metropolis et al. (1953), "Equation of State Calculations by Fast
/// Computing Machines"
pub fn metropolis_probability(delta: f64, temperature: f64) -> f64 {
    if delta < 0.0 {
        return 1.0;
    }
    if delta.is_nan() {
        return 0.0;
    }
    if !(temperature > 0.0 && temperature.is_finite()) {
        return if delta == 0.0 { 1.0 } else { 0.0 };
    }

    let exponent = -delta / temperature;
    if !exponent.is_finite() {
        return 0.0;
    }
    exponent.exp()
}
