//! Wilson score interval for a binomial proportion.
//!
//! Stays inside `[0, 1]` and keeps reasonable coverage for the small
//! samples a day-window yields (tens of days per decade of record) and for
//! proportions near 0 or 1.

/// Two-sided 95% standard-normal quantile.
pub const DEFAULT_Z: f64 = 1.96;

/// Bounds of a confidence interval for a proportion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceInterval {
    /// Lower bound in `[0, 1]`.
    pub lower: f64,
    /// Upper bound in `[lower, 1]`.
    pub upper: f64,
}

/// Wilson score interval for `k` successes out of `n` trials at quantile `z`.
///
/// ```text
/// phat   = k / n
/// denom  = 1 + z²/n
/// center = phat + z²/(2n)
/// adj    = z * sqrt(phat(1 - phat)/n + z²/(4n²))
/// bounds = clamp((center ∓ adj) / denom, 0, 1)
/// ```
///
/// The bound on the side of an all-or-nothing outcome is exactly 0 or 1,
/// so the interval always contains `k / n`. Returns `None` when `n == 0` or
/// `k > n`.
pub fn wilson_interval(k: usize, n: usize, z: f64) -> Option<ConfidenceInterval> {
    if n == 0 || k > n {
        return None;
    }
    let nf = n as f64;
    let phat = k as f64 / nf;
    let z2 = z * z;
    let denom = 1.0 + z2 / nf;
    let center = phat + z2 / (2.0 * nf);
    let adj = z * (phat * (1.0 - phat) / nf + z2 / (4.0 * nf * nf)).sqrt();
    let lower = if k == 0 {
        0.0
    } else {
        ((center - adj) / denom).clamp(0.0, 1.0)
    };
    let upper = if k >= n {
        1.0
    } else {
        ((center + adj) / denom).clamp(0.0, 1.0)
    };
    Some(ConfidenceInterval { lower, upper })
}
