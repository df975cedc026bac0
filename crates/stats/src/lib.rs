//! Statistical helper functions for wxprob.
//!
//! Descriptive statistics over plain `f64` slices and an ordinary
//! least-squares line fit with a Student-t significance test.

use statrs::distribution::{ContinuousCDF, StudentsT};

/// Guards the t statistic against division by zero when |r| = 1.
const TINY: f64 = 1.0e-20;

/// Arithmetic mean of a slice. Returns `None` if empty.
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    let sum: f64 = data.iter().sum();
    Some(sum / data.len() as f64)
}

/// Sample variance with N-1 denominator (matching R's `var()`).
/// Returns `None` if fewer than 2 elements.
pub fn variance(data: &[f64]) -> Option<f64> {
    let n = data.len();
    if n < 2 {
        return None;
    }
    let nf = n as f64;
    let mean = data.iter().sum::<f64>() / nf;
    Some(data.iter().map(|&x| (x - mean) * (x - mean)).sum::<f64>() / (nf - 1.0))
}

/// Sample standard deviation with N-1 denominator (matching R's `sd()`).
/// Returns `None` if fewer than 2 elements.
pub fn sd(data: &[f64]) -> Option<f64> {
    variance(data).map(f64::sqrt)
}

/// R's default quantile algorithm (type=7), linear interpolation between
/// order statistics.
///
/// **Expects pre-sorted input** (caller's responsibility). Returns `None`
/// if `sorted` is empty or `p` is outside `[0, 1]`.
pub fn quantile_type7(sorted: &[f64], p: f64) -> Option<f64> {
    if sorted.is_empty() || !(0.0..=1.0).contains(&p) {
        return None;
    }
    let n = sorted.len();
    let h = (n - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    Some(sorted[lo] + (h - h.floor()) * (sorted[hi] - sorted[lo]))
}

/// Median of pre-sorted data. For even length, averages the middle two values.
/// Returns `None` if empty.
pub fn median(sorted: &[f64]) -> Option<f64> {
    let n = sorted.len();
    if n == 0 {
        return None;
    }
    if n % 2 == 1 {
        Some(sorted[n / 2])
    } else {
        Some((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
    }
}

/// Sorts finite values ascending, discarding NaN and infinities.
pub fn sorted_finite(data: &[f64]) -> Vec<f64> {
    let mut sorted: Vec<f64> = data.iter().copied().filter(|x| x.is_finite()).collect();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Result of an ordinary least-squares fit of `y` on `x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    /// Change in `y` per unit of `x`.
    pub slope: f64,
    /// Value of the line at `x = 0`.
    pub intercept: f64,
    /// Pearson correlation coefficient, clipped to `[-1, 1]`.
    pub r: f64,
    /// Two-sided p-value for the null hypothesis `slope = 0`.
    pub p_value: f64,
    /// Standard error of the slope (0 when only two points are fitted).
    pub slope_stderr: f64,
    /// Number of finite pairs used.
    pub n: usize,
}

/// Ordinary least-squares regression of `y` on `x`.
///
/// Only indices where both `x[i]` and `y[i]` are finite participate.
/// Returns `None` if fewer than 2 finite pairs remain or all `x` are equal.
///
/// The p-value comes from Student's t with `n - 2` degrees of freedom. With
/// exactly two points there are no residual degrees of freedom: the p-value
/// is 0 when the two `y` differ and 1 when they are equal. A constant `y`
/// gives `r = 0` and `p = 1`.
pub fn linear_regression(x: &[f64], y: &[f64]) -> Option<LinearFit> {
    let pairs: Vec<(f64, f64)> = x
        .iter()
        .zip(y.iter())
        .filter(|(xi, yi)| xi.is_finite() && yi.is_finite())
        .map(|(xi, yi)| (*xi, *yi))
        .collect();

    let n = pairs.len();
    if n < 2 {
        return None;
    }

    let nf = n as f64;
    let mx = pairs.iter().map(|(xi, _)| xi).sum::<f64>() / nf;
    let my = pairs.iter().map(|(_, yi)| yi).sum::<f64>() / nf;

    let mut ssxm = 0.0;
    let mut ssym = 0.0;
    let mut ssxym = 0.0;
    for &(xi, yi) in &pairs {
        let dx = xi - mx;
        let dy = yi - my;
        ssxm += dx * dx;
        ssym += dy * dy;
        ssxym += dx * dy;
    }

    if ssxm == 0.0 {
        return None;
    }

    let slope = ssxym / ssxm;
    let intercept = my - slope * mx;
    let r = if ssym == 0.0 {
        0.0
    } else {
        (ssxym / (ssxm * ssym).sqrt()).clamp(-1.0, 1.0)
    };

    let (p_value, slope_stderr) = if n == 2 {
        let p = if pairs[0].1 == pairs[1].1 { 1.0 } else { 0.0 };
        (p, 0.0)
    } else {
        let df = (n - 2) as f64;
        let t = r * (df / ((1.0 - r + TINY) * (1.0 + r + TINY))).sqrt();
        let p = StudentsT::new(0.0, 1.0, df)
            .map(|dist| (2.0 * dist.sf(t.abs())).min(1.0))
            .unwrap_or(f64::NAN);
        let stderr = ((1.0 - r * r) * ssym / ssxm / df).max(0.0).sqrt();
        (p, stderr)
    };

    Some(LinearFit {
        slope,
        intercept,
        r,
        p_value,
        slope_stderr,
        n,
    })
}
