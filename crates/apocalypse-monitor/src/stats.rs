//! Summary statistics over FPS histories.
//!
//! Outlier filtering exists so a single garbage-collection-style pause
//! does not fail an otherwise-healthy run: values beyond the sigma
//! cutoff are excluded before min/max are computed.

use apocalypse_core::constants::OUTLIER_SIGMA;

/// Arithmetic mean. Zero for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation. Zero for an empty slice.
pub fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Keep values within `OUTLIER_SIGMA` standard deviations of the mean
/// of the *other* values (leave-one-out). A lone extreme sample
/// inflates the plain mean/sigma enough to hide itself in short
/// histories, so each candidate is judged against the rest.
/// Histories shorter than 4 are returned unfiltered.
pub fn filter_outliers(values: &[f64]) -> Vec<f64> {
    if values.len() < 4 {
        return values.to_vec();
    }

    let mut kept = Vec::with_capacity(values.len());
    let mut rest = Vec::with_capacity(values.len() - 1);
    for (i, &candidate) in values.iter().enumerate() {
        rest.clear();
        rest.extend(
            values
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, &v)| v),
        );
        let cutoff = OUTLIER_SIGMA * std_dev(&rest);
        if (candidate - mean(&rest)).abs() <= cutoff {
            kept.push(candidate);
        }
    }

    // Degenerate case: everything excluded (mutually distant values).
    if kept.is_empty() {
        return values.to_vec();
    }
    kept
}

/// Minimum of a slice; zero when empty.
pub fn min(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

/// Maximum of a slice; zero when empty.
pub fn max(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}
