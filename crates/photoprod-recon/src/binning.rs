use photoprod_core::errors::{ErrorInfo, PhotoprodError};

/// Freedman–Diaconis bin width `2 * (Q3 - Q1) / n^(1/3)`.
///
/// The quartiles are read straight from the sorted samples at indices
/// `n / 4` and `3n / 4` without interpolation. Non-finite samples sort by
/// `f64::total_cmp`.
pub fn freedman_diaconis_width(samples: &[f64]) -> Result<f64, PhotoprodError> {
    if samples.is_empty() {
        return Err(PhotoprodError::Recon(ErrorInfo::new(
            "empty-samples",
            "bin width needs at least one sample",
        )));
    }
    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);
    let n = sorted.len();
    let q1 = sorted[n / 4];
    let q3 = sorted[3 * n / 4];
    Ok(2.0 * (q3 - q1) / (n as f64).cbrt())
}
