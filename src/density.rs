// Gaussian probability density evaluation
//
// The measured TOF of each reference isotope is modeled as a normal
// distribution around the measured mean with the measured uncertainty as
// its standard deviation.

use std::f64::consts::PI;

/// Evaluate the normalized Gaussian density at `x`.
///
/// Returns `(1/(σ√2π))·exp(−(x−μ)²/(2σ²))`. Pure function; callers are
/// responsible for σ > 0.
pub fn gaussian_pdf(x: f64, mean: f64, sigma: f64) -> f64 {
    let z = (x - mean) / sigma;
    gaussian_peak(sigma) * (-0.5 * z * z).exp()
}

/// Peak value of the Gaussian density, attained at x = μ.
///
/// Used as the exact majorizing constant for rejection sampling.
pub fn gaussian_peak(sigma: f64) -> f64 {
    1.0 / (sigma * (2.0 * PI).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peak_attained_at_mean() {
        let mean = 6.1;
        let sigma = 0.5;
        let at_mean = gaussian_pdf(mean, mean, sigma);
        assert!((at_mean - gaussian_peak(sigma)).abs() < 1e-15);

        // Every other point must lie strictly below the peak
        for &offset in &[0.01, 0.1, 0.5, 1.0, 2.9] {
            assert!(gaussian_pdf(mean + offset, mean, sigma) < at_mean);
            assert!(gaussian_pdf(mean - offset, mean, sigma) < at_mean);
        }
    }

    #[test]
    fn test_symmetry_about_mean() {
        let mean = 12.2;
        let sigma = 1.2;
        for &offset in &[0.1, 0.7, 1.2, 2.4, 3.6] {
            let right = gaussian_pdf(mean + offset, mean, sigma);
            let left = gaussian_pdf(mean - offset, mean, sigma);
            assert!(
                (right - left).abs() < 1e-15,
                "density not symmetric at offset {}",
                offset
            );
        }
    }

    #[test]
    fn test_known_values() {
        // Standard normal at 0 is 1/sqrt(2*pi)
        assert!((gaussian_pdf(0.0, 0.0, 1.0) - 0.3989422804014327).abs() < 1e-15);
        // One standard deviation out: peak * exp(-1/2)
        let expected = 0.3989422804014327 * (-0.5f64).exp();
        assert!((gaussian_pdf(1.0, 0.0, 1.0) - expected).abs() < 1e-15);
    }

    #[test]
    fn test_peak_scales_inversely_with_sigma() {
        assert!(gaussian_peak(0.5) > gaussian_peak(1.2));
        assert!((gaussian_peak(0.5) - 1.0 / (0.5 * (2.0 * PI).sqrt())).abs() < 1e-15);
    }
}
