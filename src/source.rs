// Reference isotope sources and rejection sampling
//
// Each reference source models one measured isotope: its mass number and the
// Gaussian TOF distribution implied by the measured mean and uncertainty,
// truncated to the +-3 sigma window and renormalized over it. Sampling uses
// acceptance-rejection against a uniform proposal on the window, with the
// density's exact peak as the majorizing constant.

use log::debug;
use rand::Rng;

use crate::density::{gaussian_pdf, gaussian_peak};
use crate::error::Error;
use crate::quadrature;

/// Half-width of the truncation window in standard deviations.
const SUPPORT_HALF_WIDTH: f64 = 3.0;

/// Proposals allowed per accepted sample before the sampler reports failure.
/// Acceptance probability over the +-3 sigma window is roughly 0.42, so a
/// healthy sampler needs two or three draws on average; reaching this budget
/// means the configuration is broken, not unlucky.
const PROPOSAL_BUDGET: u64 = 1_000_000;

/// A measured reference isotope.
///
/// Immutable after construction. The two sampling constants are derived and
/// frozen here: the majorizing constant (the density's peak value, 1/(σ√2π))
/// and the normalization constant (the quadrature integral of the density
/// over the truncation window). A degenerate σ or a failed normalization is
/// rejected at this point, so the rejection loop can never start with an
/// unsatisfiable acceptance test.
#[derive(Debug, Clone)]
pub struct ReferenceSource {
    label: String,
    mass_number: u32,
    mean: f64,
    sigma: f64,
    majorant: f64,
    norm_const: f64,
    norm_error: f64,
}

impl ReferenceSource {
    /// Build a reference source from a measurement.
    ///
    /// `mean` and `sigma` are the measured TOF and its uncertainty. Fails on
    /// a non-positive or non-finite `sigma`, and on a normalization integral
    /// that does not converge or is not strictly positive.
    pub fn new(label: &str, mass_number: u32, mean: f64, sigma: f64) -> Result<Self, Error> {
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(Error::InvalidSigma {
                label: label.to_string(),
                sigma,
            });
        }

        let majorant = gaussian_peak(sigma);
        let lo = mean - SUPPORT_HALF_WIDTH * sigma;
        let hi = mean + SUPPORT_HALF_WIDTH * sigma;
        let norm = quadrature::integrate(|x| gaussian_pdf(x, mean, sigma), lo, hi)?;
        if !norm.value.is_finite() || norm.value <= 0.0 {
            return Err(Error::DegenerateNormalization {
                label: label.to_string(),
                value: norm.value,
            });
        }
        debug!(
            "source {}: normalization constant {:.9} over [{:.4}, {:.4}] (quadrature error {:.3e})",
            label, norm.value, lo, hi, norm.error
        );

        Ok(ReferenceSource {
            label: label.to_string(),
            mass_number,
            mean,
            sigma,
            majorant,
            norm_const: norm.value,
            norm_error: norm.error,
        })
    }

    /// Draw one TOF sample from the truncated, renormalized distribution.
    ///
    /// Acceptance-rejection: propose x uniformly on [μ−3σ, μ+3σ], accept when
    /// a threshold drawn uniformly from [0, majorant) falls below the
    /// renormalized density at x. The returned value always lies inside the
    /// window. Errors only if the proposal budget is exhausted, which a valid
    /// source cannot hit in practice.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<f64, Error> {
        let (lo, hi) = self.support();
        let width = hi - lo;

        for _ in 0..PROPOSAL_BUDGET {
            let x = lo + width * rng.gen::<f64>();
            let target = gaussian_pdf(x, self.mean, self.sigma) / self.norm_const;
            let threshold = self.majorant * rng.gen::<f64>();
            if threshold < target {
                return Ok(x);
            }
        }
        Err(Error::ProposalBudgetExhausted {
            label: self.label.clone(),
            budget: PROPOSAL_BUDGET,
        })
    }

    /// The truncation window [μ−3σ, μ+3σ]
    pub fn support(&self) -> (f64, f64) {
        (
            self.mean - SUPPORT_HALF_WIDTH * self.sigma,
            self.mean + SUPPORT_HALF_WIDTH * self.sigma,
        )
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn mass_number(&self) -> u32 {
        self.mass_number
    }

    /// Measured mean TOF
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Measured TOF uncertainty (one standard deviation)
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Majorizing constant: the density's peak value
    pub fn majorant(&self) -> f64 {
        self.majorant
    }

    /// Integral of the density over the truncation window
    pub fn norm_const(&self) -> f64 {
        self.norm_const
    }

    /// Error estimate reported by the normalization quadrature
    pub fn norm_error(&self) -> f64 {
        self.norm_error
    }
}
