// Error taxonomy for the TOF estimation pipeline
//
// Every failure here is fatal to the run: there are no retries and no
// partial-result mode. Each variant carries enough context to identify
// which source or stage failed.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A reference source was configured with a degenerate uncertainty.
    #[error("source {label}: standard deviation must be finite and > 0, got {sigma}")]
    InvalidSigma { label: String, sigma: f64 },

    /// The normalization integral did not reach its tolerance within the
    /// subdivision budget.
    #[error("quadrature over [{a}, {b}] did not converge within {max_depth} subdivisions")]
    QuadratureNotConverged { a: f64, b: f64, max_depth: u32 },

    /// The normalization integral came out non-positive or non-finite, which
    /// makes the acceptance test undefined.
    #[error("source {label}: normalization constant is {value}, sampling is undefined")]
    DegenerateNormalization { label: String, value: f64 },

    #[error("light mass number {light} must be below heavy mass number {heavy}")]
    MassNumbersNotOrdered { light: u32, heavy: u32 },

    #[error("target mass number {target} lies outside the interpolation range [{light}, {heavy}]")]
    TargetMassOutOfRange { target: u32, light: u32, heavy: u32 },

    #[error("sample count must be at least 1")]
    NoSamplesRequested,

    /// The rejection sampler exhausted its proposal budget without an
    /// acceptance. Bounds the rejection loop so a broken configuration
    /// fails instead of spinning forever.
    #[error("source {label}: no proposal accepted after {budget} draws")]
    ProposalBudgetExhausted { label: String, budget: u64 },

    #[error("cannot summarize an empty sample sequence")]
    EmptySamples,

    #[error("failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scenario file: {0}")]
    Json(#[from] serde_json::Error),
}
