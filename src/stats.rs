// Summary statistics for Monte Carlo sample sequences

use crate::error::Error;

/// Mean and population standard deviation of a sample sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub mean: f64,
    pub std_dev: f64,
}

/// Summarize a non-empty sequence of samples.
///
/// The standard deviation is the population form (divide by n, not n - 1),
/// so a single-element sequence summarizes to a spread of exactly zero.
pub fn summarize(samples: &[f64]) -> Result<Summary, Error> {
    if samples.is_empty() {
        return Err(Error::EmptySamples);
    }
    let n = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / n;
    let variance = samples.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / n;
    Ok(Summary {
        mean,
        std_dev: variance.sqrt(),
    })
}
