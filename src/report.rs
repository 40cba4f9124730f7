// Text reporting for sample distributions
//
// Renders a histogram of the banked samples with the mean and the +-1 sigma
// positions marked and labeled. Presentation only; nothing here feeds back
// into the simulation.

use std::fmt;

use crate::stats::Summary;

const DEFAULT_BINS: usize = 50;
/// Bar length of the tallest bin, in characters.
const BAR_WIDTH: usize = 60;

/// Equal-width binning of a sample sequence over its own range.
#[derive(Debug, Clone)]
pub struct Histogram {
    lo: f64,
    bin_width: f64,
    counts: Vec<usize>,
}

impl Histogram {
    /// Bin `samples` into `bins` equal-width bins spanning the sample range.
    /// Returns `None` when there is nothing to bin.
    pub fn new(samples: &[f64], bins: usize) -> Option<Self> {
        if samples.is_empty() || bins == 0 {
            return None;
        }
        let lo = samples.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        // Degenerate range (all samples equal): one unit-width bin placement
        let bin_width = if hi > lo { (hi - lo) / bins as f64 } else { 1.0 };

        let mut counts = vec![0usize; bins];
        for &x in samples {
            let mut idx = ((x - lo) / bin_width) as usize;
            if idx >= bins {
                idx = bins - 1;
            }
            counts[idx] += 1;
        }
        Some(Histogram {
            lo,
            bin_width,
            counts,
        })
    }

    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// The [lo, hi) range covered by bin `i`
    pub fn bin_range(&self, i: usize) -> (f64, f64) {
        let lo = self.lo + i as f64 * self.bin_width;
        (lo, lo + self.bin_width)
    }

    /// Index of the bin containing `x`, or `None` outside the binned range
    pub fn bin_index(&self, x: f64) -> Option<usize> {
        if x < self.lo {
            return None;
        }
        let idx = ((x - self.lo) / self.bin_width) as usize;
        if idx < self.counts.len() {
            Some(idx)
        } else if idx == self.counts.len() && x <= self.lo + self.bin_width * idx as f64 {
            // The maximum sample lands exactly on the upper edge
            Some(idx - 1)
        } else {
            None
        }
    }
}

/// One distribution's report: a title, a histogram with markers, and the
/// numeric summary labels.
pub struct Report<'a> {
    title: String,
    samples: &'a [f64],
    summary: Summary,
    bins: usize,
}

impl<'a> Report<'a> {
    pub fn new(title: &str, samples: &'a [f64], summary: Summary) -> Self {
        Report {
            title: title.to_string(),
            samples,
            summary,
            bins: DEFAULT_BINS,
        }
    }

    /// Override the histogram bin count
    pub fn with_bins(mut self, bins: usize) -> Self {
        self.bins = bins;
        self
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;

        if let Some(hist) = Histogram::new(self.samples, self.bins) {
            let tallest = hist.counts().iter().copied().max().unwrap_or(0).max(1);
            let mean_bin = hist.bin_index(self.summary.mean);
            let below_bin = hist.bin_index(self.summary.mean - self.summary.std_dev);
            let above_bin = hist.bin_index(self.summary.mean + self.summary.std_dev);

            for (i, &count) in hist.counts().iter().enumerate() {
                let (lo, hi) = hist.bin_range(i);
                let bar_len = count * BAR_WIDTH / tallest;
                write!(
                    f,
                    "  {:>9.4} .. {:>9.4} | {:<width$}",
                    lo,
                    hi,
                    "#".repeat(bar_len),
                    width = BAR_WIDTH
                )?;
                if Some(i) == mean_bin {
                    write!(f, " <- x\u{302}")?;
                } else if Some(i) == below_bin || Some(i) == above_bin {
                    write!(f, " <- x\u{302} \u{b1} u(x\u{302})")?;
                }
                writeln!(f)?;
            }
        }

        writeln!(f, "  x\u{302} = {:.6}", self.summary.mean)?;
        write!(f, "  u(x\u{302}) = {:.6}", self.summary.std_dev)
    }
}
