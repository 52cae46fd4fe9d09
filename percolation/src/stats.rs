use std::fmt::Display;

use log::{debug, info, trace};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{Error, Percolation, Result};

////////////////////////////////////////////////////////////////////////////////

/// z-score of the two-sided 95% confidence interval.
pub const CONFIDENCE_95: f64 = 1.96;

/// Returns the arithmetic mean of `samples`, or NaN if there are none.
pub fn mean(samples: &[f64]) -> f64 {
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Returns the sample standard deviation of `samples` (denominator
/// `len - 1`), or NaN for fewer than two samples.
pub fn stddev(samples: &[f64]) -> f64 {
    if samples.len() < 2 {
        return f64::NAN;
    }
    let mean = mean(samples);
    let sum_sq = samples.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>();
    (sum_sq / (samples.len() - 1) as f64).sqrt()
}

////////////////////////////////////////////////////////////////////////////////

/// Opens uniformly random blocked sites of a fresh `n`-by-`n` grid until it
/// percolates, and returns the fraction of sites that had to be opened.
///
/// # Errors
///
/// [`Error::InvalidGridSize`] if `n` is 0 or too large to index.
pub fn run_trial<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<f64> {
    let mut grid = Percolation::new(n)?;
    let mut opened = 0usize;

    while !grid.percolates() {
        let (row, col) = loop {
            let row = rng.gen_range(0..n) + 1;
            let col = rng.gen_range(0..n) + 1;
            if !grid.is_open(row, col)? {
                break (row, col);
            }
        };
        grid.open(row, col)?;
        opened += 1;
    }

    trace!("percolated after {opened} sites:\n{grid}");
    Ok(opened as f64 / grid.sites() as f64)
}

////////////////////////////////////////////////////////////////////////////////

/// Percolation thresholds of independent random trials, summarized by their
/// mean, standard deviation and 95% confidence interval.
#[derive(Debug, Clone)]
pub struct PercolationStats {
    thresholds: Vec<f64>,
    mean: f64,
    stddev: f64,
    confidence_lo: f64,
    confidence_hi: f64,
}

impl PercolationStats {
    /// Runs `trials` experiments on `n`-by-`n` grids using a generator seeded
    /// from the operating system.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidGridSize`] if `n` is 0, [`Error::InvalidTrials`] if
    /// `trials` is 0.
    pub fn new(n: usize, trials: usize) -> Result<Self> {
        Self::with_rng(n, trials, StdRng::from_entropy())
    }

    /// Same as [`new`](Self::new), drawing sites from `rng`. A seeded
    /// generator makes the whole experiment reproducible.
    ///
    /// With a single trial the standard deviation and both confidence bounds
    /// are NaN.
    pub fn with_rng<R: Rng>(n: usize, trials: usize, mut rng: R) -> Result<Self> {
        if n == 0 {
            return Err(Error::InvalidGridSize(n));
        }
        if trials == 0 {
            return Err(Error::InvalidTrials(trials));
        }

        let mut thresholds = Vec::with_capacity(trials);
        for i in 0..trials {
            let threshold = run_trial(n, &mut rng)?;
            debug!("trial {}/{trials}: threshold {threshold}", i + 1);
            thresholds.push(threshold);
        }

        let mean = mean(&thresholds);
        let stddev = stddev(&thresholds);
        let half_width = CONFIDENCE_95 * stddev / (trials as f64).sqrt();
        info!("n = {n}, trials = {trials}: mean {mean}, stddev {stddev}");

        Ok(Self {
            thresholds,
            mean,
            stddev,
            confidence_lo: mean - half_width,
            confidence_hi: mean + half_width,
        })
    }

    pub fn trials(&self) -> usize {
        self.thresholds.len()
    }

    /// Per-trial thresholds in the order the trials ran.
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn stddev(&self) -> f64 {
        self.stddev
    }

    pub fn confidence_lo(&self) -> f64 {
        self.confidence_lo
    }

    pub fn confidence_hi(&self) -> f64 {
        self.confidence_hi
    }
}

impl Display for PercolationStats {
    /// Writes the three-line summary. Values always keep a fractional part,
    /// so a whole mean prints as `1.0`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "mean                    = {:?}", self.mean)?;
        writeln!(f, "stddev                  = {:?}", self.stddev)?;
        writeln!(
            f,
            "95% confidence interval = [{:?}, {:?}]",
            self.confidence_lo, self.confidence_hi
        )
    }
}

////////////////////////////////////////////////////////////////////////////////
