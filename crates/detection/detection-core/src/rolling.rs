//! Rolling z-score scoring engine.

use detection_api::RollingConfig;
use detection_spi::{DetectionError, Result, SeriesScorer};

/// Accumulator updates between full recomputes of the window moments.
/// Bounds floating-point drift from the incremental add/remove path.
const REFRESH_INTERVAL: usize = 4096;

/// Relative floor below which a window's standard deviation is treated
/// as zero. Incremental updates can leave a tiny positive residue on
/// windows that are actually flat.
const STD_FLOOR: f64 = 1e-6;

/// Rolling z-score engine.
///
/// Scores each point by its absolute distance from the trailing-window
/// mean, normalized by the trailing-window standard deviation. The
/// standard deviation is the sample estimate (ddof = 1). Points seen
/// before `min_periods` samples have accumulated, and points whose
/// window is flat, score 0.0 - a score is never NaN or infinite.
///
/// Scoring is a single pass with O(1) amortized work per point,
/// independent of the window length.
#[derive(Debug, Clone)]
pub struct RollingZScore {
    window: usize,
}

impl RollingZScore {
    /// Create an engine with the given trailing window length.
    ///
    /// # Errors
    ///
    /// `DetectionError::InvalidWindow` when `window < 1`.
    pub fn new(window: usize) -> Result<Self> {
        if window < 1 {
            return Err(DetectionError::InvalidWindow { window });
        }
        Ok(Self { window })
    }

    /// Create from configuration.
    pub fn from_config(config: &RollingConfig) -> Result<Self> {
        Self::new(config.window)
    }

    /// Get the window length.
    pub fn window(&self) -> usize {
        self.window
    }
}

impl SeriesScorer for RollingZScore {
    fn min_periods(&self) -> usize {
        (self.window / 5).max(5)
    }

    fn score(&self, values: &[f64]) -> Vec<f64> {
        let min_periods = self.min_periods();
        let mut scores = Vec::with_capacity(values.len());
        let mut moments = Moments::default();

        for (i, &value) in values.iter().enumerate() {
            moments.push(value);
            if i >= self.window {
                moments.remove(values[i - self.window]);
            }
            if moments.updates >= REFRESH_INTERVAL {
                let start = (i + 1).saturating_sub(self.window);
                moments.recompute(&values[start..=i]);
            }

            let score = if moments.count < min_periods {
                0.0
            } else {
                let std = moments.sample_std();
                if std > STD_FLOOR * moments.mean.abs().max(1.0) {
                    (value - moments.mean).abs() / std
                } else {
                    0.0
                }
            };
            scores.push(score);
        }

        scores
    }
}

/// Sliding mean/M2 accumulator: Welford updates extended with removal.
///
/// Pushing a value equal to the current mean leaves M2 untouched, so a
/// window of identical values reports exactly zero variance.
#[derive(Debug, Default)]
struct Moments {
    count: usize,
    mean: f64,
    m2: f64,
    updates: usize,
}

impl Moments {
    fn push(&mut self, value: f64) {
        self.count += 1;
        self.updates += 1;
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (value - self.mean);
    }

    fn remove(&mut self, value: f64) {
        debug_assert!(self.count > 0);
        if self.count == 1 {
            let updates = self.updates + 1;
            *self = Moments {
                updates,
                ..Moments::default()
            };
            return;
        }
        self.count -= 1;
        self.updates += 1;
        let delta = value - self.mean;
        self.mean -= delta / self.count as f64;
        self.m2 -= delta * (value - self.mean);
        if self.m2 < 0.0 {
            self.m2 = 0.0;
        }
    }

    /// Rebuild moments from the window contents, discarding any
    /// accumulated rounding error. A window of identical values is
    /// reset to exactly zero variance.
    fn recompute(&mut self, window: &[f64]) {
        debug_assert!(!window.is_empty());
        self.updates = 0;
        self.count = window.len();
        if window.iter().all(|&v| v == window[0]) {
            self.mean = window[0];
            self.m2 = 0.0;
            return;
        }
        let mean = window.iter().sum::<f64>() / window.len() as f64;
        self.mean = mean;
        self.m2 = window.iter().map(|&v| (v - mean) * (v - mean)).sum();
    }

    fn sample_std(&self) -> f64 {
        if self.count < 2 {
            return 0.0;
        }
        (self.m2 / (self.count - 1) as f64).sqrt()
    }
}
