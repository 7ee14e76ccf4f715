//! Threshold classification and ranking of scored points.

use detection_api::ClassifierConfig;
use detection_spi::{AnomalySummary, Result, ScoredReading, SensorReading, SeriesScorer};

use crate::rolling::RollingZScore;

/// Threshold classifier over deviation scores.
///
/// Classification is stateless; `count` and `max_score` always cover
/// the full series, not just the ranked slice.
#[derive(Debug, Clone)]
pub struct Classifier {
    threshold: f64,
    top_k: usize,
}

impl Classifier {
    /// Create a classifier keeping the default number of ranked
    /// anomalies (10).
    pub fn new(threshold: f64) -> Self {
        Self::from_config(&ClassifierConfig::new(threshold))
    }

    /// Create a classifier with an explicit top-k.
    pub fn with_top_k(threshold: f64, top_k: usize) -> Self {
        Self { threshold, top_k }
    }

    /// Create from configuration.
    pub fn from_config(config: &ClassifierConfig) -> Self {
        Self {
            threshold: config.threshold,
            top_k: config.top_k,
        }
    }

    /// Get the threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Get the top-k limit.
    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// Per-point anomaly flags: strictly `score > threshold`.
    pub fn flags(&self, scores: &[f64]) -> Vec<bool> {
        scores.iter().map(|&s| s > self.threshold).collect()
    }

    /// Pair every reading with its score and flag.
    ///
    /// `readings` and `scores` must be the same length.
    pub fn scored(&self, readings: &[SensorReading], scores: &[f64]) -> Vec<ScoredReading> {
        debug_assert_eq!(readings.len(), scores.len());
        readings
            .iter()
            .zip(scores)
            .map(|(r, &s)| ScoredReading::from_reading(r, s, s > self.threshold))
            .collect()
    }

    /// Summarize an already-scored series.
    pub fn summarize(&self, scored: &[ScoredReading]) -> AnomalySummary {
        let count = scored.iter().filter(|r| r.is_anomaly).count();
        let max_score = scored.iter().map(|r| r.score).fold(0.0_f64, f64::max);

        let mut top: Vec<ScoredReading> = scored.iter().filter(|r| r.is_anomaly).cloned().collect();
        // Stable sort keeps chronological order among equal scores.
        top.sort_by(|a, b| b.score.total_cmp(&a.score));
        top.truncate(self.top_k);

        AnomalySummary::new(count, max_score, top)
    }

    /// Classify a series against its scores.
    pub fn classify(&self, readings: &[SensorReading], scores: &[f64]) -> AnomalySummary {
        self.summarize(&self.scored(readings, scores))
    }
}

/// Score and classify one sensor's series in a single call.
///
/// This is the contract the external consumer (dashboard, CLI) drives
/// on every parameter change: always a full recompute, no state or
/// caching between calls.
pub fn detect(
    readings: &[SensorReading],
    window: usize,
    threshold: f64,
    top_k: usize,
) -> Result<(Vec<ScoredReading>, AnomalySummary)> {
    let engine = RollingZScore::new(window)?;
    let values: Vec<f64> = readings.iter().map(|r| r.value).collect();
    let scores = engine.score(&values);

    let classifier = Classifier::with_top_k(threshold, top_k);
    let scored = classifier.scored(readings, &scores);
    let summary = classifier.summarize(&scored);
    Ok((scored, summary))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn readings_for(scores: &[f64]) -> Vec<SensorReading> {
        scores
            .iter()
            .enumerate()
            .map(|(i, _)| SensorReading::new(i as i64, "s1", i as f64))
            .collect()
    }

    #[test]
    fn test_threshold_is_strict() {
        let classifier = Classifier::new(3.0);
        let flags = classifier.flags(&[2.9, 3.0, 3.1]);
        assert_eq!(flags, vec![false, false, true]);
    }

    #[test]
    fn test_count_covers_full_series() {
        let scores = vec![5.0, 4.0, 6.0, 7.0, 8.0];
        let readings = readings_for(&scores);
        let classifier = Classifier::with_top_k(1.0, 2);
        let summary = classifier.classify(&readings, &scores);
        assert_eq!(summary.count, 5);
        assert_eq!(summary.top.len(), 2);
    }

    #[test]
    fn test_top_sorted_descending_ties_chronological() {
        let scores = vec![0.0, 4.0, 9.0, 4.0, 6.0];
        let readings = readings_for(&scores);
        let classifier = Classifier::new(3.0);
        let summary = classifier.classify(&readings, &scores);

        let ranked: Vec<(i64, f64)> = summary.top.iter().map(|r| (r.timestamp, r.score)).collect();
        assert_eq!(ranked, vec![(2, 9.0), (4, 6.0), (1, 4.0), (3, 4.0)]);
        for pair in summary.top.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_max_score_without_anomalies() {
        let scores = vec![0.5, 1.2, 0.8];
        let readings = readings_for(&scores);
        let summary = Classifier::new(3.0).classify(&readings, &scores);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.max_score, 1.2);
        assert!(summary.top.is_empty());
    }

    #[test]
    fn test_empty_series_yields_zero_summary() {
        let summary = Classifier::new(3.0).classify(&[], &[]);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.max_score, 0.0);
        assert!(summary.top.is_empty());
    }

    #[test]
    fn test_threshold_monotonicity() {
        let scores: Vec<f64> = (0..100).map(|i| ((i * 37) % 100) as f64 / 10.0).collect();
        let mut previous: Option<Vec<bool>> = None;
        for threshold in [1.0, 2.0, 3.0, 5.0, 8.0] {
            let flags = Classifier::new(threshold).flags(&scores);
            if let Some(prev) = &previous {
                // Raising the threshold can only shrink the anomaly set.
                for (lo, hi) in prev.iter().zip(&flags) {
                    assert!(!hi || *lo);
                }
            }
            previous = Some(flags);
        }
    }

    #[test]
    fn test_detect_pipeline_rejects_zero_window() {
        let readings = readings_for(&[0.0; 10]);
        assert!(detect(&readings, 0, 3.0, 10).is_err());
    }

    #[test]
    fn test_detect_is_idempotent() {
        let readings: Vec<SensorReading> = (0..300)
            .map(|i| SensorReading::new(i as i64, "s1", ((i as f64) * 0.3).sin()))
            .collect();
        let (scored_a, summary_a) = detect(&readings, 50, 3.0, 10).unwrap();
        let (scored_b, summary_b) = detect(&readings, 50, 3.0, 10).unwrap();
        assert_eq!(scored_a, scored_b);
        assert_eq!(summary_a.count, summary_b.count);
        assert_eq!(summary_a.max_score, summary_b.max_score);
        assert_eq!(summary_a.top, summary_b.top);
    }
}
