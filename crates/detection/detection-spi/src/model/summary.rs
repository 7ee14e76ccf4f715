//! Classification summary types.

use serde::{Deserialize, Serialize};

use super::reading::ScoredReading;

/// Summary of one classification pass over a sensor series.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnomalySummary {
    /// Number of anomalous points over the full series.
    pub count: usize,
    /// Maximum score over the full series, 0.0 for an empty series.
    pub max_score: f64,
    /// Anomalous points ranked by score descending, ties in
    /// chronological order, truncated to the classifier's top-k.
    pub top: Vec<ScoredReading>,
}

impl AnomalySummary {
    /// Create a new summary.
    pub fn new(count: usize, max_score: f64, top: Vec<ScoredReading>) -> Self {
        Self {
            count,
            max_score,
            top,
        }
    }

    /// True when no point exceeded the threshold.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_summary_is_empty() {
        let summary = AnomalySummary::default();
        assert!(summary.is_empty());
        assert_eq!(summary.count, 0);
        assert_eq!(summary.max_score, 0.0);
        assert!(summary.top.is_empty());
    }
}
