//! Detection API
//!
//! Configuration types and defaults for the rolling scoring engine
//! and the threshold classifier.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use detection_spi::{
    AnomalySummary, DetectionError, Result, ScoredReading, SensorReading, SeriesScorer,
};

// ============================================================================
// Engine Configuration
// ============================================================================

/// Rolling window configuration.
///
/// The dashboard consumer exposes windows in [20, 200]; the engine
/// itself accepts any window >= 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RollingConfig {
    /// Trailing window length in samples (default: 50).
    pub window: usize,
}

impl Default for RollingConfig {
    fn default() -> Self {
        Self { window: 50 }
    }
}

impl RollingConfig {
    pub fn new(window: usize) -> Self {
        Self { window }
    }
}

// ============================================================================
// Classifier Configuration
// ============================================================================

/// Threshold classifier configuration.
///
/// The dashboard consumer exposes thresholds in [1.5, 5.0]; the
/// classifier itself accepts any value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Score threshold; points score strictly above it are anomalous
    /// (default: 3.0).
    pub threshold: f64,
    /// Number of ranked anomalies retained in a summary (default: 10).
    pub top_k: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            threshold: 3.0,
            top_k: 10,
        }
    }
}

impl ClassifierConfig {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }

    pub fn with_top_k(threshold: f64, top_k: usize) -> Self {
        Self { threshold, top_k }
    }
}
