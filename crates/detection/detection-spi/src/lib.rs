//! Sensor Anomaly Detection Service Provider Interface
//!
//! Defines traits and types for rolling-baseline anomaly detection
//! over per-sensor time series.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::SeriesScorer;
pub use error::{DetectionError, Result};
pub use model::{AnomalySummary, ScoredReading, SensorReading};
