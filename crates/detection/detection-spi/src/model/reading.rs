//! Sensor reading types.

use serde::{Deserialize, Serialize};

/// A single timestamped reading from one sensor.
///
/// Immutable once produced. A series is a slice of readings for one
/// sensor, sorted strictly by timestamp ascending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    /// Unix timestamp, seconds.
    pub timestamp: i64,
    /// Owning sensor.
    pub sensor_id: String,
    /// Measured value.
    pub value: f64,
}

impl SensorReading {
    /// Create a new reading.
    pub fn new(timestamp: i64, sensor_id: impl Into<String>, value: f64) -> Self {
        Self {
            timestamp,
            sensor_id: sensor_id.into(),
            value,
        }
    }
}

/// A reading paired with its deviation score and anomaly flag.
///
/// Derived on every query, never persisted; recomputed whenever the
/// window or threshold changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredReading {
    /// Unix timestamp, seconds.
    pub timestamp: i64,
    /// Owning sensor.
    pub sensor_id: String,
    /// Measured value.
    pub value: f64,
    /// Normalized deviation from the rolling baseline, >= 0.
    pub score: f64,
    /// Whether `score` exceeds the classifier threshold.
    pub is_anomaly: bool,
}

impl ScoredReading {
    /// Pair a reading with its score and flag.
    pub fn from_reading(reading: &SensorReading, score: f64, is_anomaly: bool) -> Self {
        Self {
            timestamp: reading.timestamp,
            sensor_id: reading.sensor_id.clone(),
            value: reading.value,
            score,
            is_anomaly,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_reading_copies_fields() {
        let reading = SensorReading::new(1_735_689_600, "s1", 0.42);
        let scored = ScoredReading::from_reading(&reading, 3.5, true);
        assert_eq!(scored.timestamp, reading.timestamp);
        assert_eq!(scored.sensor_id, "s1");
        assert_eq!(scored.value, 0.42);
        assert_eq!(scored.score, 3.5);
        assert!(scored.is_anomaly);
    }
}
