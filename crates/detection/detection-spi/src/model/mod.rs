mod reading;
mod summary;

pub use reading::{ScoredReading, SensorReading};
pub use summary::AnomalySummary;
