//! Detection Facade
//!
//! Unified re-exports for the detection module.
//!
//! This facade provides a single entry point to all detection
//! functionality:
//! - `SeriesScorer` trait, model and error types from SPI
//! - Configuration types from API
//! - `RollingZScore`, `Classifier` and the `detect` pipeline from Core

// Re-export everything from SPI
pub use detection_spi::*;

// Re-export everything from API
pub use detection_api::*;

// Re-export everything from Core
pub use detection_core::*;
