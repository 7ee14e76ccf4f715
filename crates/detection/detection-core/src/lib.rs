//! Detection Core
//!
//! Rolling z-score scoring engine, threshold classifier, and the
//! one-call `detect` pipeline over a single sensor's series.

mod classify;
mod rolling;

pub use classify::{detect, Classifier};
pub use rolling::RollingZScore;
