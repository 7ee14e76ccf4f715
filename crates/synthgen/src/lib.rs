//! Deterministic synthetic sensor-series generation.
//!
//! Produces labeled fixture data for exercising the detection engine:
//! a sinusoidal base signal with Gaussian noise, late-onset linear
//! drift, and three injected anomaly types (spikes, drops, frozen
//! segments), all reproducible from a [`GeneratorSpec`] seed.
//!
//! Multi-sensor fleets are composed from independent per-sensor
//! specs; see [`generate_fleet`] and [`default_fleet`].

mod error;
mod fleet;
mod generator;
mod spec;

pub use error::{Result, SynthError};
pub use fleet::{default_fleet, default_fleet_specs, generate_fleet};
pub use generator::{generate, generate_labeled, Injections, CADENCE_SECS, EPOCH};
pub use spec::GeneratorSpec;
