//! Single-sensor series construction.

use std::f64::consts::PI;

use detection_spi::SensorReading;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::Normal;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SynthError};
use crate::spec::GeneratorSpec;

/// First sample timestamp: 2025-01-01T00:00:00 UTC.
pub const EPOCH: i64 = 1_735_689_600;

/// Sample cadence, seconds.
pub const CADENCE_SECS: i64 = 1;

// Base signal and drift shape.
const BASE_AMPLITUDE: f64 = 0.6;
const BASE_SWEEP_RADIANS: f64 = 20.0 * PI;
const BASE_NOISE_STD: f64 = 0.05;
const DRIFT_ONSET_FRACTION: f64 = 0.55;
const DRIFT_MAGNITUDE: f64 = 1.2;

// Injected anomaly shape. Spike and drop indices are drawn from
// [EDGE_MARGIN, n - EDGE_MARGIN); frozen segments start within
// [FREEZE_START_MIN, n - FREEZE_END_MARGIN). The end margin exceeds
// the maximum segment length, so segments always fit.
const EDGE_MARGIN: usize = 200;
const SPIKE_COUNT: usize = 18;
const SPIKE_MEAN: f64 = 2.5;
const SPIKE_STD: f64 = 0.6;
const DROP_COUNT: usize = 10;
const DROP_MEAN: f64 = 2.2;
const DROP_STD: f64 = 0.5;
const FREEZE_COUNT: usize = 3;
const FREEZE_START_MIN: usize = 300;
const FREEZE_END_MARGIN: usize = 400;
const FREEZE_LEN_MIN: usize = 40;
const FREEZE_LEN_MAX: usize = 120;
const FREEZE_NOISE_STD: f64 = 0.005;

/// Ground-truth injection sites for one generated series.
///
/// Frozen segments are applied after spikes and drops, so a segment
/// may overwrite an earlier injection; labels record where anomalies
/// were injected, not which survived.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Injections {
    /// Indices that received an additive spike, ascending.
    pub spikes: Vec<usize>,
    /// Indices that received a subtractive drop, ascending.
    pub drops: Vec<usize>,
    /// Frozen segments as (start, length), ascending by start.
    pub frozen: Vec<(usize, usize)>,
}

impl Injections {
    /// True when `index` falls inside any frozen segment.
    pub fn in_frozen(&self, index: usize) -> bool {
        self.frozen
            .iter()
            .any(|&(start, len)| index >= start && index < start + len)
    }
}

/// Generate one sensor's series, deterministic per `spec`.
pub fn generate(spec: &GeneratorSpec) -> Result<Vec<SensorReading>> {
    generate_labeled(spec).map(|(readings, _)| readings)
}

/// Generate one sensor's series along with its injection labels.
///
/// Construction order: sinusoidal base with Gaussian noise, late
/// linear drift, spike injections, drop injections, frozen segments,
/// then the spec's post-transform and optional extra noise. Spike and
/// drop index pools are drawn independently and may overlap, in which
/// case both perturbations apply at the shared index.
pub fn generate_labeled(spec: &GeneratorSpec) -> Result<(Vec<SensorReading>, Injections)> {
    validate(spec)?;

    let n = spec.n;
    let mut rng = StdRng::seed_from_u64(spec.seed);
    let base_noise = Normal::new(0.0, BASE_NOISE_STD).expect("constant std");

    // Base: slow sweep of 10 sine cycles plus per-sample noise.
    let mut values: Vec<f64> = (0..n)
        .map(|i| {
            let phase = BASE_SWEEP_RADIANS * i as f64 / (n - 1) as f64;
            BASE_AMPLITUDE * phase.sin() + rng.sample(base_noise)
        })
        .collect();

    // Drift: flat until the onset index, then a linear ramp to full
    // magnitude at the final sample.
    let drift_start = (n as f64 * DRIFT_ONSET_FRACTION) as usize;
    let ramp_len = n - drift_start;
    for (j, value) in values[drift_start..].iter_mut().enumerate() {
        *value += DRIFT_MAGNITUDE * j as f64 / (ramp_len - 1) as f64;
    }

    let mut labels = Injections::default();

    // Spikes: distinct indices away from the series edges.
    let pool = n - 2 * EDGE_MARGIN;
    let spike_noise = Normal::new(SPIKE_MEAN, SPIKE_STD).expect("constant std");
    for idx in rand::seq::index::sample(&mut rng, pool, SPIKE_COUNT) {
        let at = EDGE_MARGIN + idx;
        values[at] += rng.sample(spike_noise);
        labels.spikes.push(at);
    }

    // Drops: an independent pool over the same range.
    let drop_noise = Normal::new(DROP_MEAN, DROP_STD).expect("constant std");
    for idx in rand::seq::index::sample(&mut rng, pool, DROP_COUNT) {
        let at = EDGE_MARGIN + idx;
        values[at] -= rng.sample(drop_noise);
        labels.drops.push(at);
    }

    // Frozen segments: hold the segment's starting value, simulating
    // a stuck sensor.
    let freeze_noise = Normal::new(0.0, FREEZE_NOISE_STD).expect("constant std");
    for _ in 0..FREEZE_COUNT {
        let start = rng.gen_range(FREEZE_START_MIN..n - FREEZE_END_MARGIN);
        let len = rng.gen_range(FREEZE_LEN_MIN..FREEZE_LEN_MAX);
        let held = values[start];
        for value in &mut values[start..start + len] {
            *value = held + rng.sample(freeze_noise);
        }
        labels.frozen.push((start, len));
    }

    labels.spikes.sort_unstable();
    labels.drops.sort_unstable();
    labels.frozen.sort_unstable();

    // Per-sensor distortion from the spec, drawn from the same seeded
    // stream so the spec alone determines the output.
    let extra_noise = Normal::new(0.0, spec.extra_noise_std).expect("validated std");
    for value in &mut values {
        *value = spec.scale * *value + spec.offset;
        if spec.extra_noise_std > 0.0 {
            *value += rng.sample(extra_noise);
        }
    }

    let readings = values
        .into_iter()
        .enumerate()
        .map(|(i, value)| SensorReading {
            timestamp: EPOCH + i as i64 * CADENCE_SECS,
            sensor_id: spec.sensor_id.clone(),
            value,
        })
        .collect();

    Ok((readings, labels))
}

fn validate(spec: &GeneratorSpec) -> Result<()> {
    let n = spec.n;
    if n == 0 {
        return Err(SynthError::invalid("n must be > 0"));
    }
    if !spec.extra_noise_std.is_finite() || spec.extra_noise_std < 0.0 {
        return Err(SynthError::invalid("extra_noise_std must be finite and >= 0"));
    }
    let pool = n.saturating_sub(2 * EDGE_MARGIN);
    let needed = SPIKE_COUNT.max(DROP_COUNT);
    if pool < needed {
        return Err(SynthError::invalid(format!(
            "n = {} leaves a spike/drop index pool of {}, need at least {}",
            n, pool, needed
        )));
    }
    if n.saturating_sub(FREEZE_END_MARGIN) <= FREEZE_START_MIN {
        return Err(SynthError::invalid(format!(
            "n = {} leaves no room for frozen segments, need n > {}",
            n,
            FREEZE_START_MIN + FREEZE_END_MARGIN
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_n() {
        let err = generate(&GeneratorSpec::new(0, 1, "s1")).unwrap_err();
        assert!(err.to_string().contains("n must be > 0"));
    }

    #[test]
    fn test_rejects_pool_too_small() {
        // Pool [200, n-200) cannot supply 18 distinct spike indices.
        assert!(generate(&GeneratorSpec::new(410, 1, "s1")).is_err());
    }

    #[test]
    fn test_rejects_no_freeze_room() {
        // Spike pool fits but [300, n-400) is empty.
        assert!(generate(&GeneratorSpec::new(700, 1, "s1")).is_err());
        assert!(generate(&GeneratorSpec::new(701, 1, "s1")).is_ok());
    }

    #[test]
    fn test_rejects_negative_extra_noise() {
        let spec = GeneratorSpec::new(1000, 1, "s1").with_extra_noise(-0.1);
        assert!(generate(&spec).is_err());
    }

    #[test]
    fn test_injection_counts_and_ranges() {
        let n = 6000;
        let (_, labels) = generate_labeled(&GeneratorSpec::new(n, 42, "s1")).unwrap();
        assert_eq!(labels.spikes.len(), SPIKE_COUNT);
        assert_eq!(labels.drops.len(), DROP_COUNT);
        assert_eq!(labels.frozen.len(), FREEZE_COUNT);

        for &at in labels.spikes.iter().chain(&labels.drops) {
            assert!((EDGE_MARGIN..n - EDGE_MARGIN).contains(&at));
        }
        for &(start, len) in &labels.frozen {
            assert!((FREEZE_START_MIN..n - FREEZE_END_MARGIN).contains(&start));
            assert!((FREEZE_LEN_MIN..FREEZE_LEN_MAX).contains(&len));
            assert!(start + len <= n);
        }

        // Pools are distinct within themselves.
        let mut spikes = labels.spikes.clone();
        spikes.dedup();
        assert_eq!(spikes.len(), SPIKE_COUNT);
    }

    #[test]
    fn test_frozen_segment_is_flat() {
        let (readings, labels) = generate_labeled(&GeneratorSpec::new(6000, 7, "s1")).unwrap();
        let (start, len) = labels.frozen[0];
        // Skip segments overwritten by a later overlapping segment.
        let overwritten = labels
            .frozen
            .iter()
            .skip(1)
            .any(|&(s, l)| s < start + len && start < s + l);
        if overwritten {
            return;
        }
        let held = readings[start].value;
        for r in &readings[start..start + len] {
            assert!(
                (r.value - held).abs() < 0.05,
                "frozen sample {} strayed from {}",
                r.value,
                held
            );
        }
    }
}
