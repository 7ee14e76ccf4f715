//! Generation parameters.

use serde::{Deserialize, Serialize};

/// Parameters fully determining one generated sensor series.
///
/// Two calls with the same spec produce identical output. Only
/// within-implementation determinism is promised; the byte-exact
/// stream is not portable across releases of the random backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorSpec {
    /// Number of samples.
    pub n: usize,
    /// Seed for this sensor's random stream.
    pub seed: u64,
    /// Sensor identifier stamped on every reading.
    pub sensor_id: String,
    /// Multiplicative post-transform applied to every value.
    pub scale: f64,
    /// Additive post-transform applied after `scale`.
    pub offset: f64,
    /// Standard deviation of extra per-sample Gaussian noise added
    /// after the post-transform; 0.0 disables it.
    pub extra_noise_std: f64,
}

impl GeneratorSpec {
    /// Identity-transform spec: no rescale, no extra noise.
    pub fn new(n: usize, seed: u64, sensor_id: impl Into<String>) -> Self {
        Self {
            n,
            seed,
            sensor_id: sensor_id.into(),
            scale: 1.0,
            offset: 0.0,
            extra_noise_std: 0.0,
        }
    }

    /// Apply `value = scale * value + offset` to every sample.
    pub fn with_transform(mut self, scale: f64, offset: f64) -> Self {
        self.scale = scale;
        self.offset = offset;
        self
    }

    /// Add Gaussian noise of the given standard deviation to every
    /// sample, after the post-transform.
    pub fn with_extra_noise(mut self, extra_noise_std: f64) -> Self {
        self.extra_noise_std = extra_noise_std;
        self
    }
}
