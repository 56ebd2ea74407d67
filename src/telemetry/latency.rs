//! Simulated latency for the `/hello` operation.

use rand::Rng;

use crate::config::LatencyConfig;

/// Inclusive delay range sampled uniformly per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    min_ms: u64,
    max_ms: u64,
}

impl LatencyProfile {
    /// Create a profile; bounds are swapped if given in reverse.
    pub fn new(min_ms: u64, max_ms: u64) -> Self {
        Self {
            min_ms: min_ms.min(max_ms),
            max_ms: min_ms.max(max_ms),
        }
    }

    /// A profile that always yields the same delay.
    pub fn fixed(delay_ms: u64) -> Self {
        Self::new(delay_ms, delay_ms)
    }

    pub fn min_ms(&self) -> u64 {
        self.min_ms
    }

    pub fn max_ms(&self) -> u64 {
        self.max_ms
    }

    /// Draw one delay in milliseconds.
    pub fn sample_ms(&self) -> u64 {
        rand::thread_rng().gen_range(self.min_ms..=self.max_ms)
    }
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self::from(&LatencyConfig::default())
    }
}

impl From<&LatencyConfig> for LatencyProfile {
    fn from(config: &LatencyConfig) -> Self {
        Self::new(config.min_delay_ms, config.max_delay_ms)
    }
}
