//! # Fault-injecting random source.
//!
//! [`FlakySensor`] simulates a sensor that usually answers and sometimes does
//! not: each pull independently fails with a fixed probability (default: 1 in
//! 10), otherwise it reports a uniformly random value. The failures are a
//! deliberate fault-injection policy for exercising consumer error paths, not
//! a defect to be retried away: the first failure a subscription observes
//! terminates that stream.

use std::sync::Arc;

use async_trait::async_trait;
use rand::Rng;

use crate::error::FetchError;
use crate::sensors::reading::Reading;
use crate::sensors::source::Source;

/// Simulated readings fall in this half-open range.
const VALUE_RANGE: std::ops::Range<i32> = 0..100;

/// Random sensor source with configurable fault injection.
///
/// ### Properties
/// - **Stateless**: pulls share nothing; each one draws fresh randomness.
/// - **Fault model**: every pull fails independently with
///   [`fault_probability`](FlakySensor::fault_probability).
/// - **Value model**: successful pulls report a uniform value in `0..100`.
#[derive(Clone, Copy, Debug)]
pub struct FlakySensor {
    fault_probability: f64,
}

impl FlakySensor {
    /// Creates a sensor that fails each pull with probability
    /// `fault_probability`.
    ///
    /// The probability is clamped to `[0.0, 1.0]`: `0.0` never fails and
    /// `1.0` always fails. A NaN input is treated as `0.0`.
    ///
    /// # Example
    /// ```
    /// use pullstream::FlakySensor;
    ///
    /// assert_eq!(FlakySensor::new(0.25).fault_probability(), 0.25);
    /// assert_eq!(FlakySensor::new(7.0).fault_probability(), 1.0);
    /// ```
    pub fn new(fault_probability: f64) -> Self {
        let fault_probability = if fault_probability.is_nan() {
            0.0
        } else {
            fault_probability.clamp(0.0, 1.0)
        };
        Self { fault_probability }
    }

    /// Creates the sensor and returns it as a shared handle.
    pub fn arc(fault_probability: f64) -> Arc<Self> {
        Arc::new(Self::new(fault_probability))
    }

    /// Returns the effective per-pull failure probability.
    pub fn fault_probability(&self) -> f64 {
        self.fault_probability
    }
}

impl Default for FlakySensor {
    /// Returns a sensor with the classic 1-in-10 failure model.
    fn default() -> Self {
        Self::new(0.1)
    }
}

#[async_trait]
impl Source for FlakySensor {
    async fn fetch(&self, subject: Arc<str>) -> Result<Reading, FetchError> {
        let mut rng = rand::rng();
        if rng.random_bool(self.fault_probability) {
            return Err(FetchError::failed(subject.as_ref(), "sensor misread"));
        }
        Ok(Reading::new(subject, rng.random_range(VALUE_RANGE)))
    }
}
