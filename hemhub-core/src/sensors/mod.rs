//! Simulated sensor readings.
//!
//! Readings are regenerated wholesale on every tick; no history is kept.
//! The generator draws from an injected seeded RNG so replayed sessions
//! produce identical feeds.

use std::ops::RangeInclusive;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// A full snapshot of the simulated environment. Each reading replaces the
/// prior one entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorReading {
    /// Degrees Celsius.
    pub temperature: i32,
    /// Relative humidity, percent.
    pub humidity: i32,
}

/// Uniform random generator for [`SensorReading`]s within fixed bounds.
pub struct SensorSimulator {
    rng: SmallRng,
    temperature: RangeInclusive<i32>,
    humidity: RangeInclusive<i32>,
}

impl SensorSimulator {
    pub fn new(seed: u64, temperature: RangeInclusive<i32>, humidity: RangeInclusive<i32>) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            temperature,
            humidity,
        }
    }

    /// Draws the next reading. Bounds are inclusive on both ends.
    pub fn sample(&mut self) -> SensorReading {
        SensorReading {
            temperature: self.rng.random_range(self.temperature.clone()),
            humidity: self.rng.random_range(self.humidity.clone()),
        }
    }

    pub fn temperature_bounds(&self) -> &RangeInclusive<i32> {
        &self.temperature
    }

    pub fn humidity_bounds(&self) -> &RangeInclusive<i32> {
        &self.humidity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn same_seed_same_feed() {
        let mut a = SensorSimulator::new(7, 5..=19, 20..=99);
        let mut b = SensorSimulator::new(7, 5..=19, 20..=99);
        for _ in 0..32 {
            assert_eq!(a.sample(), b.sample());
        }
    }

    proptest! {
        #[test]
        fn readings_stay_in_bounds(seed in any::<u64>()) {
            let mut sim = SensorSimulator::new(seed, 5..=19, 20..=99);
            for _ in 0..64 {
                let reading = sim.sample();
                prop_assert!((5..=19).contains(&reading.temperature));
                prop_assert!((20..=99).contains(&reading.humidity));
            }
        }
    }
}
