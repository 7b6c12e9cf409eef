//! Over-temperature threshold detector

use vigil_core::traits::{OverTemperatureDetector, TemperatureSensor};

/// Over-temperature detector over any temperature sensor
///
/// Trips strictly above the limit; a reading at the limit is still in
/// range.
pub struct ThresholdDetector<S> {
    sensor: S,
    limit_c: f32,
}

impl<S: TemperatureSensor> ThresholdDetector<S> {
    /// Wrap a sensor with the given limit (°C)
    pub fn new(sensor: S, limit_c: f32) -> Self {
        Self { sensor, limit_c }
    }

    /// Limit in effect (°C)
    pub fn limit_c(&self) -> f32 {
        self.limit_c
    }

    /// Access to the underlying sensor
    pub fn sensor_mut(&mut self) -> &mut S {
        &mut self.sensor
    }
}

impl<S: TemperatureSensor> TemperatureSensor for ThresholdDetector<S> {
    fn read_celsius(&mut self) -> f32 {
        self.sensor.read_celsius()
    }

    fn read_fahrenheit(&mut self) -> f32 {
        self.sensor.read_fahrenheit()
    }
}

impl<S: TemperatureSensor> OverTemperatureDetector for ThresholdDetector<S> {
    fn over_temperature(&mut self) -> bool {
        self.sensor.read_celsius() > self.limit_c
    }
}
