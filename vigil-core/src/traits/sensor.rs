//! Gas and temperature sensor traits

/// Trait for gas detectors
pub trait GasDetector {
    /// True while gas is being detected
    ///
    /// Takes `&mut self` because pin and ADC reads typically require
    /// mutable access.
    fn gas_detected(&mut self) -> bool;
}

/// Trait for ambient temperature sensors
///
/// Implementations handle the specific sensor type (LM35, NTC
/// thermistor, thermocouple, ...).
pub trait TemperatureSensor {
    /// Read the current temperature in degrees Celsius
    fn read_celsius(&mut self) -> f32;

    /// Read the current temperature in degrees Fahrenheit
    fn read_fahrenheit(&mut self) -> f32 {
        self.read_celsius() * 9.0 / 5.0 + 32.0
    }
}

/// Trait for over-temperature detectors
pub trait OverTemperatureDetector {
    /// True while the temperature is above the configured limit
    fn over_temperature(&mut self) -> bool;
}
