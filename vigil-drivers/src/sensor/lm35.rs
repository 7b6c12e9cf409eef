//! LM35 analog temperature sensor
//!
//! The LM35 outputs 10 mV per °C with no offset, so conversion is a
//! straight scale from the ADC reading.

use vigil_core::traits::TemperatureSensor;

/// ADC reading trait for platform abstraction
pub trait AdcReader {
    /// Read ADC value (12-bit, 0-4095)
    #[allow(clippy::result_unit_err)]
    fn read(&mut self) -> Result<u16, ()>;
}

/// LM35 sensor on an ADC channel
pub struct Lm35Sensor<ADC> {
    adc: ADC,
    /// ADC reference voltage in mV
    vref_mv: u16,
    /// ADC resolution (typically 4096 for 12-bit)
    adc_max: u16,
    /// Last good reading (°C); reported while the ADC misbehaves
    last_celsius: f32,
}

impl<ADC: AdcReader> Lm35Sensor<ADC> {
    /// Create a new LM35 sensor
    ///
    /// # Arguments
    /// - `adc`: ADC channel the sensor output is wired to
    /// - `vref_mv`: Reference voltage in millivolts (typically 3300)
    pub fn new(adc: ADC, vref_mv: u16) -> Self {
        Self {
            adc,
            vref_mv,
            adc_max: 4096, // 12-bit ADC
            last_celsius: 0.0,
        }
    }

    /// Convert a raw ADC value to degrees Celsius
    ///
    /// LM35 transfer function: Vout = 10 mV/°C × T
    pub fn adc_to_celsius(&self, adc_value: u16) -> f32 {
        let millivolts = f32::from(adc_value) * f32::from(self.vref_mv) / f32::from(self.adc_max);
        millivolts / 10.0
    }
}

impl<ADC: AdcReader> TemperatureSensor for Lm35Sensor<ADC> {
    fn read_celsius(&mut self) -> f32 {
        if let Ok(raw) = self.adc.read() {
            self.last_celsius = self.adc_to_celsius(raw);
        }
        self.last_celsius
    }
}
