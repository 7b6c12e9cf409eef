//! Gas detector input driver

use embedded_hal::digital::InputPin;

use vigil_core::traits::GasDetector;

/// Gas detector on an active-high GPIO input
///
/// A pin read that fails reports "no gas" rather than wedging the
/// poll loop.
pub struct GpioGasDetector<P> {
    pin: P,
}

impl<P: InputPin> GpioGasDetector<P> {
    /// Create a detector over the given input pin
    pub fn new(pin: P) -> Self {
        Self { pin }
    }
}

impl<P: InputPin> GasDetector for GpioGasDetector<P> {
    fn gas_detected(&mut self) -> bool {
        self.pin.is_high().unwrap_or(false)
    }
}
