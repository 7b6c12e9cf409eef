//! Siren output driver

use embedded_hal::digital::OutputPin;

use vigil_core::traits::Siren;

/// Siren driven by a GPIO output
///
/// `active` shadows the pin level; input reads are not available on an
/// output pin.
pub struct GpioSiren<P> {
    pin: P,
    active: bool,
}

impl<P: OutputPin> GpioSiren<P> {
    /// Create a siren driver; the output starts off
    pub fn new(mut pin: P) -> Self {
        let _ = pin.set_low();
        Self { pin, active: false }
    }
}

impl<P: OutputPin> Siren for GpioSiren<P> {
    fn set_active(&mut self, on: bool) {
        self.active = on;
        let _ = if on {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
    }

    fn is_active(&self) -> bool {
        self.active
    }
}
