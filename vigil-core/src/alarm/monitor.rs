//! Hazard monitor
//!
//! Edge-detects the raw hazard inputs into alarm events, so a
//! sustained hazard raises one event per excursion instead of one per
//! poll.

use super::machine::AlarmEvent;

/// Hazard monitor for the gas and over-temperature inputs
#[derive(Debug, Clone, Default)]
pub struct HazardMonitor {
    /// Gas input level on the previous sample
    gas_was_detected: bool,
    /// Over-temperature condition on the previous sample
    was_over_temp: bool,
}

impl HazardMonitor {
    /// Create a monitor with both inputs at rest
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one sample of both hazard inputs
    ///
    /// Returns the event this sample raises, if any. Gas takes
    /// precedence when both hazards rise on the same sample; the
    /// temperature excursion is still marked seen, and the latch is
    /// already held either way.
    pub fn update(&mut self, gas_detected: bool, over_temperature: bool) -> Option<AlarmEvent> {
        let gas_edge = gas_detected && !self.gas_was_detected;
        let temp_edge = over_temperature && !self.was_over_temp;

        self.gas_was_detected = gas_detected;
        self.was_over_temp = over_temperature;

        if gas_edge {
            Some(AlarmEvent::GasDetected)
        } else if temp_edge {
            Some(AlarmEvent::OverTemperature)
        } else {
            None
        }
    }
}
