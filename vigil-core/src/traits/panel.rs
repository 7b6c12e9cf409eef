//! Collaborator facade consumed by the serial console

use heapless::String;

use crate::config::CODE_LENGTH;
use crate::traits::clock::{DateTime, DATE_TIME_TEXT_LEN};
use crate::traits::log::EVENT_TEXT_LEN;
use crate::traits::storage::StorageError;

/// Everything the serial console reads from or writes to the rest of
/// the panel
///
/// The console holds no sensor, siren, or storage logic of its own; a
/// panel implementation composes the individual drivers behind this
/// trait (see `vigil_drivers::Panel`).
pub trait AlarmPanel {
    /// Whether the siren is currently sounding
    fn siren_active(&self) -> bool;

    /// Whether gas is currently detected
    fn gas_detected(&mut self) -> bool;

    /// Whether the temperature is above the configured limit
    fn over_temperature(&mut self) -> bool;

    /// Current temperature in degrees Celsius
    fn temperature_celsius(&mut self) -> f32;

    /// Current temperature in degrees Fahrenheit
    fn temperature_fahrenheit(&mut self) -> f32;

    /// Persist a new deactivation code
    fn store_code(&mut self, code: &[u8; CODE_LENGTH]) -> Result<(), StorageError>;

    /// Set the date and time as one atomic write
    fn set_date_time(&mut self, dt: DateTime);

    /// Current date and time as display text
    fn date_time_text(&self) -> String<DATE_TIME_TEXT_LEN>;

    /// Number of events in the log
    fn stored_events(&self) -> usize;

    /// Event `index` as display text, `None` when out of range
    fn event_text(&self, index: usize) -> Option<String<EVENT_TEXT_LEN>>;
}
