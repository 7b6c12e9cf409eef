//! Siren output trait

/// Trait for the siren output
///
/// Implementations drive the siren element via GPIO, a relay, or PWM.
pub trait Siren {
    /// Turn the siren on or off
    fn set_active(&mut self, on: bool);

    /// Check if the siren is currently sounding
    fn is_active(&self) -> bool;
}
