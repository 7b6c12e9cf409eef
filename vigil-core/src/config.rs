//! Configuration type definitions
//!
//! The panel configuration is stored in non-volatile storage as
//! postcard-serialized binary data.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of key presses in a deactivation code
pub const CODE_LENGTH: usize = 4;

/// Factory default deactivation code
pub const DEFAULT_CODE: [u8; CODE_LENGTH] = *b"1805";

/// Factory default over-temperature limit (°C)
pub const DEFAULT_OVER_TEMP_LIMIT_C: f32 = 50.0;

/// Persisted panel configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AlarmConfig {
    /// Deactivation code digits (ASCII)
    pub code: [u8; CODE_LENGTH],
    /// Temperature above which the over-temperature hazard trips (°C)
    pub over_temp_limit_c: f32,
}

impl Default for AlarmConfig {
    fn default() -> Self {
        Self {
            code: DEFAULT_CODE,
            over_temp_limit_c: DEFAULT_OVER_TEMP_LIMIT_C,
        }
    }
}
