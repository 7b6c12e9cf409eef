//! Sensor drivers

pub mod gas;
pub mod lm35;
pub mod threshold;

pub use gas::GpioGasDetector;
pub use lm35::{AdcReader, Lm35Sensor};
pub use threshold::ThresholdDetector;
