//! Alarm behavior
//!
//! The alarm is a latch: a hazard trips it, and only an accepted
//! deactivation code releases it.

pub mod machine;
pub mod monitor;

pub use machine::{AlarmEvent, AlarmState};
pub use monitor::HazardMonitor;
