//! Board-agnostic core logic for the Vigil alarm panel firmware
//!
//! This crate contains all panel logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (serial port, siren, sensors, storage,
//!   calendar, event log)
//! - The collaborator facade consumed by the serial console
//! - Alarm state machine and hazard monitor
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod alarm;
pub mod config;
pub mod traits;

pub use config::{AlarmConfig, CODE_LENGTH};
