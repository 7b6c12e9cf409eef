//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in vigil-core for the alarm panel's peripherals:
//!
//! - Siren output (GPIO latch)
//! - Gas detector (GPIO input)
//! - Temperature sensing (LM35 over ADC, over-temperature threshold)
//! - Code storage (postcard-encoded configuration record)
//! - Calendar clock (software wall clock)
//! - Event log (bounded ring buffer)
//! - The [`Panel`] aggregate wiring one of each behind the console's
//!   collaborator facade

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod code;
pub mod event_log;
pub mod panel;
pub mod sensor;
pub mod siren;
pub mod storage;

pub use panel::Panel;
