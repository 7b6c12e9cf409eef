//! Serial command console for the Vigil alarm panel
//!
//! Byte-driven operator interface over the panel's UART. A host
//! terminal types single-character commands; the console answers with
//! status lines and runs three multi-byte dialogues (unlock code, new
//! code, date/time) without ever blocking on input.
//!
//! # Wire protocol
//!
//! Commands are single ASCII characters, answered with
//! `\r\n`-terminated lines:
//!
//! ```text
//! '1'      alarm state           '4'      enter deactivation code
//! '2'      gas detector state    '5'      enter new code
//! '3'      over temperature      's'/'S'  set date and time
//! 'c'/'C'  temperature (°C)      't'/'T'  show date and time
//! 'f'/'F'  temperature (°F)      'e'/'E'  dump stored events
//! ```
//!
//! Any other byte re-prints the command listing. Code digits are
//! echoed as `*`; the date/time dialogue prompts for six fields in
//! sequence (year, month, day, hour, minute, second) and commits them
//! as one atomic write to the calendar.
//!
//! The console performs no I/O of its own: reception is fed one byte
//! at a time by the host loop, and every echo and prompt goes through
//! the caller's [`SerialPort`](vigil_core::traits::SerialPort).

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod console;
pub mod datetime;

pub use console::{Console, Mode};
pub use datetime::{DateTimeDraft, Stage};
