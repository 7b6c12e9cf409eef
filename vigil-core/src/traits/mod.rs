//! Hardware abstraction traits
//!
//! These traits define the interface between the console/alarm logic
//! and hardware-specific implementations.

pub mod clock;
pub mod log;
pub mod panel;
pub mod serial;
pub mod sensor;
pub mod siren;
pub mod storage;

pub use clock::{Calendar, DateTime, DATE_TIME_TEXT_LEN};
pub use log::{EventLog, EVENT_TEXT_LEN};
pub use panel::AlarmPanel;
pub use serial::SerialPort;
pub use sensor::{GasDetector, OverTemperatureDetector, TemperatureSensor};
pub use siren::Siren;
pub use storage::{CodeStore, NonVolatileStorage, StorageError, StorageKey};
