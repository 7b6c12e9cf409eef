//! Panel aggregate
//!
//! Wires one driver of each kind behind the collaborator facade the
//! serial console consumes, and runs the hazard/alarm side of the
//! panel: sampling the detectors, latching the siren, logging
//! excursions, and checking deactivation attempts.

use heapless::String;

use vigil_core::alarm::{AlarmEvent, AlarmState, HazardMonitor};
use vigil_core::config::CODE_LENGTH;
use vigil_core::traits::{
    AlarmPanel, Calendar, CodeStore, DateTime, EventLog, GasDetector, OverTemperatureDetector,
    Siren, StorageError, TemperatureSensor, DATE_TIME_TEXT_LEN, EVENT_TEXT_LEN,
};

/// One driver of each kind, plus the alarm latch
pub struct Panel<S, G, T, C, K, L> {
    siren: S,
    gas: G,
    temperature: T,
    codes: C,
    clock: K,
    log: L,
    state: AlarmState,
    monitor: HazardMonitor,
}

impl<S, G, T, C, K, L> Panel<S, G, T, C, K, L>
where
    S: Siren,
    G: GasDetector,
    T: TemperatureSensor + OverTemperatureDetector,
    C: CodeStore,
    K: Calendar,
    L: EventLog,
{
    /// Assemble a panel; the alarm starts quiet
    pub fn new(siren: S, gas: G, temperature: T, codes: C, clock: K, log: L) -> Self {
        Self {
            siren,
            gas,
            temperature,
            codes,
            clock,
            log,
            state: AlarmState::Quiet,
            monitor: HazardMonitor::new(),
        }
    }

    /// Current alarm state
    pub fn state(&self) -> AlarmState {
        self.state
    }

    /// Access to the calendar clock, e.g. for the host tick
    pub fn clock_mut(&mut self) -> &mut K {
        &mut self.clock
    }

    /// Sample the hazard inputs once and update the siren
    ///
    /// Call once per host loop iteration, next to the console poll.
    pub fn update(&mut self) {
        let gas = self.gas.gas_detected();
        let over_temp = self.temperature.over_temperature();

        if let Some(event) = self.monitor.update(gas, over_temp) {
            self.apply(event);
        }
    }

    /// Check a completed deactivation attempt from the console
    ///
    /// Returns true when the attempt matched the stored code.
    pub fn try_deactivate(&mut self, attempt: &[u8; CODE_LENGTH]) -> bool {
        if !self.codes.code_matches(attempt) {
            return false;
        }
        self.apply(AlarmEvent::CodeAccepted);
        true
    }

    fn apply(&mut self, event: AlarmEvent) {
        let next = self.state.transition(event);
        if next == self.state {
            return;
        }

        self.state = next;
        self.siren.set_active(next.siren_on());
        self.log_event(event);
    }

    fn log_event(&mut self, event: AlarmEvent) {
        let tag = match event {
            AlarmEvent::GasDetected => "GAS_DET",
            AlarmEvent::OverTemperature => "OVER_TEMP",
            AlarmEvent::CodeAccepted => "ALARM_OFF",
        };

        let mut line: String<EVENT_TEXT_LEN> = String::new();
        let _ = line.push_str(tag);
        let _ = line.push(' ');
        let _ = line.push_str(self.clock.date_time_text().as_str());
        self.log.record(line.as_str());
    }
}

impl<S, G, T, C, K, L> AlarmPanel for Panel<S, G, T, C, K, L>
where
    S: Siren,
    G: GasDetector,
    T: TemperatureSensor + OverTemperatureDetector,
    C: CodeStore,
    K: Calendar,
    L: EventLog,
{
    fn siren_active(&self) -> bool {
        self.siren.is_active()
    }

    fn gas_detected(&mut self) -> bool {
        self.gas.gas_detected()
    }

    fn over_temperature(&mut self) -> bool {
        self.temperature.over_temperature()
    }

    fn temperature_celsius(&mut self) -> f32 {
        self.temperature.read_celsius()
    }

    fn temperature_fahrenheit(&mut self) -> f32 {
        self.temperature.read_fahrenheit()
    }

    fn store_code(&mut self, code: &[u8; CODE_LENGTH]) -> Result<(), StorageError> {
        self.codes.save_code(code)
    }

    fn set_date_time(&mut self, dt: DateTime) {
        self.clock.set_date_time(dt)
    }

    fn date_time_text(&self) -> String<DATE_TIME_TEXT_LEN> {
        self.clock.date_time_text()
    }

    fn stored_events(&self) -> usize {
        self.log.stored_events()
    }

    fn event_text(&self, index: usize) -> Option<String<EVENT_TEXT_LEN>> {
        self.log.event_text(index)
    }
}

#[cfg(test)]
mod tests {
    use vigil_console::Console;
    use vigil_core::config::DEFAULT_CODE;
    use vigil_core::traits::SerialPort;

    use crate::clock::WallClock;
    use crate::code::StoredCodeStore;
    use crate::event_log::RingEventLog;
    use crate::sensor::threshold::ThresholdDetector;
    use crate::storage::MemoryStorage;

    use super::*;

    struct SimSiren {
        active: bool,
    }

    impl Siren for SimSiren {
        fn set_active(&mut self, on: bool) {
            self.active = on;
        }

        fn is_active(&self) -> bool {
            self.active
        }
    }

    struct SimGas {
        detected: bool,
    }

    impl GasDetector for SimGas {
        fn gas_detected(&mut self) -> bool {
            self.detected
        }
    }

    struct SimSensor {
        celsius: f32,
    }

    impl TemperatureSensor for SimSensor {
        fn read_celsius(&mut self) -> f32 {
            self.celsius
        }
    }

    // Console output is asserted in vigil-console's own tests; here it
    // only needs somewhere to go.
    struct SinkPort;

    impl SerialPort for SinkPort {
        type Error = ();

        fn poll_byte(&mut self) -> Option<u8> {
            None
        }

        fn write(&mut self, _data: &[u8]) -> Result<(), ()> {
            Ok(())
        }
    }

    type TestPanel = Panel<
        SimSiren,
        SimGas,
        ThresholdDetector<SimSensor>,
        StoredCodeStore<MemoryStorage>,
        WallClock,
        RingEventLog<8>,
    >;

    fn test_panel() -> TestPanel {
        let codes = StoredCodeStore::load(MemoryStorage::new());
        let limit = codes.config().over_temp_limit_c;

        let mut clock = WallClock::new();
        clock.set_date_time(DateTime {
            year: 2024,
            month: 1,
            day: 15,
            hour: 13,
            minute: 30,
            second: 45,
        });

        Panel::new(
            SimSiren { active: false },
            SimGas { detected: false },
            ThresholdDetector::new(SimSensor { celsius: 21.0 }, limit),
            codes,
            clock,
            RingEventLog::new(),
        )
    }

    #[test]
    fn quiet_panel_stays_quiet() {
        let mut panel = test_panel();
        panel.update();
        panel.update();

        assert_eq!(panel.state(), AlarmState::Quiet);
        assert!(!panel.siren_active());
        assert_eq!(panel.stored_events(), 0);
    }

    #[test]
    fn gas_excursion_latches_siren_and_logs() {
        let mut panel = test_panel();

        panel.gas.detected = true;
        panel.update();
        panel.update();

        assert_eq!(panel.state(), AlarmState::Triggered);
        assert!(panel.siren_active());

        // Gas clearing does not release the latch.
        panel.gas.detected = false;
        panel.update();
        assert!(panel.siren_active());

        assert_eq!(panel.stored_events(), 1);
        assert_eq!(
            panel.event_text(0).unwrap().as_str(),
            "GAS_DET 2024-01-15 13:30:45"
        );
    }

    #[test]
    fn over_temperature_excursion_latches_siren() {
        let mut panel = test_panel();

        panel.temperature.sensor_mut().celsius = 60.0;
        panel.update();

        assert!(panel.siren_active());
        assert_eq!(
            panel.event_text(0).unwrap().as_str(),
            "OVER_TEMP 2024-01-15 13:30:45"
        );
    }

    #[test]
    fn wrong_code_keeps_the_latch() {
        let mut panel = test_panel();
        panel.gas.detected = true;
        panel.update();

        assert!(!panel.try_deactivate(b"0000"));
        assert!(panel.siren_active());
    }

    #[test]
    fn console_entered_code_releases_the_latch() {
        let mut console = Console::new();
        let mut port = SinkPort;
        let mut panel = test_panel();

        panel.gas.detected = true;
        panel.update();
        assert!(panel.siren_active());

        console.feed(b'4', &mut port, &mut panel).unwrap();
        for &byte in DEFAULT_CODE.iter() {
            console.feed(byte, &mut port, &mut panel).unwrap();
        }

        let attempt = console.take_unlock_attempt().unwrap();
        assert!(panel.try_deactivate(&attempt));
        assert!(!panel.siren_active());
        assert_eq!(panel.state(), AlarmState::Quiet);

        assert_eq!(panel.stored_events(), 2);
        assert_eq!(
            panel.event_text(1).unwrap().as_str(),
            "ALARM_OFF 2024-01-15 13:30:45"
        );
    }

    #[test]
    fn console_saved_code_is_persisted() {
        let mut console = Console::new();
        let mut port = SinkPort;
        let mut panel = test_panel();

        console.feed(b'5', &mut port, &mut panel).unwrap();
        for &byte in b"4739" {
            console.feed(byte, &mut port, &mut panel).unwrap();
        }

        assert!(panel.codes.code_matches(b"4739"));
        assert!(!panel.codes.code_matches(&DEFAULT_CODE));
    }

    #[test]
    fn console_set_date_time_lands_in_the_clock() {
        let mut console = Console::new();
        let mut port = SinkPort;
        let mut panel = test_panel();

        console.feed(b's', &mut port, &mut panel).unwrap();
        for &byte in b"20251106073000" {
            console.feed(byte, &mut port, &mut panel).unwrap();
        }

        assert_eq!(
            panel.date_time_text().as_str(),
            "2025-11-06 07:30:00"
        );

        panel.clock_mut().tick_many(60);
        assert_eq!(
            panel.date_time_text().as_str(),
            "2025-11-06 07:31:00"
        );
    }
}
