//! Serial command console
//!
//! One received byte in, at most one mode change out. The console
//! decodes single-character menu commands, runs the masked code-entry
//! dialogues, and hosts the staged date/time dialogue. All output goes
//! through the [`SerialPort`] the caller hands in; all panel state is
//! reached through the [`AlarmPanel`] facade.

use core::fmt::Write as _;

use heapless::{String, Vec};

use vigil_core::config::CODE_LENGTH;
use vigil_core::traits::{AlarmPanel, SerialPort};

use crate::datetime::{DateTimeDraft, DraftStep};

/// Mask character echoed per code digit
const MASK_ECHO: &[u8] = b"*";

/// Active input interpretation
///
/// Exactly one variant is live at a time; each multi-byte dialogue
/// carries its own progress, so no flag can disagree with the mode.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Single-character commands
    Menu,
    /// Collecting a deactivation attempt; `entered` counts stored
    /// digits and stays below [`CODE_LENGTH`]
    EnteringUnlockCode { entered: usize },
    /// Collecting a replacement deactivation code
    EnteringNewCode { code: Vec<u8, CODE_LENGTH> },
    /// Mid date/time dialogue
    SettingDateTime(DateTimeDraft),
}

/// Serial command console session
///
/// Owns the mode register, the unlock-attempt buffer, and the
/// code-complete flag. One instance lives for the whole process; the
/// host loop calls [`Console::poll`] once per iteration.
#[derive(Debug, Clone)]
pub struct Console {
    mode: Mode,
    /// Last deactivation attempt; readable until the next unlock
    /// session overwrites it
    unlock_code: [u8; CODE_LENGTH],
    code_complete: bool,
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Console {
    /// Create a console in menu mode
    pub fn new() -> Self {
        Self {
            mode: Mode::Menu,
            unlock_code: [0; CODE_LENGTH],
            code_complete: false,
        }
    }

    /// Print the command listing; call once at startup
    pub fn start<T: SerialPort>(&mut self, port: &mut T) -> Result<(), T::Error> {
        self.print_menu(port)
    }

    /// Current mode
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Whether a deactivation attempt is ready to be checked
    pub fn code_complete(&self) -> bool {
        self.code_complete
    }

    /// Raise or clear the code-complete flag
    ///
    /// The unlock checker clears the flag after consuming the attempt.
    pub fn set_code_complete(&mut self, state: bool) {
        self.code_complete = state;
    }

    /// The most recent deactivation attempt
    ///
    /// Meaningful once [`Console::code_complete`] reports true.
    pub fn unlock_attempt(&self) -> &[u8; CODE_LENGTH] {
        &self.unlock_code
    }

    /// Take a completed deactivation attempt, clearing the flag
    pub fn take_unlock_attempt(&mut self) -> Option<[u8; CODE_LENGTH]> {
        if self.code_complete {
            self.code_complete = false;
            Some(self.unlock_code)
        } else {
            None
        }
    }

    /// Poll the port and process at most one received byte
    pub fn poll<T, P>(&mut self, port: &mut T, panel: &mut P) -> Result<(), T::Error>
    where
        T: SerialPort,
        P: AlarmPanel,
    {
        match port.poll_byte() {
            Some(byte) => self.feed(byte, port, panel),
            None => Ok(()),
        }
    }

    /// Process one received byte
    ///
    /// Callers invoke this only for real bytes, never for "nothing
    /// received" ([`Console::poll`] enforces that). The mode register
    /// is updated before any echo or prompt is written, so a transport
    /// error never leaves it behind the input already consumed.
    pub fn feed<T, P>(&mut self, byte: u8, port: &mut T, panel: &mut P) -> Result<(), T::Error>
    where
        T: SerialPort,
        P: AlarmPanel,
    {
        match core::mem::replace(&mut self.mode, Mode::Menu) {
            Mode::Menu => self.on_menu_byte(byte, port, panel),
            Mode::EnteringUnlockCode { entered } => self.on_unlock_byte(entered, byte, port),
            Mode::EnteringNewCode { code } => self.on_new_code_byte(code, byte, port, panel),
            Mode::SettingDateTime(draft) => self.on_date_time_byte(draft, byte, port, panel),
        }
    }

    /// Write the full command listing
    pub fn print_menu<T: SerialPort>(&self, port: &mut T) -> Result<(), T::Error> {
        port.write(b"Available commands:\r\n")?;
        port.write(b"Press '1' to get the alarm state\r\n")?;
        port.write(b"Press '2' to get the gas detector state\r\n")?;
        port.write(b"Press '3' to get the over temperature detector state\r\n")?;
        port.write(b"Press '4' to enter the code to deactivate the alarm\r\n")?;
        port.write(b"Press '5' to enter a new code to deactivate the alarm\r\n")?;
        port.write(b"Press 'f' or 'F' to get lm35 reading in Fahrenheit\r\n")?;
        port.write(b"Press 'c' or 'C' to get lm35 reading in Celsius\r\n")?;
        port.write(b"Press 's' or 'S' to set the date and time\r\n")?;
        port.write(b"Press 't' or 'T' to get the date and time\r\n")?;
        port.write(b"Press 'e' or 'E' to get the stored events\r\n")?;
        port.write(b"\r\n")
    }

    fn on_menu_byte<T, P>(&mut self, byte: u8, port: &mut T, panel: &mut P) -> Result<(), T::Error>
    where
        T: SerialPort,
        P: AlarmPanel,
    {
        match byte {
            b'1' => {
                let text: &[u8] = if panel.siren_active() {
                    b"The alarm is activated\r\n"
                } else {
                    b"The alarm is not activated\r\n"
                };
                port.write(text)
            }
            b'2' => {
                let text: &[u8] = if panel.gas_detected() {
                    b"Gas is being detected\r\n"
                } else {
                    b"Gas is not being detected\r\n"
                };
                port.write(text)
            }
            b'3' => {
                let text: &[u8] = if panel.over_temperature() {
                    b"Temperature is above the maximum level\r\n"
                } else {
                    b"Temperature is below the maximum level\r\n"
                };
                port.write(text)
            }
            b'4' => self.begin_unlock_entry(port, panel),
            b'5' => self.begin_new_code_entry(port),
            b'c' | b'C' => {
                let reading = panel.temperature_celsius();
                write_temperature(port, reading, b" \xB0 C\r\n")
            }
            b'f' | b'F' => {
                let reading = panel.temperature_fahrenheit();
                write_temperature(port, reading, b" \xB0 F\r\n")
            }
            b's' | b'S' => self.begin_date_time_entry(port),
            b't' | b'T' => {
                let text = panel.date_time_text();
                port.write(b"Date and Time = ")?;
                port.write(text.as_bytes())?;
                port.write(b"\r\n")
            }
            b'e' | b'E' => {
                for index in 0..panel.stored_events() {
                    if let Some(text) = panel.event_text(index) {
                        port.write(text.as_bytes())?;
                        port.write(b"\r\n")?;
                    }
                }
                Ok(())
            }
            _ => self.print_menu(port),
        }
    }

    fn begin_unlock_entry<T, P>(&mut self, port: &mut T, panel: &mut P) -> Result<(), T::Error>
    where
        T: SerialPort,
        P: AlarmPanel,
    {
        if !panel.siren_active() {
            return port.write(b"Alarm is not activated.\r\n");
        }

        self.mode = Mode::EnteringUnlockCode { entered: 0 };
        // A stale flag from an unconsumed attempt must not leak into
        // the new session.
        self.code_complete = false;
        port.write(b"Please enter the four digits numeric code to deactivate the alarm: ")
    }

    fn begin_new_code_entry<T: SerialPort>(&mut self, port: &mut T) -> Result<(), T::Error> {
        self.mode = Mode::EnteringNewCode { code: Vec::new() };
        port.write(b"Please enter the new four digits numeric code to deactivate the alarm: ")
    }

    fn begin_date_time_entry<T: SerialPort>(&mut self, port: &mut T) -> Result<(), T::Error> {
        let draft = DateTimeDraft::new();
        let prompt = draft.stage().prompt();
        self.mode = Mode::SettingDateTime(draft);
        port.write(b"\r\n")?;
        port.write(prompt)
    }

    fn on_unlock_byte<T: SerialPort>(
        &mut self,
        entered: usize,
        byte: u8,
        port: &mut T,
    ) -> Result<(), T::Error> {
        self.unlock_code[entered] = byte;
        let entered = entered + 1;

        if entered == CODE_LENGTH {
            self.code_complete = true;
        } else {
            self.mode = Mode::EnteringUnlockCode { entered };
        }
        port.write(MASK_ECHO)
    }

    fn on_new_code_byte<T, P>(
        &mut self,
        mut code: Vec<u8, CODE_LENGTH>,
        byte: u8,
        port: &mut T,
        panel: &mut P,
    ) -> Result<(), T::Error>
    where
        T: SerialPort,
        P: AlarmPanel,
    {
        let _ = code.push(byte);

        if code.len() == CODE_LENGTH {
            let mut new_code = [0u8; CODE_LENGTH];
            new_code.copy_from_slice(&code);
            // The dialogue completes regardless of storage outcome.
            let _ = panel.store_code(&new_code);
            port.write(MASK_ECHO)?;
            port.write(b"\r\nNew code configured\r\n\r\n")
        } else {
            self.mode = Mode::EnteringNewCode { code };
            port.write(MASK_ECHO)
        }
    }

    fn on_date_time_byte<T, P>(
        &mut self,
        mut draft: DateTimeDraft,
        byte: u8,
        port: &mut T,
        panel: &mut P,
    ) -> Result<(), T::Error>
    where
        T: SerialPort,
        P: AlarmPanel,
    {
        match draft.push(byte) {
            DraftStep::Pending => {
                self.mode = Mode::SettingDateTime(draft);
                Ok(())
            }
            DraftStep::NextStage(stage) => {
                self.mode = Mode::SettingDateTime(draft);
                port.write(b"\r\n")?;
                port.write(stage.prompt())
            }
            DraftStep::Complete(date_time) => {
                panel.set_date_time(date_time);
                port.write(b"\r\n")?;
                port.write(b"Date and time has been set\r\n")
            }
        }
    }
}

/// Write a temperature line in the panel's classic format
///
/// `unit` carries the 0xB0 degree byte terminal clients expect, e.g.
/// `" \xB0 C\r\n"`.
fn write_temperature<T: SerialPort>(
    port: &mut T,
    reading: f32,
    unit: &'static [u8],
) -> Result<(), T::Error> {
    let mut text: String<48> = String::new();
    let _ = write!(text, "{:.2}", reading);
    port.write(b"Temperature: ")?;
    port.write(text.as_bytes())?;
    port.write(unit)
}
