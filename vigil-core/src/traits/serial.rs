//! Serial byte-channel abstraction
//!
//! The console never suspends waiting for input: reception is
//! poll-based and hands back at most one byte per call.

/// Byte-oriented serial transport
pub trait SerialPort {
    /// Error type for transmit operations
    type Error;

    /// Take the next received byte, if one is available
    ///
    /// Returns `None` when nothing has arrived; the caller moves on
    /// and polls again on its next loop iteration.
    fn poll_byte(&mut self) -> Option<u8>;

    /// Write raw bytes to the transport
    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error>;
}
