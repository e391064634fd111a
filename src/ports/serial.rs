//! Serial port traits
//!
//! Split into two traits:
//! - `SerialFactory`: listing and opening ports
//! - `SerialConnection`: instance methods for reading/writing data

use std::time::Duration;

use crate::domain::{GsmResult, SerialPortInfo};

/// Factory for creating serial connections.
///
/// Takes `&self` so tests can hand a scripted connection to the session.
pub trait SerialFactory {
    /// List available serial ports on the system
    fn list_ports(&self) -> GsmResult<Vec<SerialPortInfo>>;

    /// Open a serial port at the given baud rate and per-read timeout
    fn open(
        &self,
        port: &str,
        baud_rate: u32,
        read_timeout: Duration,
    ) -> GsmResult<Box<dyn SerialConnection>>;
}

/// Trait for an open serial port connection.
pub trait SerialConnection: Send {
    /// Write all bytes to the port, returning how many were written
    fn write(&mut self, data: &[u8]) -> GsmResult<usize>;

    /// Read bytes from the port. A read that times out with nothing
    /// available returns `Ok(0)`.
    fn read(&mut self, buffer: &mut [u8]) -> GsmResult<usize>;

    /// Discard any input received but not yet read
    fn flush(&mut self) -> GsmResult<()>;
}
