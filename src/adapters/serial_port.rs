//! Serial port adapter using the `serialport` crate
//!
//! Implements `SerialFactory` and `SerialConnection` traits.
//! `SerialPortFactory` has no instance data; it only lists and opens ports.

use std::io::{self, Read, Write};
use std::time::Duration;

use serialport::ClearBuffer;

use crate::domain::{GsmError, GsmResult, SerialPortInfo};
use crate::ports::{SerialConnection, SerialFactory};

/// Zero-sized factory for creating serial port connections.
#[derive(Debug, Default, Clone, Copy)]
pub struct SerialPortFactory;

impl SerialFactory for SerialPortFactory {
    fn list_ports(&self) -> GsmResult<Vec<SerialPortInfo>> {
        let ports = serialport::available_ports()
            .map_err(|e| GsmError::Serial(format!("Failed to list ports: {e}")))?;

        Ok(ports
            .into_iter()
            .map(|p| {
                let port_type = match &p.port_type {
                    serialport::SerialPortType::UsbPort(info) => {
                        format!("USB ({:04X}:{:04X})", info.vid, info.pid)
                    }
                    serialport::SerialPortType::PciPort => "PCI".to_string(),
                    serialport::SerialPortType::BluetoothPort => "Bluetooth".to_string(),
                    serialport::SerialPortType::Unknown => "Native".to_string(),
                };
                SerialPortInfo {
                    name: p.port_name,
                    port_type,
                }
            })
            .collect())
    }

    fn open(
        &self,
        port: &str,
        baud_rate: u32,
        read_timeout: Duration,
    ) -> GsmResult<Box<dyn SerialConnection>> {
        let serial = serialport::new(port, baud_rate)
            .timeout(read_timeout)
            .open()
            .map_err(|e| GsmError::Serial(format!("Failed to open {port}: {e}")))?;

        log::info!("Opened {port} at {baud_rate} baud");
        Ok(Box::new(SerialPortConnection { port: serial }))
    }
}

/// An open serial port connection wrapping the `serialport` crate.
pub struct SerialPortConnection {
    port: Box<dyn serialport::SerialPort>,
}

impl SerialConnection for SerialPortConnection {
    fn write(&mut self, data: &[u8]) -> GsmResult<usize> {
        self.port
            .write_all(data)
            .map_err(|e| GsmError::Serial(format!("Write failed: {e}")))?;
        Ok(data.len())
    }

    fn read(&mut self, buffer: &mut [u8]) -> GsmResult<usize> {
        match self.port.read(buffer) {
            Ok(n) => Ok(n),
            // serialport reports an idle line as an error; to the session it is an empty read
            Err(e) if e.kind() == io::ErrorKind::TimedOut => Ok(0),
            Err(e) => Err(GsmError::Serial(format!("Read failed: {e}"))),
        }
    }

    fn flush(&mut self) -> GsmResult<()> {
        self.port
            .clear(ClearBuffer::Input)
            .map_err(|e| GsmError::Serial(format!("Flush failed: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_missing_port_is_serial_error() {
        let result = SerialPortFactory.open(
            "/dev/this-port-does-not-exist",
            115200,
            Duration::from_secs(1),
        );
        assert!(matches!(result, Err(GsmError::Serial(msg)) if msg.contains("Failed to open")));
    }
}
