//! Adapters: implementations of the port traits for real I/O.
//!
//! - `serial_port` - the `serialport` crate behind `SerialFactory`/`SerialConnection`
//! - `log_observer` - `ExchangeObserver` routed to the `log` facade

pub mod log_observer;
pub mod serial_port;

pub use log_observer::LogObserver;
pub use serial_port::SerialPortFactory;
