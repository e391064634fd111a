//! GSM SMS gateway
//!
//! Drives a GSM modem over a serial link with AT commands to send SMS text messages.
//!
//! ## Architecture (Hexagonal / Ports & Adapters)
//!
//! - `domain/` - Pure domain types, no I/O dependencies
//! - `ports/` - Trait definitions (interfaces) for external dependencies
//! - `at/` - AT protocol logic (command encoding, modem session)
//! - `adapters/` - Implementations of ports (serialport, log observer, profile files)

// Core domain (pure, no I/O)
pub mod at;
pub mod domain;
pub mod ports;

// Adapters (external I/O)
pub mod adapters;

pub use at::ModemSession;
pub use domain::{GsmError, GsmResult};
