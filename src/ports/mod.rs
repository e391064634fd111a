//! Port traits (interfaces)
//!
//! These traits define the boundaries between the AT session and external I/O.
//! Adapters implement these traits to connect to real hardware and sinks.

pub mod observer;
pub mod serial;

pub use observer::*;
pub use serial::*;
