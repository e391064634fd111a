//! Core domain types
//!
//! Pure types with no I/O dependencies: the error taxonomy, modem profiles,
//! and the status labels callers attach to outgoing messages.

pub mod config;
pub mod error;
pub mod types;

pub use config::*;
pub use error::*;
pub use types::*;
