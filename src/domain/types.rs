//! Core domain types

use std::fmt;

use serde::{Deserialize, Serialize};

/// Delivery state labels for callers tracking messages on top of the session.
///
/// The session itself never moves a message between these; they are data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryStatus {
    /// Queued, waiting to be handed to the modem
    DeliveryPending,
    /// The modem refused or something failed while sending; retryable
    SendingError,
    /// The modem accepted the message
    SendingOk,
}

impl DeliveryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DeliveryPending => "DELIVERY_PENDING",
            Self::SendingError => "SENDING_ERROR",
            Self::SendingOk => "SENDING_OK",
        }
    }
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which final result code a modem response ended with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acknowledgment {
    Ok,
    Error,
}

impl Acknowledgment {
    /// Classify a response by its terminator; `None` if it has neither.
    pub fn classify(response: &str) -> Option<Self> {
        if response.ends_with("OK\r\n") {
            Some(Self::Ok)
        } else if response.ends_with("ERROR\r\n") {
            Some(Self::Error)
        } else {
            None
        }
    }

    pub fn delivery_status(&self) -> DeliveryStatus {
        match self {
            Self::Ok => DeliveryStatus::SendingOk,
            Self::Error => DeliveryStatus::SendingError,
        }
    }
}

/// Information about a serial port
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerialPortInfo {
    pub name: String,
    pub port_type: String,
}
