//! AT command layer for GSM modems.
//!
//! This module separates the concerns of talking to the modem:
//! - `encode`: translate AtCommand → wire string (pure, no I/O)
//! - `transpose`: make line endings visible for diagnostics (pure, no I/O)
//! - `session`: own the serial port, drive the send/expect/read exchange
//!
//! The encode/transpose functions are pure so they can be tested without
//! any fake serial port.

pub mod encode;
pub mod session;
pub mod transpose;

pub use encode::encode;
pub use session::{ModemSession, READ_TIMEOUT};
pub use transpose::transpose;

/// Final result code for a command the modem accepted
pub const ACK_OK: &str = "OK\r\n";
/// Final result code for a command the modem rejected
pub const ACK_ERROR: &str = "ERROR\r\n";
/// Both acknowledgment terminators, in the order they are matched
pub const ACKNOWLEDGMENTS: &[&str] = &[ACK_OK, ACK_ERROR];

/// Byte that submits an SMS body in text mode (Ctrl-Z)
pub const CTRL_Z: char = '\u{1a}';

/// Commands understood by the modem.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum AtCommand {
    /// `ATE0`: stop echoing commands back
    EchoOff,
    /// `AT+CMEE=1`: report numeric error codes instead of a bare ERROR
    VerboseErrors,
    /// `AT+WIND=0`: silence unsolicited indications
    DisableNotifications,
    /// `AT+CMGF=1`: switch SMS handling to text mode
    TextMode,
    /// `AT+CMGS="<number>"`: open a text-mode message to a recipient
    BeginMessage(String),
    /// Anything else, written verbatim
    Raw(String),
}

/// Commands written by `ModemSession::connect`, in order.
pub const INIT_SEQUENCE: &[AtCommand] = &[
    AtCommand::EchoOff,
    AtCommand::VerboseErrors,
    AtCommand::DisableNotifications,
    AtCommand::TextMode,
];
