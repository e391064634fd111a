//! ModemSession: owns a serial connection and drives the AT exchange.
//!
//! The exchange is strict request/response: flush stale input, write a
//! command, then either wait for a terminator (`expect`) or soak up a fixed
//! number of bytes (`read`). Nothing is pipelined.
//!
//! Pure translation lives in `encode`. ModemSession only handles I/O.

use std::time::Duration;

use crate::adapters::log_observer::LogObserver;
use crate::domain::{GsmError, GsmResult, ModemProfile};
use crate::ports::{ExchangeObserver, SerialConnection, SerialFactory};

use super::{encode, AtCommand, ACKNOWLEDGMENTS, CTRL_Z, INIT_SEQUENCE};

/// Per-read timeout applied when the port is opened
pub const READ_TIMEOUT: Duration = Duration::from_secs(1);

/// Bytes absorbed after a plain command that does not wait for an ack
const NO_WAIT_ABSORB: usize = 1;

/// Bytes absorbed after `AT+CMGS`, covering the modem's `> ` prompt
const PROMPT_ABSORB: usize = 3;

enum SessionState {
    Disconnected,
    Connected(Box<dyn SerialConnection>),
}

/// A GSM modem reached over one serial port.
///
/// Starts disconnected; `connect` opens the port and runs the init sequence.
/// Every exchange method fails with `GsmError::NotConnected` until then.
pub struct ModemSession {
    profile: ModemProfile,
    state: SessionState,
    observer: Box<dyn ExchangeObserver>,
}

impl ModemSession {
    pub fn new(profile: ModemProfile) -> Self {
        Self {
            profile,
            state: SessionState::Disconnected,
            observer: Box::new(LogObserver::new()),
        }
    }

    /// Replace the diagnostic sink (the default logs through `log`).
    pub fn with_observer(mut self, observer: Box<dyn ExchangeObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn profile(&self) -> &ModemProfile {
        &self.profile
    }

    pub fn device_id(&self) -> &str {
        &self.profile.device_id
    }

    pub fn is_connected(&self) -> bool {
        matches!(self.state, SessionState::Connected(_))
    }

    /// Open the port and run the four-command init sequence.
    ///
    /// If the port fails to open nothing is written and the session stays
    /// disconnected. If init fails the port is released again, so a later
    /// `connect` starts from scratch.
    pub fn connect(&mut self, factory: &dyn SerialFactory) -> GsmResult<()> {
        // Release any previous handle before reopening the same device
        self.state = SessionState::Disconnected;

        self.profile.validate()?;
        let port = self.profile.serial_port.as_deref().unwrap_or_default();
        let serial = factory.open(port, self.profile.baud_rate, READ_TIMEOUT)?;
        self.state = SessionState::Connected(serial);

        if let Err(e) = self.init() {
            self.state = SessionState::Disconnected;
            return Err(e);
        }
        Ok(())
    }

    fn init(&mut self) -> GsmResult<()> {
        for cmd in INIT_SEQUENCE {
            self.write_command(&encode(cmd), true)?;
        }
        Ok(())
    }

    /// Read until the latest chunk ends with one of `patterns`.
    ///
    /// The buffer holds the longest pattern plus two bytes, and at most that
    /// many reads are attempted. Each read overwrites the buffer; only the
    /// chunk from the most recent read is compared, chunks are never joined.
    /// On success the matching chunk is returned. When the budget runs out
    /// the error carries the last non-empty chunk.
    pub fn expect(&mut self, patterns: &[&str]) -> GsmResult<String> {
        let serial = connection(&mut self.state)?;

        let read_max = patterns.iter().map(|p| p.len()).max().unwrap_or(0) + 2;
        let mut buf = vec![0u8; read_max];
        let mut status = String::new();

        for _ in 0..read_max {
            let n = serial.read(&mut buf)?;
            if n == 0 {
                continue;
            }

            let chunk = &buf[..n];
            status = String::from_utf8_lossy(chunk).into_owned();
            if patterns.iter().any(|p| chunk.ends_with(p.as_bytes())) {
                self.observer.expected(patterns, &status, true);
                return Ok(status);
            }
        }

        self.observer.expected(patterns, &status, false);
        Err(GsmError::NoMatch {
            expected: patterns.iter().map(|p| p.to_string()).collect(),
            last: status,
        })
    }

    /// Discard pending input, then write `command` verbatim.
    ///
    /// A failed flush is returned as an error and nothing is written.
    pub fn send(&mut self, command: &str) -> GsmResult<()> {
        let serial = connection(&mut self.state)?;
        self.observer.sent(command);

        serial.flush()?;
        serial.write(command.as_bytes())?;
        Ok(())
    }

    /// Absorb whatever the modem sends over `count` read attempts.
    ///
    /// The buffer is `count` bytes and each read overwrites it; the last
    /// non-empty chunk is returned (empty if every read timed out).
    pub fn read(&mut self, count: usize) -> GsmResult<String> {
        let serial = connection(&mut self.state)?;

        let mut buf = vec![0u8; count];
        let mut output = String::new();

        for _ in 0..count {
            let n = serial.read(&mut buf)?;
            if n > 0 {
                output = String::from_utf8_lossy(&buf[..n]).into_owned();
            }
        }

        self.observer.absorbed(count, &output);
        Ok(output)
    }

    /// Send a command, then either wait for `OK\r\n`/`ERROR\r\n` or absorb
    /// one byte.
    ///
    /// Both acknowledgments count as success here; telling them apart is up
    /// to the caller (see `Acknowledgment::classify`).
    pub fn write_command(&mut self, command: &str, wait_for_ack: bool) -> GsmResult<String> {
        self.send(command)?;

        if wait_for_ack {
            self.expect(ACKNOWLEDGMENTS)
        } else {
            self.read(NO_WAIT_ABSORB)
        }
    }

    /// Submit a text-mode SMS and return the modem's acknowledgment.
    pub fn write_message(&mut self, number: &str, message: &str) -> GsmResult<String> {
        self.send(&encode(&AtCommand::BeginMessage(number.to_string())))?;
        self.read(PROMPT_ABSORB)?;

        self.write_command(&format!("{message}{CTRL_Z}"), true)
    }
}

fn connection(state: &mut SessionState) -> GsmResult<&mut dyn SerialConnection> {
    match state {
        SessionState::Connected(serial) => Ok(serial.as_mut()),
        SessionState::Disconnected => Err(GsmError::NotConnected),
    }
}
