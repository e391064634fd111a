//! Diagnostic sink for modem exchanges
//!
//! The session reports every send/expect/read through this trait instead of
//! writing to a global logger, so tests can capture or drop the output.

/// Receives one event per low-level exchange step.
///
/// Texts are raw modem text; rendering (e.g. making `\r\n` visible) is the
/// observer's job.
pub trait ExchangeObserver: Send {
    /// A command is about to be written
    fn sent(&mut self, command: &str);

    /// A pattern wait finished; `matched` is false when the budget ran out
    fn expected(&mut self, patterns: &[&str], got: &str, matched: bool);

    /// A fixed-length absorb finished
    fn absorbed(&mut self, count: usize, output: &str);
}

/// Observer that drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl ExchangeObserver for NullObserver {
    fn sent(&mut self, _command: &str) {}
    fn expected(&mut self, _patterns: &[&str], _got: &str, _matched: bool) {}
    fn absorbed(&mut self, _count: usize, _output: &str) {}
}
