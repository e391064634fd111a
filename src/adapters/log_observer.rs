//! Exchange observer that writes through the `log` facade.
//!
//! Line endings are rendered with `transpose` so a log line shows exactly
//! what crossed the wire, e.g. `--- Expect: OK\r\n|ERROR\r\n Got: OK\r\n`.

use log::Level;

use crate::at::transpose;
use crate::domain::Acknowledgment;
use crate::ports::ExchangeObserver;

/// Default observer for `ModemSession`.
#[derive(Debug, Default, Clone)]
pub struct LogObserver {
    /// Prefix added to every line, e.g. the device label
    tag: Option<String>,
}

impl LogObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefix every line with `[tag]`, handy with several modems in one log.
    pub fn tagged(tag: &str) -> Self {
        Self {
            tag: Some(tag.to_string()),
        }
    }

    fn prefix(&self) -> String {
        match &self.tag {
            Some(tag) => format!("[{tag}] "),
            None => String::new(),
        }
    }
}

/// `warn` when the modem rejected the command or never answered, else `debug`.
fn expect_level(got: &str, matched: bool) -> Level {
    if !matched || Acknowledgment::classify(got) == Some(Acknowledgment::Error) {
        Level::Warn
    } else {
        Level::Debug
    }
}

impl ExchangeObserver for LogObserver {
    fn sent(&mut self, command: &str) {
        log::debug!("{}--- Send: {}", self.prefix(), transpose(command));
    }

    fn expected(&mut self, patterns: &[&str], got: &str, matched: bool) {
        let wanted = transpose(&patterns.join("|"));
        let got_visible = transpose(got);
        let missing = if matched { "" } else { " (match not found!)" };
        log::log!(
            expect_level(got, matched),
            "{}--- Expect: {wanted} Got: {got_visible}{missing}",
            self.prefix()
        );
    }

    fn absorbed(&mut self, count: usize, output: &str) {
        log::debug!("{}--- Read({count}): {}", self.prefix(), transpose(output));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untagged_has_no_prefix() {
        assert_eq!(LogObserver::new().prefix(), "");
    }

    #[test]
    fn tagged_prefix_wraps_label() {
        assert_eq!(LogObserver::tagged("modem-1").prefix(), "[modem-1] ");
    }

    #[test]
    fn ok_match_logs_at_debug() {
        assert_eq!(expect_level("OK\r\n", true), Level::Debug);
        assert_eq!(expect_level("\r\n+CMGS: 7\r\n\r\nOK\r\n", true), Level::Debug);
    }

    #[test]
    fn error_match_logs_at_warn() {
        assert_eq!(expect_level("ERROR\r\n", true), Level::Warn);
    }

    #[test]
    fn missing_match_logs_at_warn() {
        assert_eq!(expect_level("", false), Level::Warn);
        assert_eq!(expect_level("OK", false), Level::Warn);
    }

    #[test]
    fn custom_pattern_match_logs_at_debug() {
        assert_eq!(expect_level("> ", true), Level::Debug);
    }
}
