//! Render modem text for log lines.

/// Replace `\r\n` and lone `\r` with their escaped spelling so a log line
/// shows exactly what crossed the wire.
pub fn transpose(data: &str) -> String {
    data.replace("\r\n", "\\r\\n").replace('\r', "\\r")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crlf_becomes_visible() {
        assert_eq!(transpose("OK\r\n"), "OK\\r\\n");
    }

    #[test]
    fn lone_cr_becomes_visible() {
        assert_eq!(transpose("AT+CMGS=\"123\"\r"), "AT+CMGS=\"123\"\\r");
    }

    #[test]
    fn lone_lf_is_left_alone() {
        assert_eq!(transpose("a\nb"), "a\nb");
    }

    #[test]
    fn plain_text_unchanged() {
        assert_eq!(transpose("hello"), "hello");
    }
}
