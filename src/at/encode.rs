//! Pure encoding: AtCommand → AT wire string.
//!
//! No I/O, no side effects. Regular commands end in `\r\n`; the message
//! prompt command ends in a bare `\r` so the modem answers with its `> ` prompt.

use super::AtCommand;

/// Encode an AtCommand into the wire string, terminator included.
pub fn encode(cmd: &AtCommand) -> String {
    use AtCommand::*;
    match cmd {
        EchoOff => "ATE0\r\n".into(),
        VerboseErrors => "AT+CMEE=1\r\n".into(),
        DisableNotifications => "AT+WIND=0\r\n".into(),
        TextMode => "AT+CMGF=1\r\n".into(),
        BeginMessage(number) => format!("AT+CMGS=\"{number}\"\r"),
        Raw(text) => text.clone(),
    }
}
