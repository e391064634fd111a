//! Modem profiles
//!
//! A ModemProfile holds the settings for one physical modem: which serial
//! port it hangs off, the baud rate, and a free-form device label.

use serde::{Deserialize, Serialize};

use super::{GsmError, GsmResult};

/// Connection settings for one modem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModemProfile {
    /// Profile name, used in error messages
    pub name: String,
    /// Serial port the modem is attached to (e.g., "/dev/ttyUSB0", "COM3")
    pub serial_port: Option<String>,
    /// Serial baud rate
    pub baud_rate: u32,
    /// Device label; only used in diagnostics
    pub device_id: String,
}

impl ModemProfile {
    /// Profile for a port/baud pair given directly on the command line.
    pub fn for_port(port: &str, baud_rate: u32) -> Self {
        Self {
            serial_port: Some(port.to_string()),
            baud_rate,
            ..Self::default()
        }
    }

    /// Check the profile has enough to open a port.
    pub fn validate(&self) -> GsmResult<()> {
        if self.serial_port.as_deref().map_or(true, |p| p.trim().is_empty()) {
            return Err(GsmError::Config(format!(
                "Profile '{}' has no serial port",
                self.name
            )));
        }
        if self.baud_rate == 0 {
            return Err(GsmError::Config(format!(
                "Profile '{}' has a zero baud rate",
                self.name
            )));
        }
        Ok(())
    }
}

impl Default for ModemProfile {
    fn default() -> Self {
        Self {
            name: "Default".to_string(),
            serial_port: None,
            baud_rate: 115200,
            device_id: "modem-1".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_has_sensible_values() {
        let profile = ModemProfile::default();
        assert_eq!(profile.name, "Default");
        assert_eq!(profile.baud_rate, 115200);
        assert!(profile.serial_port.is_none());
    }

    #[test]
    fn profile_serializes_to_json() {
        let profile = ModemProfile::for_port("/dev/ttyUSB0", 9600);
        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("\"serial_port\":\"/dev/ttyUSB0\""));
        assert!(json.contains("\"baud_rate\":9600"));
    }

    #[test]
    fn validate_rejects_missing_port() {
        let result = ModemProfile::default().validate();
        assert!(matches!(result, Err(GsmError::Config(_))));
    }

    #[test]
    fn validate_rejects_blank_port() {
        let profile = ModemProfile::for_port("  ", 9600);
        assert!(profile.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_baud() {
        let profile = ModemProfile::for_port("COM3", 0);
        assert!(profile.validate().is_err());
    }

    #[test]
    fn validate_accepts_complete_profile() {
        assert!(ModemProfile::for_port("COM3", 115200).validate().is_ok());
    }
}
