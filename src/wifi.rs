use core::str::FromStr;
use heapless::String;
use log::{debug, warn};

use crate::config::Config;
use crate::constants::{PASSWORD_MAX_LEN, PASSWORD_MIN_LEN, SSID_MAX_LEN};

/// Hotspot credentials in the fixed-size form the radio driver takes.
///
/// The same pair is used to bring up the WiFiManager provisioning hotspot
/// and, once provisioned, to join the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub ssid: String<SSID_MAX_LEN>,
    pub password: String<PASSWORD_MAX_LEN>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    SsidEmpty,
    SsidTooLong,
    PasswordNotAscii,
    PasswordTooShort,
    PasswordTooLong,
}

impl Credentials {
    pub fn new(ssid: &str, password: &str) -> Result<Self, Error> {
        if ssid.is_empty() {
            return Err(Error::SsidEmpty);
        }
        let ssid = String::<SSID_MAX_LEN>::from_str(ssid).map_err(|_| Error::SsidTooLong)?;

        // WPA2 passphrases are printable ASCII, so chars and bytes line up
        if !password.bytes().all(|b| (0x20..=0x7e).contains(&b)) {
            return Err(Error::PasswordNotAscii);
        }
        if password.len() < PASSWORD_MIN_LEN {
            return Err(Error::PasswordTooShort);
        }
        let password =
            String::<PASSWORD_MAX_LEN>::from_str(password).map_err(|_| Error::PasswordTooLong)?;

        Ok(Self { ssid, password })
    }

    pub fn from_config(config: &Config) -> Result<Self, Error> {
        match Self::new(config.wifi_ssid, config.wifi_password) {
            Ok(credentials) => {
                debug!("WiFi credentials ready for SSID: {:?}", credentials.ssid);
                Ok(credentials)
            }
            Err(e) => {
                warn!("Invalid WiFi credentials for SSID {:?}: {:?}", config.wifi_ssid, e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_minimum_password() {
        let credentials = Credentials::new("TestNet", "abcdefgh").unwrap();
        assert_eq!(credentials.ssid.as_str(), "TestNet");
        assert_eq!(credentials.password.as_str(), "abcdefgh");
    }

    #[test]
    fn rejects_short_password() {
        assert_eq!(
            Credentials::new("TestNet", "abcdefg"),
            Err(Error::PasswordTooShort)
        );
    }

    #[test]
    fn password_length_bounds() {
        let longest = "p".repeat(PASSWORD_MAX_LEN);
        assert!(Credentials::new("TestNet", &longest).is_ok());

        let too_long = "p".repeat(PASSWORD_MAX_LEN + 1);
        assert_eq!(
            Credentials::new("TestNet", &too_long),
            Err(Error::PasswordTooLong)
        );
    }

    #[test]
    fn rejects_non_ascii_password() {
        assert_eq!(
            Credentials::new("TestNet", "motdepassé"),
            Err(Error::PasswordNotAscii)
        );
        assert_eq!(
            Credentials::new("TestNet", "tab\tinside"),
            Err(Error::PasswordNotAscii)
        );
    }

    #[test]
    fn ssid_bounds() {
        assert_eq!(Credentials::new("", "abcdefgh"), Err(Error::SsidEmpty));

        let longest = "s".repeat(SSID_MAX_LEN);
        assert!(Credentials::new(&longest, "abcdefgh").is_ok());

        let too_long = "s".repeat(SSID_MAX_LEN + 1);
        assert_eq!(
            Credentials::new(&too_long, "abcdefgh"),
            Err(Error::SsidTooLong)
        );
    }

    #[test]
    fn ssid_keeps_spaces_and_unicode() {
        let credentials = Credentials::new(" Café Wifi ", "abcdefgh").unwrap();
        assert_eq!(credentials.ssid.as_str(), " Café Wifi ");
    }

    #[test]
    fn from_config_reads_fields() {
        let config = Config {
            wifi_ssid: "TestNet",
            wifi_password: "abcdefgh",
            ntfy_topic: "alerts-1",
            ntfy_server: None,
        };
        let credentials = Credentials::from_config(&config).unwrap();
        assert_eq!(credentials.ssid.as_str(), "TestNet");
        assert_eq!(credentials.password.as_str(), "abcdefgh");
    }
}
