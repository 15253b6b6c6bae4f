use heapless::String;

use crate::constants::{NTFY_DEFAULT_SERVER, NTFY_URL_MAX_LEN};
use crate::ntfy::{self, Topic};
use crate::wifi::{self, Credentials};

/// Build-time settings, generated from cfg.toml by build.rs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    // Wi-Fi SSID of the WiFiManager hotspot
    pub wifi_ssid: &'static str,

    // Wi-Fi password of the hotspot (at least 8 characters)
    pub wifi_password: &'static str,

    // ntfy topic alerts are published to
    pub ntfy_topic: &'static str,

    // ntfy server base URL (optional, defaults to ntfy.sh)
    pub ntfy_server: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    Wifi(wifi::Error),
    Ntfy(ntfy::Error),
}

impl From<wifi::Error> for Error {
    fn from(e: wifi::Error) -> Self {
        Error::Wifi(e)
    }
}

impl From<ntfy::Error> for Error {
    fn from(e: ntfy::Error) -> Self {
        Error::Ntfy(e)
    }
}

impl Config {
    pub fn ntfy_server(&self) -> &'static str {
        self.ntfy_server.unwrap_or(NTFY_DEFAULT_SERVER)
    }

    pub fn publish_url(&self) -> Result<String<NTFY_URL_MAX_LEN>, ntfy::Error> {
        let topic = Topic::from_config(self)?;
        ntfy::publish_url(self.ntfy_server(), &topic)
    }

    /// Checks every value the way the WiFi and ntfy clients will use it.
    pub fn validate(&self) -> Result<(), Error> {
        Credentials::from_config(self)?;
        self.publish_url()?;
        Ok(())
    }
}

// config values are generated at compile time
include!(concat!(env!("OUT_DIR"), "/config.rs"));
