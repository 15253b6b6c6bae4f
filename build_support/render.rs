// Shared between build.rs and the integration tests.

use std::{fmt, fs, io, path::Path};

use serde::Deserialize;

use crate::constants::{
    NTFY_DEFAULT_SERVER, NTFY_TOPIC_MAX_LEN, NTFY_URL_MAX_LEN, PASSWORD_MAX_LEN,
    PASSWORD_MIN_LEN, SSID_MAX_LEN,
};

pub const CONFIG_FILE: &str = "cfg.toml";
pub const TEMPLATE_FILE: &str = "cfg.toml.example";

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RawConfig {
    pub wifi_ssid: String,
    pub wifi_password: String,
    pub ntfy_topic: String,
    pub ntfy_server: Option<String>,
}

#[derive(Debug)]
pub enum Error {
    Missing,
    Read(io::Error),
    Parse(toml::de::Error),
    Empty(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Missing => write!(
                f,
                "{CONFIG_FILE} not found: copy {TEMPLATE_FILE} to {CONFIG_FILE} and fill in your own values"
            ),
            Error::Read(e) => write!(f, "failed to read {CONFIG_FILE}: {e}"),
            Error::Parse(e) => write!(f, "failed to parse {CONFIG_FILE}: {e}"),
            Error::Empty(key) => write!(f, "{CONFIG_FILE}: `{key}` must not be empty"),
        }
    }
}

impl std::error::Error for Error {}

pub fn load(path: &Path) -> Result<RawConfig, Error> {
    let toml_str = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::Missing,
        _ => Error::Read(e),
    })?;
    parse(&toml_str)
}

pub fn parse(toml_str: &str) -> Result<RawConfig, Error> {
    let raw: RawConfig = toml::from_str(toml_str).map_err(Error::Parse)?;

    let required = [
        ("wifi_ssid", raw.wifi_ssid.as_str()),
        ("wifi_password", raw.wifi_password.as_str()),
        ("ntfy_topic", raw.ntfy_topic.as_str()),
    ];
    for (key, value) in required {
        if value.is_empty() {
            return Err(Error::Empty(key));
        }
    }

    if raw.ntfy_server.as_deref() == Some("") {
        return Err(Error::Empty("ntfy_server"));
    }

    Ok(raw)
}

/// Emits the `CONFIG` constant. `{:?}` writes each value as an escaped Rust literal.
pub fn render(raw: &RawConfig) -> String {
    format!(
        r#"
        pub const CONFIG: Config = Config {{
            wifi_ssid: {ssid:?},
            wifi_password: {password:?},
            ntfy_topic: {topic:?},
            ntfy_server: {server:?},
        }};
    "#,
        ssid = raw.wifi_ssid,
        password = raw.wifi_password,
        topic = raw.ntfy_topic,
        server = raw.ntfy_server,
    )
}

/// Problems worth a `cargo:warning` that do not stop the build.
///
/// Covers every value the runtime WiFi and ntfy checks would reject.
pub fn warnings(raw: &RawConfig, template: Option<&RawConfig>) -> Vec<String> {
    let mut out = Vec::new();

    let password = &raw.wifi_password;
    if !password.bytes().all(|b| (0x20..=0x7e).contains(&b)) {
        out.push("wifi_password must be printable ASCII for WPA2".to_string());
    } else if password.len() < PASSWORD_MIN_LEN {
        out.push(format!(
            "wifi_password is shorter than {PASSWORD_MIN_LEN} characters, the hotspot will refuse it"
        ));
    } else if password.len() > PASSWORD_MAX_LEN {
        out.push(format!(
            "wifi_password is longer than {PASSWORD_MAX_LEN} characters"
        ));
    }

    if raw.wifi_ssid.len() > SSID_MAX_LEN {
        out.push(format!("wifi_ssid is longer than {SSID_MAX_LEN} bytes"));
    }

    let topic = &raw.ntfy_topic;
    if let Some(c) = topic
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        out.push(format!(
            "ntfy_topic contains {c:?}, only letters, digits, '-' and '_' are allowed"
        ));
    } else if topic.len() > NTFY_TOPIC_MAX_LEN {
        out.push(format!(
            "ntfy_topic is longer than {NTFY_TOPIC_MAX_LEN} characters"
        ));
    }

    let server = raw
        .ntfy_server
        .as_deref()
        .unwrap_or(NTFY_DEFAULT_SERVER)
        .trim_end_matches('/');
    if server.is_empty() {
        out.push("ntfy_server has nothing but slashes".to_string());
    } else if server.len() + 1 + topic.len() > NTFY_URL_MAX_LEN {
        out.push(format!(
            "ntfy_server and ntfy_topic make a URL longer than {NTFY_URL_MAX_LEN} bytes"
        ));
    }

    if let Some(template) = template {
        let pairs = [
            ("wifi_ssid", &raw.wifi_ssid, &template.wifi_ssid),
            ("wifi_password", &raw.wifi_password, &template.wifi_password),
            ("ntfy_topic", &raw.ntfy_topic, &template.ntfy_topic),
        ];
        for (key, value, placeholder) in pairs {
            if value == placeholder {
                out.push(format!("{key} still holds the placeholder from {TEMPLATE_FILE}"));
            }
        }
    }

    out
}
