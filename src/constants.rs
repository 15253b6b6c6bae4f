/// Longest SSID allowed by 802.11, in bytes
pub const SSID_MAX_LEN: usize = 32;

/// Shortest WPA2 passphrase, in characters
pub const PASSWORD_MIN_LEN: usize = 8;
/// Longest WPA2 passphrase, in characters
pub const PASSWORD_MAX_LEN: usize = 63;

/// Longest topic name accepted by ntfy
pub const NTFY_TOPIC_MAX_LEN: usize = 64;
/// Capacity of the buffer holding `<server>/<topic>`
pub const NTFY_URL_MAX_LEN: usize = 128;

/// Relay used when `ntfy_server` is not set in cfg.toml
pub const NTFY_DEFAULT_SERVER: &str = "https://ntfy.sh";
