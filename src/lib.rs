//! Build-time configuration for the esp8266_temperature firmware.
//!
//! The values live in `cfg.toml` (kept out of git, see `cfg.toml.example`)
//! and are baked into [`CONFIG`] by the build script. A missing `cfg.toml`
//! fails the build.
#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod constants;
pub mod ntfy;
pub mod wifi;

pub use config::{Config, CONFIG};
