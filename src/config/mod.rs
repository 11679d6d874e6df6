//! Startup configuration: delivery credentials and form behavior.
//!
//! Loaded once from `config.toml` plus `EMAILJS_*` environment overrides and
//! passed by value into the gateway and the form.

mod error;
mod loader;
mod types;

pub use error::ConfigError;
pub use types::{Config, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, FormConfig, GatewayConfig};
