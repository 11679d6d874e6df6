use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::error::ConfigError;
use super::types::{
    CredentialKey, Config, ENDPOINT_ENV, GatewayConfig, PUBLIC_KEY, RawConfig, SERVICE_ID,
    TEMPLATE_ID,
};

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `<config_dir>/contact-form/config.toml` via `dirs::config_dir()`,
    /// falling back to the current directory when it is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("contact-form").join("config.toml")
    }

    /// Loads configuration from the default file and the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path(), |key| std::env::var(key).ok())
    }

    /// Loads configuration from `path`, then applies overrides looked up through `env`.
    ///
    /// A missing file is treated as empty. Fails if any delivery credential is
    /// absent from both sources, so an incomplete setup is caught at startup
    /// instead of surfacing as a failed send.
    pub fn load_from(
        path: &Path,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let raw: RawConfig = if path.exists() {
            let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            toml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?
        } else {
            tracing::debug!(path = %path.display(), "no config file, using environment only");
            RawConfig::default()
        };

        Self::resolve(raw, env)
    }

    fn resolve(raw: RawConfig, env: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let pick = |file: Option<String>, key: CredentialKey| {
            env(key.env)
                .filter(|v| !v.trim().is_empty())
                .or(file)
                .unwrap_or_default()
        };

        let emailjs = raw.emailjs;
        let mut gateway = GatewayConfig::new(
            pick(emailjs.service_id, SERVICE_ID),
            pick(emailjs.template_id, TEMPLATE_ID),
            pick(emailjs.public_key, PUBLIC_KEY),
        )?;

        if let Some(endpoint) = env(ENDPOINT_ENV)
            .filter(|v| !v.trim().is_empty())
            .or(emailjs.endpoint)
        {
            gateway = gateway.with_endpoint(endpoint)?;
        }
        if let Some(secs) = emailjs.timeout_seconds {
            gateway = gateway.with_timeout(Duration::from_secs(secs))?;
        }

        Ok(Self {
            gateway,
            form: raw.form,
        })
    }
}
