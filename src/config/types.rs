use std::time::Duration;

use serde::Deserialize;

use super::error::ConfigError;

/// Default EmailJS REST endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Default request timeout for a single delivery attempt.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Complete, validated credentials and transport settings for the delivery service.
///
/// Only constructible through [`GatewayConfig::new`], which rejects blank
/// credentials, so holding one means delivery is usable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    service_id: String,
    template_id: String,
    public_key: String,
    endpoint: String,
    timeout: Duration,
}

impl GatewayConfig {
    /// Builds a config using [`DEFAULT_ENDPOINT`] and [`DEFAULT_TIMEOUT`].
    pub fn new(
        service_id: impl Into<String>,
        template_id: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let service_id = require(service_id.into(), SERVICE_ID)?;
        let template_id = require(template_id.into(), TEMPLATE_ID)?;
        let public_key = require(public_key.into(), PUBLIC_KEY)?;
        Ok(Self {
            service_id,
            template_id,
            public_key,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Overrides the endpoint URL. Must be an `http` or `https` URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Result<Self, ConfigError> {
        let endpoint = endpoint.into();
        let endpoint = endpoint.trim();
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                key: "endpoint",
                message: format!("expected an http(s) URL, got '{endpoint}'"),
            });
        }
        self.endpoint = endpoint.to_string();
        Ok(self)
    }

    /// Overrides the per-request timeout. Must be non-zero.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, ConfigError> {
        if timeout.is_zero() {
            return Err(ConfigError::Invalid {
                key: "timeout_seconds",
                message: "must be greater than zero".to_string(),
            });
        }
        self.timeout = timeout;
        Ok(self)
    }

    pub fn service_id(&self) -> &str {
        &self.service_id
    }

    pub fn template_id(&self) -> &str {
        &self.template_id
    }

    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// A credential key together with the environment variable overriding it.
#[derive(Debug, Clone, Copy)]
pub(super) struct CredentialKey {
    pub key: &'static str,
    pub env: &'static str,
}

pub(super) const SERVICE_ID: CredentialKey = CredentialKey {
    key: "service_id",
    env: "EMAILJS_SERVICE_ID",
};
pub(super) const TEMPLATE_ID: CredentialKey = CredentialKey {
    key: "template_id",
    env: "EMAILJS_TEMPLATE_ID",
};
pub(super) const PUBLIC_KEY: CredentialKey = CredentialKey {
    key: "public_key",
    env: "EMAILJS_PUBLIC_KEY",
};
pub(super) const ENDPOINT_ENV: &str = "EMAILJS_ENDPOINT";

fn require(value: String, key: CredentialKey) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ConfigError::MissingCredential {
            key: key.key,
            env: key.env,
        })
    } else {
        Ok(trimmed.to_string())
    }
}

/// Form behavior settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct FormConfig {
    /// Clear field values after a successful delivery. Off by default.
    #[serde(default)]
    pub clear_on_success: bool,
}

/// Root configuration, validated at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub gateway: GatewayConfig,
    pub form: FormConfig,
}

/// On-disk shape of the config file; every credential may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub(super) struct RawConfig {
    #[serde(default)]
    pub emailjs: RawEmailJs,
    #[serde(default)]
    pub form: FormConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(super) struct RawEmailJs {
    pub service_id: Option<String>,
    pub template_id: Option<String>,
    pub public_key: Option<String>,
    pub endpoint: Option<String>,
    pub timeout_seconds: Option<u64>,
}
