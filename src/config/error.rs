use std::path::PathBuf;

/// Errors that can occur while loading configuration.
///
/// All of these are raised at startup; a configuration that loads
/// successfully always carries a usable set of delivery credentials.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML or has the wrong shape.
    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A delivery credential is absent or blank in both the file and the environment.
    #[error("missing delivery credential `{key}` (set it in the config file or ${env})")]
    MissingCredential {
        /// Key in the `[emailjs]` table.
        key: &'static str,
        /// Environment variable that overrides it.
        env: &'static str,
    },

    /// A setting is present but unusable.
    #[error("invalid setting `{key}`: {message}")]
    Invalid { key: &'static str, message: String },
}
