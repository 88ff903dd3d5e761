mod env;
mod validation;

use super::initialization::LogLevel;
use env::{load_env_list, load_env_string_opt, load_env_var};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid DSN: {0}")]
    InvalidDsn(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("File error: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Environment error: {0}")]
    EnvError(String),
}

/// Relay configuration: Sentry client options plus the crate's own log level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    /// Sentry DSN; remote reporting stays disabled without one
    pub dsn: Option<String>,
    pub environment: Option<String>,
    pub release: Option<String>,
    /// Defaults to the machine hostname
    pub server_name: Option<String>,
    pub attach_stacktrace: bool,
    pub debug: bool,
    pub log_level: LogLevel,
    /// Extra `target=level` filter directives; malformed ones are skipped at startup
    pub log_directives: Vec<String>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            dsn: None,
            environment: None,
            release: None,
            server_name: None,
            attach_stacktrace: true,
            debug: false,
            log_level: LogLevel::Info,
            log_directives: Vec::new(),
        }
    }
}

impl RelayConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: RelayConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the environment. An inline TOML document in `RELAY_CONFIG`
    /// takes precedence over the individual variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(relay_config) = std::env::var("RELAY_CONFIG") {
            return Self::from_toml(&relay_config);
        }

        let mut config = RelayConfig::default();

        load_env_string_opt("SENTRY_DSN", &mut config.dsn);
        load_env_string_opt("SENTRY_ENVIRONMENT", &mut config.environment);
        load_env_string_opt("SENTRY_RELEASE", &mut config.release);
        load_env_string_opt("SENTRY_SERVER_NAME", &mut config.server_name);
        load_env_var("SENTRY_ATTACH_STACKTRACE", &mut config.attach_stacktrace)?;
        load_env_var("SENTRY_DEBUG", &mut config.debug)?;

        if let Ok(log_level) = std::env::var("LOG_LEVEL") {
            config.log_level = log_level
                .parse()
                .map_err(|_| ConfigError::EnvError(format!("Invalid LOG_LEVEL: {log_level}")))?;
        }
        load_env_list("LOG_DIRECTIVES", &mut config.log_directives);

        config.validate()?;
        Ok(config)
    }

    pub fn is_reporting_enabled(&self) -> bool {
        self.dsn.is_some()
    }

    /// Build Sentry client options from this configuration.
    pub fn client_options(&self) -> Result<sentry::ClientOptions, ConfigError> {
        let dsn = self
            .dsn
            .as_deref()
            .map(|dsn| {
                dsn.parse::<sentry::types::Dsn>()
                    .map_err(|e| ConfigError::InvalidDsn(format!("'{dsn}': {e}")))
            })
            .transpose()?;

        let server_name = self
            .server_name
            .clone()
            .or_else(|| hostname::get().ok().and_then(|name| name.into_string().ok()));

        Ok(sentry::ClientOptions {
            dsn,
            environment: self.environment.clone().map(Cow::Owned),
            release: self.release.clone().map(Cow::Owned),
            server_name: server_name.map(Cow::Owned),
            attach_stacktrace: self.attach_stacktrace,
            debug: self.debug,
            ..Default::default()
        })
    }
}
