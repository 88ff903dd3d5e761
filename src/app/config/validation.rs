use super::{ConfigError, RelayConfig};

impl RelayConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(dsn) = &self.dsn {
            dsn.parse::<sentry::types::Dsn>()
                .map_err(|e| ConfigError::InvalidDsn(format!("'{dsn}': {e}")))?;
        }

        for (name, value) in [
            ("environment", &self.environment),
            ("release", &self.release),
            ("server_name", &self.server_name),
        ] {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                return Err(ConfigError::InvalidConfig(format!(
                    "{name} must not be empty when set"
                )));
            }
        }

        Ok(())
    }
}
