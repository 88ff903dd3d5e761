use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InitializationError {
    #[error("Invalid log level '{input}'. Valid levels: {valid_levels:?}")]
    InvalidLogLevel {
        input: String,
        valid_levels: Vec<String>,
    },

    #[error("Invalid directive format '{input}'. Expected: '{expected}'")]
    InvalidDirectiveFormat { input: String, expected: String },

    #[error("Empty target in directive '{input}'")]
    EmptyTarget { input: String },

    #[error("Logging system initialization failed: {details}")]
    LoggingInitFailed {
        details: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Configuration validation failed: {reason}")]
    ConfigValidationFailed { reason: String },
}

impl InitializationError {
    pub fn fallback_strategy(&self) -> FallbackStrategy {
        match self {
            InitializationError::InvalidLogLevel { .. } => FallbackStrategy::UseDefaultLevel,
            InitializationError::InvalidDirectiveFormat { .. }
            | InitializationError::EmptyTarget { .. } => FallbackStrategy::SkipDirective,
            InitializationError::LoggingInitFailed { .. } => FallbackStrategy::KeepExistingSubscriber,
            InitializationError::ConfigValidationFailed { .. } => FallbackStrategy::AbortStartup,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackStrategy {
    UseDefaultLevel,
    SkipDirective,
    KeepExistingSubscriber,
    AbortStartup,
}

/// Filter level for the crate's own `tracing` output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl FromStr for LogLevel {
    type Err = InitializationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            _ => Err(InitializationError::InvalidLogLevel {
                input: s.to_string(),
                valid_levels: ["error", "warn", "info", "debug", "trace"]
                    .iter()
                    .map(ToString::to_string)
                    .collect(),
            }),
        }
    }
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Debug, Clone)]
pub struct LogDirective {
    pub target: String,
    pub level: LogLevel,
}

impl LogDirective {
    pub fn new(target: impl Into<String>, level: LogLevel) -> Self {
        Self {
            target: target.into(),
            level,
        }
    }

    /// Parse a `target=level` directive.
    pub fn parse(directive: &str) -> Result<Self, InitializationError> {
        let (target, level) = match directive.split_once('=') {
            Some((target, level)) if !level.contains('=') => (target.trim(), level.trim()),
            _ => {
                return Err(InitializationError::InvalidDirectiveFormat {
                    input: directive.to_string(),
                    expected: "target=level".to_string(),
                });
            }
        };

        if target.is_empty() {
            return Err(InitializationError::EmptyTarget {
                input: directive.to_string(),
            });
        }

        let parsed_level = LogLevel::from_str(level)?;

        Ok(LogDirective::new(target, parsed_level))
    }

    /// Render for `tracing_subscriber::EnvFilter`.
    pub fn to_filter_string(&self) -> String {
        format!("{}={}", self.target, self.level.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_from_str() {
        assert_eq!(LogLevel::from_str("error").unwrap(), LogLevel::Error);
        assert_eq!(LogLevel::from_str("warn").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("warning").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("debug").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);

        // Case insensitive
        assert_eq!(LogLevel::from_str("ERROR").unwrap(), LogLevel::Error);

        // Invalid level
        assert!(LogLevel::from_str("verbose").is_err());
    }

    #[test]
    fn test_log_directive_parsing_valid_cases() {
        let valid_cases = [
            ("reqwest=warn", "reqwest", LogLevel::Warn),
            ("sentry=error", "sentry", LogLevel::Error),
            ("rask_log_relay=trace", "rask_log_relay", LogLevel::Trace),
            (" hyper = info ", "hyper", LogLevel::Info),
        ];

        for (input, expected_target, expected_level) in valid_cases {
            let directive = LogDirective::parse(input).unwrap();
            assert_eq!(directive.target, expected_target, "Input: {input}");
            assert_eq!(directive.level, expected_level, "Input: {input}");
        }
    }

    #[test]
    fn test_log_directive_parsing_invalid_cases() {
        let invalid_cases = [
            ("", "empty string"),
            ("hyper", "missing level"),
            ("=warn", "empty target"),
            ("hyper=", "empty level"),
            ("hyper=invalid", "invalid level"),
            ("hyper=warn=extra", "too many parts"),
            ("  =warn", "empty target with spaces"),
        ];

        for (input, description) in invalid_cases {
            assert!(
                LogDirective::parse(input).is_err(),
                "Should fail for {description}: {input}"
            );
        }
    }

    #[test]
    fn test_log_directive_to_filter_string() {
        let directive = LogDirective::new("reqwest", LogLevel::Warn);
        assert_eq!(directive.to_filter_string(), "reqwest=warn");
    }

    #[test]
    fn test_fallback_strategies() {
        let err = LogDirective::parse("hyper").unwrap_err();
        assert_eq!(err.fallback_strategy(), FallbackStrategy::SkipDirective);

        let err = LogDirective::parse("hyper=loud").unwrap_err();
        assert_eq!(err.fallback_strategy(), FallbackStrategy::UseDefaultLevel);

        let err = InitializationError::ConfigValidationFailed {
            reason: "bad dsn".to_string(),
        };
        assert_eq!(err.fallback_strategy(), FallbackStrategy::AbortStartup);
    }

    #[test]
    fn test_log_level_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            level: LogLevel,
        }

        let parsed: Wrapper = toml::from_str(r#"level = "debug""#).unwrap();
        assert_eq!(parsed.level, LogLevel::Debug);
    }
}
