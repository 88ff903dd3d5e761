use super::initialization::{FallbackStrategy, InitializationError, LogDirective, LogLevel};
use parking_lot::RwLock;
use std::sync::OnceLock;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Targets quieted by default: the Sentry transport stack is chatty at debug.
const DEFAULT_DIRECTIVES: &[(&str, LogLevel)] = &[
    ("reqwest", LogLevel::Warn),
    ("hyper", LogLevel::Warn),
    ("hyper_util", LogLevel::Warn),
    ("rustls", LogLevel::Warn),
];

pub struct LoggingSystem {
    directives: RwLock<Vec<LogDirective>>,
    fallback_level: LogLevel,
}

impl LoggingSystem {
    pub fn new() -> Self {
        Self {
            directives: RwLock::new(Vec::new()),
            fallback_level: LogLevel::Info,
        }
    }

    /// Default directives followed by the caller's, each going through
    /// `add_directive`.
    pub fn with_directives(directives: &[String]) -> Result<Self, InitializationError> {
        let logging_system = Self::new();
        logging_system.add_default_directives();
        for directive in directives {
            logging_system.add_directive(directive)?;
        }
        Ok(logging_system)
    }

    /// Add a `target=level` directive, applying the error's fallback strategy
    /// when it does not parse.
    pub fn add_directive(&self, directive_str: &str) -> Result<(), InitializationError> {
        match LogDirective::parse(directive_str) {
            Ok(directive) => {
                self.directives.write().push(directive);
                Ok(())
            }
            Err(e) => match e.fallback_strategy() {
                FallbackStrategy::UseDefaultLevel => {
                    eprintln!("Warning: {e}, using default level");
                    self.add_default_directive(directive_str);
                    Ok(())
                }
                FallbackStrategy::SkipDirective => {
                    eprintln!("Warning: {e}, skipping directive");
                    Ok(())
                }
                _ => Err(e),
            },
        }
    }

    fn add_default_directive(&self, directive_str: &str) {
        let target = directive_str.split('=').next().unwrap_or("unknown").trim();
        self.directives
            .write()
            .push(LogDirective::new(target, self.fallback_level));
    }

    pub fn add_default_directives(&self) {
        let mut directives = self.directives.write();
        for (target, level) in DEFAULT_DIRECTIVES {
            directives.push(LogDirective::new(*target, *level));
        }
    }

    /// Install a compact fmt subscriber as the global default.
    pub fn initialize_tracing(&self, default_level: LogLevel) -> Result<(), InitializationError> {
        let filter_string = self.build_filter_string(default_level);

        let env_filter =
            EnvFilter::try_new(&filter_string).map_err(|e| InitializationError::LoggingInitFailed {
                details: format!("Failed to create EnvFilter with '{filter_string}'"),
                source: Box::new(e),
            })?;

        let subscriber = tracing_subscriber::registry().with(env_filter).with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_level(true)
                .with_ansi(true)
                .compact(),
        );

        tracing::subscriber::set_global_default(subscriber).map_err(|e| {
            InitializationError::LoggingInitFailed {
                details: "Failed to set global tracing subscriber".to_string(),
                source: Box::new(e),
            }
        })?;

        Ok(())
    }

    pub fn build_filter_string(&self, default_level: LogLevel) -> String {
        let directives = self.directives.read();

        let mut filter_parts = Vec::with_capacity(directives.len() + 1);
        filter_parts.push(default_level.as_str().to_string());
        filter_parts.extend(directives.iter().map(LogDirective::to_filter_string));

        filter_parts.join(",")
    }
}

impl Default for LoggingSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Install the process-wide subscriber once.
///
/// The first call decides the filter. A later call asking for a different
/// filter gets a warning and the installed filter stays in effect.
pub fn setup_logging_safe(
    level: LogLevel,
    directives: &[String],
) -> Result<(), InitializationError> {
    // 初回に設定したフィルタ文字列（失敗時はNone）
    static INSTALLED_FILTER: OnceLock<Option<String>> = OnceLock::new();

    let logging_system = LoggingSystem::with_directives(directives)?;
    let requested = logging_system.build_filter_string(level);

    let installed = INSTALLED_FILTER.get_or_init(|| {
        logging_system
            .initialize_tracing(level)
            .ok()
            .map(|()| requested.clone())
    });

    match installed {
        Some(filter) => {
            if *filter != requested {
                warn!(
                    "Logging already initialized with filter '{}', ignoring '{}'",
                    filter, requested
                );
            }
            Ok(())
        }
        None => Err(InitializationError::LoggingInitFailed {
            details: "Logging system initialization failed".to_string(),
            source: Box::new(std::io::Error::other("a global subscriber is already installed")),
        }),
    }
}
