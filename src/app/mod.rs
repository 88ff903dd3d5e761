pub mod config;
pub mod initialization;
pub mod logging_system;

pub use config::{ConfigError, RelayConfig};
pub use initialization::{FallbackStrategy, InitializationError, LogLevel};
pub use logging_system::{LoggingSystem, setup_logging_safe};

use crate::forwarder::LogForwarder;
use crate::remote::SentryRemote;
use crate::sink::SinkRegistry;
use std::sync::Arc;
use tracing::{info, warn};

/// Keeps the Sentry client alive; pending events are flushed when dropped.
pub struct RelayGuard {
    sentry: Option<sentry::ClientInitGuard>,
}

impl RelayGuard {
    pub fn is_reporting(&self) -> bool {
        self.sentry.as_ref().is_some_and(|guard| guard.is_enabled())
    }
}

/// Host bootstrap: logging, the Sentry client, then a forwarder installed on
/// `registry`.
///
/// Without a DSN the forwarder is still installed; its remote sink stays
/// unavailable and relaying is a no-op.
///
/// The tracing subscriber is process-wide and installed once. Calling this
/// again with a different `log_level` or `log_directives` logs a warning and
/// keeps the first filter.
pub fn bootstrap(
    config: &RelayConfig,
    registry: &dyn SinkRegistry,
) -> Result<RelayGuard, InitializationError> {
    let client_options = config
        .validate()
        .and_then(|()| config.client_options())
        .map_err(|e| InitializationError::ConfigValidationFailed {
            reason: e.to_string(),
        })?;

    if let Err(e) = setup_logging_safe(config.log_level, &config.log_directives) {
        match e.fallback_strategy() {
            // Hosts commonly install their own subscriber first.
            FallbackStrategy::KeepExistingSubscriber => {
                warn!("{}, keeping existing subscriber", e);
            }
            _ => return Err(e),
        }
    }

    let sentry = if config.is_reporting_enabled() {
        let guard = sentry::init(client_options);
        info!(
            "Sentry client initialized (environment={:?}, release={:?})",
            config.environment, config.release
        );
        Some(guard)
    } else {
        warn!("No Sentry DSN configured, remote reporting disabled");
        None
    };

    LogForwarder::register(registry, Arc::new(SentryRemote::new()));
    info!("rask-log-relay v{} registered", crate::VERSION);

    Ok(RelayGuard { sentry })
}
