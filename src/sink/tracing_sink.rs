//! Local sink adapter for the `tracing` crate.

use super::LogSink;
use crate::domain::{Level, LogValue};

/// Local sink that writes every entry as a `tracing` event.
///
/// The host level token is kept in the `host_level` field; levels `tracing` has no
/// counterpart for (exception, critical, unknown) are emitted at ERROR.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for TracingSink {
    fn log(&self, value: &LogValue, level: &Level) {
        let message = value.render();
        match level {
            Level::Debug => tracing::debug!(host_level = %level, "{}", message),
            Level::Info => tracing::info!(host_level = %level, "{}", message),
            Level::Warning => tracing::warn!(host_level = %level, "{}", message),
            Level::Error | Level::Exception | Level::Critical | Level::Other(_) => {
                tracing::error!(host_level = %level, "{}", message);
            }
        }
    }
}
