//! Dual-dispatch log forwarder.
//!
//! `LogForwarder` writes every entry to the fallback sink first, then relays it
//! to the remote sink. Relay failures are written back to the fallback sink at
//! `Level::Critical` and never reach the caller.

use crate::domain::{Level, LogValue, RelayError, Severity};
use crate::remote::RemoteSink;
use crate::sink::{LogSink, SinkRegistry};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

pub struct LogForwarder {
    fallback: Arc<dyn LogSink>,
    remote: Arc<dyn RemoteSink>,
}

impl LogForwarder {
    pub fn new(fallback: Arc<dyn LogSink>, remote: Arc<dyn RemoteSink>) -> Self {
        Self { fallback, remote }
    }

    /// Wrap the registry's active sink and install the forwarder in its place.
    ///
    /// Calling this twice chains two forwarders, the second falling back to
    /// the first.
    pub fn register(registry: &dyn SinkRegistry, remote: Arc<dyn RemoteSink>) {
        let fallback = registry.current();
        registry.install(Arc::new(Self::new(fallback, remote)));
    }

    fn relay(&self, value: &LogValue, level: &Level) -> Result<(), RelayError> {
        if !self.remote.is_available() {
            tracing::trace!("Remote sink unavailable, skipping relay");
            return Ok(());
        }

        let severity = Severity::for_level(level);
        match value {
            LogValue::Exception(error) => self.remote.capture_exception(error, severity),
            other => self.remote.capture_message(&other.render(), severity),
        }
    }
}

impl LogSink for LogForwarder {
    fn log(&self, value: &LogValue, level: &Level) {
        // A panicking fallback is not caught.
        self.fallback.log(value, level);

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.relay(value, level)))
            .unwrap_or_else(|payload| Err(RelayError::Panicked(panic_message(payload.as_ref()))));

        if let Err(error) = outcome {
            self.fallback.log(&LogValue::exception(error), &Level::Critical);
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
