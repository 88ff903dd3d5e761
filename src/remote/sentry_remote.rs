use super::RemoteSink;
use crate::domain::{RelayError, Severity, SharedError};
use sentry::Hub;
use std::sync::Arc;

/// Remote sink reporting to Sentry.
///
/// Without an explicit hub every call resolves `Hub::current()`, so whatever
/// client the host bound with `sentry::init` is used.
#[derive(Clone, Default)]
pub struct SentryRemote {
    hub: Option<Arc<Hub>>,
}

impl SentryRemote {
    pub fn new() -> Self {
        Self { hub: None }
    }

    pub fn with_hub(hub: Arc<Hub>) -> Self {
        Self { hub: Some(hub) }
    }

    fn hub(&self) -> Arc<Hub> {
        self.hub.clone().unwrap_or_else(Hub::current)
    }

    /// A nil id from an enabled client means the client filtered the event
    /// itself (`sample_rate`, `before_send`); only a missing client is a failure.
    fn check_captured(
        hub: &Hub,
        event_id: sentry::types::Uuid,
        kind: &'static str,
        severity: Severity,
    ) -> Result<(), RelayError> {
        if !event_id.is_nil() {
            tracing::trace!("Captured {} event {} ({})", kind, event_id, severity.as_str());
            return Ok(());
        }

        if hub.client().is_some_and(|client| client.is_enabled()) {
            tracing::trace!("Sentry client filtered {} event ({})", kind, severity.as_str());
            Ok(())
        } else {
            Err(RelayError::ClientUnavailable { kind })
        }
    }
}

impl RemoteSink for SentryRemote {
    fn is_available(&self) -> bool {
        self.hub()
            .client()
            .is_some_and(|client| client.is_enabled())
    }

    fn capture_exception(&self, error: &SharedError, severity: Severity) -> Result<(), RelayError> {
        let mut event = sentry::event_from_error(error.as_ref());
        event.level = severity.into();

        let hub = self.hub();
        let event_id = hub.capture_event(event);
        Self::check_captured(&hub, event_id, "exception", severity)
    }

    fn capture_message(&self, message: &str, severity: Severity) -> Result<(), RelayError> {
        let hub = self.hub();
        let event_id = hub.capture_message(message, severity.into());
        Self::check_captured(&hub, event_id, "message", severity)
    }
}
