//! Remote error-tracking sink.

mod sentry_remote;

pub use sentry_remote::SentryRemote;

use crate::domain::{RelayError, Severity, SharedError};

#[cfg(test)]
use mockall::automock;

/// Best-effort remote destination for log entries.
///
/// Both capture methods may fail; `LogForwarder` isolates those failures from
/// its caller.
#[cfg_attr(test, automock)]
pub trait RemoteSink: Send + Sync {
    /// `false` when the remote client was never initialized.
    fn is_available(&self) -> bool;

    fn capture_exception(&self, error: &SharedError, severity: Severity) -> Result<(), RelayError>;

    fn capture_message(&self, message: &str, severity: Severity) -> Result<(), RelayError>;
}
