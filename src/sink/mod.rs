//! Local sink capability and the host registry of the active sink.
//!
//! - `LogSink`: what every local logger (and the forwarder itself) implements
//! - `SinkRegistry`: accessor/mutator pair for "the currently active sink"
//! - `SinkSlot`: lock-backed registry, optionally process-wide
//! - `TracingSink`: production local sink writing through `tracing`

mod slot;
mod tracing_sink;

pub use slot::SinkSlot;
pub use tracing_sink::TracingSink;

use crate::domain::{Level, LogValue};
use std::sync::Arc;

#[cfg(test)]
use mockall::automock;

/// A destination that accepts a value with its level and never fails.
///
/// Implementations must be `Send + Sync`; the host may log from any thread.
pub trait LogSink: Send + Sync {
    fn log(&self, value: &LogValue, level: &Level);

    /// Log at the default level (`Level::Info`).
    fn log_info(&self, value: &LogValue) {
        self.log(value, &Level::default());
    }
}

/// The host facility's notion of "the current logger".
#[cfg_attr(test, automock)]
pub trait SinkRegistry: Send + Sync {
    fn current(&self) -> Arc<dyn LogSink>;
    fn install(&self, sink: Arc<dyn LogSink>);
}
