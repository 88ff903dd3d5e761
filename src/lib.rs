#![deny(warnings, rust_2024_compatibility)]
// Specific pedantic lints enforced (not blanket allow):
#![deny(
    clippy::explicit_iter_loop,
    clippy::manual_let_else,
    clippy::semicolon_if_nothing_returned,
    clippy::inconsistent_struct_constructor
)]
#![allow(
    clippy::missing_errors_doc,      // Internal API
    clippy::missing_panics_doc,      // Internal API
    clippy::module_name_repetitions, // e.g. SinkSlot in sink module
    clippy::must_use_candidate,      // Annotated selectively on critical APIs
    clippy::doc_markdown             // Internal API
)]

pub mod app;
pub mod domain;
pub mod forwarder;
pub mod remote;
pub mod sink;

// Re-export main types for easy access
pub use app::{RelayConfig, RelayGuard, bootstrap};
pub use domain::{Level, LogValue, RelayError, Severity};
pub use forwarder::LogForwarder;
pub use remote::{RemoteSink, SentryRemote};
pub use sink::{LogSink, SinkRegistry, SinkSlot, TracingSink};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
