//! Domain layer for rask-log-relay.
//!
//! Contains the canonical types shared across all modules:
//! - `LogValue`: The value half of a log entry (text, structured, or exception)
//! - `Level`: Host logging level (Debug/Info/Warning/Error/Exception/Critical/other)
//! - `Severity`: Remote severity vocabulary and the level mapping table
//! - `RelayError`: Failure raised while relaying to the remote sink

pub mod error;
pub mod log_level;
pub mod log_value;
pub mod severity;

pub use error::RelayError;
pub use log_level::Level;
pub use log_value::{LogValue, SharedError};
pub use severity::Severity;
