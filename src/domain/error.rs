use thiserror::Error;

/// Failure raised while relaying an entry to the remote sink.
///
/// These never escape `LogForwarder::log`; they are written to the fallback
/// sink at `Level::Critical` instead.
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Remote client unavailable while capturing {kind} event")]
    ClientUnavailable { kind: &'static str },

    #[error("Remote relay panicked: {0}")]
    Panicked(String),
}
