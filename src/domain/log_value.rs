use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Error object shared between the fallback and remote sinks.
pub type SharedError = Arc<dyn Error + Send + Sync + 'static>;

/// The value half of a log entry.
///
/// Both sinks receive the same `LogValue`; `render` is the single display
/// convention so the local log and the remote event read identically.
#[derive(Debug, Clone)]
pub enum LogValue {
    Text(String),
    Structured(serde_json::Value),
    Exception(SharedError),
}

impl LogValue {
    pub fn exception<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        LogValue::Exception(Arc::new(error))
    }

    /// Display form used by the fallback sink and for remote messages.
    pub fn render(&self) -> String {
        match self {
            LogValue::Text(text) => text.clone(),
            LogValue::Structured(value) => value.to_string(),
            LogValue::Exception(error) => error.to_string(),
        }
    }

    pub fn as_exception(&self) -> Option<&SharedError> {
        match self {
            LogValue::Exception(error) => Some(error),
            _ => None,
        }
    }
}

// Exceptions compare by identity: the same error object, not an equal message.
impl PartialEq for LogValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (LogValue::Text(a), LogValue::Text(b)) => a == b,
            (LogValue::Structured(a), LogValue::Structured(b)) => a == b,
            (LogValue::Exception(a), LogValue::Exception(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for LogValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<&str> for LogValue {
    fn from(text: &str) -> Self {
        LogValue::Text(text.to_string())
    }
}

impl From<String> for LogValue {
    fn from(text: String) -> Self {
        LogValue::Text(text)
    }
}

impl From<serde_json::Value> for LogValue {
    fn from(value: serde_json::Value) -> Self {
        LogValue::Structured(value)
    }
}

impl From<SharedError> for LogValue {
    fn from(error: SharedError) -> Self {
        LogValue::Exception(error)
    }
}
