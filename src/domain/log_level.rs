use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Host log level attached to every entry.
///
/// The six named levels come from the host logging facility. Any other token is
/// kept verbatim in `Other` so the fallback sink still sees what the caller
/// passed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Level {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
    Exception,
    Critical,
    Other(String),
}

impl Level {
    pub fn as_str(&self) -> &str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warning => "warning",
            Level::Error => "error",
            Level::Exception => "exception",
            Level::Critical => "critical",
            Level::Other(token) => token,
        }
    }
}

impl FromStr for Level {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "debug" => Level::Debug,
            "info" => Level::Info,
            "warn" | "warning" => Level::Warning,
            "error" => Level::Error,
            "exception" => Level::Exception,
            "critical" => Level::Critical,
            _ => Level::Other(s.trim().to_string()),
        })
    }
}

impl From<&str> for Level {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(level) => level,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_str() {
        assert_eq!(Level::from("debug"), Level::Debug);
        assert_eq!(Level::from("info"), Level::Info);
        assert_eq!(Level::from("warning"), Level::Warning);
        assert_eq!(Level::from("warn"), Level::Warning);
        assert_eq!(Level::from("error"), Level::Error);
        assert_eq!(Level::from("exception"), Level::Exception);
        assert_eq!(Level::from("critical"), Level::Critical);

        // Case insensitive
        assert_eq!(Level::from("CRITICAL"), Level::Critical);
        assert_eq!(Level::from(" Warning "), Level::Warning);
    }

    #[test]
    fn test_unknown_level_is_kept_verbatim() {
        let level = Level::from("Emergency");
        assert_eq!(level, Level::Other("Emergency".to_string()));
        assert_eq!(level.as_str(), "Emergency");
    }

    #[test]
    fn test_unknown_level_drops_surrounding_whitespace() {
        assert_eq!(Level::from(" notice "), Level::Other("notice".to_string()));
        assert_eq!(Level::from("\tEmergency\n").to_string(), "Emergency");
    }

    #[test]
    fn test_default_level_is_info() {
        assert_eq!(Level::default(), Level::Info);
    }

    #[test]
    fn test_level_display() {
        assert_eq!(Level::Exception.to_string(), "exception");
        assert_eq!(Level::Other("trace".to_string()).to_string(), "trace");
    }
}
