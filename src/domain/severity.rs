use super::log_level::Level;

/// Remote error-tracking severity.
///
/// This is distinct from `Level` (the host facility's vocabulary). Every
/// `Level` resolves to exactly one `Severity` through `Severity::for_level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Debug,
    Info,
    Warning,
    Error,
    Fatal,
}

impl Severity {
    /// Fixed level table. Unknown levels resolve to `Fatal` so nothing is
    /// under-reported.
    pub fn for_level(level: &Level) -> Self {
        match level {
            Level::Debug => Severity::Debug,
            Level::Info => Severity::Info,
            Level::Warning => Severity::Warning,
            Level::Error | Level::Exception => Severity::Error,
            Level::Critical | Level::Other(_) => Severity::Fatal,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Fatal => "fatal",
        }
    }
}

impl From<Severity> for sentry::Level {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Debug => sentry::Level::Debug,
            Severity::Info => sentry::Level::Info,
            Severity::Warning => sentry::Level::Warning,
            Severity::Error => sentry::Level::Error,
            Severity::Fatal => sentry::Level::Fatal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_levels_follow_table() {
        let table = [
            (Level::Debug, Severity::Debug),
            (Level::Info, Severity::Info),
            (Level::Warning, Severity::Warning),
            (Level::Error, Severity::Error),
            (Level::Exception, Severity::Error),
            (Level::Critical, Severity::Fatal),
        ];

        for (level, expected) in table {
            assert_eq!(Severity::for_level(&level), expected, "Level: {level}");
        }
    }

    #[test]
    fn test_unknown_levels_resolve_to_fatal() {
        for token in ["trace", "notice", "emergency", "", "42"] {
            let level = Level::Other(token.to_string());
            assert_eq!(Severity::for_level(&level), Severity::Fatal, "Token: {token:?}");
        }
    }

    #[test]
    fn test_severity_to_sentry_level() {
        assert_eq!(sentry::Level::from(Severity::Debug), sentry::Level::Debug);
        assert_eq!(sentry::Level::from(Severity::Info), sentry::Level::Info);
        assert_eq!(sentry::Level::from(Severity::Warning), sentry::Level::Warning);
        assert_eq!(sentry::Level::from(Severity::Error), sentry::Level::Error);
        assert_eq!(sentry::Level::from(Severity::Fatal), sentry::Level::Fatal);
    }

    #[test]
    fn test_severity_as_str() {
        assert_eq!(Severity::Warning.as_str(), "warning");
        assert_eq!(Severity::Fatal.as_str(), "fatal");
    }
}
