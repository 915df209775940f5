use clap::ValueEnum;
use std::fmt;
use tracing_subscriber::EnvFilter;

/// `--format`: human text or the JSON envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Plain => "plain",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `--log-level`: verbosity of the stderr log
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    /// Filter for the subscriber. `RUST_LOG` wins when set and valid.
    pub fn env_filter(self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| self.directive())
    }

    /// The level alone, ignoring the environment.
    pub fn directive(self) -> EnvFilter {
        EnvFilter::new(self.as_str())
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_directive_names_the_level() {
        assert_eq!(LogLevel::Warn.directive().to_string(), "warn");
        assert_eq!(LogLevel::Trace.directive().to_string(), "trace");
    }

    #[test]
    fn test_value_names_match_display() {
        for level in LogLevel::value_variants() {
            let parsed = LogLevel::from_str(level.as_str(), false).unwrap();
            assert_eq!(parsed, *level);
        }
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }
}
