//! Runtime settings for the expense tracker
//!
//! Settings come from command-line flags or their environment variables.
//! Nothing is read from or written to disk.

use clap::{Args, ValueEnum};

use crate::error::{ExpenseError, ExpenseResult};

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable multi-field lines
    #[default]
    Pretty,
    /// JSON lines for machine consumption
    Json,
    /// Minimal single-line output
    Compact,
}

/// User-adjustable settings
#[derive(Debug, Clone, Args)]
pub struct Settings {
    /// Diagnostic log level (trace, debug, info, warn, error, off)
    #[arg(long, env = "EXPENSES_LOG", default_value = "warn")]
    pub log_level: String,

    /// Diagnostic log format
    #[arg(long, env = "EXPENSES_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_format: LogFormat::default(),
        }
    }
}

impl Settings {
    /// Normalise and check the configured log level
    pub fn validate(&mut self) -> ExpenseResult<()> {
        self.log_level = normalize_level(&self.log_level)?.to_string();
        Ok(())
    }
}

fn normalize_level(level: &str) -> ExpenseResult<&'static str> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        "off" => Ok("off"),
        other => Err(ExpenseError::Config(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error|off"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        settings: Settings,
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.log_level, "warn");
        assert_eq!(settings.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_parse_flags() {
        let cli = TestCli::parse_from(["expenses", "--log-level", "debug", "--log-format", "json"]);
        assert_eq!(cli.settings.log_level, "debug");
        assert_eq!(cli.settings.log_format, LogFormat::Json);
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(TestCli::try_parse_from(["expenses", "--log-format", "xml"]).is_err());
    }

    #[test]
    fn test_validate_normalizes_level() {
        let mut settings = Settings {
            log_level: " WARNING ".into(),
            ..Settings::default()
        };
        settings.validate().unwrap();
        assert_eq!(settings.log_level, "warn");
    }

    #[test]
    fn test_validate_rejects_unknown_level() {
        let mut settings = Settings {
            log_level: "loud".into(),
            ..Settings::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(matches!(err, ExpenseError::Config(_)));
    }
}
