//! Application configuration loaded from environment variables.

/// Output format of the log lines written to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LogFormat {
    /// `json` (any case) selects JSON; anything else falls back to pretty.
    fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        }
    }
}

/// Kiosk configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `RUST_LOG` — tracing filter directive (default: `"warn"`)
/// - `PIZZERIA_LOG_FORMAT` — `pretty` or `json` (default: `pretty`)
/// - `PIZZERIA_CURRENCY` — suffix printed after the receipt total (default: `"T"`)
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub log_format: LogFormat,
    pub currency: String,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
            log_format: lookup("PIZZERIA_LOG_FORMAT")
                .map(|value| LogFormat::parse(&value))
                .unwrap_or(defaults.log_format),
            currency: lookup("PIZZERIA_CURRENCY")
                .filter(|value| !value.trim().is_empty())
                .unwrap_or(defaults.currency),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_format: LogFormat::Pretty,
            currency: "T".to_string(),
        }
    }
}
