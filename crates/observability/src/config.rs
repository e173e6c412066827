use std::env;

/// Filter directives, as understood by `EnvFilter`.
pub const FILTER_ENV: &str = "RUST_LOG";

/// Output format selector: `json` (default), `pretty` or `compact`.
pub const FORMAT_ENV: &str = "FOLIUM_LOG_FORMAT";

pub const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
    Compact,
}

impl LogFormat {
    /// Unknown names fall back to JSON.
    pub fn parse_or_default(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "pretty" => LogFormat::Pretty,
            "compact" => LogFormat::Compact,
            _ => LogFormat::Json,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub filter: String,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_owned(),
            format: LogFormat::default(),
        }
    }
}

impl LogConfig {
    pub fn from_env() -> Self {
        Self::from_vars(env::var(FILTER_ENV).ok(), env::var(FORMAT_ENV).ok())
    }

    pub fn from_vars(filter: Option<String>, format: Option<String>) -> Self {
        Self {
            filter: filter
                .filter(|f| !f.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_FILTER.to_owned()),
            format: format.as_deref().map(LogFormat::parse_or_default).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_info_json() {
        assert_eq!(LogConfig::from_vars(None, None), LogConfig::default());
        assert_eq!(LogConfig::default().filter, "info");
        assert_eq!(LogConfig::default().format, LogFormat::Json);
    }

    #[test]
    fn reads_filter_and_format() {
        let config = LogConfig::from_vars(Some("folium_core=debug".into()), Some("Pretty".into()));
        assert_eq!(config.filter, "folium_core=debug");
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[test]
    fn blank_filter_and_unknown_format_fall_back() {
        let config = LogConfig::from_vars(Some("  ".into()), Some("xml".into()));
        assert_eq!(config, LogConfig::default());
    }
}
