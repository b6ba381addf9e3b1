use std::env;

pub const DEFAULT_API_URL: &str = "https://api.opsgenie.com";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

/// Process-wide settings, read once at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub api_url: String,
    pub bind_addr: String,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    MissingVar(&'static str),
    InvalidVar { name: &'static str, value: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingVar(name) => write!(f, "{} must be set", name),
            ConfigError::InvalidVar { name, value } => {
                write!(f, "Invalid value for {}: {:?}", name, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Load from the process environment (and `.env`, if the binary loaded one)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from any variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_key = var("OPSGENIE_API_KEY").ok_or(ConfigError::MissingVar("OPSGENIE_API_KEY"))?;

        let api_url = var("OPSGENIE_API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let bind_addr = var("ONCALL_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let port = match var("ONCALL_PORT") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidVar {
                name: "ONCALL_PORT",
                value,
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            api_key,
            api_url,
            bind_addr,
            port,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_with_only_api_key() {
        let config = Config::from_lookup(lookup_from(&[("OPSGENIE_API_KEY", "genie")])).unwrap();

        assert_eq!(config.api_key, "genie");
        assert_eq!(config.api_url, "https://api.opsgenie.com");
        assert_eq!(config.bind_addr, "0.0.0.0");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_missing_api_key() {
        let result = Config::from_lookup(lookup_from(&[]));
        assert_eq!(result.unwrap_err(), ConfigError::MissingVar("OPSGENIE_API_KEY"));
    }

    #[test]
    fn test_empty_api_key_is_missing() {
        let result = Config::from_lookup(lookup_from(&[("OPSGENIE_API_KEY", "  ")]));
        assert!(matches!(result, Err(ConfigError::MissingVar(_))));
    }

    #[test]
    fn test_api_url_trailing_slash_trimmed() {
        let config = Config::from_lookup(lookup_from(&[
            ("OPSGENIE_API_KEY", "genie"),
            ("OPSGENIE_API_URL", "https://api.eu.opsgenie.com/"),
        ]))
        .unwrap();

        assert_eq!(config.api_url, "https://api.eu.opsgenie.com");
    }

    #[test]
    fn test_custom_bind_and_port() {
        let config = Config::from_lookup(lookup_from(&[
            ("OPSGENIE_API_KEY", "genie"),
            ("ONCALL_BIND_ADDR", "127.0.0.1"),
            ("ONCALL_PORT", "9090"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1");
        assert_eq!(config.port, 9090);
    }

    #[test]
    fn test_invalid_port() {
        let result = Config::from_lookup(lookup_from(&[
            ("OPSGENIE_API_KEY", "genie"),
            ("ONCALL_PORT", "eighty"),
        ]));

        let err = result.unwrap_err();
        assert!(err.to_string().contains("ONCALL_PORT"));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::MissingVar("OPSGENIE_API_KEY");
        assert_eq!(err.to_string(), "OPSGENIE_API_KEY must be set");
    }
}
