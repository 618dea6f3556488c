//! CLI configuration.

use std::env;
use std::fmt;
use std::str::FromStr;

use coinkey_address::Network;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),
    #[error("Unknown network: {0}")]
    UnknownNetwork(String),
    #[error("Invalid version byte: {0}")]
    InvalidVersionByte(String),
}

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ConfigError::Invalid(format!("COINKEY_OUTPUT={}", other))),
        }
    }
}

/// Defaults loaded from the environment; command-line flags override them.
#[derive(Clone, Default)]
pub struct CliConfig {
    /// Network used when no `--network` or version bytes are given.
    pub network: Network,
    /// Output format used when `--json` is not given.
    pub output: OutputFormat,
    /// Hex seed for the hidden-service key used when `--onion-seed` is not given.
    pub onion_seed: Option<String>,
}

impl fmt::Debug for CliConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CliConfig")
            .field("network", &self.network)
            .field("output", &self.output)
            .field("onion_seed", &self.onion_seed.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let network = match lookup("COINKEY_NETWORK") {
            Some(name) => parse_network(&name)?,
            None => Network::default(),
        };
        let output = match lookup("COINKEY_OUTPUT") {
            Some(format) => format.parse()?,
            None => OutputFormat::default(),
        };
        let onion_seed = lookup("COINKEY_ONION_SEED").filter(|seed| !seed.trim().is_empty());

        Ok(Self {
            network,
            output,
            onion_seed,
        })
    }
}

/// Parse a preset network name.
pub fn parse_network(name: &str) -> Result<Network, ConfigError> {
    Network::from_name(name.trim()).ok_or_else(|| ConfigError::UnknownNetwork(name.to_string()))
}

/// Parse a version byte written as decimal or `0x`-prefixed hex.
pub fn parse_version_byte(value: &str) -> Result<u8, ConfigError> {
    let trimmed = value.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(digits) => u8::from_str_radix(digits, 16),
        None => trimmed.parse(),
    };
    parsed.map_err(|_| ConfigError::InvalidVersionByte(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = CliConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.network, Network::Bitcoin);
        assert_eq!(config.output, OutputFormat::Text);
        assert!(config.onion_seed.is_none());
    }

    #[test]
    fn test_env_values() {
        let config = CliConfig::from_lookup(lookup(&[
            ("COINKEY_NETWORK", "kmd"),
            ("COINKEY_OUTPUT", "JSON"),
            ("COINKEY_ONION_SEED", "00"),
        ]))
        .unwrap();

        assert_eq!(config.network, Network::Komodo);
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.onion_seed.as_deref(), Some("00"));
        assert!(!format!("{:?}", config).contains("\"00\""));
    }

    #[test]
    fn test_invalid_env_values() {
        assert!(matches!(
            CliConfig::from_lookup(lookup(&[("COINKEY_NETWORK", "dogecoin")])),
            Err(ConfigError::UnknownNetwork(_))
        ));
        assert!(matches!(
            CliConfig::from_lookup(lookup(&[("COINKEY_OUTPUT", "yaml")])),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_parse_version_byte() {
        assert_eq!(parse_version_byte("0x3c").unwrap(), 0x3c);
        assert_eq!(parse_version_byte("188").unwrap(), 0xbc);
        assert!(parse_version_byte("0x100").is_err());
        assert!(parse_version_byte("abc").is_err());
    }
}
