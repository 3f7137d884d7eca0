//! # Client Configuration
//!
//! Optional YAML file passed with `--config`. Keys are kebab-case and unknown
//! keys are rejected:
//!
//! ```yaml
//! account-prefix: akash
//! ```
//!
//! Without `--config` the defaults apply.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use akt_core::{Bech32Codec, DEFAULT_ACCOUNT_PREFIX};

/// Settings read from the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct ClientConfig {
    /// Bech32 human-readable prefix of account addresses.
    pub account_prefix: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            account_prefix: DEFAULT_ACCOUNT_PREFIX.to_string(),
        }
    }
}

impl ClientConfig {
    /// Load the configuration at `path`, or the defaults when `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("invalid YAML in {}", path.display()))?;
        tracing::debug!(path = %path.display(), prefix = %config.account_prefix, "loaded config");
        Ok(config)
    }

    /// Address codec for the configured prefix.
    pub fn address_codec(&self) -> Result<Bech32Codec> {
        Bech32Codec::new(&self.account_prefix).context("invalid account-prefix in config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_path_yields_defaults() {
        let config = ClientConfig::load(None).unwrap();
        assert_eq!(config.account_prefix, "akash");
        assert_eq!(config.address_codec().unwrap(), Bech32Codec::akash());
    }

    #[test]
    fn loads_prefix_from_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("akt.yaml");
        std::fs::write(&path, "account-prefix: cosmos\n").unwrap();
        let config = ClientConfig::load(Some(&path)).unwrap();
        assert_eq!(config.account_prefix, "cosmos");
        assert_eq!(config.address_codec().unwrap().prefix(), "cosmos");
    }

    #[test]
    fn empty_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("akt.yaml");
        std::fs::write(&path, "{}\n").unwrap();
        assert_eq!(ClientConfig::load(Some(&path)).unwrap(), ClientConfig::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("akt.yaml");
        std::fs::write(&path, "account-prefix: akash\nnode: x\n").unwrap();
        let err = ClientConfig::load(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("invalid YAML"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ClientConfig::load(Some(&dir.path().join("missing.yaml"))).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }

    #[test]
    fn invalid_prefix_is_reported() {
        let config = ClientConfig {
            account_prefix: String::new(),
        };
        assert!(config.address_codec().is_err());
    }
}
