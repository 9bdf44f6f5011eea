//! TOML configuration file loading
//!
//! All fields are optional — the file is a partial overlay underneath CLI
//! and environment overrides.

use std::path::Path;

use serde::Deserialize;

use crate::Result;

/// Top-level TOML configuration file schema
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    /// Server/runtime configuration
    #[serde(default)]
    pub server: ServerFileConfig,

    /// Webhook authentication
    #[serde(default)]
    pub webhook: WebhookFileConfig,

    /// Delivery behavior
    #[serde(default)]
    pub delivery: DeliveryFileConfig,
}

/// Server configuration
#[derive(Debug, Default, Deserialize)]
pub struct ServerFileConfig {
    /// Listen port
    pub port: Option<u16>,
}

/// Webhook authentication configuration
#[derive(Debug, Default, Deserialize)]
pub struct WebhookFileConfig {
    /// Shared secret expected in `X-Telegram-Bot-Api-Secret-Token`
    pub secret: Option<String>,
}

/// Delivery behavior configuration
#[derive(Debug, Default, Deserialize)]
pub struct DeliveryFileConfig {
    /// Delete the original message after a successful upload
    pub delete_original: Option<bool>,
}

impl ConfigFile {
    /// Load and parse a config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_full_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "[server]\nport = 9000\n\n[webhook]\nsecret = \"hunter2\"\n\n[delivery]\ndelete_original = false\n"
        )
        .unwrap();

        let config = ConfigFile::load(file.path()).unwrap();
        assert_eq!(config.server.port, Some(9000));
        assert_eq!(config.webhook.secret.as_deref(), Some("hunter2"));
        assert_eq!(config.delivery.delete_original, Some(false));
    }

    #[test]
    fn test_load_empty_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = ConfigFile::load(file.path()).unwrap();
        assert!(config.server.port.is_none());
        assert!(config.webhook.secret.is_none());
        assert!(config.delivery.delete_original.is_none());
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[server\nport = ").unwrap();
        assert!(ConfigFile::load(file.path()).is_err());
    }
}
