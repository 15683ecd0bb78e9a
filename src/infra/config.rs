// src/infra/config.rs — Configuration loading (TOML)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

use crate::infra::errors::MindMateError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub gateway: GatewayConfig,

    #[serde(default)]
    pub session: SessionConfig,
}

/// Remote generation endpoint and persona. The endpoint owns the wire
/// protocol; we only carry these fields into each request. Every field is
/// individually defaulted, so a partial table fills in the rest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_persona")]
    pub persona: String,
    #[serde(default = "default_assistant_name")]
    pub assistant_name: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_endpoint() -> String {
    "https://ai.potential.com/chatbot/".into()
}

fn default_persona() -> String {
    "You are an empathetic mental health assistant that provides supportive, thoughtful responses.".into()
}

fn default_assistant_name() -> String {
    "Ameen".into()
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            persona: default_persona(),
            assistant_name: default_assistant_name(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_greeting")]
    pub greeting: String,
    /// Pause before an assistant reply is appended, simulating composition.
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,
}

fn default_greeting() -> String {
    "Welcome to MindMate X! I'm your AI mental health assistant. How can I help you today?".into()
}

fn default_reply_delay_ms() -> u64 {
    1000
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            greeting: default_greeting(),
            reply_delay_ms: default_reply_delay_ms(),
        }
    }
}

impl Config {
    /// Load from the default location, falling back to defaults when no
    /// config file exists.
    pub fn load() -> Result<Self, MindMateError> {
        match default_config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, MindMateError> {
        let raw = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&raw)
            .map_err(|e| MindMateError::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), MindMateError> {
        Url::parse(&self.gateway.endpoint)
            .map_err(|e| MindMateError::Config(format!("invalid endpoint URL: {}", e)))?;
        Ok(())
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("mindmate").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.gateway.endpoint, "https://ai.potential.com/chatbot/");
        assert_eq!(config.gateway.assistant_name, "Ameen");
        assert_eq!(config.gateway.request_timeout_secs, 30);
        assert_eq!(config.session.reply_delay_ms, 1000);
        assert!(config.session.greeting.starts_with("Welcome to MindMate X!"));
    }

    #[test]
    fn test_load_from_partial_toml() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[gateway]
endpoint = "http://localhost:9000/chatbot/"
persona = "You are a test persona."
assistant_name = "Test"
request_timeout_secs = 5
"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.gateway.endpoint, "http://localhost:9000/chatbot/");
        assert_eq!(config.gateway.request_timeout_secs, 5);
        // Untouched section keeps its defaults
        assert_eq!(config.session.reply_delay_ms, 1000);
    }

    #[test]
    fn test_partial_gateway_table_fills_in_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[gateway]\nendpoint = \"http://localhost:9000/\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.gateway.endpoint, "http://localhost:9000/");
        // Every omitted field gets its default
        assert_eq!(config.gateway.assistant_name, "Ameen");
        assert_eq!(config.gateway.request_timeout_secs, 30);
        assert!(config.gateway.persona.starts_with("You are an empathetic"));
    }

    #[test]
    fn test_invalid_endpoint_rejected() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[gateway]\nendpoint = \"not a url\"\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, MindMateError::Config(_)));
    }
}
