//! Agent configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `CLAUDE_API_KEY` - Anthropic API key
//!
//! ## Optional
//! - `CLAUDE_MODEL` - Model name (default: claude-sonnet-4-20250514)
//! - `ANTHROPIC_API_URL` - Messages API endpoint (overridable for testing)
//! - `MCP_SERVER_URL` - Storebridge MCP server URL (default: `http://127.0.0.1:9100/mcp`)

use secrecy::SecretString;
use thiserror::Error;

const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
const DEFAULT_API_URL: &str = "https://api.anthropic.com/v1/messages";
const DEFAULT_MCP_URL: &str = "http://127.0.0.1:9100/mcp";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
}

/// Agent application configuration.
#[derive(Clone)]
pub struct AgentConfig {
    /// Anthropic API key
    pub api_key: SecretString,
    /// Model to use for chat
    pub model: String,
    /// Messages API endpoint
    pub api_url: String,
    /// MCP server URL for store tools
    pub mcp_server_url: String,
}

impl std::fmt::Debug for AgentConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("api_url", &self.api_url)
            .field("mcp_server_url", &self.mcp_server_url)
            .finish()
    }
}

impl AgentConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `CLAUDE_API_KEY` is missing.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let api_key = std::env::var("CLAUDE_API_KEY")
            .map(SecretString::from)
            .map_err(|_| ConfigError::MissingEnvVar("CLAUDE_API_KEY".to_string()))?;

        Ok(Self {
            api_key,
            model: get_env_or_default("CLAUDE_MODEL", DEFAULT_MODEL),
            api_url: get_env_or_default("ANTHROPIC_API_URL", DEFAULT_API_URL),
            mcp_server_url: get_env_or_default("MCP_SERVER_URL", DEFAULT_MCP_URL),
        })
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_api_key() {
        let config = AgentConfig {
            api_key: SecretString::from("sk-ant-secret"),
            model: DEFAULT_MODEL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            mcp_server_url: DEFAULT_MCP_URL.to_string(),
        };

        let debug_output = format!("{config:?}");
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("sk-ant-secret"));
    }
}
