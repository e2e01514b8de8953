//! Support agent configuration, loadable from TOML.

use std::time::Duration;

use serde::Deserialize;

use crate::inference::OllamaConfig;

#[derive(Debug, Clone, Deserialize)]
pub struct AgentConfig {
    /// Base URL of the database agent.
    #[serde(default = "default_db_agent_url")]
    pub db_agent_url: String,
    /// Timeout for calls to the database agent, in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    /// Model tier settings. Optional; defaults to enabled.
    #[serde(default)]
    pub ollama: OllamaConfig,
}

fn default_db_agent_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_request_timeout() -> u64 {
    60
}

impl AgentConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            db_agent_url: default_db_agent_url(),
            request_timeout_secs: default_request_timeout(),
            ollama: OllamaConfig::default(),
        }
    }
}
