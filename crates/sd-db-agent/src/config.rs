//! Database agent configuration, read from the environment.

use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct DbAgentConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// SQLite connection URL.
    #[serde(default = "default_database_url")]
    pub database_url: String,
    /// Process flow scenario table.
    #[serde(default = "default_scenarios_path")]
    pub scenarios_path: PathBuf,
    /// Load the demo customers, orders and subscriptions on startup.
    #[serde(default)]
    pub seed_demo_data: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_database_url() -> String {
    "sqlite://db/support_demo.db".to_string()
}

fn default_scenarios_path() -> PathBuf {
    PathBuf::from("scenarios/process_flow.json")
}

impl DbAgentConfig {
    /// Load from `HOST`, `PORT`, `DATABASE_URL`, `SCENARIOS_PATH` and
    /// `SEED_DEMO_DATA`.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();
        if let Some(host) = lookup("HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("PORT") {
            config.port = port
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid PORT '{port}': {e}"))?;
        }
        if let Some(url) = lookup("DATABASE_URL") {
            config.database_url = url;
        }
        if let Some(path) = lookup("SCENARIOS_PATH") {
            config.scenarios_path = PathBuf::from(path);
        }
        if let Some(seed) = lookup("SEED_DEMO_DATA") {
            config.seed_demo_data = seed.eq_ignore_ascii_case("true") || seed == "1";
        }
        Ok(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// URL advertised on the agent card.
    pub fn public_url(&self) -> String {
        format!("http://{}", self.bind_addr())
    }
}

impl Default for DbAgentConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            database_url: default_database_url(),
            scenarios_path: default_scenarios_path(),
            seed_demo_data: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn default_config() {
        let config = DbAgentConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:8000");
        assert_eq!(config.database_url, "sqlite://db/support_demo.db");
        assert_eq!(config.scenarios_path, PathBuf::from("scenarios/process_flow.json"));
        assert!(!config.seed_demo_data);
    }

    #[test]
    fn env_overrides() {
        let config = DbAgentConfig::from_lookup(lookup(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "9100"),
            ("DATABASE_URL", "sqlite::memory:"),
            ("SCENARIOS_PATH", "/etc/support/flow.json"),
            ("SEED_DEMO_DATA", "TRUE"),
        ]))
        .unwrap();
        assert_eq!(config.public_url(), "http://0.0.0.0:9100");
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.scenarios_path, PathBuf::from("/etc/support/flow.json"));
        assert!(config.seed_demo_data);
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = DbAgentConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn deserialize_partial() {
        let config: DbAgentConfig = serde_json::from_str(r#"{"port": 8100}"#).unwrap();
        assert_eq!(config.port, 8100);
        assert_eq!(config.host, "127.0.0.1");
    }
}
