//! Self-description the database agent publishes at `/.well-known/agent.json`.

use serde::{Deserialize, Serialize};

use crate::actions::SupportAction;

/// A single capability advertised by an agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentSkill {
    pub id: SupportAction,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Example request bodies, serialized as JSON strings.
    #[serde(default)]
    pub examples: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentCard {
    pub name: String,
    pub description: String,
    pub url: String,
    pub version: String,
    pub skills: Vec<AgentSkill>,
}

impl AgentCard {
    pub fn supports(&self, action: SupportAction) -> bool {
        self.skills.iter().any(|s| s.id == action)
    }
}
