// ABOUTME: AgentConfig - declares an agent hierarchy as JSON data.
// ABOUTME: Building validates that agent names are present and unique tree-wide.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{Agent, LlmAgent};
use crate::error::ConfigError;

/// Declarative description of an LLM agent and its sub-agents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentConfig {
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub disallow_transfer_to_parent: bool,

    #[serde(default)]
    pub disallow_transfer_to_peers: bool,

    #[serde(default)]
    pub sub_agents: Vec<AgentConfig>,
}

impl AgentConfig {
    /// Parse a hierarchy from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a hierarchy from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Build the agent tree rooted at this config.
    pub fn build(&self) -> Result<Arc<dyn Agent>, ConfigError> {
        let mut seen = HashSet::new();
        self.build_inner(&mut seen)
    }

    fn build_inner(&self, seen: &mut HashSet<String>) -> Result<Arc<dyn Agent>, ConfigError> {
        if self.name.is_empty() {
            return Err(ConfigError::EmptyName);
        }
        if !seen.insert(self.name.clone()) {
            return Err(ConfigError::DuplicateAgent(self.name.clone()));
        }

        let sub_agents = self
            .sub_agents
            .iter()
            .map(|sub| sub.build_inner(seen))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(LlmAgent::new(&self.name, &self.description)
            .with_sub_agents(sub_agents)
            .disallow_transfer_to_parent(self.disallow_transfer_to_parent)
            .disallow_transfer_to_peers(self.disallow_transfer_to_peers)
            .into_arc())
    }
}
