// ABOUTME: LlmAgent - the LLM-backed agent that takes part in automatic transfer.
// ABOUTME: Built once with a fluent builder, read-only afterwards.

use std::fmt;
use std::sync::Arc;

use super::{Agent, TransferFlags};

/// An LLM-backed agent with sub-agents and transfer flags.
#[derive(Clone, Default)]
pub struct LlmAgent {
    name: String,
    description: String,
    sub_agents: Vec<Arc<dyn Agent>>,
    flags: TransferFlags,
}

impl LlmAgent {
    /// Create a new agent with no sub-agents and transfers allowed.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    /// Add a sub-agent.
    pub fn sub_agent(mut self, agent: Arc<dyn Agent>) -> Self {
        self.sub_agents.push(agent);
        self
    }

    /// Add sub-agents.
    pub fn with_sub_agents(mut self, agents: impl IntoIterator<Item = Arc<dyn Agent>>) -> Self {
        self.sub_agents.extend(agents);
        self
    }

    /// Forbid transfers back to the parent.
    pub fn disallow_transfer_to_parent(mut self, disallow: bool) -> Self {
        self.flags.disallow_transfer_to_parent = disallow;
        self
    }

    /// Forbid transfers to siblings.
    pub fn disallow_transfer_to_peers(mut self, disallow: bool) -> Self {
        self.flags.disallow_transfer_to_peers = disallow;
        self
    }

    /// Finish building and share.
    pub fn into_arc(self) -> Arc<dyn Agent> {
        Arc::new(self)
    }
}

impl Agent for LlmAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn sub_agents(&self) -> &[Arc<dyn Agent>] {
        &self.sub_agents
    }

    fn transfer_flags(&self) -> Option<TransferFlags> {
        Some(self.flags)
    }
}

impl fmt::Debug for LlmAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sub_agents: Vec<_> = self.sub_agents.iter().map(|a| a.name()).collect();
        f.debug_struct("LlmAgent")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("sub_agents", &sub_agents)
            .field("flags", &self.flags)
            .finish()
    }
}
