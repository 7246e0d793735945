// ABOUTME: Defines the Agent trait - a named node in the agent hierarchy.
// ABOUTME: Transfer flags are probed as an optional capability.

use std::sync::Arc;

/// Transfer suppression flags of an LLM-backed agent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransferFlags {
    /// Never offer the parent as a transfer target.
    pub disallow_transfer_to_parent: bool,

    /// Never offer siblings as transfer targets.
    pub disallow_transfer_to_peers: bool,
}

/// A participant in the agent hierarchy.
pub trait Agent: Send + Sync {
    /// Unique name across the whole hierarchy.
    fn name(&self) -> &str;

    /// Free-text description shown to the model.
    fn description(&self) -> &str;

    /// Direct children, in declared order.
    fn sub_agents(&self) -> &[Arc<dyn Agent>];

    /// Transfer flags, or `None` if this agent does not take part in
    /// automatic transfer (it is not LLM-backed).
    fn transfer_flags(&self) -> Option<TransferFlags> {
        None
    }
}

/// Find an agent by name anywhere under `root`, including `root` itself.
pub fn find_agent(root: &Arc<dyn Agent>, name: &str) -> Option<Arc<dyn Agent>> {
    if root.name() == name {
        return Some(Arc::clone(root));
    }
    root.sub_agents()
        .iter()
        .find_map(|child| find_agent(child, name))
}
