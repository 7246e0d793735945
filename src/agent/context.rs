// ABOUTME: InvocationContext - the turn-scoped view of the active agent
// ABOUTME: and a fresh parent lookup over its hierarchy.

use std::fmt;
use std::sync::Arc;

use super::{Agent, ParentMap, ParentResolver, find_agent};

/// Per-turn context handed to request processors and tools.
#[derive(Clone)]
pub struct InvocationContext {
    agent: Arc<dyn Agent>,
    parents: Arc<dyn ParentResolver>,
}

impl InvocationContext {
    /// Context for `agent`, resolving parents over the tree under `root`.
    pub fn new(root: &Arc<dyn Agent>, agent: Arc<dyn Agent>) -> Self {
        Self::with_resolver(agent, Arc::new(ParentMap::from_root(root)))
    }

    /// Context for the root agent itself.
    pub fn for_root(root: Arc<dyn Agent>) -> Self {
        Self::new(&root, Arc::clone(&root))
    }

    /// Context for the agent named `name` under `root`, if it exists.
    pub fn for_agent(root: &Arc<dyn Agent>, name: &str) -> Option<Self> {
        find_agent(root, name).map(|agent| Self::new(root, agent))
    }

    /// Context with a caller-provided parent resolver.
    pub fn with_resolver(agent: Arc<dyn Agent>, parents: Arc<dyn ParentResolver>) -> Self {
        Self { agent, parents }
    }

    /// The active agent.
    pub fn agent(&self) -> &Arc<dyn Agent> {
        &self.agent
    }

    /// Parent of the active agent, if any.
    pub fn parent(&self) -> Option<Arc<dyn Agent>> {
        self.parents.parent_of(self.agent.name())
    }

    /// Parent resolver for this turn.
    pub fn parents(&self) -> &dyn ParentResolver {
        self.parents.as_ref()
    }
}

impl fmt::Debug for InvocationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InvocationContext")
            .field("agent", &self.agent.name())
            .finish_non_exhaustive()
    }
}
