// ABOUTME: ParentMap - a name to parent lookup derived from the hierarchy.
// ABOUTME: Rebuilt for every turn; the tree itself stores no back-pointers.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::warn;

use super::Agent;

/// Resolves the parent of an agent by name.
pub trait ParentResolver: Send + Sync {
    /// The parent of `name`, or `None` for the root and unknown agents.
    fn parent_of(&self, name: &str) -> Option<Arc<dyn Agent>>;
}

/// Parent lookup over one agent hierarchy.
#[derive(Clone, Default)]
pub struct ParentMap {
    parents: HashMap<String, Arc<dyn Agent>>,
}

impl ParentMap {
    /// Walk the tree under `root` once and record every child's parent.
    pub fn from_root(root: &Arc<dyn Agent>) -> Self {
        let mut parents: HashMap<String, Arc<dyn Agent>> = HashMap::new();
        let mut stack = vec![Arc::clone(root)];

        while let Some(parent) = stack.pop() {
            for child in parent.sub_agents() {
                let previous = parents.insert(child.name().to_string(), Arc::clone(&parent));
                if let Some(previous) = previous {
                    warn!(
                        agent = child.name(),
                        first_parent = previous.name(),
                        second_parent = parent.name(),
                        "agent name appears more than once in the hierarchy"
                    );
                }
                stack.push(Arc::clone(child));
            }
        }

        Self { parents }
    }

    /// Number of agents that have a parent.
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Whether the hierarchy is a lone root.
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}

impl ParentResolver for ParentMap {
    fn parent_of(&self, name: &str) -> Option<Arc<dyn Agent>> {
        self.parents.get(name).cloned()
    }
}

impl fmt::Debug for ParentMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<_> = self
            .parents
            .iter()
            .map(|(child, parent)| (child.as_str(), parent.name()))
            .collect();
        entries.sort();
        f.debug_map().entries(entries).finish()
    }
}
