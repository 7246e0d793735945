// ABOUTME: Agent module - the read-only agent hierarchy and per-turn views of it.
// ABOUTME: Provides the Agent trait, LlmAgent, parent lookup, config, and invocation context.

mod config;
mod context;
mod llm_agent;
mod parent_map;
mod traits;

pub use config::AgentConfig;
pub use context::InvocationContext;
pub use llm_agent::LlmAgent;
pub use parent_map::{ParentMap, ParentResolver};
pub use traits::{Agent, TransferFlags, find_agent};
