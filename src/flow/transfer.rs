// ABOUTME: Transfer policy - which agents the active agent may hand control to.
// ABOUTME: AgentTransferProcessor wires the policy into the outgoing request.

use std::sync::Arc;

use tracing::debug;

use super::instructions::render_transfer_instructions;
use super::transfer_tool::TransferToAgentTool;
use crate::agent::{Agent, InvocationContext};
use crate::error::RelayError;
use crate::llm::Request;
use crate::tool::{RequestProcessor, Tool, append_tools};

/// Whether automatic transfer applies to `agent`.
///
/// Only LLM-backed agents qualify, and only if they have sub-agents or may
/// transfer to their parent or peers.
pub fn should_use_auto_flow(agent: &dyn Agent) -> bool {
    match agent.transfer_flags() {
        None => false,
        Some(flags) => {
            !agent.sub_agents().is_empty()
                || !flags.disallow_transfer_to_parent
                || !flags.disallow_transfer_to_peers
        }
    }
}

/// Agents `agent` may hand control to, in order: its sub-agents, its parent,
/// then its peers in the parent's order.
///
/// Peers are offered only when the parent itself uses automatic transfer.
pub fn transfer_targets(
    agent: &Arc<dyn Agent>,
    parent: Option<&Arc<dyn Agent>>,
) -> Vec<Arc<dyn Agent>> {
    let Some(flags) = agent.transfer_flags() else {
        return Vec::new();
    };

    let mut targets = agent.sub_agents().to_vec();

    if !flags.disallow_transfer_to_parent {
        if let Some(parent) = parent {
            targets.push(Arc::clone(parent));
        }
    }

    if !flags.disallow_transfer_to_peers {
        if let Some(parent) = parent.filter(|p| should_use_auto_flow(p.as_ref())) {
            targets.extend(
                parent
                    .sub_agents()
                    .iter()
                    .filter(|peer| peer.name() != agent.name())
                    .cloned(),
            );
        }
    }

    targets
}

/// Installs the transfer tool and its instructions when the active agent has
/// somewhere to transfer to. Leaves the request untouched otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct AgentTransferProcessor;

impl RequestProcessor for AgentTransferProcessor {
    fn process_request(
        &self,
        ctx: &InvocationContext,
        req: &mut Request,
    ) -> Result<(), RelayError> {
        let agent = ctx.agent();
        if !should_use_auto_flow(agent.as_ref()) {
            debug!(agent = agent.name(), "single-agent flow");
            return Ok(());
        }

        let parent = ctx.parent();
        let targets = transfer_targets(agent, parent.as_ref());
        debug!(agent = agent.name(), targets = targets.len(), "computed transfer targets");
        if targets.is_empty() {
            return Ok(());
        }

        let flags = agent.transfer_flags().unwrap_or_default();
        let visible_parent = parent
            .as_deref()
            .filter(|_| !flags.disallow_transfer_to_parent);

        let tool = TransferToAgentTool;
        let instructions =
            render_transfer_instructions(agent.name(), visible_parent, &targets, tool.name())?;
        req.append_instructions(&instructions);

        let tool: Arc<dyn Tool> = Arc::new(tool);
        append_tools(req, &[tool])?;
        Ok(())
    }
}
