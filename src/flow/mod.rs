// ABOUTME: Flow module - per-turn request assembly for multi-agent hand-offs.
// ABOUTME: Computes transfer targets, renders instructions, and installs the transfer tool.

mod instructions;
mod pipeline;
mod template;
mod transfer;
mod transfer_tool;

pub use instructions::{TRANSFER_INSTRUCTIONS_TEMPLATE, render_transfer_instructions};
pub use pipeline::{Flow, call_tool};
pub use transfer::{AgentTransferProcessor, should_use_auto_flow, transfer_targets};
pub use transfer_tool::{TRANSFER_TO_AGENT, TransferToAgentTool};

#[cfg(test)]
mod instructions_test;
