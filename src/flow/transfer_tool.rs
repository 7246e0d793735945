// ABOUTME: TransferToAgentTool - the function the model calls to hand off
// ABOUTME: control. Records the chosen agent in the turn's event actions.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value, json};
use tracing::info;

use crate::agent::InvocationContext;
use crate::error::{RelayError, ToolError};
use crate::llm::{FunctionDeclaration, Request};
use crate::tool::{RequestProcessor, Tool, ToolContext, append_tools};

/// Name under which the transfer tool is registered.
pub const TRANSFER_TO_AGENT: &str = "transfer_to_agent";

const DESCRIPTION: &str = "Transfer the question to another agent.
This tool hands off control to another agent when it's more suitable to answer the user's question according to the agent's description.";

/// Hands control to another agent by name.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransferToAgentTool;

#[async_trait]
impl Tool for TransferToAgentTool {
    fn name(&self) -> &str {
        TRANSFER_TO_AGENT
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    fn declaration(&self) -> Option<FunctionDeclaration> {
        Some(FunctionDeclaration {
            name: self.name().to_string(),
            description: self.description().to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "agent_name": {
                        "type": "string",
                        "description": "the agent name to transfer to"
                    }
                },
                "required": ["agent_name"]
            }),
        })
    }

    async fn run(
        &self,
        ctx: &mut ToolContext<'_>,
        args: Option<Value>,
    ) -> Result<Value, ToolError> {
        let args = args
            .filter(|a| !a.is_null())
            .ok_or_else(|| ToolError::InvalidArgs("missing argument".into()))?;
        let map = args
            .as_object()
            .ok_or_else(|| ToolError::InvalidArgs(format!("unexpected args type: {}", args)))?;
        let agent_name = map
            .get("agent_name")
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| ToolError::InvalidArgs(format!("empty agent_name: {}", args)))?;

        info!(
            from = ctx.invocation().agent().name(),
            to = agent_name,
            call_id = ctx.function_call_id(),
            "transfer requested"
        );
        ctx.event_actions().transfer_to_agent = Some(agent_name.to_string());
        Ok(Value::Object(Map::new()))
    }
}

impl RequestProcessor for TransferToAgentTool {
    fn process_request(
        &self,
        _ctx: &InvocationContext,
        req: &mut Request,
    ) -> Result<(), RelayError> {
        let tool: Arc<dyn Tool> = Arc::new(*self);
        append_tools(req, &[tool])?;
        Ok(())
    }
}
