// ABOUTME: Flow - runs request processors in order to assemble one model request,
// ABOUTME: and dispatches the model's function calls back to registered tools.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use super::transfer::AgentTransferProcessor;
use crate::agent::InvocationContext;
use crate::error::{RelayError, ToolError};
use crate::llm::Request;
use crate::tool::{EventActions, RequestProcessor, ToolContext};

/// An ordered list of request processors applied to every turn.
#[derive(Clone)]
pub struct Flow {
    processors: Vec<Arc<dyn RequestProcessor>>,
}

impl Default for Flow {
    fn default() -> Self {
        Self::empty().with_processor(Arc::new(AgentTransferProcessor))
    }
}

impl Flow {
    /// A flow with agent transfer enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// A flow with no processors.
    pub fn empty() -> Self {
        Self {
            processors: Vec::new(),
        }
    }

    /// Append a processor; processors run in insertion order.
    pub fn with_processor(mut self, processor: Arc<dyn RequestProcessor>) -> Self {
        self.processors.push(processor);
        self
    }

    /// Run every processor against `req`, stopping at the first error.
    ///
    /// Changes made before the failing processor are kept.
    pub fn assemble(&self, ctx: &InvocationContext, req: &mut Request) -> Result<(), RelayError> {
        for processor in &self.processors {
            processor.process_request(ctx, req)?;
        }
        debug!(
            agent = ctx.agent().name(),
            tools = req.tools.len(),
            "assembled request"
        );
        Ok(())
    }
}

impl fmt::Debug for Flow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flow")
            .field("processors", &self.processors.len())
            .finish()
    }
}

/// Run the tool `name` registered in `req` for one model function call.
pub async fn call_tool(
    ctx: &InvocationContext,
    req: &Request,
    name: &str,
    function_call_id: &str,
    args: Option<Value>,
    actions: &mut EventActions,
) -> Result<Value, ToolError> {
    let tool = req
        .tool(name)
        .cloned()
        .ok_or_else(|| ToolError::NotFound(name.to_string()))?;
    let mut tool_ctx = ToolContext::new(ctx, function_call_id, actions);
    tool.run(&mut tool_ctx, args).await
}
