// ABOUTME: Defines the Tool and RequestProcessor traits - the seams through
// ABOUTME: which tools are exposed to the model and mutate outgoing requests.

use async_trait::async_trait;

use super::ToolContext;
use crate::agent::InvocationContext;
use crate::error::{RelayError, ToolError};
use crate::llm::{FunctionDeclaration, Request};

/// A tool that can be exposed to the model.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Returns the unique name of this tool.
    fn name(&self) -> &str;

    /// Returns a human-readable description for the LLM.
    fn description(&self) -> &str;

    /// Returns the callable declaration, if the model invokes this tool as a function.
    fn declaration(&self) -> Option<FunctionDeclaration> {
        None
    }

    /// Run the tool with the arguments of a model function call.
    async fn run(
        &self,
        ctx: &mut ToolContext<'_>,
        args: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, ToolError>;
}

/// Mutates an outgoing request before it is sent to the model.
pub trait RequestProcessor: Send + Sync {
    fn process_request(
        &self,
        ctx: &InvocationContext,
        req: &mut Request,
    ) -> Result<(), RelayError>;
}
