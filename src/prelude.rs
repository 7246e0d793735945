// ABOUTME: Prelude module - convenient imports for common use cases.
// ABOUTME: Use `use relay::prelude::*;` to get started quickly.

pub use crate::agent::{
    Agent, AgentConfig, InvocationContext, LlmAgent, ParentMap, ParentResolver, TransferFlags,
    find_agent,
};
pub use crate::error::{
    CapabilityError, ConfigError, ErrorKind, RelayError, TemplateError, ToolError,
};
pub use crate::flow::{
    AgentTransferProcessor, Flow, TRANSFER_TO_AGENT, TransferToAgentTool, call_tool,
    render_transfer_instructions, should_use_auto_flow, transfer_targets,
};
pub use crate::llm::{
    FunctionDeclaration, GenerateConfig, GoogleSearch, GoogleSearchRetrieval, ModelFamily,
    ProviderTool, Request,
};
pub use crate::tool::{EventActions, RequestProcessor, Tool, ToolContext, append_tools};
pub use crate::tools::GoogleSearchTool;
