// ABOUTME: Registers tools into an outgoing request, keeping names unique
// ABOUTME: and wrapping each function declaration in its own provider entry.

use std::sync::Arc;

use tracing::{debug, warn};

use super::Tool;
use crate::error::ToolError;
use crate::llm::{ProviderTool, Request};

/// Append tools to the request, in order.
///
/// Nameless and duplicate tools are errors. Registration is not atomic: tools
/// before the failing one stay registered.
pub fn append_tools(req: &mut Request, tools: &[Arc<dyn Tool>]) -> Result<(), ToolError> {
    for (index, tool) in tools.iter().enumerate() {
        let name = tool.name();
        if name.is_empty() {
            return Err(ToolError::Unnamed { index });
        }
        if req.tools.contains_key(name) {
            warn!(tool = name, index, "duplicate tool rejected");
            return Err(ToolError::Duplicate {
                index,
                name: name.to_string(),
            });
        }
        req.tools.insert(name.to_string(), Arc::clone(tool));

        if let Some(declaration) = tool.declaration() {
            req.config_mut().tools.push(ProviderTool::function(declaration));
        }
        debug!(tool = name, "registered tool");
    }
    Ok(())
}
