// ABOUTME: GoogleSearchTool - turns on the provider's native web search.
// ABOUTME: The capability token depends on the model family of the request.

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::agent::InvocationContext;
use crate::error::{CapabilityError, RelayError, ToolError};
use crate::llm::{GoogleSearch, GoogleSearchRetrieval, ModelFamily, ProviderTool, Request};
use crate::tool::{RequestProcessor, Tool, ToolContext};

/// Native web search, executed by the model provider.
///
/// On `gemini-1*` models search retrieval must be the only provider tool; on
/// `gemini-2*` models it is appended next to any other tools. Other models
/// are rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoogleSearchTool;

impl GoogleSearchTool {
    /// Create a new GoogleSearchTool.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Tool for GoogleSearchTool {
    fn name(&self) -> &str {
        "google_search"
    }

    fn description(&self) -> &str {
        "google_search"
    }

    async fn run(
        &self,
        _ctx: &mut ToolContext<'_>,
        _args: Option<Value>,
    ) -> Result<Value, ToolError> {
        Err(ToolError::RunsInternally("google search tool".into()))
    }
}

impl RequestProcessor for GoogleSearchTool {
    fn process_request(
        &self,
        _ctx: &InvocationContext,
        req: &mut Request,
    ) -> Result<(), RelayError> {
        let family = ModelFamily::of(&req.model);
        let model = req.model.clone();
        let config = req.config_mut();

        let entry = match family {
            ModelFamily::Gemini1 => {
                if !config.tools.is_empty() {
                    return Err(CapabilityError::Incompatible { model }.into());
                }
                ProviderTool::GoogleSearchRetrieval(GoogleSearchRetrieval::default())
            }
            ModelFamily::Gemini2 => ProviderTool::GoogleSearch(GoogleSearch::default()),
            ModelFamily::Other => return Err(CapabilityError::UnsupportedModel(model).into()),
        };

        config.tools.push(entry);
        debug!(model = %model, family = ?family, "enabled native search");
        Ok(())
    }
}
