// ABOUTME: Core types for the outgoing model request - tool registry,
// ABOUTME: provider configuration, and function declarations.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::tool::Tool;

/// Structured schema of a callable tool, surfaced to the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDeclaration {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}

/// Marker enabling first-generation native search retrieval.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoogleSearchRetrieval {}

/// Marker enabling second-generation native search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoogleSearch {}

/// One entry of the provider's tool list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProviderTool {
    FunctionDeclarations(Vec<FunctionDeclaration>),
    GoogleSearchRetrieval(GoogleSearchRetrieval),
    GoogleSearch(GoogleSearch),
}

impl ProviderTool {
    /// Wrap a single declaration as its own tool entry.
    pub fn function(declaration: FunctionDeclaration) -> Self {
        Self::FunctionDeclarations(vec![declaration])
    }
}

/// Provider-side configuration of a request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateConfig {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<ProviderTool>,
}

/// A single outgoing model call, assembled by request processors.
#[derive(Clone, Default)]
pub struct Request {
    pub model: String,
    pub system: Option<String>,
    pub tools: HashMap<String, Arc<dyn Tool>>,
    pub config: Option<GenerateConfig>,
}

impl Request {
    /// Create a new request for the given model.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Default::default()
        }
    }

    /// Set the provider configuration.
    pub fn config(mut self, config: GenerateConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the system instruction.
    pub fn system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    /// Append instruction text to the system instruction.
    pub fn append_instructions(&mut self, text: &str) {
        match &mut self.system {
            Some(system) if !system.is_empty() => {
                system.push_str("\n\n");
                system.push_str(text);
            }
            _ => self.system = Some(text.to_string()),
        }
    }

    /// Provider configuration, created empty if absent.
    pub fn config_mut(&mut self) -> &mut GenerateConfig {
        self.config.get_or_insert_with(GenerateConfig::default)
    }

    /// Get a registered tool by name.
    pub fn tool(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.get(name)
    }

    /// Registered tool names, sorted alphabetically.
    pub fn tool_names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.tools.keys().cloned().collect();
        names.sort();
        names
    }

    /// Provider tool entries, in declaration order.
    pub fn provider_tools(&self) -> &[ProviderTool] {
        self.config.as_ref().map(|c| c.tools.as_slice()).unwrap_or_default()
    }
}

impl fmt::Debug for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Request")
            .field("model", &self.model)
            .field("system", &self.system)
            .field("tools", &self.tool_names())
            .field("config", &self.config)
            .finish()
    }
}
