// ABOUTME: Defines all error types for the relay library using thiserror.
// ABOUTME: Each concern has its own error enum, unified under RelayError.

/// Top-level error type for the relay library.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),

    #[error("Capability error: {0}")]
    Capability(#[from] CapabilityError),

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Coarse classification of a [`RelayError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or missing tool-call arguments.
    Argument,
    /// Duplicate tool name, or a capability that cannot be combined.
    Conflict,
    /// Unrecognized model family, tool, or invocation.
    Unsupported,
    /// Instruction rendering failed.
    Template,
    /// Invalid agent hierarchy configuration.
    Config,
}

impl RelayError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            RelayError::Tool(e) => e.kind(),
            RelayError::Capability(CapabilityError::Incompatible { .. }) => ErrorKind::Conflict,
            RelayError::Capability(CapabilityError::UnsupportedModel(_)) => ErrorKind::Unsupported,
            RelayError::Template(_) => ErrorKind::Template,
            RelayError::Config(_) => ErrorKind::Config,
        }
    }
}

/// Errors from tool registration and execution.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("tools[{index}] tool without name")]
    Unnamed { index: usize },

    #[error("tools[{index}] duplicate tool: {name:?}")]
    Duplicate { index: usize, name: String },

    #[error("Tool not found: {0}")]
    NotFound(String),

    #[error("{0} runs internally on the model, it can not be run directly")]
    RunsInternally(String),

    #[error("Execution failed: {0}")]
    Execution(#[source] anyhow::Error),
}

impl ToolError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ToolError::InvalidArgs(_) | ToolError::Unnamed { .. } => ErrorKind::Argument,
            ToolError::Duplicate { .. } => ErrorKind::Conflict,
            ToolError::NotFound(_) | ToolError::RunsInternally(_) | ToolError::Execution(_) => {
                ErrorKind::Unsupported
            }
        }
    }
}

/// Errors from provider-native capability tools.
#[derive(Debug, thiserror::Error)]
pub enum CapabilityError {
    #[error("google search tool cannot be used with other tools in Gemini 1.x (model {model})")]
    Incompatible { model: String },

    #[error("google search tool is not supported for model {0}")]
    UnsupportedModel(String),
}

/// Errors from compiling or rendering instruction templates.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("parse error at byte {offset}: {message}")]
    Parse { offset: usize, message: String },

    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("cannot range over {0}")]
    NotIterable(String),

    #[error("render failed: {0}")]
    Render(#[from] std::fmt::Error),
}

/// Errors from loading an agent hierarchy.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("agent without name")]
    EmptyName,

    #[error("duplicate agent name: {0:?}")]
    DuplicateAgent(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
