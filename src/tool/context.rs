// ABOUTME: Turn-scoped state handed to a running tool - the invocation,
// ABOUTME: the function call id, and the actions the tool may record.

use crate::agent::InvocationContext;

/// Actions recorded by tools during one turn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventActions {
    /// Name of the agent control should be handed to, if any.
    pub transfer_to_agent: Option<String>,
}

/// Context for a single tool invocation.
pub struct ToolContext<'a> {
    invocation: &'a InvocationContext,
    function_call_id: String,
    actions: &'a mut EventActions,
}

impl<'a> ToolContext<'a> {
    /// Create a tool context. An empty call id is replaced by a random one.
    pub fn new(
        invocation: &'a InvocationContext,
        function_call_id: impl Into<String>,
        actions: &'a mut EventActions,
    ) -> Self {
        let mut function_call_id = function_call_id.into();
        if function_call_id.is_empty() {
            function_call_id = uuid::Uuid::new_v4().to_string();
        }
        Self {
            invocation,
            function_call_id,
            actions,
        }
    }

    /// The invocation this call belongs to.
    pub fn invocation(&self) -> &InvocationContext {
        self.invocation
    }

    /// Id of the model function call being served.
    pub fn function_call_id(&self) -> &str {
        &self.function_call_id
    }

    /// Mutable actions for the current turn.
    pub fn event_actions(&mut self) -> &mut EventActions {
        &mut *self.actions
    }
}
