// ABOUTME: Renders the model-facing instructions that list transfer targets.
// ABOUTME: The template is compiled once per process and reused read-only.

use std::sync::{Arc, LazyLock};

use serde_json::{Value, json};

use super::template::Template;
use crate::agent::Agent;
use crate::error::TemplateError;

/// Source of the transfer instructions. Callers may depend on the exact text.
pub const TRANSFER_INSTRUCTIONS_TEMPLATE: &str = "You have a list of other agents to transfer to:
{{range .Targets}}
Agent name: {{.Name}}
Agent description: {{.Description}}
{{end}}
If you are the best to answer the question according to your description, you
can answer it.
If another agent is better for answering the question according to its
description, call '{{.ToolName}}' function to transfer the
question to that agent. When transfering, do not generate any text other than
the function call.
{{if .Parent}}
Your parent agent is {{.Parent.Name}}. If neither the other agents nor
you are best for answering the question according to the descriptions, transfer
to your parent agent. If you don't have parent agent, try answer by yourself.
{{end}}
";

static TRANSFER_INSTRUCTIONS: LazyLock<Template> = LazyLock::new(|| {
    Template::parse(TRANSFER_INSTRUCTIONS_TEMPLATE)
        .expect("transfer instructions template is valid")
});

fn describe(agent: &dyn Agent) -> Value {
    json!({
        "Name": agent.name(),
        "Description": agent.description(),
    })
}

/// Render transfer instructions.
///
/// `parent` must already be filtered by the active agent's
/// `disallow_transfer_to_parent` flag; when it is `None` the parent paragraph
/// is left out entirely.
pub fn render_transfer_instructions(
    agent_name: &str,
    parent: Option<&dyn Agent>,
    targets: &[Arc<dyn Agent>],
    tool_name: &str,
) -> Result<String, TemplateError> {
    let data = json!({
        "AgentName": agent_name,
        "Parent": parent.map(describe),
        "Targets": targets.iter().map(|t| describe(t.as_ref())).collect::<Vec<_>>(),
        "ToolName": tool_name,
    });
    TRANSFER_INSTRUCTIONS.render(&data)
}
