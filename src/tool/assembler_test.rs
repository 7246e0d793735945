// ABOUTME: Tests for append_tools - uniqueness, naming, declarations, partial state.
// ABOUTME: Uses small stub tools with and without declarations.

use std::sync::Arc;

use serde_json::{Value, json};

use super::*;
use crate::error::{ErrorKind, ToolError};
use crate::llm::{FunctionDeclaration, GenerateConfig, GoogleSearch, ProviderTool, Request};

/// A stub tool with an optional declaration.
struct StubTool {
    name: String,
    callable: bool,
}

fn stub(name: &str) -> Arc<dyn Tool> {
    Arc::new(StubTool {
        name: name.into(),
        callable: true,
    })
}

fn internal(name: &str) -> Arc<dyn Tool> {
    Arc::new(StubTool {
        name: name.into(),
        callable: false,
    })
}

#[async_trait::async_trait]
impl Tool for StubTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        "A stub tool"
    }

    fn declaration(&self) -> Option<FunctionDeclaration> {
        self.callable.then(|| FunctionDeclaration {
            name: self.name.clone(),
            description: self.description().to_string(),
            parameters: json!({"type": "object"}),
        })
    }

    async fn run(
        &self,
        _ctx: &mut ToolContext<'_>,
        _args: Option<Value>,
    ) -> Result<Value, ToolError> {
        Ok(json!({}))
    }
}

fn declared_names(req: &Request) -> Vec<String> {
    req.provider_tools()
        .iter()
        .map(|entry| match entry {
            ProviderTool::FunctionDeclarations(decls) => {
                assert_eq!(decls.len(), 1, "declarations must not be merged");
                decls[0].name.clone()
            }
            other => format!("{:?}", other),
        })
        .collect()
}

#[test]
fn test_append_registers_and_declares() {
    let mut req = Request::new("gemini-2.0-flash");
    append_tools(&mut req, &[stub("a"), stub("b")]).unwrap();

    assert_eq!(req.tool_names(), vec!["a", "b"]);
    assert_eq!(declared_names(&req), vec!["a", "b"]);
}

#[test]
fn test_duplicate_keeps_partial_state() {
    let mut req = Request::new("gemini-2.0-flash");
    let err = append_tools(&mut req, &[stub("a"), stub("b"), stub("a")]).unwrap_err();

    match &err {
        ToolError::Duplicate { index, name } => {
            assert_eq!(*index, 2);
            assert_eq!(name, "a");
        }
        other => panic!("expected duplicate, got {:?}", other),
    }
    assert_eq!(err.kind(), ErrorKind::Conflict);
    assert_eq!(req.tool_names(), vec!["a", "b"]);
    assert_eq!(declared_names(&req), vec!["a", "b"]);
}

#[test]
fn test_duplicate_across_calls() {
    let mut req = Request::new("gemini-2.0-flash");
    append_tools(&mut req, &[stub("a")]).unwrap();
    let err = append_tools(&mut req, &[stub("a")]).unwrap_err();

    assert!(matches!(err, ToolError::Duplicate { index: 0, .. }));
    assert_eq!(req.tools.len(), 1);
}

#[test]
fn test_unnamed_tool() {
    let mut req = Request::new("gemini-2.0-flash");
    let err = append_tools(&mut req, &[stub("a"), stub("")]).unwrap_err();

    assert!(matches!(err, ToolError::Unnamed { index: 1 }));
    assert_eq!(err.to_string(), "tools[1] tool without name");
    assert_eq!(req.tool_names(), vec!["a"]);
}

#[test]
fn test_tool_without_declaration() {
    let mut req = Request::new("gemini-2.0-flash");
    append_tools(&mut req, &[internal("native")]).unwrap();

    assert_eq!(req.tool_names(), vec!["native"]);
    assert!(req.config.is_none());
}

#[test]
fn test_declarations_append_after_existing_entries() {
    let mut req = Request::new("gemini-2.0-flash").config(GenerateConfig {
        tools: vec![ProviderTool::GoogleSearch(GoogleSearch {})],
    });
    append_tools(&mut req, &[stub("a")]).unwrap();

    assert_eq!(declared_names(&req), vec!["GoogleSearch(GoogleSearch)", "a"]);
}

#[test]
fn test_empty_batch_is_noop() {
    let mut req = Request::new("gemini-2.0-flash");
    append_tools(&mut req, &[]).unwrap();
    assert!(req.tools.is_empty());
    assert!(req.config.is_none());
}
