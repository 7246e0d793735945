// ABOUTME: A small text template engine over serde_json values.
// ABOUTME: Supports {{.Field.Path}}, {{range .X}}..{{end}} and {{if .X}}..{{end}}.

use std::fmt::Write;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::error::TemplateError;

static ACTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*(.*?)\s*\}\}").expect("action pattern is valid"));

#[derive(Debug, Clone, PartialEq)]
enum Node {
    Text(String),
    Field(Vec<String>),
    Range { path: Vec<String>, body: Vec<Node> },
    If { path: Vec<String>, body: Vec<Node> },
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Block {
    Range,
    If,
}

struct Frame {
    block: Option<(Block, Vec<String>)>,
    nodes: Vec<Node>,
}

/// A parsed template, immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    nodes: Vec<Node>,
}

impl Template {
    /// Parse template source.
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let mut stack = vec![Frame {
            block: None,
            nodes: Vec::new(),
        }];
        let mut last = 0;

        for caps in ACTION.captures_iter(source) {
            let (Some(whole), Some(action)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            if whole.start() > last {
                push(&mut stack, Node::Text(source[last..whole.start()].to_string()));
            }
            last = whole.end();

            let action = action.as_str();
            let offset = whole.start();
            if action == "end" {
                if stack.len() == 1 {
                    return Err(parse_error(offset, "unexpected {{end}}"));
                }
                let Some(Frame {
                    block: Some((block, path)),
                    nodes: body,
                }) = stack.pop()
                else {
                    return Err(parse_error(offset, "unexpected {{end}}"));
                };
                let node = match block {
                    Block::Range => Node::Range { path, body },
                    Block::If => Node::If { path, body },
                };
                push(&mut stack, node);
            } else if let Some(arg) = action.strip_prefix("range ") {
                stack.push(Frame {
                    block: Some((Block::Range, parse_path(arg.trim(), offset)?)),
                    nodes: Vec::new(),
                });
            } else if let Some(arg) = action.strip_prefix("if ") {
                stack.push(Frame {
                    block: Some((Block::If, parse_path(arg.trim(), offset)?)),
                    nodes: Vec::new(),
                });
            } else {
                push(&mut stack, Node::Field(parse_path(action, offset)?));
            }
        }

        if last < source.len() {
            push(&mut stack, Node::Text(source[last..].to_string()));
        }
        if stack.len() != 1 {
            return Err(parse_error(source.len(), "unclosed block"));
        }
        let nodes = stack.pop().map(|f| f.nodes).unwrap_or_default();

        Ok(Self { nodes })
    }

    /// Render against `data`, which becomes the initial `.`.
    pub fn render(&self, data: &Value) -> Result<String, TemplateError> {
        let mut out = String::new();
        render_nodes(&self.nodes, data, &mut out)?;
        Ok(out)
    }
}

fn push(stack: &mut [Frame], node: Node) {
    if let Some(frame) = stack.last_mut() {
        frame.nodes.push(node);
    }
}

fn parse_error(offset: usize, message: &str) -> TemplateError {
    TemplateError::Parse {
        offset,
        message: message.to_string(),
    }
}

fn parse_path(expr: &str, offset: usize) -> Result<Vec<String>, TemplateError> {
    if expr == "." {
        return Ok(Vec::new());
    }
    let Some(rest) = expr.strip_prefix('.') else {
        return Err(parse_error(offset, &format!("unsupported action {:?}", expr)));
    };
    let path: Vec<String> = rest.split('.').map(str::to_string).collect();
    if path.iter().any(|seg| seg.is_empty() || seg.contains(char::is_whitespace)) {
        return Err(parse_error(offset, &format!("bad field path {:?}", expr)));
    }
    Ok(path)
}

fn lookup<'v>(dot: &'v Value, path: &[String]) -> Result<&'v Value, TemplateError> {
    let mut value = dot;
    for seg in path {
        value = value
            .as_object()
            .and_then(|map| map.get(seg))
            .ok_or_else(|| TemplateError::UnknownField(format!(".{}", path.join("."))))?;
    }
    Ok(value)
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn render_nodes(nodes: &[Node], dot: &Value, out: &mut String) -> Result<(), TemplateError> {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Field(path) => match lookup(dot, path)? {
                Value::String(s) => out.push_str(s),
                Value::Null => {}
                other => write!(out, "{}", other)?,
            },
            Node::Range { path, body } => match lookup(dot, path)? {
                Value::Null => {}
                Value::Array(items) => {
                    for item in items {
                        render_nodes(body, item, out)?;
                    }
                }
                _ => return Err(TemplateError::NotIterable(format!(".{}", path.join(".")))),
            },
            Node::If { path, body } => {
                if truthy(lookup(dot, path)?) {
                    render_nodes(body, dot, out)?;
                }
            }
        }
    }
    Ok(())
}
