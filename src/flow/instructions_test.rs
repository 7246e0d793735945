// ABOUTME: Golden-text tests for the transfer instructions.
// ABOUTME: Checks target order, tool naming, and the conditional parent paragraph.

use std::sync::Arc;

use super::*;
use crate::agent::{Agent, LlmAgent};

const WITH_PARENT: &str = "You have a list of other agents to transfer to:

Agent name: B
Agent description: desc-B

Agent name: C
Agent description: desc-C

If you are the best to answer the question according to your description, you
can answer it.
If another agent is better for answering the question according to its
description, call 'transfer_to_agent' function to transfer the
question to that agent. When transfering, do not generate any text other than
the function call.

Your parent agent is A. If neither the other agents nor
you are best for answering the question according to the descriptions, transfer
to your parent agent. If you don't have parent agent, try answer by yourself.

";

const WITHOUT_PARENT: &str = "You have a list of other agents to transfer to:

Agent name: B
Agent description: desc-B

Agent name: C
Agent description: desc-C

If you are the best to answer the question according to your description, you
can answer it.
If another agent is better for answering the question according to its
description, call 'transfer_to_agent' function to transfer the
question to that agent. When transfering, do not generate any text other than
the function call.

";

fn targets() -> Vec<Arc<dyn Agent>> {
    vec![
        LlmAgent::new("B", "desc-B").into_arc(),
        LlmAgent::new("C", "desc-C").into_arc(),
    ]
}

#[test]
fn test_with_parent() {
    let parent = LlmAgent::new("A", "desc-A");
    let parent: &dyn Agent = &parent;
    let text = render_transfer_instructions("self", Some(parent), &targets(), "transfer_to_agent")
        .unwrap();
    assert_eq!(text, WITH_PARENT);
}

#[test]
fn test_parent_suppressed() {
    let text = render_transfer_instructions("self", None, &targets(), "transfer_to_agent").unwrap();
    assert_eq!(text, WITHOUT_PARENT);
    assert!(!text.contains("parent agent"));
}

#[test]
fn test_stable_output() {
    let parent = LlmAgent::new("A", "desc-A");
    let parent: &dyn Agent = &parent;
    let first = render_transfer_instructions("self", Some(parent), &targets(), "t").unwrap();
    let second = render_transfer_instructions("self", Some(parent), &targets(), "t").unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_uses_given_tool_name() {
    let text = render_transfer_instructions("self", None, &targets(), "hand_off").unwrap();
    assert!(text.contains("call 'hand_off' function"));
    assert!(!text.contains("transfer_to_agent"));
}

#[test]
fn test_target_order_preserved() {
    let reversed: Vec<_> = targets().into_iter().rev().collect();
    let text = render_transfer_instructions("self", None, &reversed, "t").unwrap();
    let c = text.find("Agent name: C").unwrap();
    let b = text.find("Agent name: B").unwrap();
    assert!(c < b);
}

#[test]
fn test_descriptions_are_not_interpreted() {
    let targets: Vec<Arc<dyn Agent>> =
        vec![LlmAgent::new("B", "uses {{.ToolName}} {{end}} literally").into_arc()];
    let text = render_transfer_instructions("self", None, &targets, "t").unwrap();
    assert!(text.contains("Agent description: uses {{.ToolName}} {{end}} literally\n"));
}
