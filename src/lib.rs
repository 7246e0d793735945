// ABOUTME: Root module for relay - hand-off policy and request assembly for agent hierarchies.
// ABOUTME: Re-exports all public types from submodules.

pub mod agent;
pub mod error;
pub mod flow;
pub mod llm;
pub mod prelude;
pub mod tool;
pub mod tools;

pub use error::RelayError;
