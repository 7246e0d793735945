// ABOUTME: LLM module - the outgoing model request and provider configuration.
// ABOUTME: Defines request types, function declarations, and model families.

mod model;
mod types;

pub use model::*;
pub use types::*;
