// ABOUTME: Tool module - defines tools, request processors, and registration.
// ABOUTME: Core abstraction for capabilities the model can call.

mod assembler;
mod context;
mod traits;

pub use assembler::*;
pub use context::*;
pub use traits::*;

#[cfg(test)]
mod assembler_test;
