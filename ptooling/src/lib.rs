//! Capability layer for describing, registering and executing tools.
//!
//! A [`Tool`] answers with a [`ToolOutcome`]; the [`DefaultToolRuntime`]
//! routes each [`ToolCall`] to its tool and turns calls it cannot route or
//! decode into failure outcomes, so every call ends in text for the model.

mod args;
mod definition;
mod error;
mod hooks;
mod outcome;
mod registry;
mod runtime;
mod tool;
mod types;

pub mod prelude {
    pub use crate::{
        DefaultToolRuntime, NoopToolRuntimeHooks, ParameterType, Tool, ToolCall, ToolDefinition,
        ToolError, ToolErrorKind, ToolExecutionContext, ToolExecutionResult, ToolFuture,
        ToolOutcome, ToolParameter, ToolRegistry, ToolRuntime, ToolRuntimeHooks, parse_args,
    };
}

pub use args::parse_args;
pub use definition::{ParameterType, ToolDefinition, ToolParameter};
pub use error::{ToolError, ToolErrorKind};
pub use hooks::{NoopToolRuntimeHooks, ToolRuntimeHooks};
pub use outcome::{FAILURE_MARKER, ToolOutcome};
pub use registry::ToolRegistry;
pub use runtime::{DefaultToolRuntime, ToolRuntime};
pub use tool::{Tool, ToolFuture};
pub use types::{ToolCall, ToolExecutionContext, ToolExecutionResult};
