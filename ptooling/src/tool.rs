//! Contract between the runtime and one callable capability.

use pcommon::BoxFuture;

use crate::{ToolDefinition, ToolError, ToolExecutionContext, ToolOutcome};

pub type ToolFuture<'a, T> = BoxFuture<'a, T>;

pub trait Tool: Send + Sync {
    fn definition(&self) -> &ToolDefinition;

    /// Runs the capability. `Err` is reserved for calls that never reach
    /// it, such as arguments that do not decode; anything the capability
    /// itself reports comes back as [`ToolOutcome::Failure`].
    fn invoke<'a>(
        &'a self,
        args_json: &'a str,
        context: &'a ToolExecutionContext,
    ) -> ToolFuture<'a, Result<ToolOutcome, ToolError>>;
}
