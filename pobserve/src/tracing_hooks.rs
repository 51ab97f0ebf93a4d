//! Tracing-based observability hooks for backend calls and tool executions.
//!
//! ```rust
//! use pclient::ClientOperationHooks;
//! use pobserve::TracingObservabilityHooks;
//!
//! fn accepts_client_hooks(_hooks: &dyn ClientOperationHooks) {}
//!
//! let hooks = TracingObservabilityHooks;
//! accepts_client_hooks(&hooks);
//! ```

use std::time::Duration;

use pclient::{Action, ClientError, ClientOperationHooks, HttpMethod};
use ptooling::{
    ToolCall, ToolError, ToolExecutionContext, ToolExecutionResult, ToolOutcome, ToolRuntimeHooks,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObservabilityHooks;

impl ClientOperationHooks for TracingObservabilityHooks {
    fn on_request_start(&self, action: Action, method: HttpMethod) {
        tracing::debug!(
            phase = "client",
            event = "request_start",
            action = %action,
            method = %method
        );
    }

    fn on_request_success(&self, action: Action, method: HttpMethod, elapsed: Duration) {
        tracing::info!(
            phase = "client",
            event = "request_success",
            action = %action,
            method = %method,
            elapsed_ms = elapsed.as_millis() as u64
        );
    }

    fn on_request_failure(
        &self,
        action: Action,
        method: HttpMethod,
        error: &ClientError,
        elapsed: Duration,
    ) {
        if error.is_fatal() {
            tracing::error!(
                phase = "client",
                event = "request_failure",
                action = %action,
                method = %method,
                elapsed_ms = elapsed.as_millis() as u64,
                error_kind = ?error.kind,
                error = %error
            );
        } else {
            tracing::warn!(
                phase = "client",
                event = "request_failure",
                action = %action,
                method = %method,
                elapsed_ms = elapsed.as_millis() as u64,
                error_kind = ?error.kind,
                error = %error
            );
        }
    }
}

impl ToolRuntimeHooks for TracingObservabilityHooks {
    fn on_execution_start(&self, tool_call: &ToolCall, context: &ToolExecutionContext) {
        tracing::info!(
            phase = "tool",
            event = "execution_start",
            tool_name = tool_call.name,
            tool_call_id = tool_call.id,
            session_id = %context.session_id
        );
    }

    fn on_execution_finish(
        &self,
        tool_call: &ToolCall,
        context: &ToolExecutionContext,
        result: &ToolExecutionResult,
        elapsed: Duration,
    ) {
        match &result.outcome {
            ToolOutcome::Success(text) => tracing::info!(
                phase = "tool",
                event = "execution_finish",
                tool_name = tool_call.name,
                tool_call_id = tool_call.id,
                session_id = %context.session_id,
                elapsed_ms = elapsed.as_millis() as u64,
                outcome = "success",
                output_chars = text.chars().count()
            ),
            ToolOutcome::Failure(message) => tracing::warn!(
                phase = "tool",
                event = "execution_finish",
                tool_name = tool_call.name,
                tool_call_id = tool_call.id,
                session_id = %context.session_id,
                elapsed_ms = elapsed.as_millis() as u64,
                outcome = "failure",
                failure = %message
            ),
        }
    }

    fn on_execution_rejected(
        &self,
        tool_call: &ToolCall,
        context: &ToolExecutionContext,
        error: &ToolError,
        elapsed: Duration,
    ) {
        tracing::warn!(
            phase = "tool",
            event = "execution_rejected",
            tool_name = tool_call.name,
            tool_call_id = tool_call.id,
            session_id = %context.session_id,
            elapsed_ms = elapsed.as_millis() as u64,
            error_kind = ?error.kind,
            error = %error
        );
    }
}
