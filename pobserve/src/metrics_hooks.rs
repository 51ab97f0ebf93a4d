//! Metrics-based observability hooks for backend calls and tool executions.
//!
//! ```rust
//! use pobserve::MetricsObservabilityHooks;
//! use ptooling::ToolRuntimeHooks;
//!
//! fn accepts_tool_hooks(_hooks: &dyn ToolRuntimeHooks) {}
//!
//! let hooks = MetricsObservabilityHooks;
//! accepts_tool_hooks(&hooks);
//! ```

use std::time::Duration;

use pclient::{Action, ClientError, ClientOperationHooks, HttpMethod};
use ptooling::{
    ToolCall, ToolError, ToolErrorKind, ToolExecutionContext, ToolExecutionResult,
    ToolRuntimeHooks,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsObservabilityHooks;

impl ClientOperationHooks for MetricsObservabilityHooks {
    fn on_request_start(&self, action: Action, method: HttpMethod) {
        metrics::counter!(
            "pront_client_request_total",
            "action" => action.as_str(),
            "method" => method.as_str()
        )
        .increment(1);
    }

    fn on_request_success(&self, action: Action, method: HttpMethod, elapsed: Duration) {
        metrics::histogram!(
            "pront_client_request_seconds",
            "action" => action.as_str(),
            "method" => method.as_str(),
            "status" => "success"
        )
        .record(elapsed.as_secs_f64());
    }

    fn on_request_failure(
        &self,
        action: Action,
        method: HttpMethod,
        error: &ClientError,
        elapsed: Duration,
    ) {
        metrics::counter!(
            "pront_client_failure_total",
            "action" => action.as_str(),
            "method" => method.as_str(),
            "error_kind" => format!("{:?}", error.kind)
        )
        .increment(1);
        metrics::histogram!(
            "pront_client_request_seconds",
            "action" => action.as_str(),
            "method" => method.as_str(),
            "status" => "failure"
        )
        .record(elapsed.as_secs_f64());
    }
}

impl ToolRuntimeHooks for MetricsObservabilityHooks {
    fn on_execution_start(&self, tool_call: &ToolCall, _context: &ToolExecutionContext) {
        metrics::counter!(
            "pront_tool_execution_total",
            "tool_name" => tool_call.name.clone()
        )
        .increment(1);
    }

    fn on_execution_finish(
        &self,
        tool_call: &ToolCall,
        _context: &ToolExecutionContext,
        result: &ToolExecutionResult,
        elapsed: Duration,
    ) {
        let outcome = if result.is_success() {
            "success"
        } else {
            metrics::counter!(
                "pront_tool_failure_total",
                "tool_name" => tool_call.name.clone(),
                "reason" => "adapter"
            )
            .increment(1);
            "failure"
        };

        metrics::histogram!(
            "pront_tool_execution_seconds",
            "tool_name" => tool_call.name.clone(),
            "outcome" => outcome
        )
        .record(elapsed.as_secs_f64());
    }

    fn on_execution_rejected(
        &self,
        tool_call: &ToolCall,
        _context: &ToolExecutionContext,
        error: &ToolError,
        elapsed: Duration,
    ) {
        let reason = match error.kind {
            ToolErrorKind::NotFound => "unknown_tool",
            ToolErrorKind::InvalidArguments => "invalid_arguments",
        };

        metrics::counter!(
            "pront_tool_failure_total",
            "tool_name" => tool_call.name.clone(),
            "reason" => reason
        )
        .increment(1);
        metrics::histogram!(
            "pront_tool_execution_seconds",
            "tool_name" => tool_call.name.clone(),
            "outcome" => "rejected"
        )
        .record(elapsed.as_secs_f64());
    }
}
