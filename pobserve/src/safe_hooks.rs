use std::panic::{AssertUnwindSafe, catch_unwind};
use std::time::Duration;

use pclient::{Action, ClientError, ClientOperationHooks, HttpMethod};
use ptooling::{ToolCall, ToolError, ToolExecutionContext, ToolExecutionResult, ToolRuntimeHooks};

/// Wraps client hooks so a panicking observer never fails a backend call.
pub struct SafeClientHooks<H> {
    inner: H,
}

impl<H> SafeClientHooks<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H> ClientOperationHooks for SafeClientHooks<H>
where
    H: ClientOperationHooks,
{
    fn on_request_start(&self, action: Action, method: HttpMethod) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_request_start(action, method)
        }));
    }

    fn on_request_success(&self, action: Action, method: HttpMethod, elapsed: Duration) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_request_success(action, method, elapsed)
        }));
    }

    fn on_request_failure(
        &self,
        action: Action,
        method: HttpMethod,
        error: &ClientError,
        elapsed: Duration,
    ) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_request_failure(action, method, error, elapsed)
        }));
    }
}

pub struct SafeToolHooks<H> {
    inner: H,
}

impl<H> SafeToolHooks<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H> ToolRuntimeHooks for SafeToolHooks<H>
where
    H: ToolRuntimeHooks,
{
    fn on_execution_start(&self, tool_call: &ToolCall, context: &ToolExecutionContext) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_execution_start(tool_call, context)
        }));
    }

    fn on_execution_finish(
        &self,
        tool_call: &ToolCall,
        context: &ToolExecutionContext,
        result: &ToolExecutionResult,
        elapsed: Duration,
    ) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner
                .on_execution_finish(tool_call, context, result, elapsed)
        }));
    }

    fn on_execution_rejected(
        &self,
        tool_call: &ToolCall,
        context: &ToolExecutionContext,
        error: &ToolError,
        elapsed: Duration,
    ) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner
                .on_execution_rejected(tool_call, context, error, elapsed)
        }));
    }
}

/// Fans client events out to several observers, such as tracing plus metrics.
pub struct CompositeClientHooks {
    hooks: Vec<Box<dyn ClientOperationHooks>>,
}

impl CompositeClientHooks {
    pub fn new(hooks: Vec<Box<dyn ClientOperationHooks>>) -> Self {
        Self { hooks }
    }
}

impl ClientOperationHooks for CompositeClientHooks {
    fn on_request_start(&self, action: Action, method: HttpMethod) {
        for hooks in &self.hooks {
            hooks.on_request_start(action, method);
        }
    }

    fn on_request_success(&self, action: Action, method: HttpMethod, elapsed: Duration) {
        for hooks in &self.hooks {
            hooks.on_request_success(action, method, elapsed);
        }
    }

    fn on_request_failure(
        &self,
        action: Action,
        method: HttpMethod,
        error: &ClientError,
        elapsed: Duration,
    ) {
        for hooks in &self.hooks {
            hooks.on_request_failure(action, method, error, elapsed);
        }
    }
}

pub struct CompositeToolHooks {
    hooks: Vec<Box<dyn ToolRuntimeHooks>>,
}

impl CompositeToolHooks {
    pub fn new(hooks: Vec<Box<dyn ToolRuntimeHooks>>) -> Self {
        Self { hooks }
    }
}

impl ToolRuntimeHooks for CompositeToolHooks {
    fn on_execution_start(&self, tool_call: &ToolCall, context: &ToolExecutionContext) {
        for hooks in &self.hooks {
            hooks.on_execution_start(tool_call, context);
        }
    }

    fn on_execution_finish(
        &self,
        tool_call: &ToolCall,
        context: &ToolExecutionContext,
        result: &ToolExecutionResult,
        elapsed: Duration,
    ) {
        for hooks in &self.hooks {
            hooks.on_execution_finish(tool_call, context, result, elapsed);
        }
    }

    fn on_execution_rejected(
        &self,
        tool_call: &ToolCall,
        context: &ToolExecutionContext,
        error: &ToolError,
        elapsed: Duration,
    ) {
        for hooks in &self.hooks {
            hooks.on_execution_rejected(tool_call, context, error, elapsed);
        }
    }
}

/// Tracing plus metrics for backend calls, each observer isolated from panics.
pub fn standard_client_hooks() -> CompositeClientHooks {
    CompositeClientHooks::new(vec![
        Box::new(SafeClientHooks::new(crate::TracingObservabilityHooks)),
        Box::new(SafeClientHooks::new(crate::MetricsObservabilityHooks)),
    ])
}

pub fn standard_tool_hooks() -> CompositeToolHooks {
    CompositeToolHooks::new(vec![
        Box::new(SafeToolHooks::new(crate::TracingObservabilityHooks)),
        Box::new(SafeToolHooks::new(crate::MetricsObservabilityHooks)),
    ])
}
