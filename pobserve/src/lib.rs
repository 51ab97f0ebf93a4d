//! Production-friendly observability hooks for backend calls and tool executions.
//!
//! ```rust
//! use pobserve::{MetricsObservabilityHooks, SafeClientHooks, TracingObservabilityHooks};
//!
//! let _client_hooks = SafeClientHooks::new(TracingObservabilityHooks);
//! let _metrics = MetricsObservabilityHooks;
//! ```

mod metrics_hooks;
mod safe_hooks;
mod tracing_hooks;

pub use metrics_hooks::MetricsObservabilityHooks;
pub use safe_hooks::{
    CompositeClientHooks, CompositeToolHooks, SafeClientHooks, SafeToolHooks,
    standard_client_hooks, standard_tool_hooks,
};
pub use tracing_hooks::TracingObservabilityHooks;

pub mod prelude {
    pub use crate::{
        CompositeClientHooks, CompositeToolHooks, MetricsObservabilityHooks, SafeClientHooks,
        SafeToolHooks, TracingObservabilityHooks, standard_client_hooks, standard_tool_hooks,
    };
}
