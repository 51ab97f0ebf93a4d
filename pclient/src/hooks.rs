//! Operational hook contract for backend calls.

use std::time::Duration;

use crate::{Action, ClientError, HttpMethod};

pub trait ClientOperationHooks: Send + Sync {
    fn on_request_start(&self, _action: Action, _method: HttpMethod) {}

    fn on_request_success(&self, _action: Action, _method: HttpMethod, _elapsed: Duration) {}

    fn on_request_failure(
        &self,
        _action: Action,
        _method: HttpMethod,
        _error: &ClientError,
        _elapsed: Duration,
    ) {
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopClientHooks;

impl ClientOperationHooks for NoopClientHooks {}
