//! A model-issued call, the session it runs in, and what it answered.

use pcommon::SessionId;

use crate::ToolOutcome;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCall {
    pub id: String,
    pub name: String,
    /// Raw JSON object text as the model produced it.
    pub arguments: String,
}

impl ToolCall {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        arguments: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            arguments: arguments.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolExecutionContext {
    pub session_id: SessionId,
}

impl ToolExecutionContext {
    pub fn new(session_id: impl Into<SessionId>) -> Self {
        Self {
            session_id: session_id.into(),
        }
    }
}

/// Answer to one call. Failures are answers too, carried as
/// [`ToolOutcome::Failure`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolExecutionResult {
    pub tool_call_id: String,
    pub outcome: ToolOutcome,
}

impl ToolExecutionResult {
    pub fn answering(call: &ToolCall, outcome: ToolOutcome) -> Self {
        Self {
            tool_call_id: call.id.clone(),
            outcome,
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_success()
    }

    pub fn into_text(self) -> String {
        self.outcome.into_text()
    }
}
