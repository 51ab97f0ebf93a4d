//! Reasons a tool call is turned away before any adapter runs.

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolErrorKind {
    /// No tool is registered under the requested name.
    NotFound,
    /// The arguments were not JSON, not an object, or did not fit the tool.
    InvalidArguments,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolError {
    pub kind: ToolErrorKind,
    pub message: String,
    /// Set by the runtime once the error is tied to a call.
    pub tool_name: Option<String>,
}

impl ToolError {
    pub fn not_found(tool_name: impl Into<String>) -> Self {
        let tool_name = tool_name.into();
        Self {
            kind: ToolErrorKind::NotFound,
            message: format!("tool '{tool_name}' is not registered"),
            tool_name: Some(tool_name),
        }
    }

    pub fn invalid_arguments(message: impl Into<String>) -> Self {
        Self {
            kind: ToolErrorKind::InvalidArguments,
            message: message.into(),
            tool_name: None,
        }
    }

    pub fn for_tool(mut self, tool_name: impl Into<String>) -> Self {
        self.tool_name = Some(tool_name.into());
        self
    }
}

impl Display for ToolError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.tool_name {
            Some(tool_name) => write!(f, "{:?} [{}]: {}", self.kind, tool_name, self.message),
            None => write!(f, "{:?}: {}", self.kind, self.message),
        }
    }
}

impl Error for ToolError {}

impl From<serde_json::Error> for ToolError {
    fn from(value: serde_json::Error) -> Self {
        ToolError::invalid_arguments(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_tool() {
        let error = ToolError::not_found("cancelar_consulta_pront");

        assert_eq!(error.kind, ToolErrorKind::NotFound);
        assert_eq!(error.tool_name.as_deref(), Some("cancelar_consulta_pront"));
        assert_eq!(
            error.to_string(),
            "NotFound [cancelar_consulta_pront]: tool 'cancelar_consulta_pront' is not registered"
        );
    }

    #[test]
    fn argument_errors_gain_the_tool_name_when_tied_to_a_call() {
        let error = ToolError::invalid_arguments("missing field `data`");
        assert_eq!(error.to_string(), "InvalidArguments: missing field `data`");

        let error = error.for_tool("agendar_consulta_pront");
        assert_eq!(
            error.to_string(),
            "InvalidArguments [agendar_consulta_pront]: missing field `data`"
        );
    }
}
