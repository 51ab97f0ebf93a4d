//! What a tool answers, kept typed until it is handed to the model.
//!
//! ```rust
//! use ptooling::ToolOutcome;
//!
//! let failure = ToolOutcome::failure("Erro: paciente inativo");
//! assert!(!failure.is_success());
//! assert_eq!(failure.into_text(), "❌ Erro: paciente inativo");
//!
//! let success = ToolOutcome::success("✅ ok");
//! assert_eq!(success.into_text(), "✅ ok");
//! ```

use std::fmt::{Display, Formatter};

use crate::{ToolError, ToolErrorKind};

/// Leading marker of every failure text.
pub const FAILURE_MARKER: &str = "❌";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolOutcome {
    Success(String),
    /// Failure message without the marker; [`ToolOutcome::into_text`] adds it.
    Failure(String),
}

impl ToolOutcome {
    pub fn success(text: impl Into<String>) -> Self {
        Self::Success(text.into())
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure(message.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Text for a call the runtime turned away.
    pub fn rejected(tool_name: &str, error: &ToolError) -> Self {
        match error.kind {
            ToolErrorKind::NotFound => Self::failure(format!("Ferramenta desconhecida: {tool_name}")),
            ToolErrorKind::InvalidArguments => Self::failure(format!(
                "Argumentos inválidos para {tool_name}: {}",
                error.message
            )),
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Self::Success(text) => text,
            Self::Failure(message) => format!("{FAILURE_MARKER} {message}"),
        }
    }
}

impl Display for ToolOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success(text) => f.write_str(text),
            Self::Failure(message) => write!(f, "{FAILURE_MARKER} {message}"),
        }
    }
}

impl From<ToolOutcome> for String {
    fn from(outcome: ToolOutcome) -> Self {
        outcome.into_text()
    }
}
