//! Backend client error kinds and error value helpers.
//!
//! ```rust
//! use pclient::{ClientError, ClientErrorKind};
//!
//! let missing = ClientError::configuration("PRONT_API_KEY is not set");
//! assert!(missing.is_fatal());
//!
//! let timeout = ClientError::timeout("request timed out after 15s");
//! assert!(timeout.is_transport());
//! assert_eq!(timeout.kind, ClientErrorKind::Timeout);
//! ```

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientErrorKind {
    Configuration,
    Validation,
    Timeout,
    Transport,
    Backend,
    MalformedResponse,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientError {
    pub kind: ClientErrorKind,
    pub message: String,
}

impl ClientError {
    pub fn new(kind: ClientErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ClientErrorKind::Configuration, message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ClientErrorKind::Validation, message)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(ClientErrorKind::Timeout, message)
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ClientErrorKind::Transport, message)
    }

    pub fn backend(message: impl Into<String>) -> Self {
        Self::new(ClientErrorKind::Backend, message)
    }

    pub fn malformed_response(message: impl Into<String>) -> Self {
        Self::new(ClientErrorKind::MalformedResponse, message)
    }

    /// Only configuration errors stop the host; everything else is reported as text.
    pub fn is_fatal(&self) -> bool {
        self.kind == ClientErrorKind::Configuration
    }

    pub fn is_transport(&self) -> bool {
        matches!(
            self.kind,
            ClientErrorKind::Timeout | ClientErrorKind::Transport
        )
    }
}

impl Display for ClientError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl Error for ClientError {}

impl From<serde_json::Error> for ClientError {
    fn from(value: serde_json::Error) -> Self {
        ClientError::malformed_response(value.to_string())
    }
}
