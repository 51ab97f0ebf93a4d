//! Transport-neutral description of a single backend call.

use std::fmt::{Display, Formatter};
use std::time::Duration;

use serde_json::Value;

/// Every call targets this path below the configured base URL.
pub const ENDPOINT_PATH: &str = "fluxi_api.php";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
        }
    }
}

impl Display for HttpMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value of the `action` query parameter that selects the backend operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Health,
    Patient,
    Schedule,
    Appointments,
    RegisterAttendance,
    Birthdays,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Health => "health",
            Self::Patient => "paciente",
            Self::Schedule => "agendar",
            Self::Appointments => "agendamentos",
            Self::RegisterAttendance => "registrar_presenca",
            Self::Birthdays => "aniversariantes",
        }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BackendRequest {
    pub method: HttpMethod,
    pub action: Action,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    pub timeout: Duration,
}

impl BackendRequest {
    pub fn new(method: HttpMethod, action: Action, timeout: Duration) -> Self {
        Self {
            method,
            action,
            query: Vec::new(),
            body: None,
            timeout,
        }
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn with_optional_query<T: ToString>(self, key: &str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.with_query(key, value.to_string()),
            None => self,
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Full query string pairs, `action` first.
    pub fn query_pairs(&self) -> Vec<(&str, &str)> {
        let mut pairs = Vec::with_capacity(self.query.len() + 1);
        pairs.push(("action", self.action.as_str()));
        pairs.extend(
            self.query
                .iter()
                .map(|(key, value)| (key.as_str(), value.as_str())),
        );
        pairs
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query_pairs()
            .into_iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_is_always_the_first_query_pair() {
        let request = BackendRequest::new(HttpMethod::Get, Action::Appointments, Duration::from_secs(15))
            .with_query("data", "2025-03-10")
            .with_optional_query::<i64>("paciente_numero", None)
            .with_optional_query("status", Some("agendado"));

        assert_eq!(
            request.query_pairs(),
            vec![
                ("action", "agendamentos"),
                ("data", "2025-03-10"),
                ("status", "agendado"),
            ]
        );
        assert_eq!(request.query_value("status"), Some("agendado"));
        assert_eq!(request.query_value("paciente_numero"), None);
    }
}
