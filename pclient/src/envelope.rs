//! Typed decoding of the backend `{success, data | error}` response envelope.
//!
//! ```rust
//! use pclient::{Envelope, PatientRecord};
//! use serde_json::json;
//!
//! let envelope = Envelope::<Vec<PatientRecord>>::decode(json!({
//!     "success": true,
//!     "data": [{"numero": 42, "nome": "Ana Silva"}]
//! }))
//! .expect("envelope should decode");
//!
//! match envelope {
//!     Envelope::Success(patients) => assert_eq!(patients[0].nome, "Ana Silva"),
//!     Envelope::Failure(_) => unreachable!(),
//! }
//! ```

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::ClientError;

/// Message used when the backend reports a failure without an `error` field.
pub const UNKNOWN_BACKEND_ERROR: &str = "Erro desconhecido";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Envelope<T> {
    Success(T),
    Failure(Option<String>),
}

impl<T> Envelope<T>
where
    T: DeserializeOwned + Default,
{
    /// Decodes a raw response. A missing or null `data` becomes `T::default()`.
    pub fn decode(value: Value) -> Result<Self, ClientError> {
        let Value::Object(mut object) = value else {
            return Err(ClientError::malformed_response(
                "backend response is not a JSON object",
            ));
        };

        if !is_truthy(object.get("success")) {
            return Ok(Self::Failure(error_message(&object)));
        }

        let data = match object.remove("data") {
            None | Some(Value::Null) => T::default(),
            Some(data) => serde_json::from_value(data).map_err(|err| {
                ClientError::malformed_response(format!("unexpected data shape: {err}"))
            })?,
        };

        Ok(Self::Success(data))
    }
}

impl<T> Envelope<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Collapses a failure envelope into a `Backend` error.
    pub fn into_result(self) -> Result<T, ClientError> {
        match self {
            Self::Success(data) => Ok(data),
            Self::Failure(message) => Err(ClientError::backend(
                message.unwrap_or_else(|| UNKNOWN_BACKEND_ERROR.to_string()),
            )),
        }
    }
}

fn error_message(object: &Map<String, Value>) -> Option<String> {
    match object.get("error")? {
        Value::Null => None,
        Value::String(message) if message.is_empty() => None,
        Value::String(message) => Some(message.clone()),
        other => Some(other.to_string()),
    }
}

fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Number(number)) => number.as_f64().is_some_and(|number| number != 0.0),
        Some(Value::String(text)) => !text.is_empty(),
        Some(Value::Array(items)) => !items.is_empty(),
        Some(Value::Object(fields)) => !fields.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{ClientErrorKind, CreatedRecord, PatientRecord};

    #[test]
    fn failure_carries_backend_error_message() {
        let envelope = Envelope::<Vec<PatientRecord>>::decode(json!({
            "success": false,
            "error": "Paciente bloqueado"
        }))
        .expect("decode");

        assert_eq!(envelope, Envelope::Failure(Some("Paciente bloqueado".to_string())));
    }

    #[test]
    fn missing_success_flag_is_a_failure_without_message() {
        let envelope = Envelope::<CreatedRecord>::decode(json!({"data": {"id": 1}})).expect("decode");
        assert_eq!(envelope, Envelope::Failure(None));

        let error = envelope.into_result().expect_err("failure should convert");
        assert_eq!(error.kind, ClientErrorKind::Backend);
        assert_eq!(error.message, UNKNOWN_BACKEND_ERROR);
    }

    #[test]
    fn success_flag_follows_json_truthiness() {
        let numeric = Envelope::<CreatedRecord>::decode(json!({"success": 1})).expect("decode");
        assert!(numeric.is_success());

        let zero = Envelope::<CreatedRecord>::decode(json!({"success": 0})).expect("decode");
        assert!(!zero.is_success());
    }

    #[test]
    fn missing_data_decodes_to_default() {
        let envelope = Envelope::<Vec<PatientRecord>>::decode(json!({"success": true})).expect("decode");
        assert_eq!(envelope, Envelope::Success(Vec::new()));
    }

    #[test]
    fn data_shape_mismatch_is_malformed() {
        let error = Envelope::<Vec<PatientRecord>>::decode(json!({
            "success": true,
            "data": [{"nome": "sem numero"}]
        }))
        .expect_err("missing numero should fail");

        assert_eq!(error.kind, ClientErrorKind::MalformedResponse);
        assert!(error.message.contains("numero"));
    }

    #[test]
    fn non_object_response_is_malformed() {
        let error = Envelope::<CreatedRecord>::decode(json!(["not", "an", "object"]))
            .expect_err("array should fail");
        assert_eq!(error.kind, ClientErrorKind::MalformedResponse);
    }
}
