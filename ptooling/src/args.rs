//! Decoding of model-produced argument text into typed argument structs.
//!
//! ```rust
//! use ptooling::parse_args;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Lookup {
//!     numero: i64,
//!     nome: Option<String>,
//! }
//!
//! let args: Lookup = parse_args(r#"{"numero": 42}"#).expect("args should parse");
//! assert_eq!(args.numero, 42);
//! assert!(args.nome.is_none());
//! ```

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::ToolError;

fn arguments_object(args_json: &str) -> Result<Map<String, Value>, ToolError> {
    match serde_json::from_str::<Value>(args_json)? {
        Value::Object(object) => Ok(object),
        _ => Err(ToolError::invalid_arguments("expected JSON object arguments")),
    }
}

/// Decodes the arguments object into a typed struct.
///
/// Blank input is treated as `{}`, and `null` members count as absent, which
/// is how function-calling models usually send optional parameters.
pub fn parse_args<T>(args_json: &str) -> Result<T, ToolError>
where
    T: DeserializeOwned,
{
    let mut object = if args_json.trim().is_empty() {
        Map::new()
    } else {
        arguments_object(args_json)?
    };
    object.retain(|_, value| !value.is_null());

    Ok(serde_json::from_value(Value::Object(object))?)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;
    use crate::ToolErrorKind;

    #[derive(Debug, Deserialize)]
    struct Schedule {
        paciente_numero: i64,
        #[serde(default)]
        observacao: Option<String>,
    }

    #[test]
    fn parse_invalid_json_returns_invalid_arguments() {
        let error = parse_args::<Schedule>("{").expect_err("json should fail");
        assert_eq!(error.kind, ToolErrorKind::InvalidArguments);
    }

    #[test]
    fn non_object_arguments_are_rejected() {
        let error = parse_args::<Schedule>("[1, 2]").expect_err("array should fail");
        assert_eq!(error.kind, ToolErrorKind::InvalidArguments);
    }

    #[test]
    fn typed_args_ignore_null_members() {
        let args: Schedule =
            parse_args(r#"{"paciente_numero": 7, "observacao": null}"#).expect("args");
        assert_eq!(args.paciente_numero, 7);
        assert!(args.observacao.is_none());
    }

    #[test]
    fn missing_required_field_names_the_field() {
        let error = parse_args::<Schedule>("{}").expect_err("paciente_numero is required");
        assert_eq!(error.kind, ToolErrorKind::InvalidArguments);
        assert!(error.message.contains("paciente_numero"));
    }

    #[test]
    fn blank_arguments_decode_as_empty_object() {
        #[derive(Debug, Deserialize)]
        struct Optional {
            #[serde(default)]
            mes: Option<u32>,
        }

        let args: Optional = parse_args("  ").expect("blank args");
        assert!(args.mes.is_none());
    }
}
