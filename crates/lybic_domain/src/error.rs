use serde_json::Value;

/// Errors raised while decoding wire payloads.
///
/// Discriminator failures are always fatal. Field-level failures are only
/// raised for nested `Length` values, or for any field when decoding in
/// strict mode.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Expected a JSON object for {context}, got {found}")]
    Shape {
        context: String,
        found: &'static str,
    },

    #[error("Missing 'type' discriminator in {context}")]
    MissingDiscriminator { context: String },

    #[error("Unknown Length type '{tag}' in {context}")]
    UnknownLengthType { tag: String, context: String },

    #[error("Unknown action type: '{0}'")]
    UnknownActionType(String),

    #[error("Failed to decode {field} of {action}: {source}")]
    FieldCoercion {
        field: &'static str,
        action: &'static str,
        source: Box<Error>,
    },

    #[error("Missing required field '{field}' in {context}")]
    MissingField {
        field: &'static str,
        context: String,
    },

    #[error("Field '{field}' in {context} must be {expected}, got {found}")]
    InvalidField {
        field: &'static str,
        context: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Failed to decode action #{index} of the response: {source}")]
    Envelope { index: usize, source: Box<Error> },

    #[error("Invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// The discriminator value that was not recognised, looking through
    /// envelope and field wrappers.
    pub fn unknown_tag(&self) -> Option<&str> {
        match self {
            Error::UnknownLengthType { tag, .. } => Some(tag),
            Error::UnknownActionType(tag) => Some(tag),
            Error::FieldCoercion { source, .. } | Error::Envelope { source, .. } => {
                source.unknown_tag()
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Human readable name of a JSON value's kind, used in error messages.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_unknown_tag_through_wrappers() {
        let fixture = Error::Envelope {
            index: 2,
            source: Box::new(Error::FieldCoercion {
                field: "x",
                action: "mouse:click",
                source: Box::new(Error::UnknownLengthType {
                    tag: "em".to_string(),
                    context: "Length".to_string(),
                }),
            }),
        };
        let actual = fixture.unknown_tag();
        let expected = Some("em");
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_field_coercion_message_names_field_path() {
        let fixture = Error::FieldCoercion {
            field: "x",
            action: "mouse:click",
            source: Box::new(Error::MissingDiscriminator {
                context: "Length".to_string(),
            }),
        };
        let actual = fixture.to_string();
        let expected =
            "Failed to decode x of mouse:click: Missing 'type' discriminator in Length";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_unknown_action_message_names_tag() {
        let fixture = Error::UnknownActionType("unknown-thing".to_string());
        let actual = fixture.to_string();
        let expected = "Unknown action type: 'unknown-thing'";
        assert_eq!(actual, expected);
    }
}
