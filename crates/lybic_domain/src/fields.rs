use lybic_config::Strictness;
use serde_json::{Map, Value};

use crate::Length;
use crate::error::{Error, Result, json_kind};

/// Typed, per-field view over one wire object.
///
/// Every accessor checks for presence first. What happens to a present field
/// of the wrong JSON type, or a missing required field, depends on the
/// [`Strictness`] the reader was built with.
pub(crate) struct Fields<'a> {
    map: &'a Map<String, Value>,
    context: &'static str,
    strictness: Strictness,
}

/// The `x`, `y`, `holdKey`, `callId` quartet shared by the pointer actions.
pub(crate) struct PointerBase {
    pub x: Length,
    pub y: Length,
    pub hold_key: Option<String>,
    pub call_id: Option<String>,
}

impl<'a> Fields<'a> {
    pub(crate) fn new(
        map: &'a Map<String, Value>,
        context: &'static str,
        strictness: Strictness,
    ) -> Self {
        Self {
            map,
            context,
            strictness,
        }
    }

    pub(crate) fn int(&self, field: &'static str) -> Result<i64> {
        self.required(field, "a number", as_int)
    }

    pub(crate) fn opt_int(&self, field: &'static str) -> Result<Option<i64>> {
        self.optional(field, "a number", as_int)
    }

    pub(crate) fn bool(&self, field: &'static str) -> Result<bool> {
        self.required(field, "a boolean", Value::as_bool)
    }

    pub(crate) fn string(&self, field: &'static str) -> Result<String> {
        self.required(field, "a string", as_string)
    }

    pub(crate) fn opt_string(&self, field: &'static str) -> Result<Option<String>> {
        self.optional(field, "a string", as_string)
    }

    pub(crate) fn call_id(&self) -> Result<Option<String>> {
        self.opt_string("callId")
    }

    /// Decodes a nested `Length`. A present but undecodable value is always
    /// an error, regardless of strictness.
    pub(crate) fn length(&self, field: &'static str) -> Result<Length> {
        match self.map.get(field) {
            Some(value) => Length::decode_with(value, self.strictness).map_err(|source| {
                Error::FieldCoercion {
                    field,
                    action: self.context,
                    source: Box::new(source),
                }
            }),
            None => self.missing(field),
        }
    }

    pub(crate) fn pointer(&self) -> Result<PointerBase> {
        Ok(PointerBase {
            x: self.length("x")?,
            y: self.length("y")?,
            hold_key: self.opt_string("holdKey")?,
            call_id: self.call_id()?,
        })
    }

    fn required<T: Default>(
        &self,
        field: &'static str,
        expected: &'static str,
        read: impl Fn(&Value) -> Option<T>,
    ) -> Result<T> {
        match self.map.get(field) {
            Some(value) => match read(value) {
                Some(value) => Ok(value),
                None => self.mistyped(field, expected, value).map(|_| T::default()),
            },
            None => self.missing(field),
        }
    }

    fn optional<T>(
        &self,
        field: &'static str,
        expected: &'static str,
        read: impl Fn(&Value) -> Option<T>,
    ) -> Result<Option<T>> {
        match self.map.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => match read(value) {
                Some(value) => Ok(Some(value)),
                None => self.mistyped(field, expected, value).map(|_| None),
            },
        }
    }

    fn missing<T: Default>(&self, field: &'static str) -> Result<T> {
        if self.strictness.is_strict() {
            return Err(Error::MissingField {
                field,
                context: self.context.to_string(),
            });
        }
        Ok(T::default())
    }

    fn mistyped(&self, field: &'static str, expected: &'static str, value: &Value) -> Result<()> {
        let found = json_kind(value);
        if self.strictness.is_strict() {
            return Err(Error::InvalidField {
                field,
                context: self.context.to_string(),
                expected,
                found,
            });
        }
        let context = self.context;
        tracing::warn!(field, context, found, "Ignoring mistyped field");
        Ok(())
    }
}

/// Reads a JSON number as an integer. Floating point wire numbers are
/// truncated toward zero, never rounded.
fn as_int(value: &Value) -> Option<i64> {
    let Value::Number(number) = value else {
        return None;
    };
    number
        .as_i64()
        .or_else(|| number.as_u64().map(|_| i64::MAX))
        .or_else(|| number.as_f64().map(|n| n as i64))
}

fn as_string(value: &Value) -> Option<String> {
    value.as_str().map(str::to_string)
}

/// Builds a wire object with the discriminator first, followed by the
/// variant's fields. Optional fields are omitted entirely when unset.
#[derive(Default)]
pub(crate) struct ObjectWriter(Map<String, Value>);

impl ObjectWriter {
    pub(crate) fn new(tag: &str) -> Self {
        let mut map = Map::new();
        map.insert("type".to_string(), Value::from(tag));
        Self(map)
    }

    pub(crate) fn field(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.0.insert(name.to_string(), value.into());
        self
    }

    pub(crate) fn length(self, name: &str, length: &Length) -> Self {
        self.field(name, length.encode())
    }

    pub(crate) fn optional(self, name: &str, value: Option<impl Into<Value>>) -> Self {
        match value {
            Some(value) => self.field(name, value),
            None => self,
        }
    }

    pub(crate) fn finish(self) -> Value {
        Value::Object(self.0)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn fixture_map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("fixture must be an object"),
        }
    }

    #[test]
    fn test_int_truncates_floats() {
        let fixture = fixture_map(json!({"a": 7.9, "b": -7.9, "c": 3}));
        let fields = Fields::new(&fixture, "test", Strictness::Permissive);
        let actual = (
            fields.int("a").unwrap(),
            fields.int("b").unwrap(),
            fields.int("c").unwrap(),
        );
        let expected = (7, -7, 3);
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_permissive_required_defaults_to_zero() {
        let fixture = fixture_map(json!({"a": "seven", "b": 1}));
        let fields = Fields::new(&fixture, "test", Strictness::Permissive);
        let actual = (
            fields.int("a").unwrap(),
            fields.string("b").unwrap(),
            fields.bool("c").unwrap(),
        );
        let expected = (0, String::new(), false);
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_permissive_optional_mistyped_is_absent() {
        let fixture = fixture_map(json!({"callId": 42, "holdKey": null}));
        let fields = Fields::new(&fixture, "test", Strictness::Permissive);
        let actual = (
            fields.call_id().unwrap(),
            fields.opt_string("holdKey").unwrap(),
        );
        let expected = (None, None);
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_strict_rejects_mistyped_optional() {
        let fixture = fixture_map(json!({"callId": 42}));
        let fields = Fields::new(&fixture, "mouse:click", Strictness::Strict);
        let actual = fields.call_id().unwrap_err();
        assert!(matches!(
            actual,
            Error::InvalidField {
                field: "callId",
                expected: "a string",
                found: "a number",
                ..
            }
        ));
    }

    #[test]
    fn test_strict_rejects_missing_required() {
        let fixture = fixture_map(json!({}));
        let fields = Fields::new(&fixture, "wait", Strictness::Strict);
        let actual = fields.int("duration").unwrap_err();
        assert!(matches!(actual, Error::MissingField { field: "duration", .. }));
    }

    #[test]
    fn test_strict_accepts_null_optional() {
        let fixture = fixture_map(json!({"callId": null}));
        let fields = Fields::new(&fixture, "screenshot", Strictness::Strict);
        let actual = fields.call_id().unwrap();
        let expected = None;
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_length_failure_names_field() {
        let fixture = fixture_map(json!({"x": {"type": "em", "value": 1}}));
        let fields = Fields::new(&fixture, "mouse:move", Strictness::Permissive);
        let actual = fields.length("x").unwrap_err();
        assert!(matches!(actual, Error::FieldCoercion { field: "x", action: "mouse:move", .. }));
    }

    #[test]
    fn test_writer_omits_unset_optionals() {
        let fixture = ObjectWriter::new("wait")
            .field("duration", 100)
            .optional("callId", None::<&str>)
            .optional("message", Some("done"));
        let actual = fixture.finish();
        let expected = json!({"type": "wait", "duration": 100, "message": "done"});
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_writer_puts_discriminator_first() {
        let fixture = ObjectWriter::new("mobile:type").field("content", "hi");
        let actual: Vec<String> = match fixture.finish() {
            Value::Object(map) => map.keys().cloned().collect(),
            _ => vec![],
        };
        let expected = vec!["type".to_string(), "content".to_string()];
        assert_eq!(actual, expected);
    }
}
