use lybic_config::Strictness;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::{Error, Result, json_kind};
use crate::fields::{Fields, ObjectWriter};

const CONTEXT: &str = "Length";

/// A position coordinate, either absolute pixels or a proportion of a
/// reference dimension (usually the screen width or height).
///
/// The denominator of a fraction is not checked here; consumers resolving a
/// fraction against a dimension own that check (see [`Length::resolve`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, fake::Dummy)]
pub enum Length {
    /// Wire tag `px`
    Pixel { value: i64 },
    /// Wire tag `/`
    Fraction { numerator: i64, denominator: i64 },
}

impl Default for Length {
    fn default() -> Self {
        Length::Pixel { value: 0 }
    }
}

impl Length {
    pub const PIXEL_TAG: &'static str = "px";
    pub const FRACTION_TAG: &'static str = "/";

    pub fn pixel(value: i64) -> Self {
        Length::Pixel { value }
    }

    pub fn fraction(numerator: i64, denominator: i64) -> Self {
        Length::Fraction {
            numerator,
            denominator,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Length::Pixel { .. } => Self::PIXEL_TAG,
            Length::Fraction { .. } => Self::FRACTION_TAG,
        }
    }

    /// Resolves this length to pixels against a reference dimension.
    /// Returns `None` for a fraction with a zero denominator.
    pub fn resolve(&self, reference: i64) -> Option<i64> {
        match *self {
            Length::Pixel { value } => Some(value),
            Length::Fraction {
                numerator,
                denominator,
            } => reference.saturating_mul(numerator).checked_div(denominator),
        }
    }

    pub fn encode(&self) -> Value {
        let writer = ObjectWriter::new(self.tag());
        let writer = match *self {
            Length::Pixel { value } => writer.field("value", value),
            Length::Fraction {
                numerator,
                denominator,
            } => writer
                .field("numerator", numerator)
                .field("denominator", denominator),
        };
        writer.finish()
    }

    /// Decodes permissively: missing or non-numeric fields read as zero.
    pub fn decode(value: &Value) -> Result<Self> {
        Self::decode_with(value, Strictness::Permissive)
    }

    pub fn decode_with(value: &Value, strictness: Strictness) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(Error::Shape {
                context: CONTEXT.to_string(),
                found: json_kind(value),
            });
        };
        let Some(tag) = map.get("type").and_then(Value::as_str) else {
            return Err(Error::MissingDiscriminator {
                context: CONTEXT.to_string(),
            });
        };

        let fields = Fields::new(map, CONTEXT, strictness);
        match tag {
            Self::PIXEL_TAG => Ok(Length::Pixel {
                value: fields.int("value")?,
            }),
            Self::FRACTION_TAG => Ok(Length::Fraction {
                numerator: fields.int("numerator")?,
                denominator: fields.int("denominator")?,
            }),
            other => Err(Error::UnknownLengthType {
                tag: other.to_string(),
                context: CONTEXT.to_string(),
            }),
        }
    }
}

impl Serialize for Length {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.encode().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Length {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Length::decode(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use fake::{Fake, Faker};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_encode_pixel() {
        let fixture = Length::pixel(120);
        let actual = fixture.encode();
        let expected = json!({"type": "px", "value": 120});
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_encode_fraction() {
        let fixture = Length::fraction(1, 3);
        let actual = fixture.encode();
        let expected = json!({"type": "/", "numerator": 1, "denominator": 3});
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_decode_truncates_float_pixel() {
        let fixture = json!({"type": "px", "value": 7.9});
        let actual = Length::decode(&fixture).unwrap();
        let expected = Length::pixel(7);
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_decode_truncates_fraction_parts() {
        let fixture = json!({"type": "/", "numerator": 2.99, "denominator": 4.5});
        let actual = Length::decode(&fixture).unwrap();
        let expected = Length::fraction(2, 4);
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_decode_missing_value_is_zero() {
        let fixture = json!({"type": "px"});
        let actual = Length::decode(&fixture).unwrap();
        let expected = Length::pixel(0);
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_decode_non_numeric_value_is_zero() {
        let fixture = json!({"type": "/", "numerator": "1", "denominator": 2});
        let actual = Length::decode(&fixture).unwrap();
        let expected = Length::fraction(0, 2);
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_decode_ignores_extra_fields() {
        let fixture = json!({"type": "px", "value": 5, "unit": "css"});
        let actual = Length::decode(&fixture).unwrap();
        let expected = Length::pixel(5);
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_decode_strict_rejects_non_numeric() {
        let fixture = json!({"type": "px", "value": "5"});
        let actual = Length::decode_with(&fixture, Strictness::Strict).unwrap_err();
        assert!(matches!(actual, Error::InvalidField { field: "value", .. }));
    }

    #[test]
    fn test_decode_not_an_object() {
        let fixture = json!([1, 2]);
        let actual = Length::decode(&fixture).unwrap_err();
        assert!(matches!(actual, Error::Shape { found: "an array", .. }));
    }

    #[test]
    fn test_decode_missing_discriminator() {
        let fixture = json!({"value": 3});
        let actual = Length::decode(&fixture).unwrap_err();
        assert!(matches!(actual, Error::MissingDiscriminator { .. }));
    }

    #[test]
    fn test_decode_non_string_discriminator() {
        let fixture = json!({"type": 1, "value": 3});
        let actual = Length::decode(&fixture).unwrap_err();
        assert!(matches!(actual, Error::MissingDiscriminator { .. }));
    }

    #[test]
    fn test_decode_unknown_variant() {
        let fixture = json!({"type": "%", "value": 50});
        let actual = Length::decode(&fixture).unwrap_err();
        assert_eq!(actual.unknown_tag(), Some("%"));
    }

    #[test]
    fn test_round_trip_generated_values() {
        for _ in 0..64 {
            let fixture: Length = Faker.fake();
            let encoded = fixture.encode();
            let actual = Length::decode_with(&encoded, Strictness::Strict).unwrap();
            assert_eq!(actual, fixture);
        }
    }

    #[test]
    fn test_resolve() {
        let actual = (
            Length::pixel(42).resolve(1920),
            Length::fraction(1, 2).resolve(1920),
            Length::fraction(1, 0).resolve(1920),
        );
        let expected = (Some(42), Some(960), None);
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_serde_goes_through_codec() {
        let fixture = r#"{"type":"/","numerator":3,"denominator":4}"#;
        let actual: Length = serde_json::from_str(fixture).unwrap();
        let expected = Length::fraction(3, 4);
        assert_eq!(actual, expected);
        assert_eq!(serde_json::to_string(&actual).unwrap(), fixture);
    }
}
