use derive_setters::Setters;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::{Error, Result, json_kind};
use crate::fields::{Fields, ObjectWriter};
use crate::{Action, DecodeOptions, Platform};

const CONTEXT: &str = "ActionResponse";

/// Actions parsed from a model's output, in execution order, together with
/// the model's free-text side channels.
#[derive(Debug, Default, Clone, PartialEq, Eq, Setters, fake::Dummy)]
#[setters(strip_option, into)]
pub struct ActionResponse {
    pub actions: Vec<Action>,
    /// Model output that could not be interpreted as an action
    pub unknown: Option<String>,
    pub memory: Option<String>,
    pub thoughts: Option<String>,
}

impl ActionResponse {
    pub fn decode(value: &Value) -> Result<Self> {
        Self::decode_with(value, &DecodeOptions::default())
    }

    /// Decodes an envelope whose actions must all belong to one platform.
    pub fn decode_for(value: &Value, platform: Platform) -> Result<Self> {
        Self::decode_with(value, &DecodeOptions::default().platform(platform))
    }

    /// Fails as a whole if any element of `actions` fails; no partial
    /// sequence is ever returned.
    pub fn decode_with(value: &Value, options: &DecodeOptions) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(Error::Shape {
                context: CONTEXT.to_string(),
                found: json_kind(value),
            });
        };

        let actions = match map.get("actions") {
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    Action::decode_with(item, options).map_err(|source| Error::Envelope {
                        index,
                        source: Box::new(source),
                    })
                })
                .collect::<Result<Vec<_>>>()?,
            None | Some(Value::Null) if options.strictness.is_strict() => {
                return Err(Error::MissingField {
                    field: "actions",
                    context: CONTEXT.to_string(),
                });
            }
            None | Some(Value::Null) => Vec::new(),
            Some(other) => {
                return Err(Error::Shape {
                    context: format!("{CONTEXT}.actions"),
                    found: json_kind(other),
                });
            }
        };

        let fields = Fields::new(map, CONTEXT, options.strictness);
        let response = Self {
            actions,
            unknown: fields.opt_string("unknown")?,
            memory: fields.opt_string("memory")?,
            thoughts: fields.opt_string("thoughts")?,
        };
        tracing::debug!(actions = response.actions.len(), "Decoded action response");
        Ok(response)
    }

    pub fn encode(&self) -> Value {
        let actions: Vec<Value> = self.actions.iter().map(Action::encode).collect();
        ObjectWriter::default()
            .field("actions", actions)
            .optional("unknown", self.unknown.as_deref())
            .optional("memory", self.memory.as_deref())
            .optional("thoughts", self.thoughts.as_deref())
            .finish()
    }

    /// The first action that ends the task, if any
    pub fn terminal(&self) -> Option<&Action> {
        self.actions.iter().find(|action| action.is_terminal())
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Self::decode(&serde_json::from_slice(bytes)?)
    }

    pub fn to_vec(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(&self.encode())?)
    }
}

impl Serialize for ActionResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.encode().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ActionResponse {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        ActionResponse::decode(&raw).map_err(serde::de::Error::custom)
    }
}
