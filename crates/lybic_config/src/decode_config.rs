use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// How the codec treats fields that are present but carry the wrong JSON
/// type, or required fields that are missing altogether.
///
/// Discriminator failures (unknown `type` values) are fatal in both modes.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    fake::Dummy,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Strictness {
    /// Mistyped optional fields are treated as absent and mistyped or missing
    /// required fields fall back to their zero value.
    #[default]
    Permissive,
    /// Every required field must be present and every present field must
    /// type-check.
    Strict,
}

impl Strictness {
    pub fn is_strict(&self) -> bool {
        matches!(self, Strictness::Strict)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize, Setters, fake::Dummy)]
#[serde(rename_all = "snake_case")]
#[setters(into)]
pub struct DecodeConfig {
    /// Field-level strictness applied to every decode call
    pub strictness: Strictness,
}
