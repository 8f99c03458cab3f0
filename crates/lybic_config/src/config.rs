use derive_setters::Setters;
use serde::{Deserialize, Serialize};

use crate::{DecodeConfig, StreamConfig};

const DEFAULT_CONFIG: &str = include_str!("../defaults.json");
const ENV_PREFIX: &str = "LYBIC";

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize, Setters, fake::Dummy)]
#[serde(rename_all = "snake_case")]
#[setters(into)]
pub struct LybicConfig {
    /// Codec behaviour for inbound payloads
    pub decode: DecodeConfig,
    /// Buffering for streamed event payloads
    pub stream: StreamConfig,
}

impl LybicConfig {
    /// Loads configuration from the embedded `defaults.json`, overridden by
    /// environment variables prefixed with `LYBIC_`.
    ///
    /// Nested keys are separated by a double underscore:
    /// - `LYBIC_DECODE__STRICTNESS=strict` -> `decode.strictness`
    /// - `LYBIC_STREAM__CHANNEL_CAPACITY=32` -> `stream.channel_capacity`
    ///
    /// # Errors
    /// Returns an error if an override cannot be parsed into the expected
    /// type.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::load(Self::environment())
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn load(environment: config::Environment) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(
                DEFAULT_CONFIG,
                config::FileFormat::Json,
            ))
            .add_source(environment)
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use fake::{Fake, Faker};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::Strictness;

    fn fixture_env(vars: &[(&str, &str)]) -> config::Environment {
        let source: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        LybicConfig::environment().source(Some(source))
    }

    #[test]
    fn test_embedded_defaults_match_default_impl() {
        let actual = LybicConfig::load(fixture_env(&[])).unwrap();
        let expected = LybicConfig::default();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_env_overrides_strictness() {
        let fixture = fixture_env(&[("LYBIC_DECODE__STRICTNESS", "strict")]);
        let actual = LybicConfig::load(fixture).unwrap();
        let expected = LybicConfig::default()
            .decode(DecodeConfig::default().strictness(Strictness::Strict));
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_env_overrides_channel_capacity() {
        let fixture = fixture_env(&[("LYBIC_STREAM__CHANNEL_CAPACITY", "32")]);
        let actual = LybicConfig::load(fixture).unwrap().stream.channel_capacity;
        let expected = 32;
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_invalid_strictness_is_rejected() {
        let fixture = fixture_env(&[("LYBIC_DECODE__STRICTNESS", "lenient")]);
        let actual = LybicConfig::load(fixture);
        assert!(actual.is_err());
    }

    #[test]
    fn test_setters_compose() {
        let fixture: LybicConfig = Faker.fake();
        let actual = fixture
            .stream(StreamConfig::default().channel_capacity(4usize))
            .stream
            .channel_capacity;
        let expected = 4;
        assert_eq!(actual, expected);
    }
}
