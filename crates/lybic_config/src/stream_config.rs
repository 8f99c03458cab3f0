use derive_setters::Setters;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Setters, fake::Dummy)]
#[serde(rename_all = "snake_case")]
#[setters(into)]
pub struct StreamConfig {
    /// Number of decoded frames buffered between the decoder task and its
    /// consumer
    #[dummy(faker = "1..64")]
    pub channel_capacity: usize,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 10,
        }
    }
}
