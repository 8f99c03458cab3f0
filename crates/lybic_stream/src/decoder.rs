use std::convert::Infallible;
use std::error::Error as StdError;
use std::pin::pin;

use bytes::Bytes;
use eventsource_stream::Eventsource;
use futures::{Stream, StreamExt, future};
use lybic_config::LybicConfig;
use lybic_domain::{ActionResponse, DecodeOptions};
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;

use crate::error::{Error, Result};

/// Decodes the data of server-sent events carrying action response
/// envelopes.
///
/// Holds no state between events, so one decoder can be shared freely.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ActionFrameDecoder {
    options: DecodeOptions,
}

impl ActionFrameDecoder {
    pub fn new(options: DecodeOptions) -> Self {
        Self { options }
    }

    /// Returns `None` for events with blank data.
    pub fn decode_data(&self, data: &str) -> Result<Option<ActionResponse>> {
        if data.trim().is_empty() {
            tracing::trace!("Skipping event without data");
            return Ok(None);
        }
        let value: serde_json::Value = serde_json::from_str(data)?;
        Ok(Some(ActionResponse::decode_with(&value, &self.options)?))
    }
}

/// Splits a raw byte stream into server-sent events and decodes each one in
/// order. Chunk boundaries need not line up with events. Decode failures are
/// yielded and the stream continues.
pub fn action_stream<S, B, E>(
    chunks: S,
    options: DecodeOptions,
) -> impl Stream<Item = Result<ActionResponse>>
where
    S: Stream<Item = std::result::Result<B, E>>,
    B: AsRef<[u8]>,
    E: Into<Box<dyn StdError + Send + Sync>>,
{
    let decoder = ActionFrameDecoder::new(options);
    chunks.eventsource().filter_map(move |event| {
        let item = match event {
            Ok(event) => decoder.decode_data(&event.data).transpose(),
            Err(error) => Some(Err(Error::from(error))),
        };
        future::ready(item)
    })
}

/// Runs [`action_stream`] on a background task between two channels.
///
/// The task stops once the input channel closes or the returned stream is
/// dropped. Must be called from within a tokio runtime.
pub fn spawn_action_decoder(
    rx: mpsc::Receiver<Bytes>,
    config: &LybicConfig,
) -> ReceiverStream<Result<ActionResponse>> {
    let (tx, out) = mpsc::channel(config.stream.channel_capacity.max(1));
    let options = DecodeOptions::from(&config.decode);

    tokio::spawn(async move {
        let chunks = ReceiverStream::new(rx).map(Ok::<_, Infallible>);
        let mut responses = pin!(action_stream(chunks, options));
        while let Some(item) = responses.next().await {
            if let Err(error) = &item {
                tracing::warn!(%error, "Failed to decode action event");
            }
            if tx.send(item).await.is_err() {
                tracing::debug!("Action consumer dropped, stopping decoder");
                break;
            }
        }
    });

    ReceiverStream::new(out)
}
