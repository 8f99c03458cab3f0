use std::error::Error as StdError;

use eventsource_stream::EventStreamError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Codec(#[from] lybic_domain::Error),

    #[error("Invalid JSON in stream event: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid base64 in shell event: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Stream is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("Malformed event stream: {0}")]
    EventStream(String),

    #[error("Event stream transport failed: {0}")]
    Transport(Box<dyn StdError + Send + Sync>),

    #[error("Shell stream event carried no entry")]
    EmptyShellEvent,
}

impl<E> From<EventStreamError<E>> for Error
where
    E: Into<Box<dyn StdError + Send + Sync>>,
{
    fn from(error: EventStreamError<E>) -> Self {
        match error {
            EventStreamError::Utf8(error) => Error::Utf8(error.utf8_error()),
            EventStreamError::Parser(error) => Error::EventStream(error.to_string()),
            EventStreamError::Transport(error) => Error::Transport(error.into()),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
