use std::collections::BTreeMap;
use std::error::Error as StdError;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use derive_more::Display;
use eventsource_stream::Eventsource;
use futures::{Stream, StreamExt, future};

use crate::error::{Error, Result};

/// The stream a shell event belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub enum ShellEventKind {
    #[display("stdout")]
    Stdout,
    #[display("stderr")]
    Stderr,
    /// The command exited
    #[display("end")]
    End,
    /// The command is blocked reading stdin
    #[display("waiting")]
    Waiting,
    #[display("{_0}")]
    Other(String),
}

impl ShellEventKind {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ShellEventKind::End | ShellEventKind::Waiting)
    }
}

impl From<&str> for ShellEventKind {
    fn from(name: &str) -> Self {
        match name.trim() {
            "stdout" => ShellEventKind::Stdout,
            "stderr" => ShellEventKind::Stderr,
            "end" => ShellEventKind::End,
            "waiting" => ShellEventKind::Waiting,
            other => ShellEventKind::Other(other.to_string()),
        }
    }
}

/// One event from a sandbox shell session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellStreamEvent {
    pub kind: ShellEventKind,
    pub data: String,
}

impl ShellStreamEvent {
    /// Parses a `{"<kind>": "<base64>"}` event payload. An empty string
    /// decodes to empty data.
    pub fn parse(payload: &str) -> Result<Self> {
        let entries: BTreeMap<String, String> = serde_json::from_str(payload)?;
        let (name, encoded) = entries.into_iter().next().ok_or(Error::EmptyShellEvent)?;

        let data = if encoded.is_empty() {
            String::new()
        } else {
            let raw = STANDARD.decode(encoded.as_bytes())?;
            String::from_utf8(raw).map_err(|error| error.utf8_error())?
        };
        Ok(Self {
            kind: ShellEventKind::from(name.as_str()),
            data,
        })
    }

    pub fn is_terminal(&self) -> bool {
        self.kind.is_terminal()
    }
}

/// Splits a raw byte stream into server-sent events, parses each as a shell
/// event and ends right after the first terminal one.
pub fn shell_event_stream<S, B, E>(chunks: S) -> impl Stream<Item = Result<ShellStreamEvent>>
where
    S: Stream<Item = std::result::Result<B, E>>,
    B: AsRef<[u8]>,
    E: Into<Box<dyn StdError + Send + Sync>>,
{
    chunks
        .eventsource()
        .filter_map(|event| {
            let item = match event {
                Ok(event) if event.data.trim().is_empty() => None,
                Ok(event) => Some(ShellStreamEvent::parse(&event.data)),
                Err(error) => Some(Err(Error::from(error))),
            };
            future::ready(item)
        })
        .scan(false, |done, item| {
            if *done {
                return future::ready(None);
            }
            if let Ok(event) = &item {
                *done = event.is_terminal();
            }
            future::ready(Some(item))
        })
}
