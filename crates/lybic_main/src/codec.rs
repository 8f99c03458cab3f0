use std::convert::Infallible;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::pin::pin;

use anyhow::{Context, Result};
use bytes::Bytes;
use futures::{StreamExt, stream};
use lybic_config::LybicConfig;
use lybic_domain::{Action, ActionKind, ActionResponse, DecodeOptions, Length, Platform, Strictness};
use lybic_stream::{ShellStreamEvent, action_stream, shell_event_stream};
use serde_json::Value;
use strum::IntoEnumIterator;

use crate::{Cli, Command, PayloadKind};

/// Builds decode options from loaded configuration and command-line
/// overrides. `--strict` only ever tightens the configured strictness.
pub fn decode_options(
    config: &LybicConfig,
    platform: Option<Platform>,
    strict: bool,
) -> DecodeOptions {
    let mut options = DecodeOptions::from(&config.decode);
    if strict {
        options = options.strictness(Strictness::Strict);
    }
    if let Some(platform) = platform {
        options = options.platform(platform);
    }
    options
}

/// Decodes `input` as the given payload kind and returns its canonical
/// re-encoding.
pub fn decode_payload(kind: PayloadKind, input: &str, options: &DecodeOptions) -> Result<Value> {
    let value: Value = serde_json::from_str(input).context("Input is not valid JSON")?;
    let encoded = match kind {
        PayloadKind::Action => Action::decode_with(&value, options)?.encode(),
        PayloadKind::Length => Length::decode_with(&value, options.strictness)?.encode(),
        PayloadKind::Response => ActionResponse::decode_with(&value, options)?.encode(),
    };
    Ok(encoded)
}

pub fn catalog(platform: Option<Platform>) -> Vec<ActionKind> {
    ActionKind::iter()
        .filter(|kind| platform.is_none_or(|p| kind.platform() == p))
        .collect()
}

/// One catalog line: the discriminator and the service that executes it.
pub fn catalog_line(kind: ActionKind) -> String {
    format!("{:<20} {}", kind.tag(), kind.platform().service())
}

/// One output line per shell event; the separator is dropped when the event
/// carries no data.
pub fn shell_line(event: &ShellStreamEvent) -> String {
    let data = event.data.trim_end();
    if data.is_empty() {
        format!("[{}]", event.kind)
    } else {
        format!("[{}] {data}", event.kind)
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let stdin = io::stdin();
            io::read_to_string(stdin).context("Failed to read stdin")
        }
    }
}

pub async fn run(cli: Cli, config: &LybicConfig, out: &mut impl Write) -> Result<()> {
    match cli.command {
        Command::Decode {
            kind,
            platform,
            strict,
            file,
        } => {
            let input = read_input(file.as_deref())?;
            let options = decode_options(config, platform, strict);
            tracing::debug!(?kind, strictness = %options.strictness, "Decoding payload");
            let value = decode_payload(kind, &input, &options)?;
            writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
        }
        Command::Catalog { platform } => {
            for kind in catalog(platform) {
                writeln!(out, "{}", catalog_line(kind))?;
            }
        }
        Command::Stream {
            shell,
            platform,
            strict,
            file,
        } => {
            let input = read_input(file.as_deref())?;
            let chunks = stream::iter([Ok::<_, Infallible>(Bytes::from(input))]);
            if shell {
                let mut events = pin!(shell_event_stream(chunks));
                while let Some(event) = events.next().await {
                    writeln!(out, "{}", shell_line(&event?))?;
                }
            } else {
                let options = decode_options(config, platform, strict);
                let mut responses = pin!(action_stream(chunks, options));
                while let Some(response) = responses.next().await {
                    let response = response.context("Failed to decode stream event")?;
                    writeln!(out, "{}", serde_json::to_string(&response.encode())?)?;
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use lybic_stream::ShellEventKind;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn run_fixture(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(args.iter().copied())?;
        let runtime = tokio::runtime::Builder::new_current_thread().build()?;
        let config = LybicConfig::default();
        let mut out = Vec::new();
        runtime.block_on(run(cli, &config, &mut out))?;
        Ok(String::from_utf8(out)?)
    }

    fn normalise(kind: PayloadKind, input: &str) -> Result<Value> {
        decode_payload(kind, input, &DecodeOptions::default())
    }

    fn fixture_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_decode_payload_normalises_action() {
        let fixture = r#"{"callId": "c1", "duration": 99.5, "type": "wait"}"#;
        let actual = normalise(PayloadKind::Action, fixture).unwrap();
        let expected = json!({"type": "wait", "duration": 99, "callId": "c1"});
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_decode_payload_length() {
        let fixture = r#"{"value": 12, "type": "px"}"#;
        let actual = normalise(PayloadKind::Length, fixture).unwrap();
        let expected = json!({"type": "px", "value": 12});
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_decode_payload_reports_error_chain() {
        let fixture = r#"{"actions": [{"type": "zoom"}]}"#;
        let actual = normalise(PayloadKind::Response, fixture)
            .unwrap_err()
            .to_string();
        let expected = "Failed to decode action #0 of the response: Unknown action type: 'zoom'";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_strict_flag_overrides_config() {
        let fixture = LybicConfig::default();
        let actual = decode_options(&fixture, Some(Platform::Desktop), true);
        let expected = DecodeOptions::default()
            .strictness(Strictness::Strict)
            .platform(Platform::Desktop);
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_catalog_by_platform() {
        let actual: Vec<_> = catalog(Some(Platform::Mobile))
            .into_iter()
            .map(ActionKind::tag)
            .take(3)
            .collect();
        let expected = vec!["mobile:tap", "mobile:doubleTap", "mobile:swipe"];
        assert_eq!(actual, expected);
        assert_eq!(catalog(None).len(), 22);
    }

    #[test]
    fn test_catalog_line_names_service() {
        let actual = (
            catalog_line(ActionKind::MouseClick),
            catalog_line(ActionKind::MobileBack),
        );
        let expected = (
            "mouse:click          computer-use".to_string(),
            "mobile:back          mobile-use".to_string(),
        );
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_shell_line_without_data_has_no_separator() {
        let fixture = ShellStreamEvent {
            kind: ShellEventKind::End,
            data: String::new(),
        };
        let actual = shell_line(&fixture);
        let expected = "[end]";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_run_catalog() {
        let fixture = ["lybic-codec", "catalog", "--platform", "desktop"];
        let actual = run_fixture(&fixture).unwrap();
        assert_eq!(actual.lines().count(), 11);
        assert!(actual.lines().all(|line| line.ends_with(" computer-use")));
        assert!(actual.starts_with("mouse:click"));
    }

    #[test]
    fn test_run_stream_from_file() {
        let file = fixture_file(concat!(
            "data: {\"actions\":[{\"type\":\"screenshot\"}]}\n\n",
            ": ping\n\n",
            "data: {\"actions\":[]}\n\n",
        ));
        let path = file.path().to_string_lossy().to_string();

        let actual = run_fixture(&["lybic-codec", "stream", &path]).unwrap();
        let expected = "{\"actions\":[{\"type\":\"screenshot\"}]}\n{\"actions\":[]}\n";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_run_shell_stream_from_file() {
        let file = fixture_file("data: {\"stdout\":\"aGkK\"}\n\ndata: {\"end\":\"\"}\n\n");
        let path = file.path().to_string_lossy().to_string();
        let fixture = ["lybic-codec", "stream", "--shell", path.as_str()];

        let actual = run_fixture(&fixture).unwrap();
        let expected = "[stdout] hi\n[end]\n";
        assert_eq!(actual, expected);
    }
}
