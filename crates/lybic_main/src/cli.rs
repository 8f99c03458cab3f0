use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use lybic_domain::Platform;

#[derive(Parser)]
#[command(name = "lybic-codec", version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Decode a JSON payload and print it re-encoded in normalised form.
    ///
    /// Reads from FILE, or from stdin when no file is given.
    Decode {
        /// What the payload holds
        #[arg(long = "as", value_enum, default_value_t = PayloadKind::Action)]
        kind: PayloadKind,

        /// Only accept actions from this platform's catalog
        #[arg(long)]
        platform: Option<Platform>,

        /// Reject missing or mistyped fields instead of defaulting them.
        ///
        /// Overrides `LYBIC_DECODE__STRICTNESS`.
        #[arg(long, default_value_t = false)]
        strict: bool,

        file: Option<PathBuf>,
    },

    /// List every action discriminator with the service that executes it
    Catalog {
        #[arg(long)]
        platform: Option<Platform>,
    },

    /// Decode a server-sent-event stream, printing one line per event.
    Stream {
        /// Treat events as shell output instead of action responses
        #[arg(long, default_value_t = false)]
        shell: bool,

        #[arg(long)]
        platform: Option<Platform>,

        #[arg(long, default_value_t = false)]
        strict: bool,

        file: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PayloadKind {
    Action,
    Length,
    Response,
}
