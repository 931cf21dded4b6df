use std::{
    num::NonZeroUsize,
    path::PathBuf,
};

use clap::{
    Parser,
    Subcommand,
};
use relay_db::journal::JournalCommand;

use crate::session::HostName;

#[derive(Debug, Subcommand)]
pub enum JournalAction {
    /// Check that the gateway answers
    Ping,

    /// Create the messages table on the primary
    CreateTable,

    /// Write a message to the primary
    Write {
        /// Message text
        message: String,
    },

    /// Read the last messages from a replica
    Read,
}

#[derive(Debug, Subcommand)]
pub enum CliSub {
    /// Interactive command loop (default)
    Interactive,

    /// Send a single command to the current host's proxy and exit
    Send {
        /// Host whose proxy receives the command
        #[clap(long, value_enum, default_value_t = HostName::Master)]
        host: HostName,

        /// Command text, sent as is
        command: String,
    },

    /// Run a gateway command against the message journal
    Journal {
        #[clap(subcommand)]
        action: JournalAction,
    },
}

#[derive(Debug, Parser)]
pub struct CliArgs {
    /// Number of threads to use. Defaults to the number of
    /// logical CPUs
    #[clap(long, short)]
    pub workers: Option<NonZeroUsize>,

    /// Path to the configuration file. Falls back to
    /// `RELAY_CONFIG_PATH`, then `/etc/relay.toml` and `./relay.toml`
    #[clap(long, short)]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub sub: Option<CliSub>,
}

impl CliArgs {
    pub fn parse() -> Self {
        Parser::parse()
    }
}

impl From<JournalAction> for JournalCommand {
    fn from(action: JournalAction) -> Self {
        match action {
            JournalAction::Ping => Self::Ping,
            JournalAction::CreateTable => Self::CreateTable,
            JournalAction::Write { message } => Self::Write(message),
            JournalAction::Read => Self::Read,
        }
    }
}
