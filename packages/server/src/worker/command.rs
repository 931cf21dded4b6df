use chrono::Local;
use relay_db::{
    status::replication_status,
    store::{
        Store,
        Target,
    },
};

pub const STATUS_RESPONSE: &str = "Slave status: Running";

/// Entry of the handler table. Matching is case-insensitive and exact:
/// surrounding whitespace is part of the command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    Time,
    Status,
    DbStatus,
    Other(&'a str),
}

impl<'a> Command<'a> {
    pub fn parse(text: &'a str) -> Self {
        match text.to_lowercase().as_str() {
            "time" => Self::Time,
            "status" => Self::Status,
            "dbstatus" => Self::DbStatus,
            _ => Self::Other(text),
        }
    }
}

/// Produces responses for parsed commands. `dbstatus` goes to `store`.
pub struct Dispatcher<S> {
    store: S,
    database: Target,
}

impl<S: Store> Dispatcher<S> {
    pub fn new(store: S, database: Target) -> Self {
        Self { store, database }
    }

    pub async fn respond(&self, command: Command<'_>) -> String {
        match command {
            Command::Time => format!(
                "Current time: {}",
                Local::now().format("%Y-%m-%d %H:%M:%S")
            ),
            Command::Status => STATUS_RESPONSE.to_owned(),
            Command::DbStatus => {
                replication_status(&self.store, &self.database).await
            }
            Command::Other(text) => format!("Slave processed: {text}"),
        }
    }
}
