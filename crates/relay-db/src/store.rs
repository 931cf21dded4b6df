use std::{
    fmt,
    future::Future,
};

use crate::error::DbResult;

/// A single result row, every column rendered as text. `None` is SQL NULL.
pub type TextRow = Vec<Option<String>>;

/// Where to connect. Credentials live in the [`Store`] itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub host: String,
    pub port: u16,
    pub database: String,
}

/// Capability to open connections to the relational store.
pub trait Store: Send + Sync {
    type Session: Session;

    fn connect(
        &self,
        target: &Target,
    ) -> impl Future<Output = DbResult<Self::Session>> + Send;
}

/// One open connection. Dropping it closes the connection.
pub trait Session: Send {
    /// Runs a fixed statement over the simple query protocol.
    fn simple_query(
        &mut self,
        sql: &str,
    ) -> impl Future<Output = DbResult<Vec<TextRow>>> + Send;

    /// Runs a parameterized statement. Every selected column must be
    /// text-typed.
    fn query(
        &mut self,
        sql: &str,
        params: &[&str],
    ) -> impl Future<Output = DbResult<Vec<TextRow>>> + Send;
}

impl Target {
    pub fn new(
        host: impl Into<String>,
        port: u16,
        database: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            database: database.into(),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Renders a column the way the diagnostics print it.
pub fn column(row: &TextRow, index: usize) -> &str {
    row.get(index)
        .and_then(Option::as_deref)
        .unwrap_or("None")
}
