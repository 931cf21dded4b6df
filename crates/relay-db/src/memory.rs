//! Scripted in-memory store. Answers statements from a fixed table,
//! which is enough to drive the slave and the gateway without a server.

use std::{
    collections::HashMap,
    sync::Arc,
};

use crate::{
    error::{
        DbError,
        DbResult,
    },
    store::{
        Session,
        Store,
        Target,
        TextRow,
    },
};

#[derive(Debug, Clone)]
enum Reply {
    Rows(Vec<TextRow>),
    Fail(String),
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    replies: Arc<HashMap<String, Reply>>,
    refused_ports: Arc<Vec<u16>>,
}

#[derive(Debug)]
pub struct MemorySession {
    target: Target,
    replies: Arc<HashMap<String, Reply>>,
}

impl MemoryStore {
    #[must_use]
    pub fn with_rows(mut self, sql: &str, rows: Vec<TextRow>) -> Self {
        Arc::make_mut(&mut self.replies).insert(sql.to_owned(), Reply::Rows(rows));
        self
    }

    #[must_use]
    pub fn with_failure(mut self, sql: &str, message: &str) -> Self {
        Arc::make_mut(&mut self.replies)
            .insert(sql.to_owned(), Reply::Fail(message.to_owned()));
        self
    }

    /// Connections to `port` are refused.
    #[must_use]
    pub fn refusing(mut self, port: u16) -> Self {
        Arc::make_mut(&mut self.refused_ports).push(port);
        self
    }
}

impl MemorySession {
    fn answer(&self, sql: &str) -> DbResult<Vec<TextRow>> {
        match self.replies.get(sql) {
            Some(Reply::Rows(rows)) => Ok(rows.clone()),
            Some(Reply::Fail(message)) => Err(DbError::Rejected(message.clone())),
            None => Err(DbError::Rejected(format!(
                "unexpected statement on {}: {sql}",
                self.target
            ))),
        }
    }
}

impl Store for MemoryStore {
    type Session = MemorySession;

    async fn connect(&self, target: &Target) -> DbResult<MemorySession> {
        if self.refused_ports.contains(&target.port) {
            return Err(DbError::Rejected(format!(
                "connection to {target} refused"
            )));
        }

        Ok(MemorySession {
            target: target.clone(),
            replies: Arc::clone(&self.replies),
        })
    }
}

impl Session for MemorySession {
    async fn simple_query(&mut self, sql: &str) -> DbResult<Vec<TextRow>> {
        self.answer(sql)
    }

    async fn query(
        &mut self,
        sql: &str,
        _params: &[&str],
    ) -> DbResult<Vec<TextRow>> {
        self.answer(sql)
    }
}
