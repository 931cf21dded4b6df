//! Message journal backing the chat gateway. Writes go to the primary,
//! reads to a replica, so a reader can see which server answered.

use crate::{
    error::{
        DbError,
        DbResult,
    },
    store::{
        column,
        Session,
        Store,
        Target,
    },
};

pub const SERVER_INFO_QUERY: &str =
    "SELECT inet_server_addr()::text, inet_server_port()::text;";
pub const CREATE_TABLE_QUERY: &str = "CREATE TABLE IF NOT EXISTS discord_messages (
    id SERIAL PRIMARY KEY,
    message TEXT NOT NULL,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    server_info TEXT
);";
pub const INSERT_QUERY: &str = "INSERT INTO discord_messages (message, server_info) \
                                VALUES ($1, $2) RETURNING id::text;";
pub const RECENT_QUERY: &str = "SELECT id, message, created_at, server_info \
                                FROM discord_messages ORDER BY created_at DESC LIMIT 10;";

/// Which connection a gateway command needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Write,
    Read,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JournalCommand {
    Ping,
    CreateTable,
    Write(String),
    Read,
}

pub struct Journal<S> {
    store: S,
    write: Target,
    read: Target,
}

impl<S: Store> Journal<S> {
    pub fn new(store: S, write: Target, read: Target) -> Self {
        Self { store, write, read }
    }

    pub fn target(&self, role: Role) -> &Target {
        match role {
            Role::Write | Role::Admin => &self.write,
            Role::Read => &self.read,
        }
    }

    /// Runs the command and renders the user-facing reply.
    pub async fn execute(&self, command: JournalCommand) -> String {
        match command {
            JournalCommand::Ping => "Pong! Bot is working.".to_owned(),
            JournalCommand::CreateTable => self.create_table().await,
            JournalCommand::Write(message) => self.write(&message).await,
            JournalCommand::Read => self.read().await,
        }
    }

    async fn open(&self, role: Role) -> Option<S::Session> {
        let target = self.target(role);
        let kind = match role {
            Role::Read => "read",
            Role::Write | Role::Admin => "write",
        };

        tracing::info!("Connecting to {kind} database at {target}");
        match self.store.connect(target).await {
            Ok(session) => {
                tracing::info!("Successfully connected to {kind} database");
                Some(session)
            }
            Err(e) => {
                tracing::error!("Error connecting to {kind} database: {e}");
                None
            }
        }
    }

    async fn create_table(&self) -> String {
        let Some(mut session) = self.open(Role::Admin).await else {
            return "Failed to connect to the master database.".to_owned();
        };

        match session.simple_query(CREATE_TABLE_QUERY).await {
            Ok(_) => {
                tracing::info!("Table 'discord_messages' created successfully");
                "✅ Table 'discord_messages' created successfully!".to_owned()
            }
            Err(e) => {
                tracing::error!("Error creating table: {e}");
                format!("❌ Error creating table: {e}")
            }
        }
    }

    async fn write(&self, message: &str) -> String {
        let Some(mut session) = self.open(Role::Write).await else {
            return "Failed to connect to the master database.".to_owned();
        };

        let server = server_info(&mut session).await;
        tracing::info!("Connected to server: {server}");

        let inserted = session
            .query(INSERT_QUERY, &[message, server.as_str()])
            .await
            .and_then(|rows| {
                rows.first()
                    .map(|row| column(row, 0).to_owned())
                    .ok_or(DbError::NoRows(INSERT_QUERY))
            });

        match inserted {
            Ok(id) => {
                tracing::info!("Message written with ID: {id}");
                format!(
                    "✅ Message successfully written to master database \
                     with ID: {id}\nServer: {server}"
                )
            }
            Err(e) => {
                tracing::error!("Error writing to database: {e}");
                format!("❌ Error writing to database: {e}")
            }
        }
    }

    async fn read(&self) -> String {
        let Some(mut session) = self.open(Role::Read).await else {
            return "Failed to connect to the slave database.".to_owned();
        };

        let server = server_info(&mut session).await;
        tracing::info!("Connected to server: {server}");

        let rows = match session.simple_query(RECENT_QUERY).await {
            Ok(rows) => rows,
            Err(e) => {
                tracing::error!("Error reading from database: {e}");
                return format!("❌ Error reading from database: {e}");
            }
        };

        if rows.is_empty() {
            tracing::info!("No messages found in the database");
            return format!("No messages found in the database.\nRead from: {server}");
        }

        let lines = rows
            .iter()
            .map(|row| {
                format!(
                    "ID: {} | Message: {} | Written at: {} | Written by: {}",
                    column(row, 0),
                    column(row, 1),
                    column(row, 2),
                    column(row, 3),
                )
            })
            .collect::<Vec<_>>();

        tracing::info!("Returning {} messages from server {server}", rows.len());
        format!(
            "📚 Last 10 messages (read from {server}):\n\n{}",
            lines.join("\n")
        )
    }
}

/// `<addr>:<port>` of the server behind the session, `Unknown` if it
/// can't be determined.
pub async fn server_info<S: Session>(session: &mut S) -> String {
    let result: DbResult<String> = session
        .simple_query(SERVER_INFO_QUERY)
        .await
        .and_then(|rows| {
            rows.first()
                .map(|row| format!("{}:{}", column(row, 0), column(row, 1)))
                .ok_or(DbError::NoRows(SERVER_INFO_QUERY))
        });

    result.unwrap_or_else(|e| {
        tracing::error!("Error getting server info: {e}");
        "Unknown".to_owned()
    })
}

#[cfg(test)]
mod tests;
