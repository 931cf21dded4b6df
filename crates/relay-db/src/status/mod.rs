use std::fmt;

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

pub const VERSION_QUERY: &str = "SELECT version();";
pub const REPLICATION_QUERY: &str =
    "SELECT client_addr, state, sync_state FROM pg_stat_replication;";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replica {
    pub client: String,
    pub state: String,
    pub sync: String,
}

/// Server version plus the replicas currently streaming from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplicationReport {
    pub version: String,
    pub replicas: Vec<Replica>,
}

impl fmt::Display for ReplicationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PostgreSQL Version: {}", self.version)?;
        if self.replicas.is_empty() {
            return f.write_str("No active replications");
        }

        f.write_str("Replication Status:\n")?;
        for replica in &self.replicas {
            writeln!(
                f,
                "Client: {}, State: {}, Sync: {}",
                replica.client, replica.state, replica.sync
            )?;
        }

        Ok(())
    }
}

async fn server_version<S: Session>(session: &mut S) -> DbResult<String> {
    let rows = session.simple_query(VERSION_QUERY).await?;
    rows.first()
        .map(|row| column(row, 0).to_owned())
        .ok_or(DbError::NoRows(VERSION_QUERY))
}

pub async fn probe_replication<S: Store>(
    store: &S,
    target: &Target,
) -> DbResult<ReplicationReport> {
    let mut session = store.connect(target).await?;
    let version = server_version(&mut session).await?;
    let replicas = session
        .simple_query(REPLICATION_QUERY)
        .await?
        .iter()
        .map(|row| Replica {
            client: column(row, 0).to_owned(),
            state: column(row, 1).to_owned(),
            sync: column(row, 2).to_owned(),
        })
        .collect();

    Ok(ReplicationReport { version, replicas })
}

/// Text answer of the slave's `dbstatus` command. Never fails: database
/// errors are folded into the response.
pub async fn replication_status<S: Store>(store: &S, target: &Target) -> String {
    match probe_replication(store, target).await {
        Ok(report) => report.to_string(),
        Err(e) => {
            tracing::error!("dbstatus on {target} failed: {e}");
            format!("Database Error: {e}")
        }
    }
}

/// Connectivity check run by the master against the current host.
pub async fn check_connection<S: Store>(store: &S, target: &Target) -> String {
    let result = async {
        let mut session = store.connect(target).await?;
        server_version(&mut session).await
    }
    .await;

    match result {
        Ok(version) => {
            format!("PostgreSQL connection successful. Version: {version}")
        }
        Err(e) => format!("PostgreSQL connection failed: {e}"),
    }
}
