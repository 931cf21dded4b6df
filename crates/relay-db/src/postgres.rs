use tokio_postgres::{
    types::ToSql,
    Client,
    Config,
    NoTls,
    SimpleQueryMessage,
};

use crate::{
    error::DbResult,
    store::{
        Session,
        Store,
        Target,
        TextRow,
    },
};

/// PostgreSQL store reached over plain TCP with password auth.
#[derive(Debug, Clone)]
pub struct PgStore {
    user: String,
    password: String,
}

pub struct PgSession {
    client: Client,
}

impl PgStore {
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
        }
    }
}

impl Store for PgStore {
    type Session = PgSession;

    async fn connect(&self, target: &Target) -> DbResult<PgSession> {
        let mut config = Config::new();
        config
            .host(&target.host)
            .port(target.port)
            .user(&self.user)
            .password(&self.password)
            .dbname(&target.database);

        let (client, connection) = config.connect(NoTls).await?;
        let target = target.clone();
        tokio::spawn(async move {
            if let Err(e) = connection.await {
                tracing::error!("postgres connection to {target} failed: {e}");
            }
        });

        Ok(PgSession { client })
    }
}

impl Session for PgSession {
    async fn simple_query(&mut self, sql: &str) -> DbResult<Vec<TextRow>> {
        let messages = self.client.simple_query(sql).await?;
        let rows = messages
            .into_iter()
            .filter_map(|message| match message {
                SimpleQueryMessage::Row(row) => Some(
                    (0..row.len())
                        .map(|idx| row.get(idx).map(str::to_owned))
                        .collect(),
                ),
                _ => None,
            })
            .collect();

        Ok(rows)
    }

    async fn query(
        &mut self,
        sql: &str,
        params: &[&str],
    ) -> DbResult<Vec<TextRow>> {
        let params: Vec<&(dyn ToSql + Sync)> = params
            .iter()
            .map(|param| param as &(dyn ToSql + Sync))
            .collect();
        let rows = self.client.query(sql, &params).await?;

        let mut text_rows = Vec::with_capacity(rows.len());
        for row in &rows {
            let mut text_row = Vec::with_capacity(row.len());
            for idx in 0..row.len() {
                text_row.push(row.try_get::<_, Option<String>>(idx)?);
            }
            text_rows.push(text_row);
        }

        Ok(text_rows)
    }
}
