use rstest::rstest;

use super::{
    Journal,
    JournalCommand,
    Role,
    CREATE_TABLE_QUERY,
    INSERT_QUERY,
    RECENT_QUERY,
    SERVER_INFO_QUERY,
};
use crate::{
    memory::MemoryStore,
    store::{
        Target,
        TextRow,
    },
};

const WRITE_PORT: u16 = 5000;
const READ_PORT: u16 = 5001;

fn row(cols: &[Option<&str>]) -> TextRow {
    cols.iter().map(|c| c.map(str::to_owned)).collect()
}

fn journal(store: MemoryStore) -> Journal<MemoryStore> {
    Journal::new(
        store,
        Target::new("db.local", WRITE_PORT, "relay"),
        Target::new("db.local", READ_PORT, "relay"),
    )
}

fn with_server_info(store: MemoryStore) -> MemoryStore {
    store.with_rows(
        SERVER_INFO_QUERY,
        vec![row(&[Some("10.0.0.1/32"), Some("5432")])],
    )
}

#[test]
fn test_admin_uses_primary() {
    let journal = journal(MemoryStore::default());

    assert_eq!(journal.target(Role::Admin).port, WRITE_PORT);
    assert_eq!(journal.target(Role::Write).port, WRITE_PORT);
    assert_eq!(journal.target(Role::Read).port, READ_PORT);
}

#[tokio::test]
async fn test_ping() {
    let reply = journal(MemoryStore::default())
        .execute(JournalCommand::Ping)
        .await;
    assert_eq!(reply, "Pong! Bot is working.");
}

#[tokio::test]
async fn test_create_table() {
    let store = MemoryStore::default().with_rows(CREATE_TABLE_QUERY, vec![]);
    let reply = journal(store).execute(JournalCommand::CreateTable).await;

    assert_eq!(reply, "✅ Table 'discord_messages' created successfully!");
}

#[tokio::test]
async fn test_write() {
    let store = with_server_info(MemoryStore::default())
        .with_rows(INSERT_QUERY, vec![row(&[Some("42")])]);
    let reply = journal(store)
        .execute(JournalCommand::Write("hello".to_owned()))
        .await;

    assert_eq!(
        reply,
        "✅ Message successfully written to master database with ID: 42\n\
         Server: 10.0.0.1/32:5432"
    );
}

#[tokio::test]
async fn test_write_without_server_info() {
    let store = MemoryStore::default()
        .with_failure(SERVER_INFO_QUERY, "function does not exist")
        .with_rows(INSERT_QUERY, vec![row(&[Some("1")])]);
    let reply = journal(store)
        .execute(JournalCommand::Write("hello".to_owned()))
        .await;

    assert!(reply.ends_with("Server: Unknown"), "{reply}");
}

#[tokio::test]
async fn test_read_lists_messages() {
    let store = with_server_info(MemoryStore::default()).with_rows(
        RECENT_QUERY,
        vec![
            row(&[Some("2"), Some("second"), Some("2024-05-01 10:00:01"), Some("10.0.0.1/32:5432")]),
            row(&[Some("1"), Some("first"), Some("2024-05-01 10:00:00"), None]),
        ],
    );
    let reply = journal(store).execute(JournalCommand::Read).await;

    assert_eq!(
        reply,
        "📚 Last 10 messages (read from 10.0.0.1/32:5432):\n\n\
         ID: 2 | Message: second | Written at: 2024-05-01 10:00:01 | Written by: 10.0.0.1/32:5432\n\
         ID: 1 | Message: first | Written at: 2024-05-01 10:00:00 | Written by: None"
    );
}

#[tokio::test]
async fn test_read_empty() {
    let store = with_server_info(MemoryStore::default()).with_rows(RECENT_QUERY, vec![]);
    let reply = journal(store).execute(JournalCommand::Read).await;

    assert_eq!(
        reply,
        "No messages found in the database.\nRead from: 10.0.0.1/32:5432"
    );
}

#[rstest]
#[case(
    MemoryStore::default().refusing(READ_PORT),
    JournalCommand::Read,
    "Failed to connect to the slave database."
)]
#[case(
    MemoryStore::default().refusing(WRITE_PORT),
    JournalCommand::Write("x".to_owned()),
    "Failed to connect to the master database."
)]
#[case(
    MemoryStore::default().refusing(WRITE_PORT),
    JournalCommand::CreateTable,
    "Failed to connect to the master database."
)]
#[case(
    with_server_info(MemoryStore::default()).with_failure(RECENT_QUERY, "relation \"discord_messages\" does not exist"),
    JournalCommand::Read,
    "❌ Error reading from database: relation \"discord_messages\" does not exist"
)]
#[case(
    MemoryStore::default().with_failure(CREATE_TABLE_QUERY, "permission denied for schema public"),
    JournalCommand::CreateTable,
    "❌ Error creating table: permission denied for schema public"
)]
#[tokio::test]
async fn test_failures(
    #[case] store: MemoryStore,
    #[case] command: JournalCommand,
    #[case] expected: &str,
) {
    assert_eq!(journal(store).execute(command).await, expected);
}
