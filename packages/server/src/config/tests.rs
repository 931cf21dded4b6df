use std::num::NonZeroUsize;

use super::{
    endpoint::HostEndpoint,
    logging::LogLevel,
    root::Config,
};

const MINIMAL: &str = r#"
[logging]
level = "info"

[worker]
listen = { address = "0.0.0.0", port = 9001 }

[proxy]
listen = { address = "127.0.0.1", port = 9000 }
target = { address = "10.0.0.2", port = 9001 }

[hosts]
master = { address = "10.0.0.1", port = 9000 }
slave1 = { address = "10.0.0.2", port = 9000 }
slave2 = { address = "10.0.0.3", port = 9000 }

[database]
user = "replicator"
password = "secret"
port = 5432
write_port = 5000
read_port = 5001
"#;

#[test]
fn test_defaults() {
    let config = Config::try_parse(MINIMAL).unwrap();

    assert_eq!(config.logging.level, LogLevel::Info);
    assert_eq!(config.runtime.threads, None);
    assert_eq!(config.buffering.read.get(), 4096);
    assert_eq!(config.limits.max_connections, None);
    assert_eq!(config.database.host, "localhost");
    assert_eq!(config.database.name, "postgres");
}

#[test]
fn test_endpoints() {
    let config = Config::try_parse(MINIMAL).unwrap();

    assert_eq!(config.proxy.target, HostEndpoint::new("10.0.0.2", 9001));
    assert_eq!(config.proxy.listen.to_string(), "127.0.0.1:9000");
    assert_eq!(config.hosts.slave2.as_pair(), ("10.0.0.3", 9000));
}

#[test]
fn test_database_targets() {
    let config = Config::try_parse(MINIMAL).unwrap();
    let db = &config.database;

    assert_eq!(db.local_target().to_string(), "localhost:5432");
    assert_eq!(db.node_target("10.0.0.3").to_string(), "10.0.0.3:5432");
    assert_eq!(db.write_target().port, 5000);
    assert_eq!(db.read_target().port, 5001);
}

#[test]
fn test_overrides() {
    let contents = format!(
        "{MINIMAL}\n[runtime]\nthreads = 2\n\n[buffering]\nread = 512\n\n\
         [limits]\nmax_connections = 64\n"
    );
    let config = Config::try_parse(&contents).unwrap();

    assert_eq!(config.runtime.threads, NonZeroUsize::new(2));
    assert_eq!(config.buffering.read.get(), 512);
    assert_eq!(config.limits.max_connections, NonZeroUsize::new(64));
}

#[test]
fn test_missing_section_fails() {
    let contents = MINIMAL.replace("[database]", "[databse]");
    assert!(Config::try_parse(&contents).is_err());
}

#[test]
fn test_locate_exact_path() {
    let path = std::env::temp_dir()
        .join(format!("relay-config-{}.toml", std::process::id()));
    std::fs::write(&path, MINIMAL).unwrap();

    let config = Config::locate(Some(&path));
    std::fs::remove_file(&path).unwrap();

    assert_eq!(config.unwrap().worker.listen.port, 9001);
}

#[test]
fn test_locate_missing_path_fails() {
    let path = std::env::temp_dir().join("relay-config-does-not-exist.toml");
    assert!(Config::locate(Some(&path)).is_err());
}
