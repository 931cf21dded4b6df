use std::{
    fs,
    path::Path,
};

use color_eyre::eyre::{
    self,
    Context,
};

use super::{
    database::DatabaseConfig,
    endpoint::{
        HostsConfig,
        ProxyConfig,
        WorkerConfig,
    },
    logging::LoggingConfig,
    runtime::RuntimeConfig,
    serving::{
        BufferingConfig,
        LimitsConfig,
    },
};

entity! {
    struct Config {
        logging: LoggingConfig,

        #[serde(default)]
        runtime: RuntimeConfig,

        #[serde(default)]
        buffering: BufferingConfig,

        #[serde(default)]
        limits: LimitsConfig,

        worker: WorkerConfig,
        proxy: ProxyConfig,
        hosts: HostsConfig,
        database: DatabaseConfig,
    }
}

/// Locations tried when no explicit path is given, in order.
pub const SEARCH_PATHS: [&str; 2] = ["/etc/relay.toml", "./relay.toml"];

impl Config {
    /// Loads the exact `path` if given, otherwise the first readable and
    /// valid file out of [`SEARCH_PATHS`].
    pub fn locate(path: Option<&Path>) -> eyre::Result<Self> {
        if let Some(exact_path) = path {
            return Self::try_load(exact_path);
        }

        let mut tried = String::new();
        for candidate in SEARCH_PATHS.iter().map(Path::new) {
            match Self::try_load(candidate) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tried.push_str(&format!("\n - {}: {e:#}", candidate.display()))
                }
            }
        }

        eyre::bail!("no usable config found, tried:{tried}")
    }

    pub fn try_load(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading config from the {}", path.display());

        let contents = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read {}", path.display()))?;
        Self::try_parse(&contents)
    }

    pub fn try_parse(contents: &str) -> eyre::Result<Self> {
        toml::from_str(contents).wrap_err("failed to parse TOML config")
    }
}
