use std::fmt;

use clap::ValueEnum;
use relay::config::endpoint::{
    HostEndpoint,
    HostsConfig,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HostName {
    Master,
    Slave1,
    Slave2,
}

/// Operator state of the master. Only decides which host's proxy the
/// next command goes to; the proxy's own slave is configured separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub current: HostName,
}

impl HostName {
    pub fn parse(text: &str) -> Option<Self> {
        Some(match text.to_lowercase().as_str() {
            "master" => Self::Master,
            "slave1" => Self::Slave1,
            "slave2" => Self::Slave2,
            _ => return None,
        })
    }

    pub fn endpoint(self, hosts: &HostsConfig) -> &HostEndpoint {
        match self {
            Self::Master => &hosts.master,
            Self::Slave1 => &hosts.slave1,
            Self::Slave2 => &hosts.slave2,
        }
    }
}

impl fmt::Display for HostName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Master => "master",
            Self::Slave1 => "slave1",
            Self::Slave2 => "slave2",
        })
    }
}

impl Session {
    pub const fn on(host: HostName) -> Self {
        Self { current: host }
    }

    pub const fn switched_to(self, host: HostName) -> Self {
        Self { current: host }
    }

    pub fn endpoint(self, hosts: &HostsConfig) -> &HostEndpoint {
        self.current.endpoint(hosts)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self {
            current: HostName::Master,
        }
    }
}
