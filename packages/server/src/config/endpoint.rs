use std::fmt;

entity! {
    /// Host and port pair. Used both for listening and for connecting.
    #[derive(Clone, PartialEq, Eq)]
    struct HostEndpoint {
        address: String,
        port: u16,
    }

    struct WorkerConfig {
        listen: HostEndpoint,
    }

    struct ProxyConfig {
        listen: HostEndpoint,

        /// Slave every accepted master connection is forwarded to
        target: HostEndpoint,
    }

    /// Named hosts the master can switch between. `port` is the proxy
    /// control port on that host.
    struct HostsConfig {
        master: HostEndpoint,
        slave1: HostEndpoint,
        slave2: HostEndpoint,
    }
}

impl HostEndpoint {
    pub fn new(address: impl Into<String>, port: u16) -> Self {
        Self {
            address: address.into(),
            port,
        }
    }

    /// Form accepted by `TcpListener::bind` and `TcpStream::connect`.
    pub fn as_pair(&self) -> (&str, u16) {
        (&self.address, self.port)
    }
}

impl fmt::Display for HostEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.address, self.port)
    }
}
