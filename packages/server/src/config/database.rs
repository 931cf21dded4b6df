use relay_db::store::Target;

fn default_host() -> String {
    "localhost".to_owned()
}

fn default_name() -> String {
    "postgres".to_owned()
}

entity! {
    struct DatabaseConfig {
        /// Host the slave runs its diagnostics against
        #[serde(default = "default_host")]
        host: String,

        user: String,
        password: String,

        #[serde(default = "default_name")]
        name: String,

        /// Port of the instance colocated with every node
        port: u16,

        /// Pooler port routed to the primary
        write_port: u16,

        /// Pooler port routed to the replicas
        read_port: u16,
    }
}

impl DatabaseConfig {
    /// Instance the slave reports on.
    pub fn local_target(&self) -> Target {
        Target::new(self.host.clone(), self.port, self.name.clone())
    }

    /// Instance running on the given node.
    pub fn node_target(&self, address: &str) -> Target {
        Target::new(address, self.port, self.name.clone())
    }

    pub fn write_target(&self) -> Target {
        Target::new(self.host.clone(), self.write_port, self.name.clone())
    }

    pub fn read_target(&self) -> Target {
        Target::new(self.host.clone(), self.read_port, self.name.clone())
    }
}
