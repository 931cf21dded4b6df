/// Receive buffer used when nothing else is configured. Every command and
/// every response must fit into a single read of this size.
pub const DEFAULT_READ_BUFFER: usize = 4096;

/// Sent to a freshly accepted connection that exceeds the configured
/// connection limit, right before it is closed.
pub const TOO_MANY_CONNECTIONS: &str = "Error: Too many connections";

/// One-shot notification sent by the proxy when the slave can't be
/// reached. Only the host part of the address is reported.
pub fn slave_unreachable(host: &str) -> String {
    format!("Error: Could not connect to slave at {host}")
}
