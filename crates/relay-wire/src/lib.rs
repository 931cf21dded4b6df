//! Raw chunk transport shared by the master, the proxy and the slave.
//!
//! There is no framing on the wire: a single read of at most the
//! configured buffer size is one message.

pub mod chunk;
pub mod error;
pub mod messages;
pub mod traits;
