//! Database helpers shared by the slave and the master: replication
//! diagnostics and the message journal used by the chat gateway.

pub mod error;
pub mod journal;
pub mod memory;
pub mod postgres;
pub mod status;
pub mod store;
