pub mod config;
pub mod error;

pub mod forwarder;
pub mod serve;
pub mod worker;

pub mod utils;
