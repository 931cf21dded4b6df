use std::io;

use relay_wire::error::PumpError;
use thiserror::Error;

use crate::config::endpoint::HostEndpoint;

#[derive(Debug, Error)]
pub enum BindError {
    #[error("failed to bind {endpoint}: {source}")]
    Bind {
        endpoint: HostEndpoint,
        #[source]
        source: io::Error,
    },

    #[error("failed to query bound address: {0}")]
    LocalAddr(#[source] io::Error),
}

/// Why a worker connection ended early.
#[derive(Debug, Error)]
pub enum CommandLoopError {
    #[error("failed to receive command: {0}")]
    Receive(#[source] io::Error),

    #[error("failed to send response: {0}")]
    Respond(#[source] io::Error),
}

/// Why a proxied session ended early.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("could not connect to slave at {target}: {source}")]
    Connect {
        target: HostEndpoint,
        #[source]
        source: io::Error,
    },

    #[error("master -> slave: {0}")]
    Upstream(#[source] PumpError),

    #[error("slave -> master: {0}")]
    Downstream(#[source] PumpError),
}
