use std::{
    net::SocketAddr,
    num::NonZeroUsize,
};

use owo_colors::OwoColorize;
use relay_wire::messages::TOO_MANY_CONNECTIONS;
use tokio::net::{
    TcpListener,
    TcpStream,
};

use crate::{
    config::{
        endpoint::HostEndpoint,
        root::Config,
    },
    error::BindError,
    utils::{
        close::close_with_notice,
        limiter::ConnectionLimiter,
    },
};

/// Per-connection settings shared by the slave and the proxy listeners.
#[derive(Debug, Clone)]
pub struct ServeOptions {
    pub read_buffer: NonZeroUsize,
    pub limiter: ConnectionLimiter,
}

impl ServeOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            read_buffer: config.buffering.read,
            limiter: ConnectionLimiter::new(config.limits.max_connections),
        }
    }
}

pub async fn bind_listener(
    endpoint: &HostEndpoint,
) -> Result<TcpListener, BindError> {
    TcpListener::bind(endpoint.as_pair())
        .await
        .map_err(|source| BindError::Bind {
            endpoint: endpoint.clone(),
            source,
        })
}

/// Turns away a connection over the limit. The notice is delivered in
/// the background while fewer than `max_connections` notices are pending;
/// past that the socket is dropped right away.
pub fn reject(mut stream: TcpStream, address: SocketAddr, limiter: &ConnectionLimiter) {
    let Some(permit) = limiter.try_notify() else {
        tracing::error!("{} dropped: too many pending rejections", address.bold());
        return;
    };

    tracing::error!("{} rejected: connection limit reached", address.bold());
    tokio::spawn(async move {
        _ = close_with_notice(&mut stream, TOO_MANY_CONNECTIONS).await;
        drop(permit);
    });
}
