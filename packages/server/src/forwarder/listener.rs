use std::{
    net::SocketAddr,
    sync::Arc,
};

use owo_colors::OwoColorize;
use tokio::net::TcpListener;

use super::handler::run_relay_session;
use crate::{
    config::endpoint::HostEndpoint,
    error::BindError,
    serve::{
        bind_listener,
        reject,
        ServeOptions,
    },
    utils::shutdown_token::ShutdownToken,
};

pub struct ProxyServer {
    listener: TcpListener,
    bound_on: SocketAddr,
    target: Arc<HostEndpoint>,
    options: ServeOptions,
}

impl ProxyServer {
    /// The target is fixed for the lifetime of the proxy.
    pub async fn bind(
        endpoint: &HostEndpoint,
        target: HostEndpoint,
        options: ServeOptions,
    ) -> Result<Self, BindError> {
        let listener = bind_listener(endpoint).await?;
        let bound_on = listener.local_addr().map_err(BindError::LocalAddr)?;

        Ok(Self {
            listener,
            bound_on,
            target: Arc::new(target),
            options,
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.bound_on
    }

    pub async fn run(self, mut token: ShutdownToken) {
        tracing::info!(
            "{} listening on {}",
            "proxy".bold().green(),
            self.bound_on.bold()
        );
        tracing::info!("Default slave at {}", self.target.bold());

        loop {
            let accepted = tokio::select! {
                biased;

                _ = token.wait_for_shutdown() => {
                    tracing::info!("Shutting down proxy...");
                    break;
                }

                accepted = self.listener.accept() => accepted,
            };

            let (stream, address) = match accepted {
                Ok(pair) => pair,
                Err(e) => {
                    tracing::error!("{} accept error: {e}", self.bound_on.bold());
                    continue;
                }
            };

            let Some(permit) = self.options.limiter.try_admit() else {
                reject(stream, address, &self.options.limiter);
                continue;
            };

            tracing::info!("{} Accepted connection", address.bold());

            let target = Arc::clone(&self.target);
            let read_buffer = self.options.read_buffer;
            tokio::spawn(async move {
                match run_relay_session(stream, address, &target, read_buffer).await {
                    Ok(end) => {
                        tracing::info!("{} session ended: {end:?}", address.bold());
                    }
                    Err(e) => {
                        tracing::error!("{} Error in proxy: {e}", address.bold());
                    }
                }

                drop(permit);
            });
        }
    }
}
