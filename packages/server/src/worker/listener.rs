use std::{
    net::SocketAddr,
    sync::Arc,
};

use owo_colors::OwoColorize;
use relay_db::store::Store;
use tokio::net::TcpListener;

use super::{
    command::Dispatcher,
    handler::run_command_loop,
};
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

pub struct WorkerServer<S> {
    listener: TcpListener,
    bound_on: SocketAddr,
    dispatcher: Arc<Dispatcher<S>>,
    options: ServeOptions,
}

impl<S: Store + 'static> WorkerServer<S> {
    pub async fn bind(
        endpoint: &HostEndpoint,
        dispatcher: Dispatcher<S>,
        options: ServeOptions,
    ) -> Result<Self, BindError> {
        let listener = bind_listener(endpoint).await?;
        let bound_on = listener.local_addr().map_err(BindError::LocalAddr)?;

        Ok(Self {
            listener,
            bound_on,
            dispatcher: Arc::new(dispatcher),
            options,
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.bound_on
    }

    /// Accepts until the token fires. The listening socket is released
    /// on return; connections in flight keep running on their own.
    pub async fn run(self, mut token: ShutdownToken) {
        tracing::info!(
            "{} listening on {}",
            "slave".bold().green(),
            self.bound_on.bold()
        );

        loop {
            let accepted = tokio::select! {
                biased;

                _ = token.wait_for_shutdown() => {
                    tracing::info!("Shutting down slave...");
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

            tracing::info!("{} Received connection", address.bold());

            let dispatcher = Arc::clone(&self.dispatcher);
            let read_buffer = self.options.read_buffer;
            tokio::spawn(async move {
                let result =
                    run_command_loop(&dispatcher, stream, address, read_buffer)
                        .await;
                match result {
                    Ok(()) => {
                        tracing::info!("{} disconnected", address.bold());
                    }
                    Err(e) => {
                        tracing::error!("{} Error in slave: {e}", address.bold());
                    }
                }

                drop(permit);
            });
        }
    }
}
