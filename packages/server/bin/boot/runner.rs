use std::future::Future;

use color_eyre::eyre::{
    self,
    Context,
};
use owo_colors::OwoColorize;
use relay::utils::shutdown_token::ShutdownPermit;
use tokio::{
    signal,
    task::JoinHandle,
};

/// Runs the listener in the background and reports when it stops
pub fn run_service<F>(name: &'static str, fut: F) -> JoinHandle<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    tokio::spawn(async move {
        fut.await;
        tracing::info!("{} stopped", name.bold().green());
    })
}

/// Waits for an operator interrupt, then releases the permit so the
/// listeners stop accepting
pub async fn stop_on_interrupt(permit: ShutdownPermit) -> eyre::Result<()> {
    signal::ctrl_c()
        .await
        .wrap_err("failed to listen for the interrupt signal")?;
    drop(permit);

    Ok(())
}
