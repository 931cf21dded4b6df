use boot::{
    runner::{
        run_service,
        stop_on_interrupt,
    },
    setup::{
        environment::Environment,
        logging::install_tracing,
        runtime::create_runtime,
    },
};
use color_eyre::eyre;
use relay::{
    config::root::Config,
    forwarder::listener::ProxyServer,
    serve::ServeOptions,
    utils::shutdown_token::shutdown_token,
};

async fn entrypoint(config: Config) -> eyre::Result<()> {
    let server = ProxyServer::bind(
        &config.proxy.listen,
        config.proxy.target.clone(),
        ServeOptions::from_config(&config),
    )
    .await?;

    let (token, permit) = shutdown_token();
    let service = run_service("proxy", server.run(token));

    stop_on_interrupt(permit).await?;
    service.await?;

    Ok(())
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    let env = Environment::try_parse()?;
    let config = Config::locate(env.config_path.as_deref())?;
    install_tracing(&config.logging)?;

    let rt = create_runtime(config.runtime.threads)?;

    rt.block_on(entrypoint(config))
}

mod boot;
