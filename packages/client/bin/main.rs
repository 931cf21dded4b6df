use std::{
    fmt::Display,
    future,
    io,
    num::NonZeroUsize,
    path::PathBuf,
    process,
};

use color_eyre::eyre;
use owo_colors::OwoColorize;
use relay::config::root::Config;
use relay_client::{
    cli_args::{
        CliArgs,
        CliSub,
        JournalAction,
    },
    console::Console,
    session::{
        HostName,
        Session,
    },
};
use relay_db::{
    journal::Journal,
    postgres::PgStore,
};
use tokio::{
    io::{
        AsyncBufReadExt,
        BufReader,
    },
    runtime::Builder,
    signal,
};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Debug, serde::Deserialize)]
struct EnvParams {
    workers: Option<NonZeroUsize>,
    config_path: Option<PathBuf>,
}

fn console(config: &Config) -> Console<'_, PgStore, io::Stdout> {
    let database = &config.database;
    Console::new(
        &config.hosts,
        database,
        PgStore::new(&database.user, &database.password),
        config.buffering.read,
        io::stdout(),
    )
}

async fn interactive(config: &Config) -> eyre::Result<()> {
    let lines = BufReader::new(tokio::io::stdin()).lines();
    let interrupt = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for the interrupt signal: {e}");
            future::pending::<()>().await;
        }
    };

    console(config)
        .run(lines, interrupt)
        .await
        .map_err(From::from)
}

async fn send(config: &Config, host: HostName, command: &str) -> eyre::Result<()> {
    console(config)
        .send(Session::on(host), command)
        .await
        .map_err(From::from)
}

async fn journal(config: &Config, action: JournalAction) -> eyre::Result<()> {
    let database = &config.database;
    let journal = Journal::new(
        PgStore::new(&database.user, &database.password),
        database.write_target(),
        database.read_target(),
    );

    println!("{}", journal.execute(action.into()).await);
    Ok(())
}

async fn async_main(args: CliArgs, config: Config) -> eyre::Result<()> {
    match args.sub.unwrap_or(CliSub::Interactive) {
        CliSub::Interactive => interactive(&config).await,
        CliSub::Send { host, command } => send(&config, host, &command).await,
        CliSub::Journal { action } => journal(&config, action).await,
    }
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    let params: EnvParams = match envy::prefixed("RELAY_").from_env() {
        Ok(p) => p,
        Err(e) => die("Failed to parse env params", e),
    };
    let args = CliArgs::parse();

    setup_tracing();
    let config_path = args.config.as_deref().or(params.config_path.as_deref());
    let config = match Config::locate(config_path) {
        Ok(c) => c,
        Err(e) => die("Failed to load config", format!("{e:#}")),
    };

    let res_rt = match args
        .workers
        .or(params.workers)
        .or(config.runtime.threads)
        .or(NonZeroUsize::new(num_cpus::get()))
        .map(NonZeroUsize::get)
    {
        Some(0 | 1) | None => Builder::new_current_thread(),

        Some(n) => {
            let mut b = Builder::new_multi_thread();
            b.worker_threads(n);
            b
        }
    }
    .enable_all()
    .build();

    match res_rt {
        Ok(rt) => rt.block_on(async_main(args, config)),
        Err(e) => die("Failed to create tokio runtime", e),
    }
}

fn die(display: impl Display, error: impl Display) -> ! {
    eprintln!("{} {}: {}", "!!".red().bold(), display.bold(), error);
    process::exit(1)
}

fn setup_tracing() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .without_time()
        .compact()
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        die("Failed to set default subscriber", e);
    }
}
