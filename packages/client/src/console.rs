use std::{
    future::Future,
    io::{
        self,
        Write,
    },
    num::NonZeroUsize,
};

use relay::config::{
    database::DatabaseConfig,
    endpoint::{
        HostEndpoint,
        HostsConfig,
    },
};
use relay_db::{
    status::check_connection,
    store::Store,
};
use relay_wire::chunk::{
    ChunkReader,
    ChunkWriter,
};
use tokio::{
    io::{
        AsyncBufRead,
        AsyncBufReadExt,
        Lines,
    },
    net::TcpStream,
};

use crate::{
    command::MasterCommand,
    session::Session,
};

pub const BANNER: &str = "\
Master Control Program
Available commands:
- time: Get current time from slave
- status: Get slave status
- dbstatus: Check PostgreSQL status
- master: Switch to master node
- slave1: Switch to slave1 node
- slave2: Switch to slave2 node
- quit: Exit the program";

/// What the loop does after a line was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue(Session),
    Quit,
}

/// Operator side of the master: turns typed lines into switches,
/// database checks and one-shot sends, printing everything to `out`.
pub struct Console<'a, S, W> {
    hosts: &'a HostsConfig,
    database: &'a DatabaseConfig,
    store: S,
    read_buffer: NonZeroUsize,
    out: W,
}

impl<'a, S: Store, W: Write> Console<'a, S, W> {
    pub fn new(
        hosts: &'a HostsConfig,
        database: &'a DatabaseConfig,
        store: S,
        read_buffer: NonZeroUsize,
        out: W,
    ) -> Self {
        Self {
            hosts,
            database,
            store,
            read_buffer,
            out,
        }
    }

    pub fn banner(&mut self) -> io::Result<()> {
        writeln!(self.out, "{BANNER}")
    }

    pub fn prompt(&mut self, session: Session) -> io::Result<()> {
        write!(
            self.out,
            "\nEnter command [{}]: ",
            session.endpoint(self.hosts).address
        )?;
        self.out.flush()
    }

    pub fn farewell(&mut self) -> io::Result<()> {
        writeln!(self.out, "\nShutting down master...")
    }

    /// Opens a fresh connection, sends `command` verbatim and returns the
    /// single chunk received in reply. An empty string means the peer
    /// closed without answering.
    async fn exchange(
        &mut self,
        endpoint: &HostEndpoint,
        command: &str,
    ) -> io::Result<String> {
        let stream = TcpStream::connect(endpoint.as_pair()).await?;
        writeln!(self.out, "Connected to proxy at {endpoint}")?;

        let (reader, writer) = stream.into_split();
        writeln!(self.out, "Sending command: {command}")?;
        ChunkWriter::new(writer)
            .write_chunk(command.as_bytes())
            .await?;

        let mut reader = ChunkReader::with_capacity(reader, self.read_buffer);
        Ok(reader
            .read_chunk()
            .await?
            .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
            .unwrap_or_default())
    }

    /// Sends a command to the current host's proxy. Transport errors
    /// are reported to the operator, not returned.
    pub async fn send(&mut self, session: Session, command: &str) -> io::Result<()> {
        let endpoint = session.endpoint(self.hosts);
        match self.exchange(endpoint, command).await {
            Ok(response) => writeln!(self.out, "Received response: {response}"),
            Err(e) => {
                tracing::debug!("Send to {endpoint} failed: {e}");
                writeln!(self.out, "Error: {e}")
            }
        }
    }

    pub async fn db_status(&mut self, session: Session) -> io::Result<()> {
        let address = &session.endpoint(self.hosts).address;
        let report =
            check_connection(&self.store, &self.database.node_target(address)).await;
        writeln!(self.out, "{report}")
    }

    pub async fn handle(&mut self, session: Session, line: &str) -> io::Result<Step> {
        let line = line.trim_end_matches(&['\r', '\n'][..]);
        if line.is_empty() {
            return Ok(Step::Continue(session));
        }

        match MasterCommand::parse(line) {
            MasterCommand::Quit => return Ok(Step::Quit),
            MasterCommand::DbStatus => self.db_status(session).await?,
            MasterCommand::Switch(host) => {
                writeln!(
                    self.out,
                    "Switched to {host} node: {}",
                    host.endpoint(self.hosts).address
                )?;
                return Ok(Step::Continue(session.switched_to(host)));
            }
            MasterCommand::Send(command) => self.send(session, command).await?,
        }

        Ok(Step::Continue(session))
    }

    /// Prompt loop. Ends on `quit`, at the end of input, or as soon as
    /// `interrupt` resolves, even while a command is still in flight.
    pub async fn run<L, I>(&mut self, mut lines: Lines<L>, interrupt: I) -> io::Result<()>
    where
        L: AsyncBufRead + Unpin,
        I: Future<Output = ()>,
    {
        tokio::pin!(interrupt);
        let mut session = Session::default();

        self.banner()?;
        loop {
            self.prompt(session)?;
            let line = tokio::select! {
                biased;

                () = &mut interrupt => break,
                line = lines.next_line() => line?,
            };

            let Some(line) = line else {
                break;
            };

            let step = tokio::select! {
                biased;

                () = &mut interrupt => break,
                step = self.handle(session, &line) => step?,
            };

            match step {
                Step::Continue(next) => session = next,
                Step::Quit => return Ok(()),
            }
        }

        self.farewell()
    }

    pub fn into_output(self) -> W {
        self.out
    }
}
