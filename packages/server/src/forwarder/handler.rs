use std::{
    net::SocketAddr,
    num::NonZeroUsize,
};

use owo_colors::OwoColorize;
use relay_wire::{
    chunk::{
        pump_once,
        ChunkReader,
        ChunkWriter,
        Pumped,
    },
    messages::slave_unreachable,
};
use tokio::net::TcpStream;

use crate::{
    config::endpoint::HostEndpoint,
    error::RelayError,
    utils::close::close_with_notice,
};

/// How a proxied session ended when neither side failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    MasterClosed,
    SlaveClosed,
}

/// Owns both sockets of the session. They are closed when this returns,
/// on every path.
pub async fn run_relay_session(
    mut master: TcpStream,
    address: SocketAddr,
    target: &HostEndpoint,
    read_buffer: NonZeroUsize,
) -> Result<SessionEnd, RelayError> {
    let mut slave = match TcpStream::connect(target.as_pair()).await {
        Ok(stream) => stream,
        Err(source) => {
            let notice = slave_unreachable(&target.address);
            if let Err(e) = close_with_notice(&mut master, &notice).await {
                tracing::error!(
                    "{} failed to deliver connect error: {e}",
                    address.bold()
                );
            }

            return Err(RelayError::Connect {
                target: target.clone(),
                source,
            });
        }
    };

    tracing::info!("{} Connected to slave at {}", address.bold(), target.bold());

    let (master_reader, master_writer) = master.split();
    let (slave_reader, slave_writer) = slave.split();

    let mut from_master = ChunkReader::with_capacity(master_reader, read_buffer);
    let mut to_master = ChunkWriter::new(master_writer);
    let mut from_slave = ChunkReader::with_capacity(slave_reader, read_buffer);
    let mut to_slave = ChunkWriter::new(slave_writer);

    loop {
        let upstream = pump_once(&mut from_master, &mut to_slave, |chunk| {
            tracing::debug!(
                "{} Proxy forwarding to slave: {}",
                address.bold(),
                String::from_utf8_lossy(chunk)
            );
        })
        .await
        .map_err(RelayError::Upstream)?;
        if upstream == Pumped::Closed {
            return Ok(SessionEnd::MasterClosed);
        }

        let downstream = pump_once(&mut from_slave, &mut to_master, |chunk| {
            tracing::debug!(
                "{} Proxy forwarding to master: {}",
                address.bold(),
                String::from_utf8_lossy(chunk)
            );
        })
        .await
        .map_err(RelayError::Downstream)?;
        if downstream == Pumped::Closed {
            return Ok(SessionEnd::SlaveClosed);
        }
    }
}
