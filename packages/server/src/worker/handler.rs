use std::{
    net::SocketAddr,
    num::NonZeroUsize,
};

use owo_colors::OwoColorize;
use relay_db::store::Store;
use relay_wire::chunk::{
    ChunkReader,
    ChunkWriter,
};
use tokio::net::TcpStream;

use super::command::{
    Command,
    Dispatcher,
};
use crate::error::CommandLoopError;

/// Serves one master until it closes. The stream is dropped (closed)
/// when this returns, whatever the outcome.
pub async fn run_command_loop<S: Store>(
    dispatcher: &Dispatcher<S>,
    mut stream: TcpStream,
    address: SocketAddr,
    read_buffer: NonZeroUsize,
) -> Result<(), CommandLoopError> {
    let (reader, writer) = stream.split();
    let mut reader = ChunkReader::with_capacity(reader, read_buffer);
    let mut writer = ChunkWriter::new(writer);

    loop {
        let Some(chunk) = reader
            .read_chunk()
            .await
            .map_err(CommandLoopError::Receive)?
        else {
            return Ok(());
        };

        let text = String::from_utf8_lossy(chunk);
        tracing::info!("{} Slave received command: {text}", address.bold());

        let response = dispatcher.respond(Command::parse(&text)).await;
        tracing::info!("{} Slave sending response: {response}", address.bold());

        writer
            .write_chunk(response.as_bytes())
            .await
            .map_err(CommandLoopError::Respond)?;
    }
}
