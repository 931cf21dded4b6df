use std::{
    io,
    num::NonZeroUsize,
};

use crate::{
    error::{
        PumpError,
        PumpResult,
    },
    traits::{
        ComposeRead,
        ComposeWrite,
    },
};

/// Reads the stream one unframed chunk at a time.
pub struct ChunkReader<R> {
    buffer: Vec<u8>,
    reader: R,
}

pub struct ChunkWriter<W> {
    writer: W,
}

/// Outcome of moving a single chunk from one peer to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pumped {
    Forwarded(usize),
    Closed,
}

impl<R: ComposeRead> ChunkReader<R> {
    /// Reads at most `capacity` bytes. `None` means the peer closed
    /// its write half.
    pub async fn read_chunk(&mut self) -> io::Result<Option<&[u8]>> {
        let read = self.reader.read(&mut self.buffer).await?;
        if read == 0 {
            Ok(None)
        } else {
            Ok(Some(&self.buffer[..read]))
        }
    }
}

impl<R> ChunkReader<R> {
    pub fn with_capacity(reader: R, capacity: NonZeroUsize) -> Self {
        Self {
            buffer: vec![0; capacity.get()],
            reader,
        }
    }
}

impl<W: ComposeWrite> ChunkWriter<W> {
    pub async fn write_chunk(&mut self, chunk: &[u8]) -> io::Result<()> {
        self.writer.write_all(chunk).await?;
        self.writer.flush().await
    }
}

impl<W> ChunkWriter<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }
}

/// Moves exactly one chunk from `from` to `to`, calling `inspect` on it
/// before it is written.
pub async fn pump_once<R, W, F>(
    from: &mut ChunkReader<R>,
    to: &mut ChunkWriter<W>,
    inspect: F,
) -> PumpResult<Pumped>
where
    R: ComposeRead,
    W: ComposeWrite,
    F: FnOnce(&[u8]),
{
    let Some(chunk) = from.read_chunk().await.map_err(PumpError::Read)? else {
        return Ok(Pumped::Closed);
    };

    inspect(chunk);
    to.write_chunk(chunk)
        .await
        .map_err(PumpError::Write)?;

    Ok(Pumped::Forwarded(chunk.len()))
}
