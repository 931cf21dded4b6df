use std::io;

use thiserror::Error;

pub type PumpResult<T> = Result<T, PumpError>;

/// Failure of one leg of the pump. The side is kept so the caller
/// can tell which peer broke the session.
#[derive(Debug, Error)]
pub enum PumpError {
    #[error("failed to read chunk: {0}")]
    Read(#[source] io::Error),

    #[error("failed to write chunk: {0}")]
    Write(#[source] io::Error),
}
