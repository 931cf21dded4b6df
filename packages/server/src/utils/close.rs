use std::time::Duration;

use tokio::{
    io::{
        AsyncReadExt,
        AsyncWriteExt,
    },
    net::TcpStream,
    time,
};

const LINGER: Duration = Duration::from_secs(1);

/// Sends a final notice and closes the stream without discarding it:
/// the write half is shut first and pending input is drained, so the
/// peer reads the notice before it observes the close.
pub async fn close_with_notice(
    stream: &mut TcpStream,
    notice: &str,
) -> std::io::Result<()> {
    stream.write_all(notice.as_bytes()).await?;
    stream.shutdown().await?;

    let mut sink = [0; 512];
    _ = time::timeout(LINGER, async {
        while let Ok(1..) = stream.read(&mut sink).await {}
    })
    .await;

    Ok(())
}
