use tokio::sync::oneshot;

struct Token;

/// Dropping the permit stops the listener holding the paired token.
pub struct ShutdownPermit {
    chan: Option<oneshot::Sender<Token>>,
}

pub struct ShutdownToken {
    chan: oneshot::Receiver<Token>,
}

impl ShutdownToken {
    #[inline]
    pub async fn wait_for_shutdown(&mut self) {
        _ = (&mut self.chan).await;
    }
}

#[inline]
pub fn shutdown_token() -> (ShutdownToken, ShutdownPermit) {
    let (tx, rx) = oneshot::channel();
    (
        ShutdownToken { chan: rx },
        ShutdownPermit { chan: Some(tx) },
    )
}

impl Drop for ShutdownPermit {
    fn drop(&mut self) {
        if let Some(chan) = self.chan.take() {
            _ = chan.send(Token);
        }
    }
}
