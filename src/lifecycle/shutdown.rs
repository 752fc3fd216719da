//! Shutdown coordination for the service.

use tokio::sync::watch;

/// Coordinator for graceful shutdown.
///
/// Backed by a watch channel so that a listener subscribing after the
/// trigger still observes it.
pub struct Shutdown {
    tx: watch::Sender<bool>,
}

/// Receiving half handed to the server.
pub struct ShutdownListener {
    rx: watch::Receiver<bool>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx }
    }

    pub fn subscribe(&self) -> ShutdownListener {
        ShutdownListener {
            rx: self.tx.subscribe(),
        }
    }

    /// Trigger the shutdown signal.
    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_triggered(&self) -> bool {
        *self.tx.borrow()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

impl ShutdownListener {
    /// Resolve once shutdown has been triggered or the coordinator dropped.
    pub async fn recv(mut self) {
        // An Err means every sender is gone, which also ends the wait.
        let _ = self.rx.wait_for(|triggered| *triggered).await;
    }
}
