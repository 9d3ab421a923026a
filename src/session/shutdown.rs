//! Cooperative cancellation for the session loop

use std::sync::Arc;

use log::{debug, info};
use tokio::sync::watch;

/// Cancellation signal shared by `main` and the session loop.
///
/// Every suspension point in the loop races its work against
/// [`Shutdown::cancelled`]; once triggered the loop reaches its terminal
/// state and never advances again.
#[derive(Debug, Clone)]
pub struct Shutdown {
    tx: Arc<watch::Sender<bool>>,
    rx: watch::Receiver<bool>,
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, rx) = watch::channel(false);
        Self {
            tx: Arc::new(tx),
            rx,
        }
    }

    /// Request termination. Idempotent.
    pub fn trigger(&self) {
        if !self.tx.send_replace(true) {
            info!("Shutdown requested");
        }
    }

    /// Check if shutdown has been triggered (non-blocking)
    pub fn is_triggered(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once shutdown has been triggered
    pub async fn cancelled(&self) {
        let mut rx = self.rx.clone();
        // Sender lives in self, so this only returns once the flag is set
        let _ = rx.wait_for(|triggered| *triggered).await;
    }

    /// Trigger on the first Ctrl-C delivered to the process
    pub fn listen_for_ctrl_c(&self) {
        let shutdown = self.clone();
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    debug!("Received Ctrl-C");
                    shutdown.trigger();
                }
                Err(e) => debug!("Could not listen for Ctrl-C: {}", e),
            }
        });
    }
}
