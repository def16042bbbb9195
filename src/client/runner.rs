//! Background exchange runner
//!
//! egui redraws on the UI thread and must never block on the network. The
//! runner owns a tokio runtime, performs each request there and hands the
//! outcome back over a channel that the UI drains once per frame.

use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::client::endpoint::{ChatEndpoint, ChatReply, ExchangeError};

/// Outcome of one exchange
pub type ExchangeOutcome = Result<ChatReply, ExchangeError>;

/// Runs endpoint calls off the UI thread
pub struct ExchangeRunner {
    runtime: tokio::runtime::Runtime,
    endpoint: Arc<dyn ChatEndpoint>,
    outcome_tx: UnboundedSender<ExchangeOutcome>,
    outcome_rx: UnboundedReceiver<ExchangeOutcome>,
}

impl ExchangeRunner {
    /// Create a runner with its own multi-threaded runtime
    pub fn new(endpoint: Arc<dyn ChatEndpoint>) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Ok(Self {
            runtime,
            endpoint,
            outcome_tx,
            outcome_rx,
        })
    }

    /// Send a message in the background
    ///
    /// `notify` runs after the outcome is queued, typically to request a
    /// repaint so the UI picks it up without waiting for input.
    pub fn dispatch<F>(&self, message: String, notify: F)
    where
        F: Fn() + Send + 'static,
    {
        let endpoint = Arc::clone(&self.endpoint);
        let tx = self.outcome_tx.clone();
        self.runtime.spawn(async move {
            let outcome = endpoint.send_message(&message).await;
            if tx.send(outcome).is_err() {
                tracing::warn!("Exchange finished after the UI went away");
            }
            notify();
        });
    }

    /// Next finished exchange, if one is ready
    pub fn try_next(&mut self) -> Option<ExchangeOutcome> {
        self.outcome_rx.try_recv().ok()
    }

    /// Block until the next exchange finishes
    #[cfg(test)]
    pub fn wait_next(&mut self, timeout: std::time::Duration) -> Option<ExchangeOutcome> {
        let rx = &mut self.outcome_rx;
        let _guard = self.runtime.enter();
        self.runtime
            .block_on(tokio::time::timeout(timeout, rx.recv()))
            .ok()
            .flatten()
    }
}
