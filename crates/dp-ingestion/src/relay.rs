//! # Relay Sink
//!
//! Fire-and-forget forwarder of accepted payloads to the downstream
//! bulk-storage endpoint.
//!
//! Each forward is a single POST dispatched onto the tokio runtime, bounded
//! by a semaphore so a slow downstream cannot pile up unbounded tasks. The
//! caller gets a [`tokio::task::JoinHandle`] whose resolution is only used
//! for logging and tests; the ingestion path never awaits it. Failures are
//! classified, logged, and swallowed: at-most-once, best-effort delivery.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::domain::errors::RelayError;
use crate::ports::outbound::DataLakeClient;

/// Terminal outcome of one relay attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayOutcome {
    /// Downstream acknowledged with a 2xx status.
    Delivered { status: u16 },
    /// Downstream answered with a non-success status (4xx/5xx).
    Remote { status: u16 },
    /// The exchange never completed: connect failure, timeout, or other
    /// transport fault.
    Transport { reason: String },
    /// No worker permit could be obtained (sink shut down).
    Saturated,
}

/// Bounded fire-and-forget forwarder.
///
/// Thread-safe and cheap to share; holds the long-lived data-lake client
/// behind an `Arc` and a fixed pool of worker permits.
pub struct RelaySink<L: DataLakeClient + 'static> {
    client: Arc<L>,
    permits: Arc<Semaphore>,
}

impl<L: DataLakeClient + 'static> RelaySink<L> {
    /// Create a sink forwarding through `client` with at most
    /// `max_in_flight` concurrent relays.
    pub fn new(client: Arc<L>, max_in_flight: usize) -> Self {
        Self {
            client,
            permits: Arc::new(Semaphore::new(max_in_flight.max(1))),
        }
    }

    /// Dispatch one relay of `payload` without blocking the caller.
    ///
    /// The spawned task waits for a worker permit, performs the POST, and
    /// resolves to a [`RelayOutcome`]. Every failure path is caught and
    /// logged inside the task; nothing propagates.
    pub fn forward(&self, payload: Vec<u8>) -> JoinHandle<RelayOutcome> {
        let client = Arc::clone(&self.client);
        let permits = Arc::clone(&self.permits);

        tokio::spawn(async move {
            let _permit = match permits.acquire_owned().await {
                Ok(permit) => permit,
                Err(_) => {
                    warn!("relay dropped: worker pool closed");
                    return RelayOutcome::Saturated;
                }
            };

            let outcome = match client.push(&payload).await {
                Ok(status) if (200..300).contains(&status) => {
                    RelayOutcome::Delivered { status }
                }
                Ok(status) => RelayOutcome::Remote { status },
                Err(err) => RelayOutcome::Transport {
                    reason: err.to_string(),
                },
            };

            match &outcome {
                RelayOutcome::Delivered { status } => {
                    info!(status, bytes = payload.len(), "data lake relay finished");
                }
                RelayOutcome::Remote { status } => {
                    error!(status, "data lake rejected payload");
                }
                RelayOutcome::Transport { reason } => {
                    error!(%reason, "data lake relay transport failure");
                }
                RelayOutcome::Saturated => {}
            }

            outcome
        })
    }
}

// Manual impl: `L` itself need not be Clone.
impl<L: DataLakeClient + 'static> Clone for RelaySink<L> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            permits: Arc::clone(&self.permits),
        }
    }
}
