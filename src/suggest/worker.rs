//! Suggestion worker thread
//!
//! Runs fetches in a background thread so typing never blocks.
//! Receives requests via channel, queries the provider on a
//! single-threaded tokio runtime, and sends results back.

use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use super::provider::{FetchError, SuggestionProvider};
use crate::texture::Texture;

/// Request sent from the UI thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub query: String,
    pub request_id: u64,
}

/// Completed fetch sent back to the UI thread
#[derive(Debug, Clone, PartialEq)]
pub struct FetchResponse {
    pub request_id: u64,
    pub result: Result<Vec<Texture>, FetchError>,
}

/// Spawn the suggestion worker thread
///
/// The thread exits once every request sender has been dropped.
pub fn spawn_worker(
    provider: Result<SuggestionProvider, FetchError>,
    request_rx: Receiver<FetchRequest>,
    response_tx: Sender<FetchResponse>,
) {
    std::thread::spawn(move || {
        worker_loop(provider, request_rx, response_tx);
    });
}

/// Main worker loop - processes requests until the channel is closed
pub(super) fn worker_loop(
    provider: Result<SuggestionProvider, FetchError>,
    request_rx: Receiver<FetchRequest>,
    response_tx: Sender<FetchResponse>,
) {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            log::error!("Failed to start suggestion runtime: {}", e);
            return;
        }
    };

    while let Ok(request) = request_rx.recv() {
        let request = latest_request(request, &request_rx);

        let result = match &provider {
            Ok(provider) => {
                log::debug!(
                    "Fetching {:?} from {} (request {})",
                    request.query,
                    provider.label(),
                    request.request_id
                );
                runtime.block_on(provider.fetch(&request.query))
            }
            Err(e) => Err(e.clone()),
        };

        if let Err(e) = &result {
            log::debug!("Request {} failed: {}", request.request_id, e);
        }

        let response = FetchResponse {
            request_id: request.request_id,
            result,
        };
        if response_tx.send(response).is_err() {
            // UI side is gone
            break;
        }
    }

    log::debug!("Suggestion worker thread shutting down");
}

/// Skip queued requests that a newer one already supersedes
fn latest_request(first: FetchRequest, request_rx: &Receiver<FetchRequest>) -> FetchRequest {
    let mut latest = first;
    loop {
        match request_rx.try_recv() {
            Ok(newer) => {
                log::debug!(
                    "Skipping request {} superseded by {}",
                    latest.request_id,
                    newer.request_id
                );
                latest = newer;
            }
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => return latest,
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
