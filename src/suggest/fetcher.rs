use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use super::provider::{FetchError, SuggestionProvider};
use super::worker::{FetchRequest, FetchResponse, spawn_worker};

/// UI-side handle to the suggestion worker
///
/// Dropping the handle closes the request channel, which stops the worker.
pub struct SuggestionFetcher {
    request_tx: Sender<FetchRequest>,
    response_rx: Receiver<FetchResponse>,
}

impl SuggestionFetcher {
    /// Start a worker thread for `provider`
    pub fn spawn(provider: Result<SuggestionProvider, FetchError>) -> Self {
        let (request_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();
        spawn_worker(provider, request_rx, response_tx);
        Self::from_channels(request_tx, response_rx)
    }

    /// Wrap existing channels; the caller plays the worker
    pub fn from_channels(
        request_tx: Sender<FetchRequest>,
        response_rx: Receiver<FetchResponse>,
    ) -> Self {
        Self {
            request_tx,
            response_rx,
        }
    }

    /// Queue a fetch for `query`
    ///
    /// Fails with [`FetchError::WorkerStopped`] if the worker has gone away.
    pub fn request(&self, query: &str, request_id: u64) -> Result<(), FetchError> {
        self.request_tx
            .send(FetchRequest {
                query: query.to_string(),
                request_id,
            })
            .map_err(|_| {
                log::warn!("Suggestion worker is gone; dropped request {}", request_id);
                FetchError::WorkerStopped
            })
    }

    /// Next completed fetch, if one is ready
    ///
    /// Fails once the worker has exited and every response has been read.
    pub fn try_recv(&self) -> Result<Option<FetchResponse>, FetchError> {
        match self.response_rx.try_recv() {
            Ok(response) => Ok(Some(response)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(FetchError::WorkerStopped),
        }
    }
}

#[cfg(test)]
#[path = "fetcher_tests.rs"]
mod fetcher_tests;
