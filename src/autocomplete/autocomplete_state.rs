use crate::texture::Texture;

/// Queries shorter than this (in characters) never reach the fetcher
pub const MIN_QUERY_LEN: usize = 2;

/// Result of the most recent fetch, as seen by the widget
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState {
    /// Nothing requested
    #[default]
    Idle,
    /// Waiting for the current request
    Loading,
    /// Fetch failed; holds the message to show
    Failed(String),
    /// Fetch succeeded, possibly with zero items
    Ready(Vec<Texture>),
}

/// Phase shown by the suggestion panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Query too short, panel hidden
    Idle,
    Searching,
    Error,
    Results,
}

/// Autocomplete widget state
///
/// Never mutated in place: [`super::reduce`] returns the next value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AutocompleteState {
    pub(super) query: String,
    pub(super) fetch: FetchState,
    /// `None` means no row is highlighted
    pub(super) highlight: Option<usize>,
    /// Request whose response will be accepted
    pub(super) pending_request: Option<u64>,
    pub(super) next_request_id: u64,
}

impl AutocompleteState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn fetch(&self) -> &FetchState {
        &self.fetch
    }

    pub fn highlight(&self) -> Option<usize> {
        self.highlight
    }

    pub fn pending_request(&self) -> Option<u64> {
        self.pending_request
    }

    /// Whether the query is long enough to search
    pub fn panel_visible(&self) -> bool {
        is_searchable(&self.query)
    }

    pub fn phase(&self) -> Phase {
        if !self.panel_visible() {
            return Phase::Idle;
        }
        match self.fetch {
            FetchState::Idle | FetchState::Loading => Phase::Searching,
            FetchState::Failed(_) => Phase::Error,
            FetchState::Ready(_) => Phase::Results,
        }
    }

    /// Current result list; empty unless a fetch has succeeded
    pub fn results(&self) -> &[Texture] {
        match &self.fetch {
            FetchState::Ready(items) => items,
            _ => &[],
        }
    }

    pub fn highlighted(&self) -> Option<&Texture> {
        self.highlight.and_then(|index| self.results().get(index))
    }
}

/// Length gate for triggering a fetch
pub fn is_searchable(query: &str) -> bool {
    query.chars().count() >= MIN_QUERY_LEN
}

#[cfg(test)]
#[path = "autocomplete_state_tests.rs"]
mod autocomplete_state_tests;
