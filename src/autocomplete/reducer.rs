//! Autocomplete state machine
//!
//! `reduce` is pure: it takes the current state and one event and returns
//! the next state plus at most one effect for the caller to perform.

use super::autocomplete_state::{AutocompleteState, FetchState, is_searchable};
use crate::suggest::FetchError;
use crate::texture::Texture;

/// Events the widget reacts to
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The text field now holds this text
    QueryChanged(String),
    /// A fetch finished
    FetchResolved {
        request_id: u64,
        result: Result<Vec<Texture>, FetchError>,
    },
    /// Move the highlight down one row
    HighlightNext,
    /// Move the highlight up one row
    HighlightPrev,
    /// Commit the highlighted row
    Confirm,
    /// Commit the row at this index (pointer click)
    Pick(usize),
}

/// Work the caller must do after a transition
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Start a fetch for exactly this query
    Fetch { query: String, request_id: u64 },
    /// Hand the texture to the selection callback
    Select(Texture),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: AutocompleteState,
    pub effect: Option<Effect>,
}

impl Transition {
    fn unchanged(state: &AutocompleteState) -> Self {
        Self::to(state.clone())
    }

    fn to(state: AutocompleteState) -> Self {
        Self {
            state,
            effect: None,
        }
    }

    fn with_effect(state: AutocompleteState, effect: Effect) -> Self {
        Self {
            state,
            effect: Some(effect),
        }
    }
}

pub fn reduce(state: &AutocompleteState, action: Action) -> Transition {
    match action {
        Action::QueryChanged(query) => query_changed(state, query),
        Action::FetchResolved { request_id, result } => fetch_resolved(state, request_id, result),
        Action::HighlightNext => move_highlight(state, |index, last| (index + 1).min(last)),
        Action::HighlightPrev => move_highlight(state, |index, _| index.saturating_sub(1)),
        Action::Confirm => match state.highlight {
            Some(index) if state.panel_visible() => commit(state, index),
            _ => Transition::unchanged(state),
        },
        Action::Pick(index) => commit(state, index),
    }
}

fn query_changed(state: &AutocompleteState, query: String) -> Transition {
    if query == state.query {
        return Transition::unchanged(state);
    }

    if !is_searchable(&query) {
        return Transition::to(AutocompleteState {
            query,
            fetch: FetchState::Idle,
            highlight: None,
            pending_request: None,
            next_request_id: state.next_request_id,
        });
    }

    let request_id = state.next_request_id.wrapping_add(1);
    let effect = Effect::Fetch {
        query: query.clone(),
        request_id,
    };
    Transition::with_effect(
        AutocompleteState {
            query,
            fetch: FetchState::Loading,
            highlight: None,
            pending_request: Some(request_id),
            next_request_id: request_id,
        },
        effect,
    )
}

fn fetch_resolved(
    state: &AutocompleteState,
    request_id: u64,
    result: Result<Vec<Texture>, FetchError>,
) -> Transition {
    // Superseded or abandoned request
    if state.pending_request != Some(request_id) {
        return Transition::unchanged(state);
    }

    let fetch = match result {
        Ok(items) => FetchState::Ready(items),
        Err(e) => FetchState::Failed(e.to_string()),
    };
    Transition::to(AutocompleteState {
        fetch,
        highlight: None,
        pending_request: None,
        ..state.clone()
    })
}

/// Apply `step` to the highlight; `None` always lands on the first row
fn move_highlight(state: &AutocompleteState, step: impl Fn(usize, usize) -> usize) -> Transition {
    let len = state.results().len();
    if !state.panel_visible() || len == 0 {
        return Transition::unchanged(state);
    }

    let last = len - 1;
    let highlight = match state.highlight {
        Some(index) => step(index.min(last), last),
        None => 0,
    };
    Transition::to(AutocompleteState {
        highlight: Some(highlight),
        ..state.clone()
    })
}

fn commit(state: &AutocompleteState, index: usize) -> Transition {
    let Some(texture) = state.results().get(index).cloned() else {
        return Transition::unchanged(state);
    };

    Transition::with_effect(
        AutocompleteState {
            next_request_id: state.next_request_id,
            ..AutocompleteState::default()
        },
        Effect::Select(texture),
    )
}

#[cfg(test)]
#[path = "reducer_tests.rs"]
mod reducer_tests;
