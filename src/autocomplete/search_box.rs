//! Search box component
//!
//! Couples the pure reducer with the text field, the fetcher and the
//! selection callback. All mutation happens here, one event at a time.

use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::ListState;
use tui_textarea::TextArea;

use super::autocomplete_events::{KeyOutcome, is_line_break, navigation_action};
use super::autocomplete_state::AutocompleteState;
use super::reducer::{Action, Effect, reduce};
use crate::config::StyleConfig;
use crate::suggest::SuggestionFetcher;
use crate::texture::Texture;

pub const PLACEHOLDER: &str = "Search textures...";

/// Callback invoked with each committed selection
pub type OnSelected = Box<dyn FnMut(&Texture)>;

/// Where the suggestion rows were last drawn, for click mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowHitArea {
    pub area: Rect,
    pub offset: usize,
    pub row_height: u16,
    pub row_count: usize,
}

impl RowHitArea {
    /// Result index under the given cell
    pub fn index_at(&self, column: u16, row: u16) -> Option<usize> {
        if self.row_height == 0 || !self.area.contains(Position::new(column, row)) {
            return None;
        }
        let index = self.offset + usize::from((row - self.area.y) / self.row_height);
        (index < self.row_count).then_some(index)
    }
}

fn create_search_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
    textarea.set_placeholder_text(PLACEHOLDER);
    textarea.set_placeholder_style(Style::default().fg(Color::DarkGray));
    textarea
}

pub struct SearchBox {
    textarea: TextArea<'static>,
    pub(super) state: AutocompleteState,
    fetcher: SuggestionFetcher,
    on_selected: OnSelected,
    pub(super) style: StyleConfig,
    pub(super) list_state: ListState,
    pub(super) hit_area: Option<RowHitArea>,
}

impl SearchBox {
    pub fn new(fetcher: SuggestionFetcher, style: StyleConfig, on_selected: OnSelected) -> Self {
        Self {
            textarea: create_search_textarea(),
            state: AutocompleteState::new(),
            fetcher,
            on_selected,
            style,
            list_state: ListState::default(),
            hit_area: None,
        }
    }

    pub fn state(&self) -> &AutocompleteState {
        &self.state
    }

    pub fn query(&self) -> &str {
        self.textarea
            .lines()
            .first()
            .map(|s| s.as_str())
            .unwrap_or("")
    }

    pub(super) fn textarea(&self) -> &TextArea<'static> {
        &self.textarea
    }

    /// Run `action` through the reducer and perform its effect
    pub fn dispatch(&mut self, action: Action) {
        let transition = reduce(&self.state, action);
        self.state = transition.state;

        match transition.effect {
            Some(Effect::Fetch { query, request_id }) => {
                if let Err(e) = self.fetcher.request(&query, request_id) {
                    self.dispatch(Action::FetchResolved {
                        request_id,
                        result: Err(e),
                    });
                }
            }
            Some(Effect::Select(texture)) => {
                log::debug!("Selected texture {:?} ({})", texture.name, texture.id);
                self.clear_text();
                self.hit_area = None;
                (self.on_selected)(&texture);
            }
            None => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        if let Some(action) = navigation_action(&key) {
            self.dispatch(action);
            return KeyOutcome::Consumed;
        }
        if is_line_break(&key) {
            return KeyOutcome::Consumed;
        }

        if self.textarea.input(key) {
            self.sync_query();
            KeyOutcome::Consumed
        } else {
            KeyOutcome::Ignored
        }
    }

    /// Insert pasted text, flattened to one line
    pub fn handle_paste(&mut self, text: &str) {
        let flattened: String = text
            .chars()
            .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
            .collect();
        self.textarea.insert_str(flattened);
        self.sync_query();
    }

    /// Commit the row under a click, if any
    pub fn handle_click(&mut self, column: u16, row: u16) -> bool {
        let Some(index) = self.hit_area.and_then(|hit| hit.index_at(column, row)) else {
            return false;
        };
        self.dispatch(Action::Pick(index));
        true
    }

    /// Feed completed fetches into the reducer
    ///
    /// Returns true if any response arrived.
    pub fn poll_fetches(&mut self) -> bool {
        let mut received = false;
        loop {
            let response = match self.fetcher.try_recv() {
                Ok(Some(response)) => response,
                Ok(None) => break,
                Err(e) => {
                    // Nothing will answer the pending request now
                    if let Some(request_id) = self.state.pending_request() {
                        self.dispatch(Action::FetchResolved {
                            request_id,
                            result: Err(e),
                        });
                        received = true;
                    }
                    break;
                }
            };
            received = true;
            if self.state.pending_request() != Some(response.request_id) {
                log::debug!("Dropping stale response for request {}", response.request_id);
            }
            self.dispatch(Action::FetchResolved {
                request_id: response.request_id,
                result: response.result,
            });
        }
        received
    }

    fn sync_query(&mut self) {
        let query = self.query().to_string();
        self.dispatch(Action::QueryChanged(query));
    }

    fn clear_text(&mut self) {
        self.textarea.select_all();
        self.textarea.cut();
    }
}

#[cfg(test)]
#[path = "search_box_tests.rs"]
mod search_box_tests;
