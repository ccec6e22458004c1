//! Texture autocomplete widget
//!
//! A search field with a dropdown of suggestions fetched as the user types.
//! State transitions live in [`reduce`]; [`SearchBox`] performs their
//! effects and [`render_search_box`] draws the result.

mod autocomplete_events;
mod autocomplete_render;
mod autocomplete_state;
mod reducer;
mod search_box;
mod style;

pub use autocomplete_events::{KeyOutcome, navigation_action};
pub use autocomplete_render::{INPUT_HEIGHT, render_search_box};
pub use autocomplete_state::{AutocompleteState, FetchState, MIN_QUERY_LEN, Phase, is_searchable};
pub use reducer::{Action, Effect, Transition, reduce};
pub use search_box::{OnSelected, PLACEHOLDER, RowHitArea, SearchBox};
pub use style::{Density, PanelStyle};
