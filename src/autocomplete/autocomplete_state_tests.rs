//! Tests for AutocompleteState and related types

use super::*;

fn state_with(query: &str, fetch: FetchState, highlight: Option<usize>) -> AutocompleteState {
    AutocompleteState {
        query: query.to_string(),
        fetch,
        highlight,
        pending_request: None,
        next_request_id: 0,
    }
}

mod length_gate_tests {
    use super::*;

    #[test]
    fn test_empty_query_not_searchable() {
        assert!(!is_searchable(""));
    }

    #[test]
    fn test_single_char_not_searchable() {
        assert!(!is_searchable("d"));
    }

    #[test]
    fn test_two_chars_searchable() {
        assert!(is_searchable("di"));
    }

    #[test]
    fn test_gate_counts_chars_not_bytes() {
        // One char, two bytes
        assert!(!is_searchable("é"));
        assert!(is_searchable("éé"));
    }

    #[test]
    fn test_whitespace_counts() {
        assert!(is_searchable("  "));
    }
}

mod phase_tests {
    use super::*;
    use crate::texture::Texture;

    #[test]
    fn test_new_state_is_idle() {
        let state = AutocompleteState::new();
        assert_eq!(state.phase(), Phase::Idle);
        assert!(!state.panel_visible());
        assert_eq!(state.highlight(), None);
        assert_eq!(state.query(), "");
    }

    #[test]
    fn test_short_query_is_idle_whatever_fetch_holds() {
        let state = state_with("d", FetchState::Ready(vec![Texture::new(1, "Diamond Ore")]), None);
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn test_loading_is_searching() {
        let state = state_with("dia", FetchState::Loading, None);
        assert_eq!(state.phase(), Phase::Searching);
        assert!(state.results().is_empty());
    }

    #[test]
    fn test_failed_is_error() {
        let state = state_with("dia", FetchState::Failed("boom".to_string()), None);
        assert_eq!(state.phase(), Phase::Error);
        assert!(state.results().is_empty());
    }

    #[test]
    fn test_ready_empty_is_results() {
        let state = state_with("dia", FetchState::Ready(Vec::new()), None);
        assert_eq!(state.phase(), Phase::Results);
        assert!(state.results().is_empty());
    }

    #[test]
    fn test_highlighted_returns_item() {
        let items = vec![Texture::new(1, "Diamond Ore"), Texture::new(2, "Dialga Skin")];
        let state = state_with("dia", FetchState::Ready(items), Some(1));
        assert_eq!(state.highlighted().map(|t| t.name.as_str()), Some("Dialga Skin"));
    }

    #[test]
    fn test_highlighted_none_without_results() {
        let state = state_with("dia", FetchState::Loading, Some(0));
        assert!(state.highlighted().is_none());
    }
}
