use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::reducer::Action;

/// Whether the widget used a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Handled; the default action must not run
    Consumed,
    /// Left the widget unchanged
    Ignored,
}

/// Navigation action for `key`, if it is one of the widget's keys
///
/// Up, Down and Enter always belong to the widget, whatever the panel
/// shows, so the text field never sees them.
pub fn navigation_action(key: &KeyEvent) -> Option<Action> {
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return None;
    }
    match key.code {
        KeyCode::Down => Some(Action::HighlightNext),
        KeyCode::Up => Some(Action::HighlightPrev),
        KeyCode::Enter => Some(Action::Confirm),
        _ => None,
    }
}

/// Keys the text field would turn into a line break
///
/// The field is single-line, so these are swallowed. The text field breaks
/// the line on Enter whatever the modifiers.
pub fn is_line_break(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => true,
        KeyCode::Char('m') | KeyCode::Char('j') => key.modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Char('\n') | KeyCode::Char('\r') => true,
        _ => false,
    }
}
