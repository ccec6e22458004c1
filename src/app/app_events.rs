use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::app_state::App;
use crate::autocomplete::Action;

impl App {
    /// Handle one terminal event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            // Only process key press events (avoid duplicates)
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Paste(text) => self.search.handle_paste(&text),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            _ => {}
        }
        self.collect_picked();
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            _ => {
                self.search.handle_key(key);
            }
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.search.handle_click(mouse.column, mouse.row);
            }
            MouseEventKind::ScrollDown => self.search.dispatch(Action::HighlightNext),
            MouseEventKind::ScrollUp => self.search.dispatch(Action::HighlightPrev),
            _ => {}
        }
    }
}
