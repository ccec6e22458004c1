use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::app_state::App;
use crate::autocomplete::{INPUT_HEIGHT, render_search_box};

const HELP_TEXT: &str = " ↑/↓ highlight · Enter pick · click to pick · Esc quit ";

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(INPUT_HEIGHT),
            Constraint::Length(1),
        ])
        .split(frame.area());
        let (title_area, body_area, help_area) = (layout[0], layout[1], layout[2]);

        self.render_title(frame, title_area);

        // Picked list sits under the input; the suggestion panel covers it
        let picked_area = Rect {
            y: body_area.y + INPUT_HEIGHT.min(body_area.height),
            height: body_area.height.saturating_sub(INPUT_HEIGHT),
            ..body_area
        };
        self.render_picked(frame, picked_area);
        render_search_box(&mut self.search, frame, body_area);

        frame.render_widget(
            Paragraph::new(HELP_TEXT).style(Style::default().fg(Color::DarkGray)),
            help_area,
        );
    }

    fn render_title(&self, frame: &mut Frame, area: Rect) {
        let title = Line::from(vec![
            Span::styled(" texsearch ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("({})", self.source_label),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(Paragraph::new(title), area);
    }

    fn render_picked(&self, frame: &mut Frame, area: Rect) {
        if area.height == 0 {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Picked ({}) ", self.picked.len()))
            .border_style(Style::default().fg(Color::DarkGray));

        if self.picked.is_empty() {
            let hint = Paragraph::new("Nothing picked yet")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(hint, area);
            return;
        }

        let items: Vec<ListItem> = self
            .picked
            .iter()
            .map(|texture| {
                ListItem::new(Line::from(vec![
                    Span::styled("✓ ", Style::default().fg(Color::Green)),
                    Span::raw(texture.name.as_str()),
                ]))
            })
            .collect();
        frame.render_widget(List::new(items).block(block), area);
    }
}
