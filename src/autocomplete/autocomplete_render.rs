//! Search box rendering
//!
//! Draws the input field and, below it, the suggestion panel.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, HighlightSpacing, List, ListItem, ListState, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::autocomplete_state::{AutocompleteState, FetchState};
use super::search_box::{RowHitArea, SearchBox};
use super::style::{ACCENT, Density, PanelStyle};
use crate::texture::Texture;
use crate::widgets::popup;

pub const INPUT_HEIGHT: u16 = 3;
pub const LOADING_TEXT: &str = "Loading...";
pub const EMPTY_TEXT: &str = "No suggestions found";

const ROW_HEIGHT: u16 = 2;
const MESSAGE_PANEL_HEIGHT: u16 = 3;
const PANEL_BORDER_HEIGHT: u16 = 2;
const THUMBNAIL_MARKER: &str = "▣";
const HIGHLIGHT_SYMBOL: &str = "► ";

/// Render the search box into `area`
///
/// The input takes the top rows; the panel hangs below it and covers
/// whatever was drawn there.
pub fn render_search_box(search: &mut SearchBox, frame: &mut Frame, area: Rect) {
    let style = PanelStyle::for_width(area.width, &search.style);
    let input_area = Rect {
        height: INPUT_HEIGHT.min(area.height),
        ..area
    };
    render_input(search, frame, input_area);

    search.hit_area = None;
    if !search.state.panel_visible() {
        search.list_state = ListState::default();
        return;
    }

    let height = panel_height(&search.state, &style);
    let panel_area = popup::popup_below_anchor(input_area, area, height);
    if panel_area.height == 0 {
        return;
    }

    popup::clear_area(frame, panel_area);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Suggestions ")
        .border_style(Style::default().fg(ACCENT));
    let inner = popup::inset_rect(block.inner(panel_area), style.padding, 0);
    frame.render_widget(block, panel_area);

    match &search.state.fetch {
        FetchState::Idle | FetchState::Loading => {
            render_message(frame, inner, LOADING_TEXT.to_string(), style.notice());
        }
        FetchState::Failed(message) => {
            render_message(frame, inner, format!("Error: {}", message), style.error());
        }
        FetchState::Ready(items) if items.is_empty() => {
            render_message(frame, inner, EMPTY_TEXT.to_string(), style.notice());
        }
        FetchState::Ready(items) => {
            let rows: Vec<ListItem> = items
                .iter()
                .map(|texture| suggestion_item(texture, &style))
                .collect();
            let list = List::new(rows)
                .highlight_style(style.highlighted_row())
                .highlight_symbol(HIGHLIGHT_SYMBOL)
                .highlight_spacing(HighlightSpacing::Always);

            search.list_state.select(search.state.highlight);
            frame.render_stateful_widget(list, inner, &mut search.list_state);

            search.hit_area = Some(RowHitArea {
                area: inner,
                offset: search.list_state.offset(),
                row_height: ROW_HEIGHT,
                row_count: items.len(),
            });
        }
    }
}

fn render_input(search: &SearchBox, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Texture ")
        .border_style(Style::default().fg(ACCENT));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(search.textarea(), inner);
}

fn render_message(frame: &mut Frame, area: Rect, text: String, style: Style) {
    frame.render_widget(Paragraph::new(text).style(style), area);
}

fn panel_height(state: &AutocompleteState, style: &PanelStyle) -> u16 {
    match state.results().len() {
        0 => MESSAGE_PANEL_HEIGHT,
        len => {
            let rows = len.min(style.max_rows) as u16;
            rows * ROW_HEIGHT + PANEL_BORDER_HEIGHT
        }
    }
}

/// Two-line row: thumbnail and name, then the shortened description
fn suggestion_item<'a>(texture: &'a Texture, style: &PanelStyle) -> ListItem<'a> {
    let (thumbnail, gutter) = match style.density {
        Density::Compact => (format!("{} ", THUMBNAIL_MARKER), "  ".to_string()),
        Density::Wide => {
            let width = usize::from(style.thumbnail_width);
            let label = format!("{} {}", THUMBNAIL_MARKER, texture.thumbnail_label());
            (
                format!("{} ", fit_width(&label, width.saturating_sub(1))),
                " ".repeat(width),
            )
        }
    };

    ListItem::new(vec![
        Line::from(vec![
            Span::styled(thumbnail, style.thumbnail()),
            Span::styled(texture.name.as_str(), style.name()),
        ]),
        Line::from(vec![
            Span::raw(gutter),
            Span::styled(texture.short_description(), style.description()),
        ]),
    ])
}

/// Pad or cut `text` to exactly `width` display columns
///
/// Cut text ends in `…`.
pub(crate) fn fit_width(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width <= width {
        return format!("{}{}", text, " ".repeat(width - text_width));
    }
    if width == 0 {
        return String::new();
    }

    let mut fitted = String::new();
    let mut used = 0;
    for c in text.chars() {
        let char_width = c.width().unwrap_or(0);
        if used + char_width + 1 > width {
            break;
        }
        fitted.push(c);
        used += char_width;
    }
    fitted.push('…');
    used += 1;
    fitted.push_str(&" ".repeat(width.saturating_sub(used)));
    fitted
}

#[cfg(test)]
#[path = "autocomplete_render_tests.rs"]
mod autocomplete_render_tests;
