use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Area directly below `anchor`, kept inside `bounds`
///
/// Shares the anchor's horizontal extent. Height is clamped to the space
/// left under the anchor.
pub fn popup_below_anchor(anchor: Rect, bounds: Rect, height: u16) -> Rect {
    let popup_y = anchor.y.saturating_add(anchor.height);
    let space_below = bounds.bottom().saturating_sub(popup_y);

    Rect {
        x: anchor.x,
        y: popup_y.min(bounds.bottom()),
        width: anchor.width,
        height: height.min(space_below),
    }
}

pub fn inset_rect(area: Rect, horizontal_margin: u16, vertical_margin: u16) -> Rect {
    Rect {
        x: area.x + horizontal_margin.min(area.width / 2),
        y: area.y + vertical_margin.min(area.height / 2),
        width: area.width.saturating_sub(horizontal_margin * 2),
        height: area.height.saturating_sub(vertical_margin * 2),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
