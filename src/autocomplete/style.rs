//! Suggestion panel styling
//!
//! One style, parameterized by the width available to the widget.

use ratatui::style::{Color, Modifier, Style};

use crate::config::{LayoutMode, StyleConfig};

pub const ACCENT: Color = Color::Cyan;

/// Row layout density
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Density {
    /// Marker, name and description only
    Compact,
    /// Adds a thumbnail label column and side padding
    Wide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelStyle {
    pub density: Density,
    /// Columns of padding inside the panel border, each side
    pub padding: u16,
    /// Width of the thumbnail label column; 0 for the marker only
    pub thumbnail_width: u16,
    /// Rows shown before the list scrolls
    pub max_rows: usize,
}

impl PanelStyle {
    pub fn compact() -> Self {
        Self {
            density: Density::Compact,
            padding: 0,
            thumbnail_width: 0,
            max_rows: 6,
        }
    }

    pub fn wide() -> Self {
        Self {
            density: Density::Wide,
            padding: 1,
            thumbnail_width: 22,
            max_rows: 8,
        }
    }

    /// Pick the style for a widget `width` columns wide
    pub fn for_width(width: u16, config: &StyleConfig) -> Self {
        match config.layout {
            LayoutMode::Compact => Self::compact(),
            LayoutMode::Wide => Self::wide(),
            LayoutMode::Auto if width >= config.wide_min_width => Self::wide(),
            LayoutMode::Auto => Self::compact(),
        }
    }

    pub fn name(&self) -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn description(&self) -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn thumbnail(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn highlighted_row(&self) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn notice(&self) -> Style {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_switches_at_breakpoint() {
        let config = StyleConfig::default();
        assert_eq!(PanelStyle::for_width(99, &config).density, Density::Compact);
        assert_eq!(PanelStyle::for_width(100, &config).density, Density::Wide);
    }

    #[test]
    fn test_auto_uses_configured_breakpoint() {
        let config = StyleConfig {
            layout: LayoutMode::Auto,
            wide_min_width: 60,
        };
        assert_eq!(PanelStyle::for_width(60, &config), PanelStyle::wide());
        assert_eq!(PanelStyle::for_width(59, &config), PanelStyle::compact());
    }

    #[test]
    fn test_forced_layouts_ignore_width() {
        let compact = StyleConfig {
            layout: LayoutMode::Compact,
            ..StyleConfig::default()
        };
        let wide = StyleConfig {
            layout: LayoutMode::Wide,
            ..StyleConfig::default()
        };
        assert_eq!(PanelStyle::for_width(300, &compact), PanelStyle::compact());
        assert_eq!(PanelStyle::for_width(20, &wide), PanelStyle::wide());
    }

    #[test]
    fn test_wide_has_thumbnail_column() {
        assert!(PanelStyle::wide().thumbnail_width > 0);
        assert_eq!(PanelStyle::compact().thumbnail_width, 0);
    }
}
