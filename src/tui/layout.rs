// Panel layout system
// Tabs on top, one visible page, status bar at the bottom

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
};

/// Panel color scheme
pub struct PanelColors;

impl PanelColors {
    pub const BORDER: Color = Color::Rgb(64, 64, 64);
    pub const BORDER_ACTIVE: Color = Color::Rgb(58, 128, 200);
    pub const TEXT_PRIMARY: Color = Color::Rgb(240, 240, 240);
    pub const TEXT_MUTED: Color = Color::Rgb(120, 120, 120);
    pub const ACCENT: Color = Color::Rgb(58, 128, 200);
    pub const REAL_GREEN: Color = Color::Rgb(120, 180, 120);
    pub const FAKE_RED: Color = Color::Rgb(200, 80, 80);
    pub const NEUTRAL_GRAY: Color = Color::Rgb(140, 140, 140);
    pub const STATUS_ERROR: Color = Color::Rgb(200, 100, 100);
    pub const STATUS_OK: Color = Color::Rgb(140, 200, 140);

    pub fn border(active: bool) -> Style {
        if active {
            Style::default().fg(Self::BORDER_ACTIVE)
        } else {
            Style::default().fg(Self::BORDER)
        }
    }
}

/// Top-level panel areas
#[derive(Debug)]
pub struct PanelLayout {
    pub tabs: Rect,
    pub content: Rect,
    pub status_bar: Rect,
}

impl PanelLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Page tabs / positional indicator
                Constraint::Min(0),    // Visible page
                Constraint::Length(3), // Status bar
            ])
            .split(area);

        Self {
            tabs: chunks[0],
            content: chunks[1],
            status_bar: chunks[2],
        }
    }
}

/// Result page sub-areas: verdict headline, confidence split, keyword bars
#[derive(Debug)]
pub struct ResultLayout {
    pub headline: Rect,
    pub confidence: Rect,
    pub keywords: Rect,
}

impl ResultLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Verdict + timestamp
                Constraint::Length(5), // Confidence split
                Constraint::Min(0),    // Keyword contributions
            ])
            .split(area);

        Self {
            headline: chunks[0],
            confidence: chunks[1],
            keywords: chunks[2],
        }
    }
}
