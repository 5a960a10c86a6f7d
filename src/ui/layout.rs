//! Layout management and calculations

use crate::constants::{BUTTON_ADD, BUTTON_REMOVE, BUTTON_SELECT};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of a bordered single-line field
pub const FIELD_HEIGHT: u16 = 3;
/// Label line + field + banner line
pub const WATCHING_PANEL_HEIGHT: u16 = FIELD_HEIGHT + 2;

/// Screen areas of the main window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowLayout {
    /// Outer bordered window including the title
    pub window: Rect,
    pub input: Rect,
    pub buttons: Rect,
    pub items: Rect,
    pub watching: Rect,
    pub status: Rect,
}

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Split the screen into the window (everything but the last line) and the status bar
    #[must_use]
    pub fn main_layout(area: Rect) -> WindowLayout {
        let window_height = area.height.saturating_sub(1);
        let window = Rect::new(area.x, area.y, area.width, window_height);
        let status = Rect::new(area.x, area.y + window_height, area.width, area.height.min(1));

        let inner = Rect::new(
            window.x.saturating_add(1),
            window.y.saturating_add(1),
            window.width.saturating_sub(2),
            window.height.saturating_sub(2),
        );

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(FIELD_HEIGHT),
                Constraint::Length(FIELD_HEIGHT),
                Constraint::Min(3),
                Constraint::Length(WATCHING_PANEL_HEIGHT),
            ])
            .split(inner);

        WindowLayout {
            window,
            input: rows[0],
            buttons: rows[1],
            items: rows[2],
            watching: rows[3],
            status,
        }
    }

    /// Lay the three buttons out left to right, each sized to its caption
    #[must_use]
    pub fn button_layout(area: Rect) -> [Rect; 3] {
        let width = |caption: &str| caption.chars().count() as u16 + 4; // borders + padding
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(width(BUTTON_ADD)),
                Constraint::Length(width(BUTTON_SELECT)),
                Constraint::Length(width(BUTTON_REMOVE)),
                Constraint::Min(0),
            ])
            .split(area);

        [chunks[0], chunks[1], chunks[2]]
    }

    /// Label line, field, banner line of the currently watching panel
    #[must_use]
    pub fn watching_layout(area: Rect) -> [Rect; 3] {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(FIELD_HEIGHT),
                Constraint::Length(1),
            ])
            .split(area);

        [chunks[0], chunks[1], chunks[2]]
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate a centered rectangle with percentage width and fixed line height
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(height_lines),
                Constraint::Min(0),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}
