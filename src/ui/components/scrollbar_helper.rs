//! Scrollbar helper for bordered, scrollable panels.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Scrollbar state plus the geometry rules shared by scrollable panels.
///
/// The scrollbar sits on the right border of a bordered block, so the
/// content area keeps its full width.
pub struct ScrollbarHelper {
    state: ScrollbarState,
}

impl Default for ScrollbarHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollbarHelper {
    pub fn new() -> Self {
        Self {
            state: ScrollbarState::new(0),
        }
    }

    /// Update the scrollbar state with current content information.
    ///
    /// # Arguments
    /// * `total_lines` - Total number of lines in the content
    /// * `offset` - First visible line (0-based)
    /// * `viewport_height` - Number of lines that fit on screen
    pub fn update_state(&mut self, total_lines: usize, offset: usize, viewport_height: usize) {
        self.state = self
            .state
            .content_length(total_lines.saturating_sub(viewport_height))
            .viewport_content_length(viewport_height)
            .position(offset);
    }

    /// Check if a scrollbar is needed based on content size and available space.
    pub fn needs_scrollbar(total_lines: usize, available_height: usize) -> bool {
        total_lines > available_height
    }

    /// Scrollbar track for a bordered block, if the content overflows it.
    ///
    /// The track runs along the right border between the corners.
    pub fn scrollbar_area(rect: Rect, total_lines: usize) -> Option<Rect> {
        let available_height = rect.height.saturating_sub(2) as usize; // Exclude borders
        if !Self::needs_scrollbar(total_lines, available_height) || rect.width == 0 {
            return None;
        }

        Some(Rect {
            x: rect.x + rect.width - 1,
            y: rect.y + 1,
            width: 1,
            height: rect.height.saturating_sub(2),
        })
    }

    /// Render the scrollbar widget if a scrollbar area is provided.
    pub fn render(&mut self, f: &mut Frame, scrollbar_area: Option<Rect>) {
        if let Some(area) = scrollbar_area {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"))
                .track_symbol(Some("│"))
                .thumb_symbol("█")
                .style(Style::default().fg(Color::DarkGray))
                .thumb_style(Style::default().fg(Color::DarkGray));

            f.render_stateful_widget(scrollbar, area, &mut self.state);
        }
    }
}
