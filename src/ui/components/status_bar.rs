//! Status bar component

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};
use std::path::Path;

/// One-line summary under the window
pub struct StatusBar;

impl StatusBar {
    /// Status line text: item count, data file and the main shortcuts
    #[must_use]
    pub fn text(item_count: usize, items_path: &Path) -> String {
        let noun = if item_count == 1 { "item" } else { "items" };
        format!(
            "{} {} in {} • Tab: next • F2: add • F3: random • F4: remove • F1: help • Esc: quit",
            item_count,
            noun,
            items_path.display()
        )
    }

    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, item_count: usize, items_path: &Path) {
        let status_bar = Paragraph::new(Self::text(item_count, items_path))
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));

        f.render_widget(status_bar, area);
    }
}
