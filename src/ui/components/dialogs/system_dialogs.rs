//! Notice, help and log dialogs

use super::common::{create_dialog_block, create_instructions_paragraph, shortcuts};
use crate::ui::components::scrollbar_helper::ScrollbarHelper;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

pub const HELP_TEXT: &str = r"
WATCH2GETHER
============

FIELDS AND BUTTONS
------------------
Tab / Shift+Tab   Move between the input field, the buttons
                  and the currently watching field
Enter             Input field: add the typed item
                  Button: press it
                  Currently watching field: remove that item
Space             Press the focused button

SHORTCUTS (from anywhere)
-------------------------
F2                Add Item
F3                Select Random Item
F4                Remove Selected Item
F1                Toggle this help
F12               Show logs
↑↓ PgUp PgDn      Scroll the item list
Ctrl+Home/End     Jump to the top/bottom of the item list
Esc               Close a dialog, or quit
Ctrl+C / Ctrl+Q   Quit

NOTES
-----
Remove uses the text of the currently watching field.
Select Random Item fills that field and saves it.
The list is saved after every add and remove.
";

/// Render a short modal message after a command
pub fn render_notice_dialog(f: &mut Frame, area: Rect, title: &str, message: &str, color: Color) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 7, area);
    f.render_widget(Clear, dialog_area);

    let block = create_dialog_block(title, color);
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let message_area = Rect::new(inner.x, inner.y + 1, inner.width, inner.height.saturating_sub(2));
    let message_paragraph = Paragraph::new(message)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(message_paragraph, message_area);

    let instructions_area = Rect::new(inner.x, inner.y + inner.height.saturating_sub(1), inner.width, 1);
    let instructions = create_instructions_paragraph(&[shortcuts::ENTER_DISMISS]);
    f.render_widget(instructions, instructions_area);
}

/// Render a large scrollable text dialog.
///
/// Returns the scroll offset clamped to the content, so callers can store it.
pub fn render_scrollable_dialog(f: &mut Frame, area: Rect, title: &str, content: &str, scroll_offset: usize) -> usize {
    let dialog_area = LayoutManager::centered_rect(80, 80, area);
    f.render_widget(Clear, dialog_area);

    let block = create_dialog_block(title, Color::Yellow);
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let content_area = Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), inner.height.saturating_sub(1));
    let total_lines = content.lines().count();
    let visible_height = content_area.height as usize;
    let max_scroll = total_lines.saturating_sub(visible_height);
    let clamped_offset = scroll_offset.min(max_scroll);

    let paragraph = Paragraph::new(content)
        .style(Style::default().fg(Color::Cyan))
        .scroll((u16::try_from(clamped_offset).unwrap_or(u16::MAX), 0));
    f.render_widget(paragraph, content_area);

    let mut scrollbar = ScrollbarHelper::new();
    scrollbar.update_state(total_lines, clamped_offset, visible_height);
    scrollbar.render(f, ScrollbarHelper::scrollbar_area(dialog_area, total_lines));

    let instructions_area = Rect::new(inner.x, inner.y + inner.height.saturating_sub(1), inner.width, 1);
    let instructions =
        create_instructions_paragraph(&[shortcuts::SCROLL, shortcuts::SEPARATOR, shortcuts::ESC_CLOSE]);
    f.render_widget(instructions, instructions_area);

    clamped_offset
}

/// Render the in-memory log, newest first
pub fn render_logs_dialog(f: &mut Frame, area: Rect, title: &str, logs: &[String], scroll_offset: usize) -> usize {
    let content = if logs.is_empty() {
        "No logs available".to_string()
    } else {
        logs.join("\n")
    };
    render_scrollable_dialog(f, area, title, &content, scroll_offset)
}
