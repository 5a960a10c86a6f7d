//! The three command buttons

use crate::constants::{BUTTON_ADD, BUTTON_REMOVE, BUTTON_SELECT};
use crate::ui::core::{Action, Component, Focus};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Position, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

const BUTTONS: [(Focus, &str, &str); 3] = [
    (Focus::AddButton, BUTTON_ADD, "F2"),
    (Focus::SelectButton, BUTTON_SELECT, "F3"),
    (Focus::RemoveButton, BUTTON_REMOVE, "F4"),
];

/// Row of buttons: Add, Select Random, Remove
#[derive(Default)]
pub struct ButtonBar {
    focused: Option<Focus>,
    areas: [Rect; 3],
}

impl ButtonBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Highlight the button matching `focus`, or none
    pub fn set_focus(&mut self, focus: Focus) {
        self.focused = focus.button_action().map(|_| focus);
    }

    /// Action of the button drawn under (column, row), if any
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Action> {
        BUTTONS
            .iter()
            .zip(self.areas.iter())
            .find(|(_, area)| area.contains(Position::new(column, row)))
            .and_then(|((focus, _, _), _)| focus.button_action())
    }
}

impl Component for ButtonBar {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => self
                .focused
                .and_then(Focus::button_action)
                .unwrap_or(Action::None),
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.hit_test(mouse.column, mouse.row).unwrap_or(Action::None),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.areas = LayoutManager::button_layout(rect);

        for ((focus, caption, shortcut), area) in BUTTONS.iter().zip(self.areas.iter()) {
            let is_focused = self.focused == Some(*focus);
            let style = if is_focused {
                Style::default().fg(Color::Black).bg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Cyan)
            };

            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title_bottom(format!(" {} ", shortcut))
                .title_alignment(Alignment::Right)
                .style(Style::default().fg(if is_focused { Color::Yellow } else { Color::Gray }));

            let button = Paragraph::new(Line::styled(*caption, style))
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(button, *area);
        }
    }
}
