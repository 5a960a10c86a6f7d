//! Modal dialog component.
//!
//! Every command ends with a notice: green for a confirmation, red for a
//! rejected request. Help and logs are larger scrollable overlays. While a
//! dialog is visible it receives all keys.

use crate::constants::{DIALOG_TITLE_HELP, DIALOG_TITLE_INFO, DIALOG_TITLE_LOGS, DIALOG_TITLE_REJECTED};
use crate::logger::Logger;
use crate::ui::components::dialogs::system_dialogs;
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, style::Color, Frame};

#[derive(Default)]
pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub scroll_offset: usize,
    logger: Option<Logger>,
}

impl DialogComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = Some(logger);
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    fn scroll_up(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    fn scroll_down(&mut self, lines: usize) {
        // Clamped to the content on the next render
        self.scroll_offset = self.scroll_offset.saturating_add(lines);
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let scrollable = match &self.dialog_type {
            None => return Action::None,
            Some(DialogType::Info(_)) | Some(DialogType::Rejected(_)) => false,
            Some(DialogType::Help) | Some(DialogType::Logs) => true,
        };

        if !scrollable {
            return match key.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Action::HideDialog,
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::F(1) | KeyCode::F(12) => {
                return Action::HideDialog
            }
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(1),
            KeyCode::PageUp => self.scroll_up(10),
            KeyCode::PageDown => self.scroll_down(10),
            KeyCode::Home => self.scroll_offset = 0,
            KeyCode::End => self.scroll_offset = usize::MAX,
            _ => {}
        }
        Action::None
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.dialog_type = Some(dialog_type);
                self.scroll_offset = 0;
                Action::None
            }
            Action::HideDialog => {
                self.dialog_type = None;
                self.scroll_offset = 0;
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        match &self.dialog_type {
            None => {}
            Some(DialogType::Info(message)) => {
                system_dialogs::render_notice_dialog(f, rect, DIALOG_TITLE_INFO, message, Color::Green);
            }
            Some(DialogType::Rejected(message)) => {
                system_dialogs::render_notice_dialog(f, rect, DIALOG_TITLE_REJECTED, message, Color::Red);
            }
            Some(DialogType::Help) => {
                self.scroll_offset = system_dialogs::render_scrollable_dialog(
                    f,
                    rect,
                    DIALOG_TITLE_HELP,
                    system_dialogs::HELP_TEXT,
                    self.scroll_offset,
                );
            }
            Some(DialogType::Logs) => {
                let logs = self.logger.as_ref().map(Logger::get_logs).unwrap_or_default();
                self.scroll_offset =
                    system_dialogs::render_logs_dialog(f, rect, DIALOG_TITLE_LOGS, &logs, self.scroll_offset);
            }
        }
    }
}
