//! "Currently Watching" label, its editable field, and the static banner

use crate::constants::LABEL_CURRENTLY_WATCHING;
use crate::ui::components::text_input::TextInput;
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

pub struct WatchingPanel {
    field: TextInput,
    banner: String,
}

impl WatchingPanel {
    /// `initial` is the value loaded from disk; the banner never changes afterwards
    pub fn new(initial: Option<&str>, banner: impl Into<String>) -> Self {
        let mut field = TextInput::new("Now");
        if let Some(value) = initial {
            field.set_value(value);
        }
        Self {
            field,
            banner: banner.into(),
        }
    }

    pub fn field(&self) -> &TextInput {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut TextInput {
        &mut self.field
    }
}

impl Component for WatchingPanel {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.field.handle_key_events(key)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let [label_area, field_area, banner_area] = LayoutManager::watching_layout(rect);

        let label = Paragraph::new(LABEL_CURRENTLY_WATCHING)
            .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));
        f.render_widget(label, label_area);

        self.field.render(f, field_area);

        let banner = Paragraph::new(self.banner.as_str())
            .style(Style::default().fg(Color::Magenta).add_modifier(Modifier::ITALIC));
        f.render_widget(banner, banner_area);
    }

    fn on_focus(&mut self) {
        self.field.on_focus();
    }

    fn on_blur(&mut self) {
        self.field.on_blur();
    }
}
