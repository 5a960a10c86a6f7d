use crate::config::UiConfig;
use crate::constants::{
    FIELD_NEW_ITEM, NOTICE_ADD_REJECTED, NOTICE_ITEM_ADDED, NOTICE_ITEM_REMOVED, NOTICE_ITEM_SELECTED,
    NOTICE_NOTHING_TO_SELECT, NOTICE_REMOVE_REJECTED,
};
use crate::logger::Logger;
use crate::selection::SelectionError;
use crate::ui::components::{ButtonBar, DialogComponent, ItemView, StatusBar, TextInput, WatchingPanel};
use crate::ui::core::{
    actions::{Action, DialogType, Focus},
    event_handler::EventType,
    Component,
};
use crate::ui::layout::LayoutManager;
use crate::watchlist::Watchlist;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use log::info;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders},
    Frame,
};

/// The main window.
///
/// Owns the watch list and every widget. Key and mouse events become
/// [`Action`]s, components consume the ones they understand, and the
/// commands left over run against the [`Watchlist`] here. Each command
/// answers with a notice dialog.
pub struct AppComponent {
    // Component composition
    input: TextInput,
    buttons: ButtonBar,
    item_view: ItemView,
    watching: WatchingPanel,
    dialog: DialogComponent,

    // Application state
    watchlist: Watchlist,
    ui_config: UiConfig,
    focus: Focus,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(watchlist: Watchlist, ui_config: UiConfig, logger: Logger) -> Self {
        let watching = WatchingPanel::new(watchlist.watching().get(), ui_config.banner.clone());
        let mut dialog = DialogComponent::new();
        dialog.set_logger(logger);

        let mut app = Self {
            input: TextInput::new(FIELD_NEW_ITEM),
            buttons: ButtonBar::new(),
            item_view: ItemView::new(),
            watching,
            dialog,
            watchlist,
            ui_config,
            focus: Focus::default(),
            should_quit: false,
        };
        app.set_focus(Focus::default());
        app.sync_component_data();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn watchlist(&self) -> &Watchlist {
        &self.watchlist
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn input_text(&self) -> &str {
        self.input.value()
    }

    /// Text of the currently watching field, which may differ from the saved value
    pub fn watching_text(&self) -> &str {
        self.watching.field().value()
    }

    /// Content of the read-only item view
    pub fn items_text(&self) -> &str {
        self.item_view.text()
    }

    pub fn dialog(&self) -> Option<&DialogType> {
        self.dialog.dialog_type.as_ref()
    }

    pub fn mouse_enabled(&self) -> bool {
        self.ui_config.mouse_enabled
    }

    /// Push the watch list into the item view
    fn sync_component_data(&mut self) {
        self.item_view.set_items(self.watchlist.items().snapshot());
    }

    fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        if focus == Focus::Input {
            self.input.on_focus();
        } else {
            self.input.on_blur();
        }
        if focus == Focus::Watching {
            self.watching.on_focus();
        } else {
            self.watching.on_blur();
        }
        self.buttons.set_focus(focus);
    }

    /// Keys that work regardless of which widget has focus
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') if ctrl => Action::Quit,
            KeyCode::Esc => Action::Quit,
            KeyCode::Tab => Action::FocusNext,
            KeyCode::BackTab => Action::FocusPrevious,
            KeyCode::F(1) => Action::ShowDialog(DialogType::Help),
            KeyCode::F(12) => Action::ShowDialog(DialogType::Logs),
            KeyCode::F(2) => Action::AddItem,
            KeyCode::F(3) => Action::SelectRandom,
            KeyCode::F(4) => Action::RemoveItem,
            KeyCode::Up => Action::ScrollUp,
            KeyCode::Down => Action::ScrollDown,
            KeyCode::PageUp => Action::PageUp,
            KeyCode::PageDown => Action::PageDown,
            KeyCode::Home if ctrl => Action::ScrollToTop,
            KeyCode::End if ctrl => Action::ScrollToBottom,
            _ => Action::None,
        }
    }

    /// Keys for the focused widget
    fn handle_focused_key(&mut self, key: KeyEvent) -> Action {
        match self.focus {
            Focus::Input if key.code == KeyCode::Enter => Action::AddItem,
            Focus::Input => self.input.handle_key_events(key),
            Focus::Watching if key.code == KeyCode::Enter => Action::RemoveItem,
            Focus::Watching => self.watching.handle_key_events(key),
            Focus::AddButton | Focus::SelectButton | Focus::RemoveButton => self.buttons.handle_key_events(key),
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Action {
        if !self.ui_config.mouse_enabled || self.dialog.is_visible() {
            return Action::None;
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let button_action = self.buttons.handle_mouse_events(mouse);
                if !matches!(button_action, Action::None) {
                    button_action
                } else if self.input.contains(mouse.column, mouse.row) {
                    Action::SetFocus(Focus::Input)
                } else if self.watching.field().contains(mouse.column, mouse.row) {
                    Action::SetFocus(Focus::Watching)
                } else {
                    Action::None
                }
            }
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => self.item_view.handle_mouse_events(mouse),
            _ => Action::None,
        }
    }

    /// Handle app-level actions that require business logic
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                info!("Quitting");
                self.should_quit = true;
                Action::None
            }
            Action::FocusNext => {
                self.set_focus(self.focus.next());
                Action::None
            }
            Action::FocusPrevious => {
                self.set_focus(self.focus.previous());
                Action::None
            }
            Action::SetFocus(focus) => {
                self.set_focus(focus);
                Action::None
            }
            Action::AddItem => self.add_item(),
            Action::SelectRandom => self.select_random(),
            Action::RemoveItem => self.remove_item(),
            // Everything else was meant for a component
            _ => Action::None,
        }
    }

    fn add_item(&mut self) -> Action {
        match self.watchlist.add_item(self.input.value()) {
            Ok(item) => {
                self.input.clear();
                self.sync_component_data();
                Action::ShowDialog(DialogType::Info(format!("{}: {}", NOTICE_ITEM_ADDED, item)))
            }
            Err(e) => {
                info!("Add rejected: {}", e);
                Action::ShowDialog(DialogType::Rejected(NOTICE_ADD_REJECTED.to_string()))
            }
        }
    }

    fn select_random(&mut self) -> Action {
        match self.watchlist.select_random(&mut rand::thread_rng()) {
            Ok(item) => {
                self.watching.field_mut().set_value(&item);
                Action::ShowDialog(DialogType::Info(format!("{}: {}", NOTICE_ITEM_SELECTED, item)))
            }
            Err(SelectionError::EmptyList) => {
                info!("Select rejected: list is empty");
                Action::ShowDialog(DialogType::Rejected(NOTICE_NOTHING_TO_SELECT.to_string()))
            }
        }
    }

    fn remove_item(&mut self) -> Action {
        let target = self.watching.field().value().to_string();
        match self.watchlist.remove_item(&target) {
            Ok(item) => {
                self.sync_component_data();
                Action::ShowDialog(DialogType::Info(format!("{}: {}", NOTICE_ITEM_REMOVED, item)))
            }
            Err(e) => {
                info!("Remove rejected: {}", e);
                Action::ShowDialog(DialogType::Rejected(NOTICE_REMOVE_REJECTED.to_string()))
            }
        }
    }

    /// Run an action through the components and the app until nothing is left
    pub fn dispatch(&mut self, action: Action) {
        let mut action = action;
        while !matches!(action, Action::None) {
            let remaining = self.update(action);
            action = self.handle_app_action(remaining);
        }
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) {
        let action = match event_type {
            EventType::Key(key) => self.handle_key_events(key),
            EventType::Mouse(mouse) => self.handle_mouse(mouse),
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };
        self.dispatch(action);
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        // Dialog has priority when visible
        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }

        let global_action = self.handle_global_key(key);
        if !matches!(global_action, Action::None) {
            global_action
        } else {
            self.handle_focused_key(key)
        }
    }

    fn update(&mut self, action: Action) -> Action {
        let action = self.dialog.update(action);
        self.item_view.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let layout = LayoutManager::main_layout(rect);

        let window = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" {} ", self.ui_config.title))
            .title_alignment(Alignment::Center)
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(window, layout.window);

        self.input.render(f, layout.input);
        self.buttons.render(f, layout.buttons);
        self.item_view.render(f, layout.items);
        self.watching.render(f, layout.watching);

        let items = self.watchlist.items();
        StatusBar::render(f, layout.status, items.len(), items.path());

        // Render dialog on top if visible
        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}
