//! Reusable UI components

pub mod button_bar;
pub mod dialog_component;
pub mod dialogs;
pub mod item_view;
pub mod scrollbar_helper;
pub mod status_bar;
pub mod text_input;
pub mod watching_panel;

// Component exports
pub use button_bar::ButtonBar;
pub use dialog_component::DialogComponent;
pub use item_view::ItemView;
pub use status_bar::StatusBar;
pub use text_input::TextInput;
pub use watching_panel::WatchingPanel;
