//! Constants used throughout the application
//!
//! This module centralizes file names, UI text, and other constant values
//! to improve maintainability and consistency.

// Default data files, relative to the working directory
pub const DEFAULT_ITEMS_FILE: &str = "items.txt";
pub const DEFAULT_CURRENTLY_WATCHING_FILE: &str = "currently_watching.txt";

// Window text
pub const DEFAULT_TITLE: &str = "Watch2gether";
pub const DEFAULT_BANNER: &str = "MUST WATCH IN APRIL: Your Lie in April";
pub const LABEL_CURRENTLY_WATCHING: &str = "Currently Watching:";
pub const FIELD_NEW_ITEM: &str = "New item";
pub const PANEL_ITEMS: &str = "Items";

// Button captions
pub const BUTTON_ADD: &str = "Add Item";
pub const BUTTON_SELECT: &str = "Select Random Item";
pub const BUTTON_REMOVE: &str = "Remove Selected Item";

// Notices, success ones are followed by ": <item>"
pub const NOTICE_ITEM_ADDED: &str = "Item added";
pub const NOTICE_ITEM_SELECTED: &str = "Selected Item";
pub const NOTICE_ITEM_REMOVED: &str = "Removed item";
pub const NOTICE_ADD_REJECTED: &str = "Please enter a unique item.";
pub const NOTICE_NOTHING_TO_SELECT: &str = "No items to select from!";
pub const NOTICE_REMOVE_REJECTED: &str = "Item not found in the list.";

// Dialog titles
pub const DIALOG_TITLE_INFO: &str = "Watch2gether";
pub const DIALOG_TITLE_REJECTED: &str = "Not done";
pub const DIALOG_TITLE_HELP: &str = "Help - Esc to close";
pub const DIALOG_TITLE_LOGS: &str = "Logs - Esc to close";

// Messages
pub const CONFIG_GENERATED: &str = "Generated default configuration file";
pub const LOG_FILE_NAME: &str = "watch2gether.log";

/// Maximum number of log lines kept in memory for the logs dialog
pub const LOG_BUFFER_CAPACITY: usize = 500;
