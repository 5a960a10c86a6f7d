pub mod common;
pub mod system_dialogs;
