//! Core UI functionality for the Watch2gether application.
//!
//! This module contains the building blocks every widget uses: the
//! [`Action`] vocabulary, the [`Component`] trait, and terminal event polling.
//!
//! # Architecture
//!
//! 1. Terminal input arrives through the [`EventHandler`] as an [`EventType`]
//! 2. The focused component turns it into an [`Action`]
//! 3. Components get a chance to consume the action in [`Component::update`]
//! 4. Whatever is left is handled by the application component, which may
//!    answer with a follow-up action (usually a notice dialog)
//!
//! Everything runs on one thread, so the watch list has a single writer.

pub mod actions;
pub mod component;
pub mod event_handler;

// Re-export core types for easier access from other modules
pub use actions::{Action, DialogType, Focus};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
