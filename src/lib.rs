//! Watch2gether - a terminal watch list with a random picker
//!
//! Keep a list of things to watch, pick one at random, and remember what is
//! currently being watched. The list and the current pick are stored in two
//! plain text files in the working directory.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`storage`] - The two flat files and their in-memory mirrors
//! * [`selection`] - Uniform random pick
//! * [`watchlist`] - Command handlers used by the UI
//! * [`ui`] - Terminal user interface components

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Logging setup and the in-memory log buffer
pub mod logger;

/// Uniform random selection over the item list
pub mod selection;

/// Item list and currently watching persistence
pub mod storage;

/// Terminal user interface components and rendering
pub mod ui;

/// Add / select / remove command handlers
pub mod watchlist;

pub use watchlist::Watchlist;
