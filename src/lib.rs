//! Tallylist - a single-page to-do list for the terminal
//!
//! Add, toggle, delete, and clear completed to-dos in an in-memory list,
//! rendered with Ratatui.
//!
//! # Modules
//!
//! * [`todo`] - The list and draft state and every operation on them
//! * [`ui`] - Terminal user interface components and the event loop
//! * [`config`] - Application configuration management
//! * [`logger`] - Log capture for the `log` facade

/// Configuration module for managing application settings
pub mod config;

/// Application constants and display strings
pub mod constants;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// To-do list state and operations
pub mod todo;

/// Terminal user interface components and rendering
pub mod ui;

pub use todo::{Item, ItemId, TodoList, TodoSnapshot};
