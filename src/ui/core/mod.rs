//! Core UI functionality for Tallylist.
//!
//! # Architecture
//!
//! 1. **Components** implement the [`Component`] trait for consistent rendering
//! 2. **Actions** describe every state transition a key press can trigger
//! 3. **Events** are read from the terminal by the [`EventHandler`]
//!
//! Components never touch the to-do state directly: they turn key presses into
//! [`Action`]s, and the app component applies them in arrival order.

pub mod actions;
pub mod component;
pub mod event_handler;

pub use actions::{Action, Focus};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
