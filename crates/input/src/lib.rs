//! Terminal input module.
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into player intents: a move direction or a quit
//! request. Anything else is ignored.

pub mod map;

pub use tui_chase_types as types;

pub use map::{handle_key_event, should_quit};
