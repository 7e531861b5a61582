//! Terminal presentation module.
//!
//! Rendering is split the same way as the rest of the game: a pure
//! [`GameView`] that turns a session snapshot into printable lines (and can
//! be unit-tested), and a [`TerminalRenderer`] that owns the real terminal
//! and flushes those lines. Presentation only reads session state; it never
//! mutates it.

pub mod game_view;
pub mod renderer;

pub use tui_chase_core as core;
pub use tui_chase_types as types;

pub use game_view::GameView;
pub use renderer::TerminalRenderer;
