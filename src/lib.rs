//! Terminal chase game (workspace facade crate).
//!
//! This package keeps the `tui_chase::{core,input,term,types}` public API in
//! one place while the implementation lives in dedicated crates under
//! `crates/`. It also hosts the shared event loop and the two game binaries.

pub mod app;

pub use tui_chase_core as core;
pub use tui_chase_input as input;
pub use tui_chase_term as term;
pub use tui_chase_types as types;
