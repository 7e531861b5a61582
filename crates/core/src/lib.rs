//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the world strip, the movement engine, and the game
//! session. It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: a seeded session replays the same enemy walk
//! - **Testable**: every transition is a synchronous function over values
//! - **Portable**: can run in any environment (terminal, headless)
//!
//! # Module Structure
//!
//! - [`world`]: the fixed-length strip of tiles with its uniqueness checks
//! - [`engine`]: the single pure move transition over a world
//! - [`session`]: lifecycle, outcome rules per mode, and the status line
//! - [`rng`]: seeded direction source for the enemy walk
//!
//! # Example
//!
//! ```
//! use tui_chase_core::Session;
//! use tui_chase_types::{Direction, Mode};
//!
//! let mut session = Session::new(Mode::Classic, 12345);
//! session.on_player_input(Direction::Right).unwrap();
//! assert!(session.running());
//! ```

pub mod engine;
pub mod rng;
pub mod session;
pub mod world;

pub use tui_chase_types as types;

// Re-export commonly used items for convenience
pub use engine::attempt_move;
pub use rng::DirectionRng;
pub use session::{Outcome, Phase, Session};
pub use world::{World, WorldError};
