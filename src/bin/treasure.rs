//! Treasure chase runner.
//!
//! Same strip, plus a chest that grants super mode on pickup. Touching the
//! enemy is always fatal in this variant, and the enemy steps at a slower
//! cadence. `q` quits.

use anyhow::Result;

use tui_chase::app;
use tui_chase::types::Mode;

fn main() -> Result<()> {
    app::run(Mode::Treasure)
}
