//! Classic chase runner (default binary).
//!
//! A strip of trees, one player, one wandering enemy. Arrow keys move the
//! player; walking into the enemy wins, being walked into loses. `q` quits.

use anyhow::Result;

use tui_chase::app;
use tui_chase::types::Mode;

fn main() -> Result<()> {
    app::run(Mode::Classic)
}
