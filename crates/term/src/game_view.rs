//! GameView: maps a session snapshot into terminal lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use tui_chase_core::Session;
use tui_chase_types::Tile;

/// Display columns per cell: a space plus a double-width emoji.
const CELL_COLS: usize = 3;

fn glyph(tile: Tile) -> &'static str {
    match tile {
        Tile::Tree => "🌲",
        Tile::Player => "🦸",
        Tile::Enemy => "👾",
        Tile::Chest => "🎁",
    }
}

/// Renders the world strip inside a double-line ground box, with the
/// status line underneath.
#[derive(Debug, Default)]
pub struct GameView;

impl GameView {
    /// Render the session into printable lines, top to bottom.
    pub fn render(&self, session: &Session) -> Vec<String> {
        let tiles = session.world().tiles();

        let mut row = String::new();
        for &tile in tiles {
            row.push(' ');
            row.push_str(glyph(tile));
        }
        row.push(' ');

        // Emoji render two columns wide, so the border must match display
        // width rather than char count.
        let inner_cols = tiles.len() * CELL_COLS + 1;

        let mut status = session.status().to_string();
        if session.super_mode() {
            status.push_str("  [SUPER]");
        }

        vec![
            format!("╔{}╗", "═".repeat(inner_cols)),
            format!("║{}║", row),
            format!("╚{}╝", "═".repeat(inner_cols)),
            status,
        ]
    }
}
