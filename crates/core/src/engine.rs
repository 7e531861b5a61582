//! Movement engine - the single pure transition over a world.

use tui_chase_types::{Actor, Direction, MoveEvent, Tile};

use crate::world::{World, WorldError};

/// Move `actor` one cell in `direction`.
///
/// Returns the next world plus the contact the move produced. A step that
/// would leave the strip is a silent no-op: the input world comes back
/// unchanged with [`MoveEvent::None`]. On contact the actor still ends up
/// in the destination cell; the caller reports the outcome after the fact.
///
/// The input world is never mutated.
pub fn attempt_move(
    world: &World,
    actor: Actor,
    direction: Direction,
) -> Result<(World, MoveEvent), WorldError> {
    let from = world.locate(actor.tile())?;

    let Some(to) = direction.step(from, world.len()) else {
        return Ok((world.clone(), MoveEvent::None));
    };

    // Inspect the destination before relabeling over it.
    let event = match (actor, world.tiles()[to]) {
        (Actor::Enemy, Tile::Player) => MoveEvent::PlayerCaught,
        (Actor::Player, Tile::Enemy) => MoveEvent::ReachedEnemy,
        (Actor::Player, Tile::Chest) => MoveEvent::PickupCollected,
        _ => MoveEvent::None,
    };

    let next = world
        .relabeled(from, Tile::Tree)
        .relabeled(to, actor.tile());

    Ok((next, event))
}
