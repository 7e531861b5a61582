//! Game session - owns the world and turns engine contacts into outcomes.
//!
//! The session is the only mutable state in the game. Both external
//! triggers (keyboard input and the enemy timer) funnel through it one at
//! a time; every transition is synchronous and leaves the session in a
//! consistent state.

use tui_chase_types::{
    Actor, Direction, Mode, MoveEvent, STATUS_GAME_OVER, STATUS_IDLE, STATUS_WIN,
};

use crate::engine::attempt_move;
use crate::rng::DirectionRng;
use crate::world::{World, WorldError};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Lost,
    Won,
}

/// Lifecycle of a session. `Ended` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Ended(Outcome),
}

/// A single play-through: world, lifecycle phase, super flag, status line.
#[derive(Debug, Clone)]
pub struct Session {
    mode: Mode,
    world: World,
    phase: Phase,
    /// One-way flag set by collecting the chest; read by presentation only.
    super_mode: bool,
    status: String,
    rng: DirectionRng,
}

impl Session {
    /// Create a session on the mode's starting world.
    pub fn new(mode: Mode, seed: u32) -> Self {
        Self {
            mode,
            world: World::starting(mode),
            phase: Phase::Running,
            super_mode: false,
            status: STATUS_IDLE.to_string(),
            rng: DirectionRng::new(seed),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn running(&self) -> bool {
        matches!(self.phase, Phase::Running)
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Running => None,
            Phase::Ended(outcome) => Some(outcome),
        }
    }

    pub fn super_mode(&self) -> bool {
        self.super_mode
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Timer callback: advance the enemy one cell in a random direction.
    ///
    /// Does nothing once the session has ended, so a host that keeps its
    /// timer armed after game over stays harmless.
    pub fn on_tick(&mut self) -> Result<(), WorldError> {
        if !self.running() {
            return Ok(());
        }
        let direction = self.rng.next_direction();
        self.advance_enemy(direction)
    }

    /// Deterministic body of [`Self::on_tick`]: step the enemy in `direction`.
    ///
    /// Public so tests and replays can drive the enemy without randomness.
    pub fn advance_enemy(&mut self, direction: Direction) -> Result<(), WorldError> {
        if !self.running() {
            return Ok(());
        }

        let (world, event) = attempt_move(&self.world, Actor::Enemy, direction)?;
        self.world = world;

        match event {
            MoveEvent::PlayerCaught => self.end(Outcome::Lost, STATUS_GAME_OVER),
            _ => self.status = format!("enemy {}", direction.arrow()),
        }
        Ok(())
    }

    /// Keyboard callback: step the player one cell.
    ///
    /// Ignored once the session has ended.
    pub fn on_player_input(&mut self, direction: Direction) -> Result<(), WorldError> {
        if !self.running() {
            return Ok(());
        }

        let (world, event) = attempt_move(&self.world, Actor::Player, direction)?;
        self.world = world;

        match event {
            MoveEvent::ReachedEnemy => match self.mode {
                // Classic: walking into the enemy defeats it.
                Mode::Classic => self.end(Outcome::Won, STATUS_WIN),
                // Treasure: touching the enemy is fatal, super or not.
                Mode::Treasure => self.end(Outcome::Lost, STATUS_GAME_OVER),
            },
            MoveEvent::PickupCollected => {
                self.super_mode = true;
                self.status = direction.arrow().to_string();
            }
            _ => self.status = direction.arrow().to_string(),
        }
        Ok(())
    }

    fn end(&mut self, outcome: Outcome, status: &str) {
        self.phase = Phase::Ended(outcome);
        self.status = status.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_chase_types::Tile;

    #[test]
    fn test_new_session() {
        let session = Session::new(Mode::Classic, 12345);

        assert!(session.running());
        assert_eq!(session.outcome(), None);
        assert!(!session.super_mode());
        assert_eq!(session.status(), STATUS_IDLE);
        assert_eq!(session.world().tiles(), Mode::Classic.starting_layout());
    }

    #[test]
    fn test_classic_walk_right_wins() {
        let mut session = Session::new(Mode::Classic, 1);

        // Player starts at index 1, enemy at index 5. Three steps right
        // make them adjacent.
        for _ in 0..3 {
            session.on_player_input(Direction::Right).unwrap();
            assert!(session.running());
        }
        assert_eq!(session.world().locate(Tile::Player), Ok(4));
        assert_eq!(session.status(), "->");

        // The fourth step enters the enemy's cell.
        session.on_player_input(Direction::Right).unwrap();
        assert_eq!(session.phase(), Phase::Ended(Outcome::Won));
        assert_eq!(session.status(), STATUS_WIN);
    }

    #[test]
    fn test_classic_enemy_walk_left_loses() {
        let mut session = Session::new(Mode::Classic, 1);

        // Enemy starts at index 5, player at index 1: three left steps
        // bring it adjacent without contact.
        for _ in 0..3 {
            session.advance_enemy(Direction::Left).unwrap();
            assert!(session.running());
        }
        assert_eq!(session.world().locate(Tile::Enemy), Ok(2));
        assert_eq!(session.status(), "enemy <-");

        // The fourth step enters the player's cell.
        session.advance_enemy(Direction::Left).unwrap();
        assert_eq!(session.phase(), Phase::Ended(Outcome::Lost));
        assert_eq!(session.status(), STATUS_GAME_OVER);
    }

    #[test]
    fn test_treasure_pickup_grants_super() {
        let mut session = Session::new(Mode::Treasure, 1);

        // Player starts at index 2, chest at index 0.
        session.on_player_input(Direction::Left).unwrap();
        assert!(!session.super_mode());

        session.on_player_input(Direction::Left).unwrap();
        assert!(session.super_mode());
        assert!(session.running());
        assert_eq!(session.world().count(Tile::Chest), 0);
    }

    #[test]
    fn test_treasure_enemy_contact_is_fatal() {
        let mut session = Session::new(Mode::Treasure, 1);

        // Walk right into the enemy at index 6.
        for _ in 0..4 {
            session.on_player_input(Direction::Right).unwrap();
        }
        assert_eq!(session.phase(), Phase::Ended(Outcome::Lost));
        assert_eq!(session.status(), STATUS_GAME_OVER);
    }

    #[test]
    fn test_super_mode_never_reverts() {
        let mut session = Session::new(Mode::Treasure, 7);

        session.on_player_input(Direction::Left).unwrap();
        session.on_player_input(Direction::Left).unwrap();
        assert!(session.super_mode());

        for _ in 0..20 {
            session.on_tick().unwrap();
            session.on_player_input(Direction::Right).unwrap();
            assert!(session.super_mode());
        }
    }

    #[test]
    fn test_ended_session_ignores_input_and_ticks() {
        let mut session = Session::new(Mode::Classic, 1);
        for _ in 0..4 {
            session.on_player_input(Direction::Right).unwrap();
        }
        assert!(!session.running());

        let world = session.world().clone();
        let status = session.status().to_string();

        session.on_player_input(Direction::Left).unwrap();
        session.on_tick().unwrap();
        session.advance_enemy(Direction::Left).unwrap();

        assert_eq!(session.world(), &world);
        assert_eq!(session.status(), status);
        assert_eq!(session.phase(), Phase::Ended(Outcome::Won));
    }

    #[test]
    fn test_edge_step_keeps_world_but_updates_status() {
        let mut session = Session::new(Mode::Classic, 1);

        // Player at index 1; one left step reaches the edge.
        session.on_player_input(Direction::Left).unwrap();
        assert_eq!(session.world().locate(Tile::Player), Ok(0));

        let world = session.world().clone();
        session.on_player_input(Direction::Left).unwrap();

        assert_eq!(session.world(), &world);
        assert_eq!(session.status(), "<-");
        assert!(session.running());
    }

    #[test]
    fn test_tick_moves_only_the_enemy() {
        let mut session = Session::new(Mode::Classic, 42);
        let player_before = session.world().locate(Tile::Player).unwrap();

        session.on_tick().unwrap();

        assert_eq!(session.world().locate(Tile::Player), Ok(player_before));
        assert_eq!(session.world().count(Tile::Enemy), 1);
    }

    #[test]
    fn test_seeded_sessions_replay_identically() {
        let mut a = Session::new(Mode::Classic, 99);
        let mut b = Session::new(Mode::Classic, 99);

        for _ in 0..10 {
            a.on_tick().unwrap();
            b.on_tick().unwrap();
            assert_eq!(a.world(), b.world());
            assert_eq!(a.phase(), b.phase());
        }
    }
}
