//! Game session: the controller that reacts to engine events.
//!
//! The engine never drives itself. After every command the session drains the
//! engine's events and answers them:
//!
//! - `DidBegin`: spawn the first shape
//! - `ShapeDidLand`: clear lines until nothing more clears, then spawn
//! - `DidLevelUp`: shorten the tick
//! - `DidEnd`: empty the board and wait for a restart
//!
//! Answering an event may emit more events, so draining repeats until the
//! queue stays empty.

use crate::core::{EngineConfig, Tektris};
use crate::types::{tick_interval_ms, GameAction, GameEvent};

#[derive(Debug, Clone)]
pub struct Session {
    game: Tektris,
    tick_ms: u32,
    best_score: u32,
    total_lines: usize,
    games_played: u32,
}

impl Session {
    /// Create a session and begin the first game
    pub fn new(config: EngineConfig, seed: u32) -> Self {
        let mut session = Self {
            game: Tektris::new(config, seed),
            tick_ms: tick_interval_ms(1),
            best_score: 0,
            total_lines: 0,
            games_played: 0,
        };
        session.begin();
        session
    }

    pub fn game(&self) -> &Tektris {
        &self.game
    }

    /// Current fall interval in milliseconds
    pub fn tick_ms(&self) -> u32 {
        self.tick_ms
    }

    /// Highest score reached in any game of this session
    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn total_lines(&self) -> usize {
        self.total_lines
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    pub fn is_game_over(&self) -> bool {
        self.game.is_game_over()
    }

    /// Periodic tick: let the falling shape fall one row
    pub fn tick(&mut self) {
        if self.game.is_game_over() {
            return;
        }
        self.game.let_shape_fall();
        self.process_events();
    }

    /// Player command. Ignored while the game is over.
    pub fn apply(&mut self, action: GameAction) {
        if self.game.is_game_over() {
            return;
        }
        self.game.apply_action(action);
        self.process_events();
    }

    /// Start a new game after the previous one ended. Returns false if a game is running.
    pub fn restart(&mut self) -> bool {
        if !self.game.is_game_over() {
            return false;
        }
        self.begin();
        true
    }

    fn begin(&mut self) {
        self.games_played += 1;
        self.game.begin_game();
        self.process_events();
    }

    fn process_events(&mut self) {
        loop {
            let events = self.game.drain_events();
            if events.is_empty() {
                break;
            }
            for event in events {
                self.handle(event);
            }
        }
    }

    fn handle(&mut self, event: GameEvent) {
        match event {
            GameEvent::DidBegin => {
                self.tick_ms = tick_interval_ms(self.game.level());
                self.game.new_shape();
            }
            GameEvent::ShapeDidLand => {
                loop {
                    let clear = self.game.remove_completed_lines();
                    if clear.is_empty() {
                        break;
                    }
                    self.total_lines += clear.line_count();
                }
                // Spawning may end the game, which resets the score.
                self.best_score = self.best_score.max(self.game.score());
                self.game.new_shape();
            }
            GameEvent::DidLevelUp => {
                self.tick_ms = tick_interval_ms(self.game.level());
            }
            GameEvent::DidEnd => {
                self.game.remove_all_blocks();
                self.tick_ms = tick_interval_ms(self.game.level());
            }
            GameEvent::ShapeDidMove | GameEvent::ShapeDidDrop => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_spawns_first_shape() {
        let session = Session::new(EngineConfig::default(), 11);
        assert!(session.game().falling_shape().is_some());
        assert!(session.game().next_shape().is_some());
        assert!(session.game().events().is_empty());
        assert_eq!(session.tick_ms(), 600);
        assert_eq!(session.games_played(), 1);
    }

    #[test]
    fn test_drop_then_tick_lands_and_respawns() {
        let mut session = Session::new(EngineConfig::default(), 11);
        let first = session.game().falling_shape().map(|s| s.blocks()[0].id);

        session.apply(GameAction::Drop);
        session.tick();

        assert_eq!(session.game().grid().count(), 4);
        let second = session.game().falling_shape().map(|s| s.blocks()[0].id);
        assert!(second.is_some());
        assert_ne!(first, second);
    }

    #[test]
    fn test_stacking_ends_game_and_clears_board() {
        let mut session = Session::new(EngineConfig::default(), 5);
        for _ in 0..200 {
            if session.is_game_over() {
                break;
            }
            session.apply(GameAction::Drop);
            session.tick();
        }

        assert!(session.is_game_over());
        assert!(session.game().grid().is_empty());
        assert!(session.game().falling_shape().is_none());
        assert_eq!(session.game().score(), 0);

        // Commands are ignored until restart.
        session.tick();
        session.apply(GameAction::Drop);
        assert!(session.game().grid().is_empty());

        assert!(session.restart());
        assert!(!session.is_game_over());
        assert!(session.game().falling_shape().is_some());
        assert_eq!(session.games_played(), 2);
        assert!(!session.restart());
    }
}
