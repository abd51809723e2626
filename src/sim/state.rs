//! Game state and core simulation types

use super::ball::{Ball, initial_balls};
use super::bumper::Bumper;
use crate::consts::*;

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GamePhase {
    /// Balls in play
    Playing,
    /// Every ball has drained; banner shown until the timer runs out
    GameOver {
        /// Tick on which the last ball drained
        since_tick: u64,
    },
    /// Waiting for a yes/no answer to "play again?"
    AwaitingRestart,
    /// Player declined or quit; the app should close
    Terminated,
}

/// Horizontal floor line with two holes
#[derive(Debug, Clone, PartialEq)]
pub struct Floor {
    /// Height of the line
    pub y: f32,
    /// Left edge of each hole
    pub holes: [f32; 2],
    pub hole_width: f32,
}

impl Floor {
    /// Standard floor: holes centred at one and three quarters of the width
    pub fn new(world_width: f32, world_height: f32) -> Self {
        Self {
            y: world_height - FLOOR_OFFSET,
            holes: [
                world_width / 4.0 - HOLE_WIDTH / 2.0,
                3.0 * world_width / 4.0 - HOLE_WIDTH / 2.0,
            ],
            hole_width: HOLE_WIDTH,
        }
    }

    /// Whether x lies over either hole (bounds inclusive)
    pub fn over_hole(&self, x: f32) -> bool {
        self.holes
            .iter()
            .any(|&left| x >= left && x <= left + self.hole_width)
    }

    /// Solid spans of the line, left to right, as (start, end) x pairs
    pub fn solid_segments(&self, world_width: f32) -> [(f32, f32); 3] {
        [
            (0.0, self.holes[0]),
            (self.holes[0] + self.hole_width, self.holes[1]),
            (self.holes[1] + self.hole_width, world_width),
        ]
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    pub width: f32,
    pub height: f32,
    /// Active balls, in spawn order
    pub balls: Vec<Ball>,
    /// Player bumpers (one by default)
    pub bumpers: Vec<Bumper>,
    pub floor: Floor,
    /// Solid-floor contacts so far
    pub score: u64,
    pub phase: GamePhase,
    /// Simulation ticks since start; drives the game-over timer
    pub time_ticks: u64,
}

impl GameState {
    /// Create a new game in the standard play area
    pub fn new() -> Self {
        Self::with_size(WORLD_WIDTH, WORLD_HEIGHT)
    }

    pub fn with_size(width: f32, height: f32) -> Self {
        let floor = Floor::new(width, height);
        Self {
            width,
            height,
            balls: initial_balls(width, height),
            bumpers: vec![Bumper::centered(width, floor.y)],
            floor,
            score: 0,
            phase: GamePhase::Playing,
            time_ticks: 0,
        }
    }

    /// Start a fresh match: initial balls, bumpers recentred, score zeroed
    pub fn reset(&mut self) {
        self.balls = initial_balls(self.width, self.height);
        for bumper in &mut self.bumpers {
            *bumper = Bumper::centered(self.width, self.floor.y);
        }
        self.score = 0;
        self.phase = GamePhase::Playing;
        log::info!("New game started with {} balls", self.balls.len());
    }

    /// Milliseconds spent in GameOver, if there
    pub fn game_over_elapsed_ms(&self) -> Option<f32> {
        match self.phase {
            GamePhase::GameOver { since_tick } => {
                Some(self.time_ticks.saturating_sub(since_tick) as f32 * SIM_DT_MS)
            }
            _ => None,
        }
    }

    /// End the session from any phase (Escape or the window closing)
    pub fn terminate(&mut self) {
        if !self.is_terminated() {
            log::info!("Quit requested (score {})", self.score);
            self.phase = GamePhase::Terminated;
        }
    }

    pub fn is_terminated(&self) -> bool {
        self.phase == GamePhase::Terminated
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_floor_layout() {
        let floor = Floor::new(600.0, 800.0);
        assert_eq!(floor.y, 700.0);
        assert_eq!(floor.holes, [120.0, 420.0]);
        assert!(floor.over_hole(120.0));
        assert!(floor.over_hole(180.0));
        assert!(floor.over_hole(450.0));
        assert!(!floor.over_hole(119.9));
        assert!(!floor.over_hole(300.0));
        assert_eq!(
            floor.solid_segments(600.0),
            [(0.0, 120.0), (180.0, 420.0), (480.0, 600.0)]
        );
    }

    #[test]
    fn test_new_game() {
        let state = GameState::new();
        assert_eq!(state.balls.len(), 8);
        assert_eq!(state.bumpers.len(), 1);
        assert_eq!(state.score, 0);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_reset_restores_everything() {
        let mut state = GameState::new();
        state.balls.truncate(2);
        state.balls[0].pos = Vec2::new(10.0, 10.0);
        state.bumpers[0].x = 0.0;
        state.bumpers[0].activate();
        state.score = 42;
        state.phase = GamePhase::AwaitingRestart;

        state.reset();

        let fresh = GameState::new();
        assert_eq!(state.balls, fresh.balls);
        assert_eq!(state.bumpers, fresh.bumpers);
        assert_eq!(state.score, 0);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_game_over_elapsed() {
        let mut state = GameState::new();
        assert_eq!(state.game_over_elapsed_ms(), None);
        state.phase = GamePhase::GameOver { since_tick: 100 };
        state.time_ticks = 160;
        let elapsed = state.game_over_elapsed_ms().unwrap();
        assert!((elapsed - 1000.0).abs() < 1e-2);
    }

    #[test]
    fn test_game_over_elapsed_after_long_session() {
        let mut state = GameState::new();
        // Far past where an f32 millisecond clock stops advancing
        state.time_ticks = 1 << 40;
        state.phase = GamePhase::GameOver {
            since_tick: state.time_ticks,
        };
        state.time_ticks += 301;
        assert!(state.game_over_elapsed_ms().unwrap() > GAME_OVER_MS);
    }

    #[test]
    fn test_terminate_from_any_phase() {
        for phase in [
            GamePhase::Playing,
            GamePhase::GameOver { since_tick: 0 },
            GamePhase::AwaitingRestart,
            GamePhase::Terminated,
        ] {
            let mut state = GameState::new();
            state.phase = phase;
            state.terminate();
            assert!(state.is_terminated());
        }
    }
}
