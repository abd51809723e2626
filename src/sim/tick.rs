//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use super::ball::Ball;
use super::bumper::Bumper;
use super::collision::resolve_all_pairs;
use super::state::{Floor, GamePhase, GameState};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer x in world pixels, if the pointer moved
    pub pointer_x: Option<f32>,
    /// Activate the bumpers (click/space)
    pub activate: bool,
    /// Left arrow held
    pub move_left: bool,
    /// Right arrow held
    pub move_right: bool,
    /// Answer to the restart prompt (y = true, anything else = false)
    pub restart_answer: Option<bool>,
    /// Quit immediately
    pub quit: bool,
}

/// Advance the game state by one fixed timestep
///
/// Physics runs while Playing and during GameOver; it is frozen while the
/// restart prompt is up.
pub fn tick(state: &mut GameState, input: &TickInput, dt_ms: f32) {
    if input.quit {
        state.terminate();
        return;
    }

    match state.phase {
        GamePhase::Terminated => return,
        GamePhase::AwaitingRestart => {
            match input.restart_answer {
                Some(true) => state.reset(),
                Some(false) => {
                    log::info!("Restart declined, final score {}", state.score);
                    state.phase = GamePhase::Terminated;
                }
                None => {}
            }
            return;
        }
        GamePhase::Playing | GamePhase::GameOver { .. } => {}
    }

    state.time_ticks += 1;

    // Pointer and activation
    let width = state.width;
    for bumper in &mut state.bumpers {
        if let Some(x) = input.pointer_x {
            bumper.set_x_center(x, width);
        }
        if input.activate {
            bumper.activate();
        }
    }

    // Held arrows, then activation countdown
    for bumper in &mut state.bumpers {
        if input.move_left {
            bumper.nudge(-BUMPER_MOVE_SPEED, width);
        }
        if input.move_right {
            bumper.nudge(BUMPER_MOVE_SPEED, width);
        }
        bumper.update(dt_ms);
    }

    step_balls(state, dt_ms);

    if state.balls.is_empty() && state.phase == GamePhase::Playing {
        log::info!("Game over, score {}", state.score);
        state.phase = GamePhase::GameOver {
            since_tick: state.time_ticks,
        };
    }

    if state
        .game_over_elapsed_ms()
        .is_some_and(|elapsed| elapsed > GAME_OVER_MS)
    {
        log::info!("Asking to play again");
        state.phase = GamePhase::AwaitingRestart;
    }

    resolve_all_pairs(&mut state.balls);
}

/// Move every ball one tick and drop those that fell through a hole
fn step_balls(state: &mut GameState, dt_ms: f32) {
    let GameState {
        balls,
        bumpers,
        floor,
        score,
        width,
        height,
        ..
    } = state;

    balls.retain_mut(|ball| {
        let keep = step_ball(ball, bumpers, floor, (*width, *height), score, dt_ms);
        if !keep {
            log::debug!("Ball drained at x={:.0}", ball.pos.x);
        }
        keep
    });
}

/// Integrate and collide one ball; returns false once it has drained
fn step_ball(
    ball: &mut Ball,
    bumpers: &[Bumper],
    floor: &Floor,
    (width, height): (f32, f32),
    score: &mut u64,
    dt_ms: f32,
) -> bool {
    let r = ball.radius();

    ball.vel.y += GRAVITY;
    ball.pos += ball.vel;

    // Below the line: drain through a hole, or score a block on solid floor
    if ball.bottom() > floor.y {
        if floor.over_hole(ball.pos.x) {
            if ball.top() > height {
                return false;
            }
        } else {
            ball.pos.y = floor.y - r;
            *score += 1;
        }
    }

    // Only one bumper collision per ball per tick
    for bumper in bumpers {
        if bumper.check_collision(ball) {
            break;
        }
    }

    // Walls
    if ball.pos.x - r <= 0.0 {
        ball.pos.x = r;
        ball.vel.x = -ball.vel.x * BOUNCE_DAMPING;
    } else if ball.pos.x + r >= width {
        ball.pos.x = width - r;
        ball.vel.x = -ball.vel.x * BOUNCE_DAMPING;
    }
    if ball.top() <= 0.0 {
        ball.pos.y = r;
        ball.vel.y = -ball.vel.y * BOUNCE_DAMPING;
    }

    // Solid parts of the floor line
    if ball.bottom() >= floor.y && !floor.over_hole(ball.pos.x) {
        ball.pos.y = floor.y - r;
        ball.vel.y = -ball.vel.y * BOUNCE_DAMPING;
    }

    ball.update(dt_ms);
    true
}
