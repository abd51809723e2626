//! Scene assembly
//!
//! Turns a `GameState` into one triangle list in world pixels. Pure
//! presentation: nothing here feeds back into the simulation.

use glam::Vec2;

use super::font::{push_text, text_height, text_width};
use super::shapes::{circle, line, rounded_rect};
use super::vertex::{Vertex, colors, rgb};
use crate::consts::GAME_OVER_FLASH_MS;
use crate::settings::Settings;
use crate::sim::{Ball, GamePhase, GameState};

const GRID_SPACING: f32 = 50.0;
const FLOOR_THICKNESS: f32 = 3.0;
const BUMPER_CORNER: f32 = 8.0;
const DOT_SEGMENTS: u32 = 8;

const HUD_MARGIN: f32 = 10.0;
const INFO_SCALE: f32 = 1.25;
const SCORE_SCALE: f32 = 1.5;
const BANNER_SCALE: f32 = 7.0;
const PROMPT_SCALE: f32 = 3.0;

const CONTROLS_TEXT: &str = "SPACE/Click: Activate Bumper | Arrow Keys: Move Bumper | ESC: Quit";
const GAME_OVER_TEXT: &str = "GAME OVER";
const PROMPT_TEXT: &str = "Shall we play again? (y/n)";

/// Depth cue for one dot: base colour scaled by nearness, and its radius
///
/// Depth -1 (far) maps to black and radius 1; depth 1 (near) to the full
/// colour and radius 4. Radii are whole pixels.
pub fn dot_style(depth: f32, base: [u8; 3]) -> ([f32; 4], f32) {
    let brightness = ((depth + 1.0) / 2.0).clamp(0.0, 1.0);
    let channel = |c: u8| (c as f32 * brightness).min(255.0) / 255.0;
    let color = [channel(base[0]), channel(base[1]), channel(base[2]), 1.0];
    let size = (1.0 + 1.5 * (depth + 1.0)).trunc();
    (color, size)
}

/// Dots for a ball, in the ball's depth order
pub fn ball_dots(ball: &Ball) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    for point in ball.projected_points() {
        let (color, size) = dot_style(point.depth, ball.color);
        vertices.extend(circle(point.screen, size, color, DOT_SEGMENTS));
    }
    vertices
}

/// Top-left status line
pub fn info_text(state: &GameState) -> String {
    match state.balls.first() {
        Some(ball) => format!(
            "Balls Remaining: {} | Ball 1: ({}, {}) | Speed: ({:.1}, {:.1})",
            state.balls.len(),
            ball.pos.x as i32,
            ball.pos.y as i32,
            ball.vel.x,
            ball.vel.y
        ),
        None => format!("Balls Remaining: {}", state.balls.len()),
    }
}

/// GAME OVER flashes on for one half-period, off for the next
pub fn game_over_visible(state: &GameState) -> bool {
    state
        .game_over_elapsed_ms()
        .is_some_and(|elapsed| (elapsed / GAME_OVER_FLASH_MS) as u64 % 2 == 0)
}

/// Build the whole frame
pub fn build_scene(state: &GameState, settings: &Settings, fps: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(16 * 1024);

    if settings.show_grid {
        push_grid(&mut vertices, state.width, state.height);
    }

    let floor_color = rgb(colors::FLOOR);
    for (start, end) in state.floor.solid_segments(state.width) {
        vertices.extend(line(
            Vec2::new(start, state.floor.y),
            Vec2::new(end, state.floor.y),
            FLOOR_THICKNESS,
            floor_color,
        ));
    }

    for bumper in &state.bumpers {
        let (min, size) = bumper.rect();
        vertices.extend(rounded_rect(min, size, BUMPER_CORNER, rgb(colors::BUMPER)));
    }

    for ball in &state.balls {
        vertices.extend(ball_dots(ball));
    }

    push_hud(&mut vertices, state, settings, fps);
    vertices
}

fn push_grid(vertices: &mut Vec<Vertex>, width: f32, height: f32) {
    let color = rgb(colors::GRID);
    let mut x = 0.0;
    while x < width {
        vertices.extend(line(Vec2::new(x + 0.5, 0.0), Vec2::new(x + 0.5, height), 1.0, color));
        x += GRID_SPACING;
    }
    let mut y = 0.0;
    while y < height {
        vertices.extend(line(Vec2::new(0.0, y + 0.5), Vec2::new(width, y + 0.5), 1.0, color));
        y += GRID_SPACING;
    }
}

fn push_hud(vertices: &mut Vec<Vertex>, state: &GameState, settings: &Settings, fps: u32) {
    let (w, h) = (state.width, state.height);

    push_text(
        vertices,
        &info_text(state),
        Vec2::new(HUD_MARGIN, HUD_MARGIN),
        INFO_SCALE,
        rgb(colors::HUD_TEXT),
    );

    let score = format!("Score: {}", state.score);
    let score_x = w - HUD_MARGIN - text_width(&score, SCORE_SCALE);
    push_text(
        vertices,
        &score,
        Vec2::new(score_x, HUD_MARGIN),
        SCORE_SCALE,
        rgb(colors::SCORE),
    );

    if settings.show_fps {
        let fps_text = format!("FPS: {}", fps);
        let y = HUD_MARGIN + text_height(SCORE_SCALE) + 6.0;
        push_text(
            vertices,
            &fps_text,
            Vec2::new(w - HUD_MARGIN - text_width(&fps_text, INFO_SCALE), y),
            INFO_SCALE,
            rgb(colors::HUD_TEXT),
        );
    }

    match state.phase {
        GamePhase::GameOver { .. } if game_over_visible(state) => {
            push_centered(vertices, GAME_OVER_TEXT, w, h, BANNER_SCALE, rgb(colors::GAME_OVER));
        }
        GamePhase::AwaitingRestart => {
            push_centered(vertices, PROMPT_TEXT, w, h, PROMPT_SCALE, rgb(colors::PROMPT));
        }
        _ => {}
    }

    push_text(
        vertices,
        CONTROLS_TEXT,
        Vec2::new(HUD_MARGIN, h - 30.0),
        INFO_SCALE,
        rgb(colors::HUD_TEXT),
    );
}

fn push_centered(vertices: &mut Vec<Vertex>, text: &str, w: f32, h: f32, scale: f32, color: [f32; 4]) {
    let origin = Vec2::new(
        (w - text_width(text, scale)) / 2.0,
        (h - text_height(scale)) / 2.0,
    );
    push_text(vertices, text, origin, scale, color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT_MS;
    use crate::sim::{TickInput, tick};

    #[test]
    fn test_dot_style_depth_cue() {
        let (far, far_size) = dot_style(-1.0, [200, 100, 50]);
        assert_eq!(far, [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(far_size, 1.0);

        let (mid, mid_size) = dot_style(0.0, [200, 100, 50]);
        assert!((mid[0] - 100.0 / 255.0).abs() < 1e-6);
        assert_eq!(mid_size, 2.0);
        assert_eq!(dot_style(-0.4, [0; 3]).1, 1.0);
        assert_eq!(dot_style(0.4, [0; 3]).1, 3.0);

        let (near, near_size) = dot_style(1.0, [255, 255, 255]);
        assert_eq!(near, [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(near_size, 4.0);
    }

    #[test]
    fn test_ball_dots_one_circle_per_point() {
        let state = GameState::new();
        let ball = &state.balls[0];
        let vertices = ball_dots(ball);
        assert_eq!(vertices.len(), ball.points().len() * DOT_SEGMENTS as usize * 3);
    }

    #[test]
    fn test_info_text() {
        let mut state = GameState::new();
        assert_eq!(
            info_text(&state),
            "Balls Remaining: 8 | Ball 1: (300, 400) | Speed: (3.0, 2.0)"
        );
        state.balls.clear();
        assert_eq!(info_text(&state), "Balls Remaining: 0");
    }

    #[test]
    fn test_game_over_flashes() {
        let mut state = GameState::new();
        assert!(!game_over_visible(&state));
        state.phase = GamePhase::GameOver { since_tick: 60 };
        // 200 ms, 700 ms, 1100 ms into the banner
        state.time_ticks = 72;
        assert!(game_over_visible(&state));
        state.time_ticks = 102;
        assert!(!game_over_visible(&state));
        state.time_ticks = 126;
        assert!(game_over_visible(&state));
    }

    #[test]
    fn test_scene_builds_for_every_phase() {
        let settings = Settings {
            show_fps: true,
            ..Settings::default()
        };
        let mut state = GameState::new();
        let playing = build_scene(&state, &settings, 60);
        assert!(!playing.is_empty());

        state.balls.clear();
        tick(&mut state, &TickInput::default(), SIM_DT_MS);
        let game_over = build_scene(&state, &settings, 60);
        // Balls gone, banner shown
        assert!(game_over.len() < playing.len());

        state.phase = GamePhase::AwaitingRestart;
        let prompt = build_scene(&state, &settings, 60);
        assert!(!prompt.is_empty());
    }

    #[test]
    fn test_grid_toggle() {
        let state = GameState::new();
        let with_grid = build_scene(&state, &Settings::default(), 0);
        let settings = Settings {
            show_grid: false,
            ..Settings::default()
        };
        let without = build_scene(&state, &settings, 0);
        // 12 vertical + 16 horizontal lines
        assert_eq!(with_grid.len() - without.len(), 28 * 6);
    }
}
