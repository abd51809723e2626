//! The player's bumper
//!
//! A rectangle resting just above the floor line. Activating it raises it
//! for a few ticks and turns any contact into a strong kick.

use glam::Vec2;

use super::ball::Ball;
use crate::consts::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Bumper {
    /// Left edge
    pub x: f32,
    /// Top edge while idle
    pub rest_y: f32,
    pub width: f32,
    pub height: f32,
    /// Ticks left in the activation window (active iff > 0)
    active_ticks: u32,
}

impl Bumper {
    pub fn new(x: f32, rest_y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            rest_y,
            width,
            height,
            active_ticks: 0,
        }
    }

    /// Default bumper, centred above the floor line
    pub fn centered(world_width: f32, floor_y: f32) -> Self {
        Self::new(
            (world_width - BUMPER_WIDTH) / 2.0,
            floor_y - BUMPER_HEIGHT - BUMPER_FLOOR_GAP,
            BUMPER_WIDTH,
            BUMPER_HEIGHT,
        )
    }

    pub fn is_active(&self) -> bool {
        self.active_ticks > 0
    }

    pub fn active_ticks(&self) -> u32 {
        self.active_ticks
    }

    /// Start (or restart) the activation window
    pub fn activate(&mut self) {
        self.active_ticks = BUMPER_ACTIVE_TICKS;
    }

    /// Count down the activation window by one tick
    ///
    /// The window is measured in ticks, not milliseconds; `_dt_ms` is
    /// accepted so every entity shares the same update signature.
    pub fn update(&mut self, _dt_ms: f32) {
        self.active_ticks = self.active_ticks.saturating_sub(1);
    }

    /// Current top edge (raised while active)
    pub fn top(&self) -> f32 {
        if self.is_active() {
            self.rest_y - BUMPER_RAISE
        } else {
            self.rest_y
        }
    }

    /// Centre the bumper under a pointer x, clamped to the play area
    pub fn set_x_center(&mut self, pointer_x: f32, world_width: f32) {
        let max_x = (world_width - self.width).max(0.0);
        self.x = (pointer_x - self.width / 2.0).clamp(0.0, max_x);
    }

    /// Shift horizontally, clamped to the play area
    pub fn nudge(&mut self, dx: f32, world_width: f32) {
        let max_x = (world_width - self.width).max(0.0);
        self.x = (self.x + dx).clamp(0.0, max_x);
    }

    /// Top-left corner and size of the bumper as currently drawn
    pub fn rect(&self) -> (Vec2, Vec2) {
        (Vec2::new(self.x, self.top()), Vec2::new(self.width, self.height))
    }

    /// Resolve contact with a ball; returns whether they touched
    ///
    /// The ball is pushed out vertically only: up if its centre is above the
    /// bumper's midline, down otherwise.
    pub fn check_collision(&self, ball: &mut Ball) -> bool {
        let top = self.top();
        let r = ball.radius();

        let overlaps = ball.pos.x + r > self.x
            && ball.pos.x - r < self.x + self.width
            && ball.pos.y + r > top
            && ball.pos.y - r < top + self.height;
        if !overlaps {
            return false;
        }

        if ball.pos.y + r > top && ball.pos.y < top + self.height {
            if ball.pos.y < top + self.height / 2.0 {
                ball.pos.y = top - r;
            } else {
                ball.pos.y = top + self.height + r;
            }
        }

        if self.is_active() {
            let hit_x = (ball.pos.x - self.x) / self.width;
            ball.vel.y = BUMPER_KICK;
            ball.vel.x += (hit_x - 0.5) * BUMPER_SIDE_KICK;
        } else {
            ball.vel.y = -ball.vel.y.abs() * BOUNCE_DAMPING;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bumper() -> Bumper {
        Bumper::centered(600.0, 700.0)
    }

    #[test]
    fn test_centered_position() {
        let b = bumper();
        assert_eq!(b.x, 240.0);
        assert_eq!(b.rest_y, 655.0);
        assert!(!b.is_active());
    }

    #[test]
    fn test_activation_window_length() {
        let mut b = bumper();
        b.activate();
        for _ in 0..BUMPER_ACTIVE_TICKS - 1 {
            b.update(16.0);
        }
        assert!(b.is_active());
        b.update(16.0);
        assert!(!b.is_active());
        b.update(16.0);
        assert_eq!(b.active_ticks(), 0);
    }

    #[test]
    fn test_reactivate_resets_counter() {
        let mut b = bumper();
        b.activate();
        b.update(16.0);
        b.update(16.0);
        b.activate();
        assert_eq!(b.active_ticks(), BUMPER_ACTIVE_TICKS);
    }

    #[test]
    fn test_active_bumper_is_raised() {
        let mut b = bumper();
        b.activate();
        assert_eq!(b.top(), 655.0 - BUMPER_RAISE);
    }

    #[test]
    fn test_set_x_center_clamps() {
        let mut b = bumper();
        b.set_x_center(300.0, 600.0);
        assert_eq!(b.x, 240.0);
        b.set_x_center(-500.0, 600.0);
        assert_eq!(b.x, 0.0);
        b.set_x_center(10_000.0, 600.0);
        assert_eq!(b.x, 480.0);
    }

    #[test]
    fn test_nudge_clamps() {
        let mut b = bumper();
        b.x = 2.0;
        b.nudge(-BUMPER_MOVE_SPEED, 600.0);
        assert_eq!(b.x, 0.0);
        b.x = 478.0;
        b.nudge(BUMPER_MOVE_SPEED, 600.0);
        assert_eq!(b.x, 480.0);
    }

    #[test]
    fn test_idle_bounce_from_above() {
        let b = bumper();
        let mut ball = Ball::new(Vec2::new(300.0, 640.0), Vec2::new(1.0, 5.0), 20.0, 4, [255; 3]);
        assert!(b.check_collision(&mut ball));
        assert_eq!(ball.pos.y, 655.0 - 20.0);
        assert_eq!(ball.vel, Vec2::new(1.0, -4.0));
    }

    #[test]
    fn test_idle_bounce_always_points_up() {
        let b = bumper();
        let mut ball = Ball::new(Vec2::new(300.0, 640.0), Vec2::new(0.0, -5.0), 20.0, 4, [255; 3]);
        assert!(b.check_collision(&mut ball));
        assert_eq!(ball.vel.y, -4.0);
    }

    #[test]
    fn test_push_down_when_below_midline() {
        let b = bumper();
        let mut ball = Ball::new(Vec2::new(300.0, 675.0), Vec2::ZERO, 10.0, 4, [255; 3]);
        assert!(b.check_collision(&mut ball));
        assert_eq!(ball.pos.y, 655.0 + 25.0 + 10.0);
    }

    #[test]
    fn test_active_kick_varies_with_hit_position() {
        let mut b = bumper();
        b.activate();
        let top = b.top();

        let mut center = Ball::new(Vec2::new(300.0, top - 5.0), Vec2::new(0.0, 3.0), 10.0, 4, [255; 3]);
        assert!(b.check_collision(&mut center));
        assert_eq!(center.vel, Vec2::new(0.0, BUMPER_KICK));

        let mut left = Ball::new(Vec2::new(240.0, top - 5.0), Vec2::new(0.0, 3.0), 10.0, 4, [255; 3]);
        assert!(b.check_collision(&mut left));
        assert_eq!(left.vel.x, -0.5 * BUMPER_SIDE_KICK);

        let mut right = Ball::new(Vec2::new(360.0, top - 5.0), Vec2::new(1.0, 3.0), 10.0, 4, [255; 3]);
        assert!(b.check_collision(&mut right));
        assert_eq!(right.vel.x, 1.0 + 0.5 * BUMPER_SIDE_KICK);
    }

    #[test]
    fn test_miss() {
        let b = bumper();
        let mut ball = Ball::new(Vec2::new(100.0, 640.0), Vec2::new(1.0, 5.0), 20.0, 4, [255; 3]);
        assert!(!b.check_collision(&mut ball));
        assert_eq!(ball.pos, Vec2::new(100.0, 640.0));
        assert_eq!(ball.vel, Vec2::new(1.0, 5.0));
    }
}
