//! Ball entity
//!
//! One record per ball: position, velocity, spin and appearance travel
//! together, so balls can be removed without keeping parallel lists in step.

use glam::{Vec2, Vec3};

use super::sphere::{ProjectedPoint, project, rotate, sphere_points};
use crate::consts::{SPIN_X, SPIN_Y};

/// A spinning dot-sphere ball
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    radius: f32,
    /// Unit-sphere sample points, fixed at construction
    points: Vec<Vec3>,
    /// Accumulated rotation about X (x) and Y (y), radians
    pub angles: Vec2,
    /// Rotation speed per axis, radians per millisecond
    spin: Vec2,
    pub color: [u8; 3],
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, point_count: usize, color: [u8; 3]) -> Self {
        Self {
            pos,
            vel,
            radius,
            points: sphere_points(point_count),
            angles: Vec2::ZERO,
            spin: Vec2::new(SPIN_X, SPIN_Y),
            color,
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Advance the rotation angles by `dt_ms` milliseconds
    ///
    /// Angles accumulate without wrapping; they only ever feed sin/cos.
    pub fn update(&mut self, dt_ms: f32) {
        self.angles += self.spin * dt_ms;
    }

    /// Project every sample point, sorted by descending depth
    pub fn projected_points(&self) -> Vec<ProjectedPoint> {
        let mut projected: Vec<ProjectedPoint> = self
            .points
            .iter()
            .map(|&p| project(rotate(p, self.angles), self.pos, self.radius))
            .collect();
        projected.sort_by(|a, b| b.depth.total_cmp(&a.depth));
        projected
    }

    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }
}

/// The fixed opening roster, laid out relative to the play area
///
/// Positions are floored to whole pixels so the layout is identical on
/// every reset.
pub fn initial_balls(width: f32, height: f32) -> Vec<Ball> {
    let at = |fx: f32, fy: f32| Vec2::new((width * fx).floor(), (height * fy).floor());

    vec![
        Ball::new(at(0.5, 0.5), Vec2::new(3.0, 2.0), 50.0, 25, [255, 100, 100]),
        Ball::new(at(0.25, 0.25), Vec2::new(-2.0, 3.0), 40.0, 20, [100, 255, 100]),
        Ball::new(at(0.75, 0.75), Vec2::new(4.0, -1.0), 45.0, 22, [100, 100, 255]),
        Ball::new(at(0.75, 0.25), Vec2::new(-3.0, 1.0), 35.0, 18, [255, 255, 100]),
        Ball::new(at(0.25, 0.75), Vec2::new(2.0, -2.0), 42.0, 21, [255, 100, 255]),
        Ball::new(at(0.5, 1.0 / 3.0), Vec2::new(1.0, 4.0), 38.0, 19, [100, 255, 255]),
        Ball::new(at(0.5, 2.0 / 3.0), Vec2::new(-1.0, -3.0), 47.0, 24, [255, 150, 100]),
        Ball::new(at(1.0 / 3.0, 0.5), Vec2::new(3.0, -2.0), 33.0, 17, [150, 100, 255]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_accumulates_angles() {
        let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO, 10.0, 8, [255; 3]);
        ball.update(100.0);
        ball.update(100.0);
        assert!((ball.angles.x - 200.0 * SPIN_X).abs() < 1e-6);
        assert!((ball.angles.y - 200.0 * SPIN_Y).abs() < 1e-6);
    }

    #[test]
    fn test_projected_points_sorted_by_depth() {
        let mut ball = Ball::new(Vec2::new(50.0, 50.0), Vec2::ZERO, 20.0, 30, [255; 3]);
        ball.update(333.0);
        let projected = ball.projected_points();
        assert_eq!(projected.len(), 30);
        assert!(projected.windows(2).all(|w| w[0].depth >= w[1].depth));
    }

    #[test]
    fn test_initial_roster_layout() {
        let balls = initial_balls(600.0, 800.0);
        assert_eq!(balls.len(), 8);
        assert_eq!(balls[0].pos, Vec2::new(300.0, 400.0));
        assert_eq!(balls[5].pos, Vec2::new(300.0, 266.0));
        assert_eq!(balls[6].pos, Vec2::new(300.0, 533.0));
        assert_eq!(balls[7].pos, Vec2::new(200.0, 400.0));
        assert_eq!(balls[2].points().len(), 22);
        assert_eq!(balls[3].radius(), 35.0);
    }
}
