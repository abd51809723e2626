//! Ball-ball collision detection and response
//!
//! Balls have equal unit mass. Overlapping pairs are pushed apart along the
//! line between their centres, then exchange an impulse along that normal.

use glam::Vec2;

use super::ball::Ball;
use crate::consts::RESTITUTION;

/// Nudge applied to each ball when two centres coincide exactly
const COINCIDENT_NUDGE: Vec2 = Vec2::new(1.0, 1.0);

/// Separate and bounce two balls if they overlap
///
/// Returns true if the balls were overlapping. No impulse is applied when
/// the pair is already moving apart along the normal.
pub fn resolve_ball_pair(a: &mut Ball, b: &mut Ball) -> bool {
    let delta = b.pos - a.pos;
    let distance = delta.length();
    let min_distance = a.radius() + b.radius();

    if distance >= min_distance {
        return false;
    }

    // Positional correction, split equally
    if distance > 0.0 {
        let push = delta / distance * (min_distance - distance) * 0.5;
        a.pos -= push;
        b.pos += push;
    } else {
        a.pos -= COINCIDENT_NUDGE;
        b.pos += COINCIDENT_NUDGE;
    }

    let normal = (b.pos - a.pos).normalize_or_zero();
    if normal == Vec2::ZERO {
        return true;
    }

    let vel_along_normal = (b.vel - a.vel).dot(normal);
    if vel_along_normal > 0.0 {
        return true;
    }

    // Impulse scalar for two unit masses
    let j = -(1.0 + RESTITUTION) * vel_along_normal / 2.0;
    let impulse = normal * j;
    a.vel -= impulse;
    b.vel += impulse;

    true
}

/// Resolve every unordered pair once, in spawn order
pub fn resolve_all_pairs(balls: &mut [Ball]) {
    for i in 0..balls.len() {
        let (head, tail) = balls.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            resolve_ball_pair(a, b);
        }
    }
}
