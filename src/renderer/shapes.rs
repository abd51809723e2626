//! Shape generation for 2D primitives
//!
//! Everything is emitted as a triangle list in world pixels.

use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, PI};

use super::vertex::Vertex;

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);
    push_fan(&mut vertices, center, radius, 0.0, 2.0 * PI, segments, color);
    vertices
}

/// Generate vertices for a rectangle with rounded corners
pub fn rounded_rect(min: Vec2, size: Vec2, radius: f32, color: [f32; 4]) -> Vec<Vertex> {
    let r = radius.min(size.x / 2.0).min(size.y / 2.0).max(0.0);
    let max = min + size;
    let mut vertices = Vec::with_capacity(18 + 4 * 6 * 3);

    // Centre column, then the two side strips between the corners
    push_quad(&mut vertices, Vec2::new(min.x + r, min.y), Vec2::new(max.x - r, max.y), color);
    push_quad(&mut vertices, Vec2::new(min.x, min.y + r), Vec2::new(min.x + r, max.y - r), color);
    push_quad(&mut vertices, Vec2::new(max.x - r, min.y + r), Vec2::new(max.x, max.y - r), color);

    if r > 0.0 {
        let corners = [
            (Vec2::new(max.x - r, max.y - r), 0.0),
            (Vec2::new(min.x + r, max.y - r), FRAC_PI_2),
            (Vec2::new(min.x + r, min.y + r), PI),
            (Vec2::new(max.x - r, min.y + r), PI + FRAC_PI_2),
        ];
        for (center, start) in corners {
            push_fan(&mut vertices, center, r, start, FRAC_PI_2, 6, color);
        }
    }

    vertices
}

/// Generate vertices for a straight line of the given thickness
pub fn line(from: Vec2, to: Vec2, thickness: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    let perp = Vec2::new(-dir.y, dir.x) * (thickness / 2.0);

    let a = from + perp;
    let b = from - perp;
    let c = to + perp;
    let d = to - perp;

    vec![
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(d.x, d.y, color),
    ]
}

/// Two triangles covering [min, max]
pub(crate) fn push_quad(vertices: &mut Vec<Vertex>, min: Vec2, max: Vec2, color: [f32; 4]) {
    vertices.push(Vertex::new(min.x, min.y, color));
    vertices.push(Vertex::new(max.x, min.y, color));
    vertices.push(Vertex::new(min.x, max.y, color));

    vertices.push(Vertex::new(min.x, max.y, color));
    vertices.push(Vertex::new(max.x, min.y, color));
    vertices.push(Vertex::new(max.x, max.y, color));
}

/// Triangle fan from the centre across `span` radians
fn push_fan(
    vertices: &mut Vec<Vertex>,
    center: Vec2,
    radius: f32,
    start: f32,
    span: f32,
    segments: u32,
    color: [f32; 4],
) {
    let segments = segments.max(1);
    for i in 0..segments {
        let theta1 = start + (i as f32 / segments as f32) * span;
        let theta2 = start + ((i + 1) as f32 / segments as f32) * span;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }
}
