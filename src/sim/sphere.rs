//! Unit-sphere point clouds and their perspective projection
//!
//! Each ball is drawn as a cloud of dots sampled on a unit sphere. The dots
//! are rotated about X then Y and projected around the ball centre, so the
//! ball appears to spin while it flies.

use glam::{Mat3, Vec2, Vec3};

use crate::consts::{FOV, VIEWER_DISTANCE};

/// A sample point after rotation and projection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    /// Screen position in pixels
    pub screen: Vec2,
    /// Rotated z in [-1, 1]; larger is closer to the viewer
    pub depth: f32,
}

/// Generate `count` points evenly spread over the unit sphere
///
/// Uses the golden-angle spiral: z walks linearly from 1 to -1 while the
/// azimuth advances by the golden angle each step.
pub fn sphere_points(count: usize) -> Vec<Vec3> {
    let golden_angle = std::f32::consts::PI * (3.0 - 5.0_f32.sqrt());
    let denom = count.saturating_sub(1).max(1) as f32;

    (0..count)
        .map(|i| {
            let theta = golden_angle * i as f32;
            let z = 1.0 - (2.0 * i as f32) / denom;
            let ring = (1.0 - z * z).max(0.0).sqrt();
            Vec3::new(theta.cos() * ring, theta.sin() * ring, z)
        })
        .collect()
}

/// Rotate a point about the X axis, then about the Y axis
///
/// The order is significant: the two rotations do not commute.
#[inline]
pub fn rotate(point: Vec3, angles: Vec2) -> Vec3 {
    Mat3::from_rotation_y(angles.y) * Mat3::from_rotation_x(angles.x) * point
}

/// Perspective-project a rotated point around a ball centre
#[inline]
pub fn project(rotated: Vec3, center: Vec2, radius: f32) -> ProjectedPoint {
    let scale = FOV * radius / (VIEWER_DISTANCE - rotated.z);
    ProjectedPoint {
        screen: center + Vec2::new(rotated.x, rotated.y) * scale,
        depth: rotated.z,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_points_span_pole_to_pole() {
        let points = sphere_points(25);
        assert_eq!(points.len(), 25);
        assert!((points[0].z - 1.0).abs() < 1e-6);
        assert!((points[24].z + 1.0).abs() < 1e-6);
        for p in &points {
            assert!((p.length() - 1.0).abs() < 1e-4, "point off sphere: {p:?}");
        }
    }

    #[test]
    fn test_single_point_does_not_divide_by_zero() {
        let points = sphere_points(1);
        assert_eq!(points.len(), 1);
        assert!(points[0].is_finite());
        assert!(sphere_points(0).is_empty());
    }

    #[test]
    fn test_points_are_deterministic() {
        assert_eq!(sphere_points(20), sphere_points(20));
    }

    #[test]
    fn test_rotate_matches_axis_formulas() {
        let p = Vec3::new(0.3, -0.5, 0.81);
        let (ax, ay) = (0.7_f32, -1.2_f32);

        // X axis first
        let y2 = p.y * ax.cos() - p.z * ax.sin();
        let z2 = p.y * ax.sin() + p.z * ax.cos();
        // then Y axis
        let x2 = p.x * ay.cos() + z2 * ay.sin();
        let z3 = -p.x * ay.sin() + z2 * ay.cos();

        let r = rotate(p, Vec2::new(ax, ay));
        assert!((r - Vec3::new(x2, y2, z3)).length() < 1e-5);
    }

    #[test]
    fn test_rotation_order_matters() {
        let p = Vec3::new(1.0, 0.0, 0.0);
        let xy = rotate(p, Vec2::new(0.9, 0.4));
        let yx = Mat3::from_rotation_x(0.9) * Mat3::from_rotation_y(0.4) * p;
        assert!((xy - yx).length() > 1e-3);
    }

    #[test]
    fn test_project_scales_with_depth() {
        let center = Vec2::new(100.0, 200.0);
        let flat = project(Vec3::new(1.0, 0.0, 0.0), center, 40.0);
        // z = 0: scale = fov * r / viewer_distance
        assert!((flat.screen.x - (100.0 + FOV * 40.0 / VIEWER_DISTANCE)).abs() < 1e-4);
        assert_eq!(flat.screen.y, 200.0);
        assert_eq!(flat.depth, 0.0);

        let near = project(Vec3::new(0.6, 0.0, 0.8), center, 40.0);
        let far = project(Vec3::new(0.6, 0.0, -0.8), center, 40.0);
        assert!(near.screen.x - center.x > far.screen.x - center.x);
        assert_eq!(near.depth, 0.8);
    }

    proptest! {
        #[test]
        fn prop_rotation_keeps_points_on_sphere(
            count in 2usize..64,
            ax in -50.0f32..50.0,
            ay in -50.0f32..50.0,
        ) {
            for p in sphere_points(count) {
                let r = rotate(p, Vec2::new(ax, ay));
                prop_assert!((r.length() - 1.0).abs() < 1e-3);
                prop_assert!(r.z >= -1.001 && r.z <= 1.001);
            }
        }
    }
}
