//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Stable iteration order (balls keep their spawn order)
//! - No rendering or platform dependencies

pub mod ball;
pub mod bumper;
pub mod collision;
pub mod sphere;
pub mod state;
pub mod tick;

pub use ball::{Ball, initial_balls};
pub use bumper::Bumper;
pub use collision::{resolve_ball_pair, resolve_all_pairs};
pub use sphere::{ProjectedPoint, project, rotate, sphere_points};
pub use state::{Floor, GamePhase, GameState};
pub use tick::{TickInput, tick};
