//! Vector Balls - rotating dot spheres bouncing over a floor with two holes
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, match state)
//! - `renderer`: WebGPU rendering pipeline
//! - `platform`: Native window input and frame timing
//! - `settings`: Display preferences

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::AppError;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Simulation tick rate (one physics step per frame at 60 FPS)
    pub const SIM_HZ: u32 = 60;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / SIM_HZ as f32;
    /// Fixed simulation timestep in milliseconds (rotation and timers use ms)
    pub const SIM_DT_MS: f32 = 1000.0 / SIM_HZ as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Play area, in pixels
    pub const WORLD_WIDTH: f32 = 600.0;
    pub const WORLD_HEIGHT: f32 = 800.0;

    /// Floor line sits this far above the bottom edge
    pub const FLOOR_OFFSET: f32 = 100.0;
    /// Width of each of the two floor holes
    pub const HOLE_WIDTH: f32 = 60.0;

    /// Gravity added to vertical velocity each tick (pixels/tick²)
    pub const GRAVITY: f32 = 0.2;
    /// Velocity kept after bouncing off a wall or the floor
    pub const BOUNCE_DAMPING: f32 = 0.8;
    /// Restitution for ball-ball impacts
    pub const RESTITUTION: f32 = 0.8;

    /// Bumper defaults
    pub const BUMPER_WIDTH: f32 = 120.0;
    pub const BUMPER_HEIGHT: f32 = 25.0;
    /// Gap between bumper bottom and the floor line
    pub const BUMPER_FLOOR_GAP: f32 = 20.0;
    /// Ticks the bumper stays raised after activation
    pub const BUMPER_ACTIVE_TICKS: u32 = 5;
    /// How far the bumper rises while active
    pub const BUMPER_RAISE: f32 = 20.0;
    /// Arrow-key movement per tick
    pub const BUMPER_MOVE_SPEED: f32 = 5.0;
    /// Vertical velocity given by an active bumper (negative = up)
    pub const BUMPER_KICK: f32 = -16.0;
    /// Horizontal velocity range from hitting an active bumper off-centre
    pub const BUMPER_SIDE_KICK: f32 = 8.0;

    /// Sphere rotation speeds (radians per millisecond)
    pub const SPIN_X: f32 = 0.0015;
    pub const SPIN_Y: f32 = 0.0025;
    /// Perspective projection parameters
    pub const FOV: f32 = 2.5;
    pub const VIEWER_DISTANCE: f32 = 3.0;

    /// Time spent on the GAME OVER banner before asking to restart
    pub const GAME_OVER_MS: f32 = 5000.0;
    /// GAME OVER banner flash half-period
    pub const GAME_OVER_FLASH_MS: f32 = 500.0;
}
