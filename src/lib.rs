//! Block Breaker - a Breakout-style arcade game core
//!
//! Core modules:
//! - `sim`: Simulation policies (scene layout, launch sampling, speed
//!   governance, block unlocking, pointer binding)
//! - `engine`: Physics engine boundary (rapier2d wrapper)
//! - `session`: Scene session owning the world, RNG, and tick loop
//! - `settings`: Data-driven scene configuration

pub mod engine;
pub mod session;
pub mod settings;
pub mod sim;

pub use session::Session;
pub use settings::{GridLayout, Palette, Settings};

/// Game configuration constants
pub mod consts {
    /// Integration timestep per tick. Velocities are field units per tick,
    /// so one step advances exactly one tick's worth of motion.
    pub const TICK_DT: f32 = 1.0;

    /// Play field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;
    /// Wall slab thickness
    pub const WALL_THICKNESS: f32 = 20.0;
    /// Downward gravity, units per tick squared
    pub const GRAVITY_Y: f32 = 0.04;

    /// Target ball speed the governor holds, units per tick
    pub const BALL_SPEED: f32 = 5.0;
    /// Minimum absolute value of each launch velocity component; rules out
    /// near-horizontal and near-vertical opening shots
    pub const MIN_LAUNCH_COMPONENT: f32 = 2.0;
    /// Below this speed the ball counts as stalled and is re-launched
    pub const STALL_EPSILON: f32 = 0.1;
}
