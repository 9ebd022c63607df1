//! Simulation policies
//!
//! The rules that sit on top of the physics engine:
//! - Scene layout (walls, paddle, ball, block grid)
//! - Randomized launch direction with per-axis minimums
//! - Per-tick ball speed governance and stall recovery
//! - Collision-triggered block unlocking
//! - Pointer-to-paddle position mapping
//!
//! Everything here is engine-agnostic policy; the only engine contact is
//! through opaque body handles and ids.

pub mod governor;
pub mod launch;
pub mod pointer;
pub mod reactor;
pub mod scene;

pub use governor::regulate_speed;
pub use launch::sample_initial_velocity;
pub use pointer::{paddle_target, pointer_to_field};
pub use reactor::unlock_touched_blocks;
pub use scene::{BodyKind, SceneBodies, SpawnedBody, build_scene};
