//! Ball speed governance
//!
//! Restitution-1 collisions still leak or gain a little speed through the
//! solver, and a ball wedged between two static bodies can have its
//! velocity cancelled entirely. The governor runs once per tick, strictly
//! after integration, and pins the ball's speed back to the target.

use glam::Vec2;
use rand::Rng;

use crate::consts::STALL_EPSILON;

/// Return the governed velocity for a ball currently moving at `vel`.
///
/// - Stalled (magnitude below [`STALL_EPSILON`]): re-launch at
///   `(±target, ±target)` with independently random signs, unrelated to
///   the pre-stall direction. Keeps the game from silently freezing.
/// - Otherwise: rescale to magnitude exactly `target`, direction unchanged.
///
/// Idempotent per tick: a second call with no intervening velocity change
/// is a no-op.
pub fn regulate_speed<R: Rng>(vel: Vec2, target: f32, rng: &mut R) -> Vec2 {
    let magnitude = vel.length();

    if magnitude < STALL_EPSILON {
        log::debug!("ball stalled (|v| = {magnitude}); re-launching");
        let sign_x = if rng.random::<bool>() { 1.0 } else { -1.0 };
        let sign_y = if rng.random::<bool>() { 1.0 } else { -1.0 };
        return Vec2::new(target * sign_x, target * sign_y);
    }

    vel * (target / magnitude)
}
