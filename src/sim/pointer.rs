//! Pointer-to-paddle mapping
//!
//! The paddle tracks the pointer's horizontal position directly - no
//! smoothing, no velocity, no clamping (the input source owns clamping).
//! Its y coordinate never changes; it is a static body repositioned by
//! assignment, not pushed by forces.

use glam::Vec2;

/// Translate an absolute client-space pointer position into field-local
/// coordinates by subtracting the field's origin.
pub fn pointer_to_field(client: Vec2, field_origin: Vec2) -> Vec2 {
    client - field_origin
}

/// Paddle center for a pointer at `field_local`: the pointer's x, the
/// paddle's fixed y. The pointer's y coordinate is ignored entirely.
pub fn paddle_target(field_local: Vec2, paddle_y: f32) -> Vec2 {
    Vec2::new(field_local.x, paddle_y)
}
