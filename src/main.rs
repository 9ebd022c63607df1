//! Block Breaker entry point
//!
//! Headless demo run: builds a scene session, sweeps the paddle across the
//! field like a pointer drag, and steps the simulation while logging
//! progress. The real front end subscribes a renderer to the same session.

use glam::Vec2;

use block_breaker::{Session, Settings};

const DEMO_TICKS: u64 = 600;

fn main() {
    env_logger::init();
    log::info!("Block Breaker (headless demo) starting...");

    let settings = Settings::default();
    let field_width = settings.field_width;
    let seed: u64 = rand::random();
    let mut session = Session::new(settings, seed);

    for tick in 0..DEMO_TICKS {
        // Sweep the pointer back and forth across the field
        let phase = tick as f32 / 240.0 * std::f32::consts::TAU;
        let pointer_x = (phase.sin() * 0.5 + 0.5) * field_width;
        session.pointer_moved(Vec2::new(pointer_x, 0.0));

        session.step();

        if tick % 120 == 0 {
            let pos = session.ball_position();
            let vel = session.ball_velocity();
            log::info!(
                "tick {tick}: ball at ({:.1}, {:.1}) moving ({:.2}, {:.2}), {} blocks still pinned",
                pos.x,
                pos.y,
                vel.x,
                vel.y,
                session.static_block_count(),
            );
        }
    }

    log::info!(
        "demo finished: {} ticks, {} blocks still pinned",
        session.time_ticks(),
        session.static_block_count(),
    );
}
