//! Scene session
//!
//! A `Session` exclusively owns the physics world, the body registry, and
//! the seeded RNG, and it is the only clock: callers drive time by calling
//! `step()`. Pointer input arrives as a plain method call, interleaved
//! with ticks however the host likes - everything is single-threaded.
//!
//! Teardown is the `Drop` impl, so every exit path clears the engine
//! exactly once; there is no listener registration to leak.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::TICK_DT;
use crate::engine::{CollisionPair, PhysicsWorld};
use crate::settings::Settings;
use crate::sim::{
    SceneBodies, build_scene, paddle_target, pointer_to_field, regulate_speed,
    sample_initial_velocity, unlock_touched_blocks,
};

/// One running Breakout scene: world, bodies, RNG, and tick loop.
pub struct Session {
    world: PhysicsWorld,
    scene: SceneBodies,
    rng: Pcg32,
    settings: Settings,
    /// Client-space origin of the play field, subtracted from pointer input
    field_origin: Vec2,
    time_ticks: u64,
    collision_scratch: Vec<CollisionPair>,
}

impl Session {
    /// Build the scene, sample the launch velocity, and hand back a session
    /// ready to step. Reproducible for a given `settings` + `seed`.
    pub fn new(settings: Settings, seed: u64) -> Self {
        let mut world = PhysicsWorld::new(settings.gravity);
        world.set_dt(TICK_DT);

        let scene = build_scene(&mut world, &settings);

        let mut rng = Pcg32::seed_from_u64(seed);
        let launch = sample_initial_velocity(settings.ball_speed, &mut rng);
        world.set_velocity(&scene.ball.body, launch);
        log::info!("session started: seed {seed}, launch velocity ({}, {})", launch.x, launch.y);

        Self {
            world,
            scene,
            rng,
            settings,
            field_origin: Vec2::ZERO,
            time_ticks: 0,
            collision_scratch: Vec::new(),
        }
    }

    /// Advance the simulation one tick, in the contract order:
    /// integration + collision detection, then the collision reactor over
    /// this tick's collision-start pairs, then the speed governor.
    pub fn step(&mut self) {
        self.collision_scratch.clear();
        self.world.step_into(&mut self.collision_scratch);

        unlock_touched_blocks(&mut self.world, &self.scene, &self.collision_scratch);

        let vel = self.world.velocity(&self.scene.ball.body);
        let governed = regulate_speed(vel, self.settings.ball_speed, &mut self.rng);
        self.world.set_velocity(&self.scene.ball.body, governed);

        self.time_ticks += 1;
    }

    /// Handle a pointer-move event at absolute client coordinates: the
    /// paddle jumps to the pointer's x (field-local), keeping its fixed y.
    pub fn pointer_moved(&mut self, client: Vec2) {
        let field_local = pointer_to_field(client, self.field_origin);
        let target = paddle_target(field_local, self.settings.paddle_spawn.y);
        self.world.set_position(&self.scene.paddle.body, target);
    }

    /// Update the play field's client-space origin (e.g. after a relayout).
    pub fn set_field_origin(&mut self, origin: Vec2) {
        self.field_origin = origin;
    }

    // === Read-only observation ===

    /// Ticks stepped so far.
    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The scene's body registry (handles, kinds, fill colors).
    pub fn scene(&self) -> &SceneBodies {
        &self.scene
    }

    pub fn ball_position(&self) -> Vec2 {
        self.world.position(&self.scene.ball.body)
    }

    pub fn ball_velocity(&self) -> Vec2 {
        self.world.velocity(&self.scene.ball.body)
    }

    pub fn paddle_position(&self) -> Vec2 {
        self.world.position(&self.scene.paddle.body)
    }

    /// Number of blocks still pinned in the grid.
    pub fn static_block_count(&self) -> usize {
        self.scene
            .blocks
            .iter()
            .filter(|b| self.world.is_static(&b.body))
            .count()
    }

    /// Bodies currently registered in the physics world.
    pub fn body_count(&self) -> usize {
        self.world.body_count()
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        // The single teardown path: stop is implicit (no further steps are
        // possible once the session is gone), bodies and engine state go here.
        self.world.clear();
        log::info!("session torn down after {} ticks", self.time_ticks);
    }
}
