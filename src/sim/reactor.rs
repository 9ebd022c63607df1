//! Collision reaction
//!
//! The one rule of block breaking: any contact unlocks a block. A block
//! body starts pinned; the first collision-start event naming it flips it
//! to dynamic, after which gravity takes over. The transition is terminal
//! and does not care what the block touched - ball, wall, paddle, or
//! another falling block.

use crate::engine::{BodyId, CollisionPair, PhysicsWorld};

use super::scene::{BodyKind, SceneBodies};

/// Process one tick's worth of collision events: every block that appears
/// in a collision-start pair becomes dynamic. All other bodies, and all
/// collision-stop pairs, are left untouched.
///
/// Idempotent, and insensitive to pair order within the batch.
pub fn unlock_touched_blocks(
    world: &mut PhysicsWorld,
    scene: &SceneBodies,
    pairs: &[CollisionPair],
) {
    for pair in pairs {
        if !pair.started {
            continue;
        }
        unlock_if_block(world, scene, pair.body_a);
        unlock_if_block(world, scene, pair.body_b);
    }
}

fn unlock_if_block(world: &mut PhysicsWorld, scene: &SceneBodies, id: BodyId) {
    let Some(touched) = scene.find(id) else {
        return;
    };
    match touched.kind {
        BodyKind::Block => {
            if world.is_static(&touched.body) {
                log::debug!("block {} unlocked", id.0);
                world.set_static(&touched.body, false);
            }
        }
        BodyKind::Ball | BodyKind::Paddle | BodyKind::Wall => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::PhysicsWorld;
    use crate::settings::Settings;
    use crate::sim::scene::build_scene;

    fn built() -> (PhysicsWorld, SceneBodies) {
        let settings = Settings::default();
        let mut world = PhysicsWorld::new(settings.gravity);
        let scene = build_scene(&mut world, &settings);
        (world, scene)
    }

    fn started(a: BodyId, b: BodyId) -> CollisionPair {
        CollisionPair {
            body_a: a,
            body_b: b,
            started: true,
        }
    }

    #[test]
    fn block_hit_by_ball_becomes_dynamic() {
        let (mut world, scene) = built();
        let block = &scene.blocks[0];

        unlock_touched_blocks(&mut world, &scene, &[started(scene.ball.id, block.id)]);

        assert!(!world.is_static(&block.body));
        assert!(!world.is_static(&scene.ball.body));
    }

    #[test]
    fn any_contact_unlocks_not_just_the_ball() {
        let (mut world, scene) = built();
        let block = &scene.blocks[1];

        // Paddle-block contact counts too
        unlock_touched_blocks(&mut world, &scene, &[started(block.id, scene.paddle.id)]);

        assert!(!world.is_static(&block.body));
        assert!(world.is_static(&scene.paddle.body));
    }

    #[test]
    fn two_blocks_colliding_both_unlock() {
        let (mut world, scene) = built();
        let (a, b) = (&scene.blocks[2], &scene.blocks[3]);

        unlock_touched_blocks(&mut world, &scene, &[started(a.id, b.id)]);

        assert!(!world.is_static(&a.body));
        assert!(!world.is_static(&b.body));
    }

    #[test]
    fn non_block_pairs_change_nothing() {
        let (mut world, scene) = built();

        unlock_touched_blocks(
            &mut world,
            &scene,
            &[
                started(scene.ball.id, scene.walls[0].id),
                started(scene.ball.id, scene.paddle.id),
            ],
        );

        assert!(world.is_static(&scene.paddle.body));
        for wall in &scene.walls {
            assert!(world.is_static(&wall.body));
        }
        for block in &scene.blocks {
            assert!(world.is_static(&block.body));
        }
    }

    #[test]
    fn stop_pairs_are_ignored() {
        let (mut world, scene) = built();
        let block = &scene.blocks[4];

        let stop = CollisionPair {
            body_a: scene.ball.id,
            body_b: block.id,
            started: false,
        };
        unlock_touched_blocks(&mut world, &scene, &[stop]);

        assert!(world.is_static(&block.body));
    }

    #[test]
    fn reacting_twice_equals_reacting_once() {
        let (mut world, scene) = built();
        let block = &scene.blocks[5];
        let pairs = [started(scene.ball.id, block.id)];

        unlock_touched_blocks(&mut world, &scene, &pairs);
        unlock_touched_blocks(&mut world, &scene, &pairs);

        assert!(!world.is_static(&block.body));
    }

    #[test]
    fn unlocked_blocks_never_repin() {
        let (mut world, scene) = built();
        let block = &scene.blocks[6];

        unlock_touched_blocks(&mut world, &scene, &[started(scene.ball.id, block.id)]);
        assert!(!world.is_static(&block.body));

        // Keep colliding with it; the flag must stay dynamic
        for other in [scene.walls[1].id, scene.paddle.id, scene.blocks[7].id] {
            unlock_touched_blocks(&mut world, &scene, &[started(block.id, other)]);
            assert!(!world.is_static(&block.body));
        }
    }

    #[test]
    fn unknown_ids_are_skipped() {
        let (mut world, scene) = built();
        unlock_touched_blocks(&mut world, &scene, &[started(BodyId(9001), BodyId(9002))]);
        for block in &scene.blocks {
            assert!(world.is_static(&block.body));
        }
    }
}
