//! Scene construction
//!
//! Builds the static arena into the physics world: three walls (no bottom
//! wall - a missed ball leaves the field), the paddle, the ball, and the
//! block grid. Every body gets a `BodyKind` classification and a fill
//! color attached at creation; the returned registry is the only map from
//! engine ids back to game roles.

use glam::Vec2;

use crate::engine::{BodyDesc, BodyId, ColliderDesc, ColliderMaterial, PhysicsBody, PhysicsWorld};
use crate::settings::Settings;

/// Role of a body in the scene, attached at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Ball,
    Paddle,
    Wall,
    Block,
}

/// A body spawned by the builder: engine handle plus classification and
/// the fill color a renderer would draw it with.
#[derive(Debug, Clone)]
pub struct SpawnedBody {
    pub id: BodyId,
    pub kind: BodyKind,
    pub body: PhysicsBody,
    pub fill: String,
}

/// Registry of every body in the scene, grouped by role.
pub struct SceneBodies {
    pub paddle: SpawnedBody,
    pub ball: SpawnedBody,
    pub walls: [SpawnedBody; 3],
    pub blocks: Vec<SpawnedBody>,
}

impl SceneBodies {
    /// Look up a body by its engine id.
    pub fn find(&self, id: BodyId) -> Option<&SpawnedBody> {
        self.iter().find(|b| b.id == id)
    }

    /// Classification of the body with the given id, if it exists.
    pub fn kind_of(&self, id: BodyId) -> Option<BodyKind> {
        self.find(id).map(|b| b.kind)
    }

    /// Iterate over every body in the scene.
    pub fn iter(&self) -> impl Iterator<Item = &SpawnedBody> {
        std::iter::once(&self.paddle)
            .chain(std::iter::once(&self.ball))
            .chain(self.walls.iter())
            .chain(self.blocks.iter())
    }

    /// Total body count (paddle + ball + walls + blocks).
    pub fn len(&self) -> usize {
        2 + self.walls.len() + self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        false // a built scene always contains at least paddle and ball
    }
}

/// Build the full scene into `world` and return the body registry.
///
/// All bodies are registered in the physics world before this returns.
/// Pure construction: valid positive grid dimensions are the caller's
/// responsibility (checked in debug builds only).
pub fn build_scene(world: &mut PhysicsWorld, settings: &Settings) -> SceneBodies {
    debug_assert!(settings.grid.rows >= 1 && settings.grid.cols >= 1);
    debug_assert!(settings.grid.x_spacing > 0.0 && settings.grid.y_spacing > 0.0);

    let mut next_id = 0u32;
    let mut alloc_id = || {
        next_id += 1;
        BodyId(next_id)
    };

    let material = ColliderMaterial::default();

    // Paddle: static, moved only by direct position assignment
    let paddle_id = alloc_id();
    let paddle = SpawnedBody {
        id: paddle_id,
        kind: BodyKind::Paddle,
        fill: settings.palette.paddle.clone(),
        body: world.create_body(
            paddle_id,
            &BodyDesc::fixed(ColliderDesc::Cuboid {
                half_width: settings.paddle_width / 2.0,
                half_height: settings.paddle_height / 2.0,
            })
            .with_position(settings.paddle_spawn),
            material,
        ),
    };

    // Ball: the one dynamic body at scene start
    let ball_id = alloc_id();
    let ball = SpawnedBody {
        id: ball_id,
        kind: BodyKind::Ball,
        fill: settings.palette.ball.clone(),
        body: world.create_body(
            ball_id,
            &BodyDesc::dynamic(ColliderDesc::Ball {
                radius: settings.ball_radius,
            })
            .with_position(settings.ball_spawn)
            .with_ccd(true),
            material,
        ),
    };

    // Walls: top spans the full width, left and right the full height.
    // No bottom wall.
    let w = settings.field_width;
    let h = settings.field_height;
    let t = settings.wall_thickness;
    let wall_slabs = [
        (Vec2::new(w / 2.0, 0.0), w / 2.0, t / 2.0),
        (Vec2::new(0.0, h / 2.0), t / 2.0, h / 2.0),
        (Vec2::new(w, h / 2.0), t / 2.0, h / 2.0),
    ];
    let walls = wall_slabs.map(|(center, half_width, half_height)| {
        let id = alloc_id();
        SpawnedBody {
            id,
            kind: BodyKind::Wall,
            fill: settings.palette.wall.clone(),
            body: world.create_body(
                id,
                &BodyDesc::fixed(ColliderDesc::Cuboid {
                    half_width,
                    half_height,
                })
                .with_position(center),
                material,
            ),
        }
    });

    // Block grid: rows x cols static rectangles. Each one stays pinned
    // until its first collision contact unpins it.
    let grid = &settings.grid;
    let mut blocks = Vec::with_capacity(grid.block_count());
    for row in 0..grid.rows {
        for col in 0..grid.cols {
            let id = alloc_id();
            blocks.push(SpawnedBody {
                id,
                kind: BodyKind::Block,
                fill: settings.palette.block.clone(),
                body: world.create_body(
                    id,
                    &BodyDesc::fixed(ColliderDesc::Cuboid {
                        half_width: grid.block_width / 2.0,
                        half_height: grid.block_height / 2.0,
                    })
                    .with_position(grid.block_center(row, col)),
                    material,
                ),
            });
        }
    }

    let scene = SceneBodies {
        paddle,
        ball,
        walls,
        blocks,
    };
    log::info!(
        "scene built: {} bodies ({} blocks in a {}x{} grid)",
        scene.len(),
        scene.blocks.len(),
        grid.rows,
        grid.cols,
    );
    scene
}
