use std::path::Path;
use std::sync::Arc;

use engine::{
    screen_px_to_ndc, InputAction, InputSnapshot, Scene, SceneCommand, Sprite, Texture,
    TextureError, Vec2, Viewport,
};
use tracing::{debug, info, warn};

const FRAME_DURATION_SECONDS: f32 = 0.1;
const WALK_SPEED_PER_TICK: f32 = 0.001;
const BASE_HEALTH: i32 = 100;
const ARCHER_DAMAGE: i32 = 20;
const BARBARIAN_DAMAGE: i32 = 25;
const ENEMY_BARBARIAN_DAMAGE: i32 = 25;
const WIZARD_DAMAGE: i32 = 30;
const PROBE_DAMAGE_PER_PRESS: i32 = 10;
const DEPLOY_POSITION: Vec2 = Vec2 { x: -0.85, y: -0.35 };
const PROBE_POSITION: Vec2 = Vec2 { x: 1.5, y: -0.35 };

include!("types.rs");
include!("scene_state.rs");
include!("scene_impl.rs");
include!("util.rs");

pub(crate) fn build_scene(assets: SiegeAssets) -> Result<SiegeScene, String> {
    SiegeScene::new(assets)
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
