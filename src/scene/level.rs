use glam::Vec2;
use hecs::{Entity, World};

use crate::components::{ClipStore, MissingClip};
use crate::scene::prefabs::spawn_player;
use crate::systems::GROUND_Y;

/// Build the demo level.
/// Returns the clip store (owns all clip definitions) and the player entity,
/// spawned standing on the ground line.
pub fn load_demo_level(world: &mut World) -> Result<(ClipStore, Entity), MissingClip> {
    let mut clips = ClipStore::new();
    let player = spawn_player(world, &mut clips, Vec2::new(0.0, GROUND_Y))?;
    log::info!("demo level ready");
    Ok((clips, player))
}
