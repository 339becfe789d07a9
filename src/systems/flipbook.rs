use hecs::World;

use crate::components::{ClipStore, Flipbook};

/// Advance every flipbook by `dt` against its bound clip definition. Runs
/// **before** `animation_system` so a clip completing this frame is seen by
/// the state machine this frame.
pub fn flipbook_system(world: &mut World, clips: &ClipStore, dt: f32) {
    for (_e, flipbook) in world.query_mut::<&mut Flipbook>() {
        let clip = clips.get(flipbook.clip());
        if flipbook.advance(clip, dt) {
            log::trace!("clip '{}' finished", clip.name);
        }
    }
}
