use glam::{Vec2, Vec3};
use hecs::{Entity, World};

use crate::components::{
    AnimationEntry, AnimationFsm, AnimationSet, AnimationState, ClipStore, Facing, Flipbook,
    FlipbookClip, MissingClip, MoveConfig, MoveState, Position, Velocity,
    ANIMATION_STATE_COUNT,
};

// ---------------------------------------------------------------------------
// Character tuning
// ---------------------------------------------------------------------------

/// Movement tuning for the demo character. Centimeter units: 600 cm/s walk,
/// 1000 cm/s launch, double gravity for a snappy arc, most steering kept
/// mid-air.
fn default_move_config() -> MoveConfig {
    MoveConfig {
        max_walk_speed: 600.0,
        jump_velocity: 1000.0,
        gravity_scale: 2.0,
        air_control: 0.8,
        ground_friction: 3.0,
    }
}

/// Demo clip table: state, loop flag, name, frame count, fps, tint.
/// Placeholder art. Only Run and Idle loop; every other sequence is a
/// one-shot the fallback table (or a landing) moves the machine out of.
const DEMO_CLIPS: [(AnimationState, bool, &str, usize, f32, Vec3); ANIMATION_STATE_COUNT] = [
    (AnimationState::Run,       true,  "run",        8, 12.0, Vec3::new(0.32, 0.62, 0.92)),
    (AnimationState::Idle,      true,  "idle",       4,  6.0, Vec3::new(0.45, 0.72, 0.95)),
    (AnimationState::JumpStart, false, "jump_start", 6, 18.0, Vec3::new(0.95, 0.80, 0.30)),
    (AnimationState::JumpEnd,   false, "jump_end",   4, 18.0, Vec3::new(0.95, 0.60, 0.25)),
    (AnimationState::DieStart,  false, "die_start",  6, 10.0, Vec3::new(0.80, 0.25, 0.25)),
    (AnimationState::DieEnd,    false, "die_end",    4,  8.0, Vec3::new(0.50, 0.15, 0.15)),
    (AnimationState::FireShot,  false, "fire_shot",  5, 20.0, Vec3::new(0.95, 0.95, 0.55)),
    (AnimationState::Falling,   false, "falling",    4, 10.0, Vec3::new(0.40, 0.45, 0.85)),
];

/// Register the demo clips and build the per-state slot table that
/// [`AnimationSet::new`] validates.
fn demo_animation_entries(
    clips: &mut ClipStore,
) -> [Option<AnimationEntry>; ANIMATION_STATE_COUNT] {
    let mut slots = [None; ANIMATION_STATE_COUNT];
    for (state, looping, name, frame_count, fps, tint) in DEMO_CLIPS {
        let clip = clips.add(FlipbookClip {
            name,
            frame_count,
            fps,
            tint,
        });
        slots[state.index()] = Some(AnimationEntry { clip, looping });
    }
    slots
}

// ---------------------------------------------------------------------------
// Public prefab factories
// ---------------------------------------------------------------------------

/// Spawn the player character at `pos`: movement tuning, facing, a flipbook
/// bound to the Idle clip, and the animation machine at Idle/Idle.
///
/// Fails if the clip table leaves any state without a clip, which is checked
/// here at spawn rather than on some later frame mid-game.
pub fn spawn_player(
    world: &mut World,
    clips: &mut ClipStore,
    pos: Vec2,
) -> Result<Entity, MissingClip> {
    let set = AnimationSet::new(demo_animation_entries(clips))?;
    let idle = set.entry(AnimationState::Idle);

    Ok(world.spawn((
        Position(pos),
        Velocity(Vec2::ZERO),
        default_move_config(),
        MoveState::new(),
        Facing::Right,
        Flipbook::new(idle.clip, idle.looping),
        AnimationFsm::new(),
        set,
    )))
}
