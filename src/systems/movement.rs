use hecs::{Entity, World};

use crate::components::{Facing, MoveConfig, MoveEvent, MoveState, Position, Velocity};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Fixed timestep for movement integration.
pub const MOVE_DT: f32 = 1.0 / 60.0;

/// Ground line of the level. Characters never sink below it.
pub const GROUND_Y: f32 = 0.0;

/// Base gravity in cm/s², scaled per character by `MoveConfig::gravity_scale`.
const BASE_GRAVITY: f32 = 980.0;

/// Fraction of upward speed kept when the jump key is released mid-ascent.
const JUMP_CUT_FACTOR: f32 = 0.5;

// ---------------------------------------------------------------------------
// Fixed-step integration
// ---------------------------------------------------------------------------

/// Run as many fixed movement steps as `frame_dt` pays for and return the
/// ground-contact edges they produced, in order. The caller dispatches these
/// to the animation layer before the animation systems run.
pub fn movement_system(world: &mut World, accumulator: &mut f32, frame_dt: f32) -> Vec<MoveEvent> {
    *accumulator += frame_dt;
    let mut events = Vec::new();
    while *accumulator >= MOVE_DT {
        movement_step(world, &mut events);
        *accumulator -= MOVE_DT;
    }
    events
}

/// One fixed step: steer, integrate, resolve against the ground line.
fn movement_step(world: &mut World, events: &mut Vec<MoveEvent>) {
    for (entity, (pos, vel, cfg, state)) in
        world.query_mut::<(&mut Position, &mut Velocity, &MoveConfig, &mut MoveState)>()
    {
        // Horizontal control. Ground input overrides velocity directly; air
        // input steers at reduced authority; no input on the ground brakes
        // by friction. No input mid-air preserves momentum.
        let axis = state.input_axis;
        if state.airborne {
            if axis != 0.0 {
                vel.0.x = axis * cfg.max_walk_speed * cfg.air_control;
            }
            vel.0.y -= BASE_GRAVITY * cfg.gravity_scale * MOVE_DT;
        } else if axis != 0.0 {
            vel.0.x = axis * cfg.max_walk_speed;
        } else {
            let damping = (1.0 - cfg.ground_friction * MOVE_DT).max(0.0);
            vel.0.x *= damping;
        }

        // Semi-implicit Euler: update velocity first, then position.
        pos.0 += vel.0 * MOVE_DT;

        // Ground resolution. Crossing the line downward clamps and lands;
        // rising above it (jump launch) goes airborne.
        let was_airborne = state.airborne;
        if pos.0.y > GROUND_Y {
            state.airborne = true;
        }
        if state.airborne && pos.0.y <= GROUND_Y {
            pos.0.y = GROUND_Y;
            vel.0.y = 0.0;
            state.airborne = false;
        }

        if state.airborne && !was_airborne {
            events.push(MoveEvent::Falling { entity });
        } else if was_airborne && !state.airborne {
            events.push(MoveEvent::Landed { entity });
        }
    }
}

// ---------------------------------------------------------------------------
// Input entry points
// ---------------------------------------------------------------------------

/// Forward a horizontal intent in [-1, 1] to the movement layer. Animation
/// is not touched here; it reads the resulting velocity on its next tick.
pub fn apply_move_input(world: &mut World, entity: Entity, axis: f32) {
    if let Ok(mut state) = world.get::<&mut MoveState>(entity) {
        state.input_axis = axis.clamp(-1.0, 1.0);
    }
}

/// Press the jump: launch if grounded. Mid-air requests leave velocity
/// alone (single-jump rule); the airborne edge itself is detected and
/// reported by the next movement step.
pub fn request_jump(world: &mut World, entity: Entity) {
    if let (Ok(mut vel), Ok(cfg), Ok(mut state)) = (
        world.get::<&mut Velocity>(entity),
        world.get::<&MoveConfig>(entity),
        world.get::<&mut MoveState>(entity),
    ) {
        state.jump_held = true;
        if !state.airborne {
            vel.0.y = cfg.jump_velocity;
        }
    }
}

/// Release the jump. While still ascending this cuts the remaining climb,
/// giving tap-short / hold-high jumps.
pub fn request_stop_jump(world: &mut World, entity: Entity) {
    if let (Ok(mut vel), Ok(mut state)) = (
        world.get::<&mut Velocity>(entity),
        world.get::<&mut MoveState>(entity),
    ) {
        if state.jump_held && state.airborne && vel.0.y > 0.0 {
            vel.0.y *= JUMP_CUT_FACTOR;
        }
        state.jump_held = false;
    }
}

// ---------------------------------------------------------------------------
// Facing
// ---------------------------------------------------------------------------

/// Face the sprite along horizontal velocity. Zero velocity keeps the last
/// facing, so stopping never snaps the character around.
pub fn facing_system(world: &mut World) {
    for (_e, (vel, facing)) in world.query_mut::<(&Velocity, &mut Facing)>() {
        if vel.0.x < 0.0 {
            *facing = Facing::Left;
        } else if vel.0.x > 0.0 {
            *facing = Facing::Right;
        }
    }
}
