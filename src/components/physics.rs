use glam::Vec2;
use hecs::Entity;

// ---------------------------------------------------------------------------
// Spatial components
// ---------------------------------------------------------------------------

/// World position in centimeters, x right / y up, anchored at the feet.
/// The scroller is plane-locked: there is no depth axis.
pub struct Position(pub Vec2);

/// Linear velocity in centimeters per second.
pub struct Velocity(pub Vec2);

/// Which way the character sprite faces. Follows the sign of horizontal
/// velocity; standing still keeps the last facing.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Facing {
    Left,
    Right,
}

// ---------------------------------------------------------------------------
// Movement
// ---------------------------------------------------------------------------

/// Movement tuning attached to the character at spawn. Centimeter units.
pub struct MoveConfig {
    /// Top horizontal speed on the ground.
    pub max_walk_speed: f32,
    /// Upward launch speed applied by a jump.
    pub jump_velocity: f32,
    /// Multiplier over the base gravity of 980 cm/s².
    pub gravity_scale: f32,
    /// Fraction of ground speed reachable by steering mid-air.
    pub air_control: f32,
    /// Exponential decay rate of horizontal speed on the ground with no
    /// input. Higher brakes harder.
    pub ground_friction: f32,
}

/// Mutable movement bookkeeping for one character.
pub struct MoveState {
    /// Horizontal intent in [-1, 1], written by the input layer each frame.
    pub input_axis: f32,
    /// True while off the ground line.
    pub airborne: bool,
    /// True from jump press until release. Releasing while still ascending
    /// cuts the jump short.
    pub jump_held: bool,
}

impl MoveState {
    pub fn new() -> Self {
        Self {
            input_axis: 0.0,
            airborne: false,
            jump_held: false,
        }
    }
}

/// Discrete movement edge produced by `movement_step`. Collected per step
/// and dispatched to the animation layer afterwards.
#[derive(Clone, Copy, Debug)]
pub enum MoveEvent {
    /// The character reached the ground this step after being airborne.
    Landed { entity: Entity },
    /// The character left the ground this step.
    Falling { entity: Entity },
}
