mod animation;
mod flipbook;
mod movement;

pub use animation::{animation_system, dispatch_move_events, jump_requested};
pub use flipbook::flipbook_system;
pub use movement::{
    apply_move_input, facing_system, movement_system, request_jump, request_stop_jump, GROUND_Y,
    MOVE_DT,
};
