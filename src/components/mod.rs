mod animation;
mod physics;
mod sprite;

pub use animation::{
    AnimationEntry, AnimationFsm, AnimationSet, AnimationState, MissingClip,
    ANIMATION_STATE_COUNT,
};
pub use physics::{Facing, MoveConfig, MoveEvent, MoveState, Position, Velocity};
pub use sprite::{ClipHandle, ClipStore, Flipbook, FlipbookClip};
