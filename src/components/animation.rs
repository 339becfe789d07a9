use thiserror::Error;

use crate::components::sprite::ClipHandle;

// ---------------------------------------------------------------------------
// Animation states
// ---------------------------------------------------------------------------

/// All discrete animation states the character can be in.
///
/// Transition logic lives in `src/systems/animation.rs` (where it has access
/// to flipbook playback and movement context) rather than here so that this
/// file stays pure data. The discriminant doubles as the index into the
/// per-character [`AnimationSet`] table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationState {
    /// Looping locomotion, nonzero horizontal speed.
    Run,
    /// Looping rest pose.
    Idle,
    /// One-shot launch pose. Held (via its self-fallback) until landing.
    JumpStart,
    /// One-shot landing recovery.
    JumpEnd,
    /// One-shot death intro.
    DieStart,
    /// Death end pose. Terminal: falls back to itself forever.
    DieEnd,
    /// One-shot shot pose.
    FireShot,
    /// One-shot airborne-descent pose. Held until landing.
    Falling,
}

/// Number of animation states. Sizes the per-character clip table.
pub const ANIMATION_STATE_COUNT: usize = 8;

impl AnimationState {
    /// Every state, in table order.
    pub const ALL: [AnimationState; ANIMATION_STATE_COUNT] = [
        AnimationState::Run,
        AnimationState::Idle,
        AnimationState::JumpStart,
        AnimationState::JumpEnd,
        AnimationState::DieStart,
        AnimationState::DieEnd,
        AnimationState::FireShot,
        AnimationState::Falling,
    ];

    /// Index of this state in the animation table.
    pub fn index(self) -> usize {
        self as usize
    }
}

// ---------------------------------------------------------------------------
// Per-character animation table
// ---------------------------------------------------------------------------

/// One slot of the animation table: which clip a state plays and whether
/// that clip loops.
#[derive(Clone, Copy)]
pub struct AnimationEntry {
    pub clip: ClipHandle,
    pub looping: bool,
}

/// A state was left without a clip when the animation table was assembled.
#[derive(Debug, Error)]
#[error("no clip configured for animation state {0:?}")]
pub struct MissingClip(pub AnimationState);

/// Maps each [`AnimationState`] to its clip entry. Attached to the character
/// at spawn and immutable afterwards.
///
/// The constructor rejects partial tables, so runtime lookups are total:
/// systems index it without checking.
pub struct AnimationSet {
    entries: [AnimationEntry; ANIMATION_STATE_COUNT],
}

impl AnimationSet {
    /// Validate a sparse table into a dense one. Any unset slot is a content
    /// configuration defect and rejects the whole set.
    pub fn new(
        slots: [Option<AnimationEntry>; ANIMATION_STATE_COUNT],
    ) -> Result<Self, MissingClip> {
        let mut entries = [AnimationEntry {
            clip: ClipHandle(0),
            looping: false,
        }; ANIMATION_STATE_COUNT];
        for (i, slot) in slots.into_iter().enumerate() {
            entries[i] = slot.ok_or(MissingClip(AnimationState::ALL[i]))?;
        }
        Ok(Self { entries })
    }

    pub fn entry(&self, state: AnimationState) -> AnimationEntry {
        self.entries[state.index()]
    }
}

// ---------------------------------------------------------------------------
// State machine component
// ---------------------------------------------------------------------------

/// Animation state machine attached to the character entity.
///
/// `current` is the state whose clip is (or is about to be) playing. `next`
/// is where the machine settles once the current one-shot clip finishes;
/// looping states ignore it. Both start at Idle.
pub struct AnimationFsm {
    pub current: AnimationState,
    pub next: AnimationState,
}

impl AnimationFsm {
    pub fn new() -> Self {
        Self {
            current: AnimationState::Idle,
            next: AnimationState::Idle,
        }
    }
}
