use hecs::{Entity, World};

use crate::components::{
    AnimationEntry, AnimationFsm, AnimationSet, AnimationState, Flipbook, MoveEvent, Velocity,
};
use crate::systems::movement::request_jump;

// ---------------------------------------------------------------------------
// Fallback transitions
// ---------------------------------------------------------------------------

impl AnimationState {
    /// Where the machine settles after this state's one-shot clip completes.
    ///
    /// Consulted only from the clip-finished branch of [`AnimationFsm::tick`].
    /// JumpStart and Falling fall back to themselves, holding their final
    /// frame until a landing event moves the machine on. Run and Idle bind
    /// looping clips that never complete, so their arm never fires; it maps
    /// to Idle to keep the function total.
    pub fn fallback(self) -> AnimationState {
        match self {
            AnimationState::JumpStart => AnimationState::JumpStart,
            AnimationState::JumpEnd => AnimationState::Idle,
            AnimationState::Falling => AnimationState::Falling,
            AnimationState::FireShot => AnimationState::DieEnd,
            AnimationState::DieStart => AnimationState::DieEnd,
            AnimationState::DieEnd => AnimationState::DieEnd,
            AnimationState::Run | AnimationState::Idle => AnimationState::Idle,
        }
    }
}

// ---------------------------------------------------------------------------
// State machine
// ---------------------------------------------------------------------------

impl AnimationFsm {
    /// Re-derive the animation once per frame.
    ///
    /// Decision order:
    /// 1. The bound one-shot clip finished: advance to `next` and queue the
    ///    fallback of `next` for the tick after that.
    /// 2. A looping clip is mid-playback: locomotion owns the state. Run
    ///    when there is horizontal speed, Idle otherwise.
    /// 3. A one-shot clip is mid-playback: leave it alone until it finishes.
    ///
    /// `speed_sq` is the squared horizontal speed; vertical motion never
    /// flips Run/Idle.
    ///
    /// After the decision, the flipbook is rebound only when the computed
    /// state's clip differs from the bound one. Same-clip ticks leave the
    /// cursor untouched, so looping clips do not restart every frame.
    pub fn tick(&mut self, flipbook: &mut Flipbook, set: &AnimationSet, speed_sq: f32) {
        if !flipbook.is_playing() {
            self.current = self.next;
            self.next = self.next.fallback();
        } else if flipbook.is_looping() {
            self.current = if speed_sq > 0.0 {
                AnimationState::Run
            } else {
                AnimationState::Idle
            };
        }

        let entry = set.entry(self.current);
        if flipbook.clip() != entry.clip {
            bind(entry, flipbook);
        }
    }

    /// Ground contact after being airborne: play the landing recovery now.
    /// The fallback table walks it on to Idle once the clip completes.
    pub fn landed(&mut self, flipbook: &mut Flipbook, set: &AnimationSet) {
        self.force(AnimationState::JumpEnd, flipbook, set);
    }

    /// The character went airborne. Ignored while a jump animation is in
    /// charge: the movement layer reports the airborne edge during a jump's
    /// ascent too, and that must not cancel JumpStart or JumpEnd.
    pub fn falling(&mut self, flipbook: &mut Flipbook, set: &AnimationSet) {
        if matches!(
            self.current,
            AnimationState::JumpStart | AnimationState::JumpEnd
        ) {
            return;
        }
        self.force(AnimationState::Falling, flipbook, set);
    }

    /// A jump was requested. Unguarded: a fresh jump replays the launch clip
    /// over whatever is active, including Falling, a death intro, or a prior
    /// jump.
    pub fn jump_started(&mut self, flipbook: &mut Flipbook, set: &AnimationSet) {
        self.force(AnimationState::JumpStart, flipbook, set);
    }

    /// Event path: snap both cursors to `state` and restart its clip
    /// unconditionally, so a forced state replays even when its clip is
    /// already bound.
    fn force(&mut self, state: AnimationState, flipbook: &mut Flipbook, set: &AnimationSet) {
        self.current = state;
        self.next = state;
        bind(set.entry(state), flipbook);
    }
}

fn bind(entry: AnimationEntry, flipbook: &mut Flipbook) {
    flipbook.set_clip(entry.clip);
    flipbook.set_looping(entry.looping);
    flipbook.play_from_start();
}

// ---------------------------------------------------------------------------
// Systems
// ---------------------------------------------------------------------------

/// Drive every character's animation machine from its playback state and
/// velocity. Runs **after** `flipbook_system` so a clip that completed this
/// frame is handled this frame, and after movement events have been
/// dispatched so forced states win over the per-frame re-derivation.
pub fn animation_system(world: &mut World) {
    for (_e, (fsm, flipbook, set, vel)) in
        world.query_mut::<(&mut AnimationFsm, &mut Flipbook, &AnimationSet, &Velocity)>()
    {
        let speed_sq = vel.0.x * vel.0.x;
        let before = fsm.current;
        fsm.tick(flipbook, set, speed_sq);
        if fsm.current != before {
            log::debug!("animation -> {:?}", fsm.current);
        }
    }
}

/// Apply the movement edges collected by `movement_step` to the matching
/// character's animation machine. Runs between the movement steps and
/// `animation_system`.
pub fn dispatch_move_events(world: &mut World, events: &[MoveEvent]) {
    for event in events {
        let entity = match event {
            MoveEvent::Landed { entity } | MoveEvent::Falling { entity } => *entity,
        };
        if let (Ok(mut fsm), Ok(mut flipbook), Ok(set)) = (
            world.get::<&mut AnimationFsm>(entity),
            world.get::<&mut Flipbook>(entity),
            world.get::<&AnimationSet>(entity),
        ) {
            match event {
                MoveEvent::Landed { .. } => {
                    log::debug!("landed");
                    fsm.landed(&mut flipbook, &set);
                }
                MoveEvent::Falling { .. } => {
                    fsm.falling(&mut flipbook, &set);
                }
            }
        }
    }
}

/// Input-side jump entry point: fire the physical impulse and restart the
/// launch clip. The animation side is unguarded even when the movement layer
/// refuses the impulse mid-air.
pub fn jump_requested(world: &mut World, entity: Entity) {
    request_jump(world, entity);

    if let (Ok(mut fsm), Ok(mut flipbook), Ok(set)) = (
        world.get::<&mut AnimationFsm>(entity),
        world.get::<&mut Flipbook>(entity),
        world.get::<&AnimationSet>(entity),
    ) {
        log::debug!("jump requested");
        fsm.jump_started(&mut flipbook, &set);
    }
}
