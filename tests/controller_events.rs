use glam::Vec3;
use strider::components::{
    AnimationEntry, AnimationFsm, AnimationSet, AnimationState, ClipStore, Flipbook, FlipbookClip,
    ANIMATION_STATE_COUNT,
};

fn fixture() -> (ClipStore, AnimationSet) {
    let mut clips = ClipStore::new();
    let mut slots = [None; ANIMATION_STATE_COUNT];
    for state in AnimationState::ALL {
        let looping = matches!(state, AnimationState::Run | AnimationState::Idle);
        let clip = clips.add(FlipbookClip {
            name: "fixture",
            frame_count: 2,
            fps: 10.0,
            tint: Vec3::ONE,
        });
        slots[state.index()] = Some(AnimationEntry { clip, looping });
    }
    (clips, AnimationSet::new(slots).expect("all slots filled"))
}

/// Force the machine into `state` with its clip bound, no event involved.
fn put_in(
    fsm: &mut AnimationFsm,
    fb: &mut Flipbook,
    set: &AnimationSet,
    state: AnimationState,
) {
    fsm.current = state;
    fsm.next = state;
    let entry = set.entry(state);
    fb.set_clip(entry.clip);
    fb.set_looping(entry.looping);
    fb.play_from_start();
}

#[test]
fn landing_forces_jump_end_and_restarts_its_clip() {
    let (_clips, set) = fixture();
    let idle = set.entry(AnimationState::Idle);
    let mut fb = Flipbook::new(idle.clip, idle.looping);
    let mut fsm = AnimationFsm::new();
    put_in(&mut fsm, &mut fb, &set, AnimationState::Falling);

    fsm.landed(&mut fb, &set);

    assert_eq!(fsm.current, AnimationState::JumpEnd);
    assert_eq!(fsm.next, AnimationState::JumpEnd);
    assert_eq!(fb.clip(), set.entry(AnimationState::JumpEnd).clip);
    assert_eq!(fb.frame(), 0);
    assert!(fb.is_playing());
    assert!(!fb.is_looping(), "landing recovery is a one-shot");
}

#[test]
fn falling_is_ignored_while_a_jump_animation_owns_the_pose() {
    let (_clips, set) = fixture();
    let idle = set.entry(AnimationState::Idle);
    let mut fb = Flipbook::new(idle.clip, idle.looping);
    let mut fsm = AnimationFsm::new();

    // A fresh jump reports an airborne edge on its first ascent step. The
    // launch pose must survive it.
    put_in(&mut fsm, &mut fb, &set, AnimationState::JumpStart);
    fsm.falling(&mut fb, &set);
    assert_eq!(fsm.current, AnimationState::JumpStart);
    assert_eq!(fb.clip(), set.entry(AnimationState::JumpStart).clip);

    // Same for the landing recovery, e.g. a bounce straight off the ground.
    put_in(&mut fsm, &mut fb, &set, AnimationState::JumpEnd);
    fsm.falling(&mut fb, &set);
    assert_eq!(fsm.current, AnimationState::JumpEnd);
}

#[test]
fn falling_from_locomotion_binds_and_restarts() {
    let (clips, set) = fixture();
    let run = set.entry(AnimationState::Run);
    let mut fb = Flipbook::new(run.clip, run.looping);
    let mut fsm = AnimationFsm::new();
    fsm.current = AnimationState::Run;
    fsm.next = AnimationState::Run;

    // Partway through the run cycle, so the restart is observable.
    fb.advance(clips.get(fb.clip()), 0.15);
    assert_eq!(fb.frame(), 1);

    fsm.falling(&mut fb, &set);

    assert_eq!(fsm.current, AnimationState::Falling);
    assert_eq!(fsm.next, AnimationState::Falling);
    assert_eq!(fb.clip(), set.entry(AnimationState::Falling).clip);
    assert_eq!(fb.frame(), 0, "the falling pose starts from its first frame");
    assert!(!fb.is_looping());
}

#[test]
fn jump_request_overrides_any_state() {
    let (_clips, set) = fixture();
    let idle = set.entry(AnimationState::Idle);

    for from in [
        AnimationState::Falling,
        AnimationState::DieStart,
        AnimationState::Run,
        AnimationState::JumpEnd,
    ] {
        let mut fb = Flipbook::new(idle.clip, idle.looping);
        let mut fsm = AnimationFsm::new();
        put_in(&mut fsm, &mut fb, &set, from);

        fsm.jump_started(&mut fb, &set);

        assert_eq!(fsm.current, AnimationState::JumpStart, "from {from:?}");
        assert_eq!(fsm.next, AnimationState::JumpStart, "from {from:?}");
        assert_eq!(fb.clip(), set.entry(AnimationState::JumpStart).clip);
    }
}

#[test]
fn repeated_jump_requests_replay_the_launch_clip() {
    let (clips, set) = fixture();
    let idle = set.entry(AnimationState::Idle);
    let mut fb = Flipbook::new(idle.clip, idle.looping);
    let mut fsm = AnimationFsm::new();

    fsm.jump_started(&mut fb, &set);
    fb.advance(clips.get(fb.clip()), 0.15);
    assert_eq!(fb.frame(), 1);

    // Unlike the per-tick bind, the event path restarts even when the
    // launch clip is already bound.
    fsm.jump_started(&mut fb, &set);
    assert_eq!(fb.frame(), 0);
    assert!(fb.is_playing());
}
