use glam::Vec3;
use strider::components::{
    AnimationEntry, AnimationFsm, AnimationSet, AnimationState, ClipStore, Flipbook, FlipbookClip,
    ANIMATION_STATE_COUNT,
};

/// One distinct two-frame clip per state, looping only for Run and Idle.
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

/// Run a bound one-shot clip to completion.
fn run_out(fb: &mut Flipbook, clips: &ClipStore) {
    let def = clips.get(fb.clip());
    fb.advance(def, 10.0);
    assert!(!fb.is_playing(), "clip should have completed");
}

#[test]
fn finished_one_shot_advances_through_the_fallback_chain() {
    let (clips, set) = fixture();
    let mut fsm = AnimationFsm::new();
    fsm.current = AnimationState::DieStart;
    fsm.next = AnimationState::DieStart;
    let entry = set.entry(AnimationState::DieStart);
    let mut fb = Flipbook::new(entry.clip, entry.looping);
    run_out(&mut fb, &clips);

    // Tick 1: current takes the queued next (still DieStart) and the
    // fallback of DieStart is queued. Same clip, so nothing restarts.
    fsm.tick(&mut fb, &set, 0.0);
    assert_eq!(fsm.current, AnimationState::DieStart);
    assert_eq!(fsm.next, AnimationState::DieEnd);
    assert!(!fb.is_playing(), "same clip must stay parked");

    // Tick 2: the clip is still finished, so the machine walks on to
    // DieEnd, whose clip differs and restarts.
    fsm.tick(&mut fb, &set, 0.0);
    assert_eq!(fsm.current, AnimationState::DieEnd);
    assert_eq!(fsm.next, AnimationState::DieEnd);
    assert_eq!(fb.clip(), set.entry(AnimationState::DieEnd).clip);
    assert!(fb.is_playing(), "entering a new state restarts its clip");
}

#[test]
fn looping_playback_tracks_horizontal_speed() {
    let (_clips, set) = fixture();
    let mut fsm = AnimationFsm::new();
    let idle = set.entry(AnimationState::Idle);
    let mut fb = Flipbook::new(idle.clip, idle.looping);

    fsm.tick(&mut fb, &set, 320.0 * 320.0);
    assert_eq!(fsm.current, AnimationState::Run);
    assert_eq!(fb.clip(), set.entry(AnimationState::Run).clip);

    fsm.tick(&mut fb, &set, 0.0);
    assert_eq!(fsm.current, AnimationState::Idle);
    assert_eq!(fb.clip(), set.entry(AnimationState::Idle).clip);
}

#[test]
fn locomotion_rederivation_leaves_next_alone() {
    let (_clips, set) = fixture();
    let mut fsm = AnimationFsm::new();
    fsm.next = AnimationState::DieEnd;
    let idle = set.entry(AnimationState::Idle);
    let mut fb = Flipbook::new(idle.clip, idle.looping);

    fsm.tick(&mut fb, &set, 100.0);
    assert_eq!(fsm.current, AnimationState::Run);
    assert_eq!(
        fsm.next,
        AnimationState::DieEnd,
        "the looping branch only re-derives current"
    );
}

#[test]
fn mid_one_shot_tick_changes_nothing() {
    let (clips, set) = fixture();
    let mut fsm = AnimationFsm::new();
    fsm.current = AnimationState::JumpStart;
    fsm.next = AnimationState::JumpStart;
    let entry = set.entry(AnimationState::JumpStart);
    let mut fb = Flipbook::new(entry.clip, entry.looping);

    // One frame into the launch clip, still playing.
    fb.advance(clips.get(fb.clip()), 0.15);
    assert_eq!(fb.frame(), 1);

    // Even at full speed the one-shot keeps the state, and the cursor is
    // not reset by the same-clip bind check.
    fsm.tick(&mut fb, &set, 600.0 * 600.0);
    assert_eq!(fsm.current, AnimationState::JumpStart);
    assert_eq!(fsm.next, AnimationState::JumpStart);
    assert_eq!(fb.frame(), 1, "mid-playback ticks must not restart the clip");
    assert!(fb.is_playing());
}
