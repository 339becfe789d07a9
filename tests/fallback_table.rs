use strider::components::AnimationState;

#[test]
fn fallback_never_leaves_the_state_set() {
    for state in AnimationState::ALL {
        let next = state.fallback();
        assert!(
            AnimationState::ALL.contains(&next),
            "fallback of {state:?} produced a state outside the table"
        );
    }
}

#[test]
fn one_shot_states_fall_back_where_the_table_says() {
    use AnimationState::*;

    // Airborne poses hold themselves until a landing event intervenes.
    assert_eq!(JumpStart.fallback(), JumpStart);
    assert_eq!(Falling.fallback(), Falling);

    // Landing recovery settles into the rest pose.
    assert_eq!(JumpEnd.fallback(), Idle);

    // Death chain: intro and shot feed the terminal pose, which self-loops.
    assert_eq!(DieStart.fallback(), DieEnd);
    assert_eq!(FireShot.fallback(), DieEnd);
    assert_eq!(DieEnd.fallback(), DieEnd);
}

#[test]
fn looping_states_default_to_idle() {
    // Run and Idle bind looping clips that never complete, so this arm is
    // never consulted in practice; it still has to map somewhere total.
    assert_eq!(AnimationState::Run.fallback(), AnimationState::Idle);
    assert_eq!(AnimationState::Idle.fallback(), AnimationState::Idle);
}

#[test]
fn die_end_is_terminal() {
    // Chasing fallbacks from any state must reach a fixed point; DieEnd and
    // the airborne holds are the only self-loops.
    for state in AnimationState::ALL {
        let mut cursor = state;
        for _ in 0..AnimationState::ALL.len() {
            cursor = cursor.fallback();
        }
        assert_eq!(
            cursor,
            cursor.fallback(),
            "fallback chain from {state:?} never settles"
        );
    }
}
