//! Motor domain: tests for the speed ramp, jump sequencer, and config.

use std::path::Path;

use super::config::{load_tuning, ron_options};
use super::systems::locomotion::{facing_for, ramp_speed};
use super::{Facing, JumpEffect, JumpPhase, JumpStyle, MotorState, MotorTuning};

// -----------------------------------------------------------------------------
// Speed ramp tests
// -----------------------------------------------------------------------------

#[test]
fn test_ramp_reaches_max_and_holds() {
    let tuning = MotorTuning::default();
    assert_eq!(tuning.max_move_speed, 5.0);
    assert_eq!(tuning.acceleration, 1.0);

    let mut speed = 0.0;
    let mut observed = Vec::new();
    for _ in 0..6 {
        speed = ramp_speed(speed, tuning.acceleration, tuning.max_move_speed, 1.0);
        observed.push(speed);
    }

    assert_eq!(observed, vec![1.0, 2.0, 3.0, 4.0, 5.0, 5.0]);
}

#[test]
fn test_ramp_zero_input_zeroes_retained_speed() {
    let speed = ramp_speed(4.0, 1.0, 5.0, 0.0);
    assert_eq!(speed, 0.0);
}

#[test]
fn test_ramp_uses_input_magnitude_not_sign() {
    let right = ramp_speed(2.0, 1.0, 5.0, 1.0);
    let left = ramp_speed(2.0, 1.0, 5.0, -1.0);
    assert_eq!(right, left);
    assert!(left >= 0.0);
}

#[test]
fn test_ramp_never_exceeds_max() {
    let mut speed = 0.0;
    for _ in 0..100 {
        speed = ramp_speed(speed, 1.0, 5.0, 1.0);
        assert!(speed <= 5.0);
        assert!(speed >= 0.0);
    }
}

#[test]
fn test_ramp_partial_input_scales_speed() {
    // Analog-style input at half deflection halves the effective speed.
    let speed = ramp_speed(4.0, 1.0, 5.0, 0.5);
    assert_eq!(speed, 2.5);
}

// -----------------------------------------------------------------------------
// Jump start gating tests
// -----------------------------------------------------------------------------

#[test]
fn test_jump_starts_only_when_grounded() {
    let mut phase = JumpPhase::Idle;
    assert!(!phase.try_start(false));
    assert_eq!(phase, JumpPhase::Idle);

    assert!(phase.try_start(true));
    assert_eq!(phase, JumpPhase::Pending);
}

#[test]
fn test_jump_edge_ignored_while_sequence_active() {
    let mut phase = JumpPhase::Pending;
    assert!(!phase.try_start(true));
    assert_eq!(phase, JumpPhase::Pending);

    let mut phase = JumpPhase::Holding { tick: 3 };
    assert!(!phase.try_start(true));
    assert_eq!(phase, JumpPhase::Holding { tick: 3 });
}

// -----------------------------------------------------------------------------
// Impulse style tests
// -----------------------------------------------------------------------------

#[test]
fn test_impulse_jump_is_one_shot() {
    let (next, effect) =
        JumpPhase::Pending.advance(JumpStyle::Impulse, 10.0, 2.0, 15, true, true);
    assert_eq!(next, JumpPhase::Idle);
    assert_eq!(effect, JumpEffect::AddVelocity(10.0));

    // The following tick is inert.
    let (next, effect) = next.advance(JumpStyle::Impulse, 10.0, 2.0, 15, true, true);
    assert_eq!(next, JumpPhase::Idle);
    assert_eq!(effect, JumpEffect::None);
}

// -----------------------------------------------------------------------------
// Hold style tests
// -----------------------------------------------------------------------------

/// Run a full hold-style sequence from `Pending`, collecting each effect.
/// `held_until` is the last tick index on which the button is down;
/// `grounded_from` is the first tick index reporting ground contact again.
fn run_hold_sequence(
    hold_ticks: u32,
    held_until: u32,
    grounded_from: u32,
) -> (Vec<JumpEffect>, u32) {
    let mut phase = JumpPhase::Pending;
    let mut effects = Vec::new();
    let mut ticks = 0;

    loop {
        ticks += 1;
        let held = ticks <= held_until;
        let grounded = ticks >= grounded_from;
        let (next, effect) = phase.advance(JumpStyle::Hold, 10.0, 2.0, hold_ticks, held, grounded);
        effects.push(effect);
        phase = next;
        if phase == JumpPhase::Idle {
            return (effects, ticks);
        }
        assert!(ticks < 100, "sequence failed to terminate");
    }
}

#[test]
fn test_hold_full_sequence_applies_base_then_hold_boosts() {
    let (effects, _) = run_hold_sequence(15, u32::MAX, u32::MAX);

    assert_eq!(effects.len(), 16);
    assert_eq!(effects[0], JumpEffect::AddVelocity(10.0));
    for effect in &effects[1..] {
        assert_eq!(*effect, JumpEffect::AddVelocity(2.0));
    }
}

#[test]
fn test_hold_release_terminates_without_zeroing() {
    // Button released after the 5th hold boost.
    let (effects, ticks) = run_hold_sequence(15, 6, u32::MAX);

    // Launch + 5 boosts + one inert release tick.
    assert_eq!(ticks, 7);
    assert_eq!(*effects.last().unwrap(), JumpEffect::None);
    assert!(!effects.contains(&JumpEffect::ZeroVelocity));
}

#[test]
fn test_hold_landing_after_tick_four_zeroes_velocity() {
    // Ground contact reappears on the 5th hold tick (sequencer tick 6).
    let (effects, _) = run_hold_sequence(15, u32::MAX, 6);

    assert_eq!(*effects.last().unwrap(), JumpEffect::ZeroVelocity);
}

#[test]
fn test_hold_early_ground_contact_is_takeoff_overlap() {
    // Grounded through the first three hold ticks, airborne afterwards:
    // the sequence must run to the cap untouched.
    let mut phase = JumpPhase::Pending;
    let (next, _) = phase.advance(JumpStyle::Hold, 10.0, 2.0, 15, true, true);
    phase = next;

    for tick in 1..=3u32 {
        assert_eq!(phase, JumpPhase::Holding { tick });
        let (next, effect) = phase.advance(JumpStyle::Hold, 10.0, 2.0, 15, true, true);
        assert_eq!(effect, JumpEffect::AddVelocity(2.0));
        phase = next;
    }

    assert_eq!(phase, JumpPhase::Holding { tick: 4 });
}

#[test]
fn test_hold_with_zero_cap_degenerates_to_impulse() {
    let (next, effect) = JumpPhase::Pending.advance(JumpStyle::Hold, 10.0, 2.0, 0, true, false);
    assert_eq!(next, JumpPhase::Idle);
    assert_eq!(effect, JumpEffect::AddVelocity(10.0));
}

#[test]
fn test_idle_ticks_are_inert() {
    let (next, effect) = JumpPhase::Idle.advance(JumpStyle::Hold, 10.0, 2.0, 15, true, true);
    assert_eq!(next, JumpPhase::Idle);
    assert_eq!(effect, JumpEffect::None);
}

// -----------------------------------------------------------------------------
// Facing tests
// -----------------------------------------------------------------------------

#[test]
fn test_facing_follows_input_sign() {
    assert_eq!(facing_for(1.0, Facing::Left), Facing::Right);
    assert_eq!(facing_for(-1.0, Facing::Right), Facing::Left);
}

#[test]
fn test_facing_retained_on_zero_input() {
    assert_eq!(facing_for(0.0, Facing::Left), Facing::Left);
    assert_eq!(facing_for(0.0, Facing::Right), Facing::Right);
}

// -----------------------------------------------------------------------------
// State and config tests
// -----------------------------------------------------------------------------

#[test]
fn test_motor_state_default() {
    let state = MotorState::default();
    assert!(!state.on_ground);
    assert_eq!(state.facing, Facing::Right);
    assert_eq!(state.current_move_speed, 0.0);
    assert_eq!(state.jump, JumpPhase::Idle);
}

#[test]
fn test_tuning_parses_from_ron() {
    let src = r#"(
        max_move_speed: 320.0,
        acceleration: 16.0,
        jump_style: Impulse,
        base_jump_force: 680.0,
    )"#;

    let tuning: MotorTuning = ron_options().from_str(src).unwrap();
    assert_eq!(tuning.max_move_speed, 320.0);
    assert_eq!(tuning.jump_style, JumpStyle::Impulse);
    // Unlisted fields fall back to defaults.
    assert_eq!(tuning.hold_jump_ticks, 15);
    assert_eq!(tuning.ground_check_distance, 0.1);
}

#[test]
fn test_missing_tuning_file_keeps_defaults() {
    let result = load_tuning(Path::new("does/not/exist/motor.ron"));
    assert!(matches!(result, Ok(None)));
}
