//! Motor domain: fixed-tick locomotion and jump integration.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::motor::{Facing, JumpEffect, MotorInput, MotorState, MotorTuning, Player};

/// Consume the latched jump edge and start a sequence if the character
/// qualifies. An edge while airborne or mid-jump is discarded, not buffered.
pub(crate) fn begin_jump(
    mut input: ResMut<MotorInput>,
    mut query: Query<&mut MotorState, With<Player>>,
) {
    if !input.jump_pressed {
        return;
    }
    input.jump_pressed = false;

    for mut state in &mut query {
        let on_ground = state.on_ground;
        if state.jump.try_start(on_ground) {
            debug!("Jump started: on_ground={}", on_ground);
        }
    }
}

/// Advance each character's jump sequence by one tick and apply the
/// requested vertical velocity change.
pub(crate) fn apply_jump(
    input: Res<MotorInput>,
    tuning: Res<MotorTuning>,
    mut query: Query<(&mut MotorState, &mut LinearVelocity), With<Player>>,
) {
    for (mut state, mut velocity) in &mut query {
        let grounded = state.on_ground;
        let (next, effect) = state.jump.advance(
            tuning.jump_style,
            tuning.base_jump_force,
            tuning.hold_jump_force,
            tuning.hold_jump_ticks,
            input.jump_held,
            grounded,
        );
        state.jump = next;

        match effect {
            JumpEffect::None => {}
            JumpEffect::AddVelocity(dv) => velocity.y += dv,
            JumpEffect::ZeroVelocity => velocity.y = 0.0,
        }
    }
}

/// Ramp the retained speed toward the configured maximum, scaled by the
/// input magnitude so releasing input zeroes it the same tick.
pub(crate) fn ramp_speed(current: f32, acceleration: f32, max: f32, axis_x: f32) -> f32 {
    (current + acceleration).min(max) * axis_x.abs()
}

pub(crate) fn apply_movement(
    input: Res<MotorInput>,
    tuning: Res<MotorTuning>,
    mut query: Query<(&mut MotorState, &mut LinearVelocity), With<Player>>,
) {
    for (mut state, mut velocity) in &mut query {
        state.current_move_speed = ramp_speed(
            state.current_move_speed,
            tuning.acceleration,
            tuning.max_move_speed,
            input.axis.x,
        );

        // Signed input recovers the direction; vertical velocity is owned by
        // gravity and the jump sequencer.
        velocity.x = input.axis.x * state.current_move_speed;
    }
}

/// Facing for a given horizontal input; exactly zero retains the current one.
pub(crate) fn facing_for(axis_x: f32, current: Facing) -> Facing {
    if axis_x < 0.0 {
        Facing::Left
    } else if axis_x > 0.0 {
        Facing::Right
    } else {
        current
    }
}

pub(crate) fn update_facing(
    input: Res<MotorInput>,
    mut query: Query<(&mut MotorState, &mut Sprite), With<Player>>,
) {
    for (mut state, mut sprite) in &mut query {
        state.facing = facing_for(input.axis.x, state.facing);
        sprite.flip_x = state.facing == Facing::Left;
    }
}
