//! Motor domain: character motor plugin wiring and public exports.

mod components;
mod config;
mod jump;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{Facing, GameLayer, Ground, MotorState, Player};
pub use jump::{JumpEffect, JumpPhase, JumpStyle};
pub use resources::{MotorInput, MotorTuning};

use bevy::prelude::*;

use crate::motor::config::load_tuning_overrides;
#[cfg(feature = "dev-tools")]
use crate::motor::systems::draw_ground_probe;
use crate::motor::systems::{
    apply_jump, apply_movement, begin_jump, detect_ground, sample_input, update_facing,
};

pub struct MotorPlugin;

impl Plugin for MotorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MotorTuning>()
            .init_resource::<MotorInput>()
            .add_systems(Startup, load_tuning_overrides)
            .add_systems(Update, (sample_input, detect_ground))
            .add_systems(
                FixedUpdate,
                (begin_jump, apply_jump, apply_movement, update_facing).chain(),
            );

        #[cfg(feature = "dev-tools")]
        app.add_systems(Update, draw_ground_probe.after(detect_ground));
    }
}
