//! Motor domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::motor::jump::JumpStyle;

/// Author-time tunables for the character motor.
///
/// Defaults are in character units and match the reference tuning; the demo
/// scene overrides them at pixel scale via `assets/data/motor.ron`.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MotorTuning {
    pub max_move_speed: f32,
    /// Speed gained per fixed tick while horizontal input is held.
    pub acceleration: f32,
    pub jump_style: JumpStyle,
    /// Upward velocity applied on the tick a jump launches.
    pub base_jump_force: f32,
    /// Extra upward velocity per held tick (`JumpStyle::Hold` only).
    pub hold_jump_force: f32,
    /// Number of held ticks after the launch impulse before the jump caps out.
    pub hold_jump_ticks: u32,
    /// Ground probe box dimensions.
    pub ground_check_width: f32,
    pub ground_check_height: f32,
    /// How far below the character the probe box is swept.
    pub ground_check_distance: f32,
    /// Draw the probe box outline with gizmos.
    pub draw_ground_probe: bool,
}

impl Default for MotorTuning {
    fn default() -> Self {
        Self {
            max_move_speed: 5.0,
            acceleration: 1.0,
            jump_style: JumpStyle::Hold,
            base_jump_force: 10.0,
            hold_jump_force: 2.0,
            hold_jump_ticks: 15,
            ground_check_width: 0.7,
            ground_check_height: 0.2,
            ground_check_distance: 0.1,
            draw_ground_probe: false,
        }
    }
}

/// Input sampled once per frame and consumed by the fixed-tick systems.
#[derive(Resource, Debug, Default)]
pub struct MotorInput {
    /// Movement axis in [-1, 1] on each component.
    pub axis: Vec2,
    pub jump_held: bool,
    /// Jump edge, latched until the next fixed tick consumes it. Update and
    /// FixedUpdate run at different rates, so a plain per-frame flag would
    /// drop edges on frames without a fixed tick.
    pub jump_pressed: bool,
}
