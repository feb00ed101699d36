//! Motor domain: physics layers and per-character state.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::motor::jump::JumpPhase;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Per-character motor state, written by the sensor and locomotion systems.
#[derive(Component, Debug, Default)]
pub struct MotorState {
    /// Derived each frame from the ground probe; jump logic only reads it.
    pub on_ground: bool,
    pub facing: Facing,
    /// Ramped horizontal speed. Stays in `[0, max_move_speed]`.
    pub current_move_speed: f32,
    pub jump: JumpPhase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}
