//! Motor domain: system modules for the per-frame and per-tick stages.

pub(crate) mod input;
pub(crate) mod locomotion;
pub(crate) mod sensor;

pub(crate) use input::sample_input;
pub(crate) use locomotion::{apply_jump, apply_movement, begin_jump, update_facing};
#[cfg(feature = "dev-tools")]
pub(crate) use sensor::draw_ground_probe;
pub(crate) use sensor::detect_ground;
