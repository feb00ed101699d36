//! Motor domain: per-tick jump sequencing.
//!
//! The jump is a small state value advanced exactly once per fixed tick.
//! `Pending` applies the launch impulse on the tick after the edge was
//! consumed; `Holding` feeds extra upward velocity while the button stays
//! down, up to the configured tick cap.

use serde::{Deserialize, Serialize};

/// Selects between a one-shot impulse jump and a hold-to-jump-higher jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JumpStyle {
    /// Single upward impulse on the tick after the jump edge.
    Impulse,
    /// Impulse followed by smaller per-tick boosts while the button is held.
    Hold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JumpPhase {
    #[default]
    Idle,
    /// Jump accepted; the launch impulse lands on the next fixed tick.
    Pending,
    /// Hold sequence in flight. `tick` counts held ticks, starting at 1.
    Holding { tick: u32 },
}

/// Velocity change requested by one sequencer step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JumpEffect {
    None,
    AddVelocity(f32),
    ZeroVelocity,
}

impl JumpPhase {
    /// Begin a jump if the character is grounded and no sequence is already
    /// in flight. Returns whether the jump was accepted.
    pub fn try_start(&mut self, grounded: bool) -> bool {
        if *self == JumpPhase::Idle && grounded {
            *self = JumpPhase::Pending;
            true
        } else {
            false
        }
    }

    /// Advance the sequence by one fixed tick.
    pub fn advance(
        self,
        style: JumpStyle,
        base_force: f32,
        hold_force: f32,
        hold_ticks: u32,
        held: bool,
        grounded: bool,
    ) -> (JumpPhase, JumpEffect) {
        match self {
            JumpPhase::Idle => (JumpPhase::Idle, JumpEffect::None),
            JumpPhase::Pending => {
                let next = match style {
                    JumpStyle::Impulse => JumpPhase::Idle,
                    JumpStyle::Hold if hold_ticks == 0 => JumpPhase::Idle,
                    JumpStyle::Hold => JumpPhase::Holding { tick: 1 },
                };
                (next, JumpEffect::AddVelocity(base_force))
            }
            JumpPhase::Holding { tick } => {
                // Release ends the boost without touching velocity.
                if !held {
                    return (JumpPhase::Idle, JumpEffect::None);
                }

                // Ground contact during the first few ticks is still the
                // takeoff itself; from tick 4 on it counts as a landing and
                // cuts the jump short.
                if tick >= 4 && grounded {
                    return (JumpPhase::Idle, JumpEffect::ZeroVelocity);
                }

                let next = if tick >= hold_ticks {
                    JumpPhase::Idle
                } else {
                    JumpPhase::Holding { tick: tick + 1 }
                };
                (next, JumpEffect::AddVelocity(hold_force))
            }
        }
    }
}
