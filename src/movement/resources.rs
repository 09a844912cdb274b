//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::movement::GameLayer;
use crate::movement::sinks::{ControlInput, SoundClip};

/// Tunable parameters for the player controller.
///
/// Loaded once at startup and never mutated during play; each
/// `CharacterController` takes its own copy.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementTuning {
    pub move_speed: f32,
    pub jump_power: f32,
    pub dash_speed: f32,
    pub dash_duration: f32,
    /// Value the dash cooldown is reset to when a dash runs.
    pub dash_cooldown: f32,
    /// Gravity scale applied while not wall-clinging.
    pub fall_gravity_scale: f32,
    /// Seconds after a wall jump before control and wall-cling return.
    pub wall_jump_lock_time: f32,
    /// Horizontal push of a wall jump with no horizontal input.
    pub wall_kick_speed: f32,
    /// Horizontal push of a wall jump with horizontal input held.
    pub wall_hop_speed: f32,
    /// Vertical boost of a wall jump with horizontal input held.
    pub wall_hop_lift: f32,
    pub facing_dead_zone: f32,
    pub probe_distance: f32,
    pub ground_layers: Vec<GameLayer>,
    pub wall_layers: Vec<GameLayer>,
    pub jump_sound: SoundClip,
    /// When set, an active dash suspends horizontal control, wall-cling and jumping.
    pub exclusive_dash: bool,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            move_speed: 8.0,
            jump_power: 14.0,
            dash_speed: 24.0,
            dash_duration: 0.2,
            dash_cooldown: 1.0,
            fall_gravity_scale: 4.0,
            wall_jump_lock_time: 0.2,
            wall_kick_speed: 10.0,
            wall_hop_speed: 3.0,
            wall_hop_lift: 6.0,
            facing_dead_zone: 0.01,
            probe_distance: 0.1,
            ground_layers: vec![GameLayer::Ground],
            wall_layers: vec![GameLayer::Wall],
            jump_sound: SoundClip::new("audio/jump.ogg"),
            exclusive_dash: true,
        }
    }
}

/// A tunable that cannot produce sensible per-tick behavior.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TuningError {
    #[error("tuning field `{field}` must be finite")]
    NotFinite { field: &'static str },
    #[error("tuning field `{field}` must not be negative (got {value})")]
    Negative { field: &'static str, value: f32 },
    #[error("tuning field `{field}` must be greater than zero (got {value})")]
    NonPositive { field: &'static str, value: f32 },
    #[error("tuning field `{field}` must name at least one physics layer")]
    EmptyMask { field: &'static str },
}

impl MovementTuning {
    /// Reject malformed values before any controller is built from them.
    pub fn validate(&self) -> Result<(), TuningError> {
        let non_negative = [
            ("move_speed", self.move_speed),
            ("jump_power", self.jump_power),
            ("dash_speed", self.dash_speed),
            ("dash_duration", self.dash_duration),
            ("dash_cooldown", self.dash_cooldown),
            ("fall_gravity_scale", self.fall_gravity_scale),
            ("wall_jump_lock_time", self.wall_jump_lock_time),
            ("wall_kick_speed", self.wall_kick_speed),
            ("wall_hop_speed", self.wall_hop_speed),
            ("wall_hop_lift", self.wall_hop_lift),
            ("facing_dead_zone", self.facing_dead_zone),
        ];

        for (field, value) in non_negative {
            if !value.is_finite() {
                return Err(TuningError::NotFinite { field });
            }
            if value < 0.0 {
                return Err(TuningError::Negative { field, value });
            }
        }

        if !self.probe_distance.is_finite() {
            return Err(TuningError::NotFinite {
                field: "probe_distance",
            });
        }
        if self.probe_distance <= 0.0 {
            return Err(TuningError::NonPositive {
                field: "probe_distance",
                value: self.probe_distance,
            });
        }

        if self.ground_layers.is_empty() {
            return Err(TuningError::EmptyMask {
                field: "ground_layers",
            });
        }
        if self.wall_layers.is_empty() {
            return Err(TuningError::EmptyMask {
                field: "wall_layers",
            });
        }

        Ok(())
    }

    /// Distance covered by one full dash.
    pub fn dash_distance(&self) -> f32 {
        self.dash_speed * self.dash_duration
    }
}

#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub axis: Vec2,
    pub jump_held: bool,
    pub dash_held: bool,
}

impl MovementInput {
    /// Snapshot handed to the controller for one tick.
    pub fn snapshot(&self) -> ControlInput {
        ControlInput {
            horizontal: self.axis.x.clamp(-1.0, 1.0),
            jump: self.jump_held,
            dash: self.dash_held,
        }
    }
}
