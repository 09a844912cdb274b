//! Movement domain: the collaborators a controller talks to each tick.
//!
//! The controller never queries the ECS directly. Physics, collision probes,
//! animation and audio are reached through these traits so the per-tick
//! resolution can run against avian components in game and against plain
//! structs in tests.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::Facing;

/// Input for a single tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ControlInput {
    /// Horizontal axis in [-1, 1].
    pub horizontal: f32,
    pub jump: bool,
    pub dash: bool,
}

/// Ground and wall queries against the body's current bounding box.
pub trait EnvironmentProbe {
    fn probe_ground(&self) -> bool;
    fn probe_wall(&self, facing: Facing) -> bool;
}

/// The physics body driven by the controller.
pub trait CharacterBody {
    fn velocity(&self) -> Vec2;
    fn set_velocity(&mut self, velocity: Vec2);
    fn set_gravity_scale(&mut self, scale: f32);
    /// Move the body directly, bypassing velocity.
    fn translate(&mut self, offset: Vec2);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationParam {
    Run,
    Grounded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationTrigger {
    Jump,
}

/// Fire-and-forget animation parameters.
pub trait AnimationSink {
    fn set_bool(&mut self, param: AnimationParam, value: bool);
    fn fire(&mut self, trigger: AnimationTrigger);
}

/// Asset path of a sound effect.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct SoundClip(pub String);

impl SoundClip {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &str {
        &self.0
    }
}

/// Fire-and-forget sound playback.
pub trait SoundSink {
    fn play_sound(&mut self, clip: &SoundClip);
}
