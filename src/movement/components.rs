//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// +1 for right, -1 for left.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Facing::Right => Facing::Left,
            Facing::Left => Facing::Right,
        }
    }

    pub fn direction(self) -> Dir2 {
        match self {
            Facing::Right => Dir2::X,
            Facing::Left => Dir2::NEG_X,
        }
    }
}

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;

/// Shape-cast settings used to answer "grounded?" and "touching a wall?".
#[derive(Component, Debug, Clone)]
pub struct ContactProbe {
    pub ground_mask: LayerMask,
    pub wall_mask: LayerMask,
    pub distance: f32,
}

impl ContactProbe {
    pub fn from_layers(ground: &[GameLayer], wall: &[GameLayer], distance: f32) -> Self {
        Self {
            ground_mask: mask_of(ground),
            wall_mask: mask_of(wall),
            distance,
        }
    }
}

fn mask_of(layers: &[GameLayer]) -> LayerMask {
    LayerMask(layers.iter().fold(0, |bits, layer| bits | layer.to_bits()))
}

/// Mirrors `CharacterController::can_attack` for attack systems.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AttackGate {
    pub ready: bool,
}
