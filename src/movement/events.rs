//! Movement domain: signals published to the animation layer.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::movement::{AnimationParam, AnimationTrigger};

/// Animation parameter change emitted by a character controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationSignal {
    SetBool {
        entity: Entity,
        param: AnimationParam,
        value: bool,
    },
    Trigger {
        entity: Entity,
        trigger: AnimationTrigger,
    },
}

impl AnimationSignal {
    pub fn entity(&self) -> Entity {
        match *self {
            AnimationSignal::SetBool { entity, .. } | AnimationSignal::Trigger { entity, .. } => {
                entity
            }
        }
    }
}

impl Message for AnimationSignal {}
