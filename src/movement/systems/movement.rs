//! Movement domain: drives every character controller once per fixed tick.

use avian2d::prelude::*;
use bevy::prelude::*;
use thiserror::Error;

use crate::audio::PlaySound;
use crate::movement::systems::collisions::SpatialProbe;
use crate::movement::{
    AnimationParam, AnimationSignal, AnimationSink, AnimationTrigger, AttackGate,
    CharacterBody, CharacterController, ContactProbe, Facing, MovementInput, SoundClip,
    SoundSink,
};

/// A character controller spawned without the collaborators it needs.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("character {0} has a controller but no RigidBody")]
    MissingRigidBody(Entity),
    #[error("character {0} has a controller but no Collider")]
    MissingCollider(Entity),
    #[error("character {0} has a controller but no ContactProbe")]
    MissingContactProbe(Entity),
    #[error("character {0} has a controller but no GravityScale")]
    MissingGravityScale(Entity),
}

/// avian components viewed as the controller's rigid body.
pub(crate) struct AvianBody<'a> {
    velocity: &'a mut LinearVelocity,
    gravity: &'a mut GravityScale,
    position: &'a mut Position,
}

impl CharacterBody for AvianBody<'_> {
    fn velocity(&self) -> Vec2 {
        self.velocity.0
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity.0 = velocity;
    }

    fn set_gravity_scale(&mut self, scale: f32) {
        self.gravity.0 = scale;
    }

    fn translate(&mut self, offset: Vec2) {
        self.position.0 += offset;
    }
}

pub(crate) struct AnimationMessages<'a, 'w> {
    entity: Entity,
    writer: &'a mut MessageWriter<'w, AnimationSignal>,
}

impl AnimationSink for AnimationMessages<'_, '_> {
    fn set_bool(&mut self, param: AnimationParam, value: bool) {
        self.writer.write(AnimationSignal::SetBool {
            entity: self.entity,
            param,
            value,
        });
    }

    fn fire(&mut self, trigger: AnimationTrigger) {
        self.writer.write(AnimationSignal::Trigger {
            entity: self.entity,
            trigger,
        });
    }
}

pub(crate) struct SoundMessages<'a, 'w> {
    writer: &'a mut MessageWriter<'w, PlaySound>,
}

impl SoundSink for SoundMessages<'_, '_> {
    fn play_sound(&mut self, clip: &SoundClip) {
        self.writer.write(PlaySound { clip: clip.clone() });
    }
}

/// Fail fast when a controller lands on an entity physics can't drive.
pub(crate) fn verify_controller_setup(
    query: Query<
        (
            Entity,
            Has<RigidBody>,
            Has<Collider>,
            Has<ContactProbe>,
            Has<GravityScale>,
        ),
        Added<CharacterController>,
    >,
) -> Result {
    for (entity, has_body, has_collider, has_probe, has_gravity) in &query {
        if !has_body {
            return Err(SetupError::MissingRigidBody(entity).into());
        }
        if !has_collider {
            return Err(SetupError::MissingCollider(entity).into());
        }
        if !has_probe {
            return Err(SetupError::MissingContactProbe(entity).into());
        }
        // RigidBody does not pull in GravityScale on its own
        if !has_gravity {
            return Err(SetupError::MissingGravityScale(entity).into());
        }
    }

    Ok(())
}

#[allow(clippy::type_complexity)]
pub(crate) fn tick_controllers(
    time: Res<Time>,
    input: Res<MovementInput>,
    spatial_query: SpatialQuery,
    mut animation_writer: MessageWriter<AnimationSignal>,
    mut sound_writer: MessageWriter<PlaySound>,
    mut query: Query<
        (
            Entity,
            &mut CharacterController,
            &Collider,
            &ContactProbe,
            &Rotation,
            &mut Position,
            &mut LinearVelocity,
            &mut GravityScale,
        ),
    >,
) {
    let dt = time.delta_secs();
    let snapshot = input.snapshot();

    for (
        entity,
        mut controller,
        collider,
        settings,
        rotation,
        mut position,
        mut velocity,
        mut gravity,
    ) in &mut query
    {
        let probe = SpatialProbe::new(
            &spatial_query,
            entity,
            collider,
            &position,
            rotation,
            settings,
        );
        let mut body = AvianBody {
            velocity: &mut velocity,
            gravity: &mut gravity,
            position: &mut position,
        };
        let mut animation = AnimationMessages {
            entity,
            writer: &mut animation_writer,
        };
        let mut sound = SoundMessages {
            writer: &mut sound_writer,
        };

        controller.tick(snapshot, dt, &probe, &mut body, &mut animation, &mut sound);
    }
}

/// Mirror facing onto the sprite; the collider is never flipped.
pub(crate) fn sync_facing_sprite(
    mut query: Query<(&CharacterController, &mut Sprite), Changed<CharacterController>>,
) {
    for (controller, mut sprite) in &mut query {
        let flip = controller.facing() == Facing::Left;
        if sprite.flip_x != flip {
            sprite.flip_x = flip;
        }
    }
}

#[allow(clippy::type_complexity)]
pub(crate) fn update_attack_gate(
    spatial_query: SpatialQuery,
    mut query: Query<(
        Entity,
        &CharacterController,
        &Collider,
        &ContactProbe,
        &Position,
        &Rotation,
        &mut AttackGate,
    )>,
) {
    for (entity, controller, collider, settings, position, rotation, mut gate) in &mut query {
        let probe = SpatialProbe::new(
            &spatial_query,
            entity,
            collider,
            position,
            rotation,
            settings,
        );
        let ready = controller.can_attack(&probe);
        if gate.ready != ready {
            gate.ready = ready;
        }
    }
}
