//! Movement domain: player bootstrap from the loaded tuning.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    AttackGate, CharacterController, ContactProbe, GameLayer, MovementTuning, Player,
};
use crate::sprites::AnimationController;

/// Player collider size in world units.
const PLAYER_SIZE: Vec2 = Vec2::new(1.0, 2.0);

/// Spawn the player with a controller built from the current tuning.
/// Runs after the content domain has loaded and validated the tuning file.
pub(crate) fn spawn_player(mut commands: Commands, tuning: Res<MovementTuning>) -> Result {
    let controller = CharacterController::new(tuning.clone())?;
    let probe = ContactProbe::from_layers(
        &tuning.ground_layers,
        &tuning.wall_layers,
        tuning.probe_distance,
    );

    info!(
        "Spawning player: move_speed={}, jump_power={}, dash={}m over {}s",
        tuning.move_speed,
        tuning.jump_power,
        tuning.dash_distance(),
        tuning.dash_duration
    );

    commands.spawn((
        // Identity & Movement
        (Player, controller, probe, AttackGate::default()),
        // Rendering
        (
            Sprite {
                color: Color::srgb(0.9, 0.9, 0.9),
                custom_size: Some(PLAYER_SIZE),
                ..default()
            },
            AnimationController::default(),
        ),
        Transform::from_xyz(0.0, 0.0, 0.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(tuning.fall_gravity_scale),
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
        ),
    ));

    Ok(())
}
