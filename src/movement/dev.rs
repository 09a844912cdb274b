//! Movement domain: sandbox room for trying the controller by hand.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground, Wall};

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);

    let mut spawn_block = |marker_is_wall: bool, color: Color, size: Vec2, at: Vec2| {
        let mut block = commands.spawn((
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(at.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
        ));
        if marker_is_wall {
            block.insert((Wall, wall_layers));
        } else {
            block.insert((Ground, ground_layers));
        }
    };

    // Floor
    spawn_block(false, ground_color, Vec2::new(26.0, 1.0), Vec2::new(0.0, -6.0));

    // Side walls
    spawn_block(true, wall_color, Vec2::new(1.0, 16.0), Vec2::new(-13.0, 1.5));
    spawn_block(true, wall_color, Vec2::new(1.0, 16.0), Vec2::new(13.0, 1.5));

    // Platforms, low left to high centre
    spawn_block(false, platform_color, Vec2::new(4.5, 0.5), Vec2::new(-7.5, -2.0));
    spawn_block(false, platform_color, Vec2::new(4.5, 0.5), Vec2::new(7.5, 1.0));
    spawn_block(false, platform_color, Vec2::new(3.5, 0.5), Vec2::new(0.0, 4.0));

    // Pillar for wall jumping practice
    spawn_block(true, wall_color, Vec2::new(1.0, 6.0), Vec2::new(-3.0, -2.5));
}
