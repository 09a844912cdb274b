//! Sprites module for character animation.
//!
//! Turns the run/grounded parameters and jump triggers published by
//! character controllers into an animation state with frame playback.

pub mod animation;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

pub use animation::*;

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                apply_animation_signals,
                animation_state_machine,
                update_animation_frames,
            )
                .chain(),
        );
    }
}
