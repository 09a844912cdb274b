//! Movement domain: player controller plugin wiring and public exports.

mod bootstrap;
mod components;
mod controller;
mod dash;
#[cfg(feature = "dev-tools")]
mod dev;
mod events;
mod resources;
mod sinks;
mod systems;


pub use components::{AttackGate, ContactProbe, Facing, GameLayer, Ground, Player, Wall};
pub use controller::{CharacterController, CharacterState};
pub use dash::{DASH_READY, DashState};
pub use events::AnimationSignal;
pub use resources::{MovementInput, MovementTuning, TuningError};
pub use sinks::{
    AnimationParam, AnimationSink, AnimationTrigger, CharacterBody, ControlInput,
    EnvironmentProbe, SoundClip, SoundSink,
};
pub use systems::SetupError;

use bevy::prelude::*;

use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{
    read_input, sync_facing_sprite, tick_controllers, update_attack_gate, verify_controller_setup,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_message::<AnimationSignal>()
            .add_systems(Startup, spawn_player)
            .add_systems(
                FixedUpdate,
                (
                    read_input,
                    verify_controller_setup,
                    tick_controllers,
                    sync_facing_sprite,
                    update_attack_gate,
                )
                    .chain(),
            );

        #[cfg(feature = "dev-tools")]
        app.add_systems(Startup, dev::spawn_test_room);
    }
}
