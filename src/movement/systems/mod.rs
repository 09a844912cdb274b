//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;


pub use movement::SetupError;

pub(crate) use input::read_input;
pub(crate) use movement::{
    sync_facing_sprite, tick_controllers, update_attack_gate, verify_controller_setup,
};
