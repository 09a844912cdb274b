//! Content domain: data-driven tuning loaded at startup.

mod loader;

#[cfg(test)]
mod tests;

pub use loader::{MOVEMENT_TUNING_PATH, TuningLoadError, load_tuning, parse_tuning};

use bevy::prelude::*;
use std::path::Path;

use crate::movement::MovementTuning;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_movement_tuning);
    }
}

/// Replace the default tuning with the one on disk, if any.
/// A present but broken file aborts startup.
fn load_movement_tuning(mut tuning: ResMut<MovementTuning>) -> Result {
    match load_tuning(Path::new(MOVEMENT_TUNING_PATH))? {
        Some(loaded) => {
            info!(
                "Loaded movement tuning from {}: move_speed={}, jump_power={}, dash_cooldown={}",
                MOVEMENT_TUNING_PATH, loaded.move_speed, loaded.jump_power, loaded.dash_cooldown
            );
            *tuning = loaded;
        }
        None => {
            warn!(
                "Movement tuning not found at {}, using defaults",
                MOVEMENT_TUNING_PATH
            );
        }
    }

    Ok(())
}
