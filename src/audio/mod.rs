//! Audio domain: one-shot sound effects requested by gameplay systems.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::movement::SoundClip;

/// Request to play a clip once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaySound {
    pub clip: SoundClip,
}

impl Message for PlaySound {}

pub struct SfxPlugin;

impl Plugin for SfxPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<PlaySound>()
            .add_systems(Update, play_sounds);
    }
}

fn play_sounds(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut requests: MessageReader<PlaySound>,
) {
    for request in requests.read() {
        // The asset server hands back the cached handle after the first load
        let source: Handle<AudioSource> = asset_server.load(request.clip.path().to_string());
        commands.spawn((AudioPlayer::new(source), PlaybackSettings::DESPAWN));
    }
}
