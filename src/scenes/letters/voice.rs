use bevy::{
    audio::{PlaybackMode, Volume},
    prelude::*,
};

use super::{catalog::VariantCatalog, ResourceKey};
use crate::data::settings::AppSettings;

/// The single shared audio slot. At most one voice entity exists at a time;
/// starting a new clip always stops the previous one first.
#[derive(Component)]
pub struct Voice;

impl Voice {
    /// Stops whatever is playing, then starts the key's clip if the store
    /// has one. The stop is unconditional so a replaced symbol cuts off the
    /// previous clip even when the new key turns out to be silent.
    pub fn dispatch(
        commands: &mut Commands,
        voices: &Query<(Entity, Option<&AudioSink>), With<Voice>>,
        asset_server: &AssetServer,
        catalog: &impl VariantCatalog,
        settings: &AppSettings,
        key: &ResourceKey,
    ) {
        for (entity, _) in voices.iter() {
            commands.entity(entity).despawn();
        }

        let Some(source) = catalog.audio_source(key) else {
            info!("no audio clip for {} yet", key.symbol);
            return;
        };

        info!("playing {}", source.display());
        commands.spawn((
            Voice,
            AudioPlayer::<AudioSource>(asset_server.load(source)),
            PlaybackSettings {
                mode: PlaybackMode::Despawn,
                volume: Volume::Linear(settings.volume),
                ..default()
            },
        ));
    }

    /// Busy until the sink reports the clip finished. Playback is advanced
    /// by the audio subsystem on its own; this flag is polled, never pushed.
    /// A voice whose sink has not attached yet counts as busy, not idle.
    pub fn any_busy(voices: &Query<(Entity, Option<&AudioSink>), With<Voice>>) -> bool {
        voices
            .iter()
            .any(|(_, sink)| sink.map_or(true, |sink| !sink.empty()))
    }
}
