use std::path::Path;

use bevy::prelude::*;

use crate::data::settings::AppSettings;

const FONT_DIR: &str = "assets/fonts";

#[derive(Resource)]
pub struct GlyphFont {
    pub font: Handle<Font>,
}

impl GlyphFont {
    /// Walks the configured family list in priority order and loads the
    /// first font file actually present, so one install can cover several
    /// scripts. Falls back to the builtin font.
    pub fn load(
        mut commands: Commands,
        asset_server: Res<AssetServer>,
        settings: Res<AppSettings>,
    ) {
        let families = settings.font_families.join(",");
        let chosen = settings
            .font_families
            .iter()
            .find(|name| Path::new(FONT_DIR).join(name.as_str()).exists());

        let font = match chosen {
            Some(name) => {
                info!("using font: {name}");
                asset_server.load(format!("fonts/{name}"))
            }
            None => {
                warn!("no font from the priority list ({families}) found under {FONT_DIR}; using the builtin font");
                Handle::default()
            }
        };

        commands.insert_resource(GlyphFont { font });
    }

    /// Glyph size is fixed relative to the display height.
    pub fn scaled_size(height_ratio: f32, window_height: f32) -> f32 {
        (height_ratio * window_height).max(1.0)
    }
}
