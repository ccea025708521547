use bevy::prelude::*;

use crate::data::{rng::RngPlugin, settings::AppSettings};

pub mod fonts;
pub mod render;

pub struct StartupPlugin;
impl Plugin for StartupPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(AppSettings::load())
            .add_plugins(RngPlugin)
            .add_systems(Startup, (render::setup_camera, fonts::GlyphFont::load));
    }
}
