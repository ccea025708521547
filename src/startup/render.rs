use bevy::prelude::*;

use crate::systems::colors::DEFAULT_BG;

#[derive(Component)]
pub struct MainCamera;

pub fn setup_camera(mut commands: Commands, mut clear_color: ResMut<ClearColor>) {
    clear_color.0 = DEFAULT_BG;
    commands.spawn((Camera2d, MainCamera));
}
