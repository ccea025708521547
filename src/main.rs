use bevy::{
    prelude::*,
    window::{MonitorSelection, WindowMode},
};

mod data;
mod scenes;
mod startup;
mod systems;

use scenes::letters::LettersPlugin;
use startup::StartupPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: String::from("Alfabet"),
                mode: WindowMode::BorderlessFullscreen(MonitorSelection::Primary),
                ..default()
            }),
            ..default()
        }))
        .add_plugins((StartupPlugin, LettersPlugin))
        .run();
}
