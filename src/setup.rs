// ./src/setup.rs
use bevy::prelude::*;

pub fn setup_scene(mut commands: Commands) {
    // Kamera, wird von fit_camera_system auf den Zielbereich ausgerichtet
    commands.spawn(Camera2dBundle::default());
}
