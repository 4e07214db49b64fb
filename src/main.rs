// ./src/main.rs
use bevy::prelude::*;
use bevy_egui::EguiPlugin;

// Eigene Module deklarieren
pub mod debug;
pub mod diagram;
pub mod math;
pub mod setup; // Wird für Kamera-Setup verwendet

use debug::{ui::diagram_control_ui_system, visualization::diagram::draw_diagram_system};
use diagram::resources::{DiagramParameters, DiagramState};
use diagram::systems::{fit_camera_system, regenerate_diagram_system};
use math::probability::{SeedPlugin, SeedSystems};
use setup::setup_scene;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(EguiPlugin)
        .add_plugins(SeedPlugin)
        .init_resource::<DiagramParameters>()
        .init_resource::<DiagramState>()
        .add_systems(Startup, setup_scene)
        .add_systems(
            Update,
            (
                // UI sendet Seed-Änderungen, die Generierung sieht sie im selben Frame
                diagram_control_ui_system.before(SeedSystems),
                (regenerate_diagram_system, fit_camera_system)
                    .chain()
                    .after(SeedSystems),
                draw_diagram_system.after(regenerate_diagram_system),
            ),
        )
        .run();
}
