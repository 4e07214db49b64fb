// ./src/debug/ui.rs
use crate::diagram::resources::{
    CellColouring, DiagramParameters, DiagramState, DistributionMode, GRID_SIZE_RANGE,
    POINT_COUNT_RANGE,
};
use crate::math::point_distribution::{JitterSpan, SampleShape};
use crate::math::probability::{SeedChangedEvent, SeedPolicy, SeedResource};
use bevy::prelude::*;
use bevy_egui::{
    EguiContexts,
    egui::{self, DragValue, Window},
};

pub fn diagram_control_ui_system(
    mut contexts: EguiContexts,
    mut params: ResMut<DiagramParameters>,
    state: Res<DiagramState>,
    seed_resource: Res<SeedResource>,
    mut seed_events: EventWriter<SeedChangedEvent>,
) {
    Window::new("Diagrammsteuerung")
        .default_width(300.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.collapsing("Verteilung", |ui| {
                ui.horizontal(|ui| {
                    ui.radio_value(&mut params.mode, DistributionMode::JitteredGrid, "Gitter");
                    ui.radio_value(&mut params.mode, DistributionMode::PoissonDisk, "Poisson-Disk");
                });

                egui::Grid::new("distribution_grid").show(ui, |ui| {
                    ui.label("Breite");
                    ui.add(DragValue::new(&mut params.columns).clamp_range(GRID_SIZE_RANGE));
                    ui.end_row();

                    ui.label("Höhe");
                    ui.add(DragValue::new(&mut params.rows).clamp_range(GRID_SIZE_RANGE));
                    ui.end_row();

                    match params.mode {
                        DistributionMode::JitteredGrid => {
                            let range = params.randomness_range();
                            ui.label("Zufälligkeit");
                            ui.add(
                                DragValue::new(&mut params.randomness)
                                    .clamp_range(range)
                                    .speed(0.5),
                            );
                            ui.end_row();
                        }
                        DistributionMode::PoissonDisk => {
                            ui.label("Punkte");
                            ui.add(
                                DragValue::new(&mut params.point_count)
                                    .clamp_range(POINT_COUNT_RANGE),
                            );
                            ui.end_row();
                        }
                    }
                });

                match params.mode {
                    DistributionMode::JitteredGrid => {
                        ui.horizontal(|ui| {
                            ui.label("Spanne:");
                            ui.radio_value(&mut params.jitter_span, JitterSpan::Half, "±r/2");
                            ui.radio_value(&mut params.jitter_span, JitterSpan::Full, "±r");
                        });
                    }
                    DistributionMode::PoissonDisk => {
                        ui.horizontal(|ui| {
                            ui.label("Form:");
                            ui.radio_value(&mut params.shape, SampleShape::Rectangle, "Rechteck");
                            ui.radio_value(&mut params.shape, SampleShape::Circle, "Kreis");
                        });
                    }
                }
            });

            ui.collapsing("Voronoi", |ui| {
                ui.checkbox(&mut params.boundary_reinforcement, "Randverstärkung");
                ui.checkbox(&mut params.integer_lattice, "Ganzzahliges Gitter");
            });

            ui.collapsing("Zufall", |ui| {
                ui.label(match seed_resource.policy {
                    SeedPolicy::Fixed(seed) => format!("Fester Seed: {}", seed),
                    SeedPolicy::Entropy => "Seed: Entropie".to_string(),
                });
                ui.checkbox(&mut params.use_fixed_seed, "Fester Seed");
                ui.add_enabled(
                    params.use_fixed_seed,
                    egui::TextEdit::singleline(&mut params.seed_text),
                );
                if ui.button("Seed übernehmen").clicked() {
                    let new_policy = if params.use_fixed_seed {
                        SeedResource::from_text(&params.seed_text).policy
                    } else {
                        SeedPolicy::Entropy
                    };
                    seed_events.send(SeedChangedEvent { new_policy });
                    params.regenerate_requested = true;
                }
            });

            ui.collapsing("Darstellung", |ui| {
                ui.horizontal(|ui| {
                    ui.radio_value(&mut params.colouring, CellColouring::Outline, "Umriss");
                    ui.radio_value(&mut params.colouring, CellColouring::Palette, "Palette");
                });
                ui.checkbox(&mut params.show_points, "Punkte anzeigen");
            });

            ui.separator();
            if ui.button("Update").clicked() {
                params.regenerate_requested = true;
            }

            if let Some(samples) = state.samples.as_ref() {
                ui.label(format!(
                    "{} Punkte{}",
                    samples.len(),
                    if samples.exhausted { " (Fläche gesättigt)" } else { "" }
                ));
            }
            if let Some(diagram) = state.diagram.as_ref() {
                ui.label(format!(
                    "{} Zellen, {} leer, Ø Umfang {:.1}, {:.1} ms",
                    diagram.cells.len(),
                    diagram.empty_cell_count(),
                    diagram.mean_perimeter(),
                    state.last_duration_ms
                ));
            }
            if let Some(error) = state.last_error.as_ref() {
                ui.colored_label(egui::Color32::RED, error);
            }
        });
}
