// src/diagram/systems.rs
use super::resources::{DiagramParameters, DiagramState};
use crate::math::{
    error::MathResult,
    point_distribution::{SampleSet, VoronoiBuilder, VoronoiDiagram, sampling::sample},
    probability::SeedResource,
};
use bevy::prelude::*;
use bevy::render::camera::ScalingMode;
use bevy::utils::Instant;
use rand::Rng;

/// Rand um den Zielbereich in der Kameraansicht, relativ zur Größe.
const VIEW_MARGIN: f32 = 0.05;

/// Erzeugt Punkte und Zellen neu, sobald die UI es anfordert.
pub fn regenerate_diagram_system(
    mut params: ResMut<DiagramParameters>,
    seed_resource: Res<SeedResource>,
    mut state: ResMut<DiagramState>,
) {
    if !params.regenerate_requested {
        return;
    }
    params.regenerate_requested = false;
    params.clamp_to_ranges();

    let mut rng = seed_resource.rng();
    let started = Instant::now();

    match generate(&params, &mut rng) {
        Ok((samples, diagram, sampling_ms)) => {
            let total_ms = started.elapsed().as_secs_f64() * 1000.0;
            info!(
                "Generated {} points in {:.2} ms{} and {} cells ({} empty) in {:.2} ms total",
                samples.len(),
                sampling_ms,
                if samples.exhausted { " (coverage exhausted)" } else { "" },
                diagram.cells.len(),
                diagram.empty_cell_count(),
                total_ms
            );
            state.palette = (0..diagram.cells.len())
                .map(|_| Color::hsl(rng.random_range(0.0..360.0), 0.6, 0.55))
                .collect();
            state.samples = Some(samples);
            state.diagram = Some(diagram);
            state.last_error = None;
            state.last_duration_ms = total_ms;
        }
        Err(e) => {
            error!("Diagram generation failed: {}", e);
            state.last_error = Some(e.to_string());
        }
    }
}

fn generate<R: Rng + ?Sized>(
    params: &DiagramParameters,
    rng: &mut R,
) -> MathResult<(SampleSet, VoronoiDiagram, f64)> {
    let started = Instant::now();
    let samples = sample(&params.strategy(), rng)?;
    let sampling_ms = started.elapsed().as_secs_f64() * 1000.0;

    let diagram = VoronoiBuilder::new(params.voronoi_config())?.build_from_samples(&samples)?;
    Ok((samples, diagram, sampling_ms))
}

/// Richtet die 2D-Kamera auf den Zielbereich aus, wenn sich das Diagramm ändert.
pub fn fit_camera_system(
    state: Res<DiagramState>,
    mut cameras: Query<(&mut Transform, &mut OrthographicProjection), With<Camera2d>>,
) {
    if !state.is_changed() {
        return;
    }
    let Some(diagram) = state.diagram.as_ref() else {
        return;
    };

    let center = diagram.bounds.center().as_vec2();
    let size = diagram.bounds.size().as_vec2() * (1.0 + 2.0 * VIEW_MARGIN);
    for (mut transform, mut projection) in cameras.iter_mut() {
        transform.translation = center.extend(transform.translation.z);
        projection.scaling_mode = ScalingMode::AutoMin {
            min_width: size.x,
            min_height: size.y,
        };
    }
}
