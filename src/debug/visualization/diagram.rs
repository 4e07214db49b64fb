// ./src/debug/visualization/diagram.rs
use crate::diagram::resources::{CellColouring, DiagramParameters, DiagramState};
use crate::math::types::Point2D;
use bevy::prelude::*;

const OUTLINE_COLOR: Color = Color::rgb(0.85, 0.85, 0.85);
const REGION_COLOR: Color = Color::YELLOW;
const POINT_COLOR: Color = Color::rgb(0.9, 0.3, 0.2);
/// Radius der Site-Markierung in Weltkoordinaten, relativ zur Kachelgröße.
const POINT_RADIUS_FACTOR: f32 = 0.06;

/// System, das Zielbereich, Zellen und Sites des aktuellen Diagramms als Gizmos zeichnet.
pub fn draw_diagram_system(
    state: Res<DiagramState>,
    params: Res<DiagramParameters>,
    mut gizmos: Gizmos,
) {
    let Some(diagram) = state.diagram.as_ref() else {
        return;
    };

    gizmos.rect_2d(
        diagram.bounds.center().as_vec2(),
        0.0,
        diagram.bounds.size().as_vec2(),
        REGION_COLOR,
    );

    for (i, cell) in diagram.cells.iter().enumerate() {
        if cell.is_empty() {
            continue;
        }
        let color = match params.colouring {
            CellColouring::Outline => OUTLINE_COLOR,
            CellColouring::Palette => state.palette.get(i).copied().unwrap_or(OUTLINE_COLOR),
        };
        // Schließe das Polygon, indem der erste Punkt am Ende hinzugefügt wird
        let closed = cell
            .vertices
            .iter()
            .chain(cell.vertices.first())
            .map(|p: &Point2D| p.as_vec2());
        gizmos.linestrip_2d(closed, color);
    }

    if params.show_points {
        if let Some(samples) = state.samples.as_ref() {
            let radius = params.tile_size as f32 * POINT_RADIUS_FACTOR;
            for p in samples.iter() {
                gizmos.circle_2d(p.as_vec2(), radius, POINT_COLOR);
            }
        }
    }
}
