// src/math/point_distribution/voronoi/boundary.rs

use crate::math::types::{Bounds2D, Point2D};

/// Hilfs-Sites für die Randverstärkung.
///
/// Die Punkte liegen gleichmäßig verteilt auf dem Rand des Rechtecks, das um
/// seine eigene Diagonale `D` vergrößert wurde. Jeder Punkt im Rechteck hat
/// zu jeder Site im Rechteck höchstens Abstand `D`, zu jeder Ring-Site
/// mindestens `D`. Der Ring nimmt Eingabe-Sites innerhalb des Rechtecks also
/// keine Fläche weg.
///
/// Deterministisch, verbraucht keine Zufallszahlen.
pub fn reinforcement_ring(bounds: &Bounds2D, points_per_side: usize) -> Vec<Point2D> {
    let outer = bounds.expand(bounds.diagonal());
    let corners = outer.corners();

    let mut ring = Vec::with_capacity(4 * points_per_side);
    for side in 0..4 {
        let from = corners[side];
        let to = corners[(side + 1) % 4];
        for i in 0..points_per_side {
            let t = i as f64 / points_per_side as f64;
            ring.push(from.lerp(to, t));
        }
    }
    ring
}
