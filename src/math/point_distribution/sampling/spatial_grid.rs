// src/math/point_distribution/sampling/spatial_grid.rs

use crate::math::{types::Point2D, utils::constants};

/// Anzahl der Nachbarzellen (pro Richtung), die bei der Abstandsprüfung
/// untersucht werden.
pub const NEIGHBOURHOOD_RADIUS: isize = 5;

/// Beschleunigungsgitter über dem normierten Raum `[0,1]²`.
///
/// Die Zellgröße ist höchstens `MinDist/√2`, d.h. die Zelldiagonale ist nicht
/// größer als der Mindestabstand. Zwei akzeptierte Punkte können daher nie in
/// derselben Zelle liegen.
#[derive(Debug, Clone)]
pub struct SpatialGrid {
    resolution: usize,
    cells: Vec<Option<Point2D>>,
    min_distance_sq: f64,
}

impl SpatialGrid {
    pub fn new(min_distance: f64) -> Self {
        let cell_size = min_distance / constants::SQRT_2;
        let resolution = ((1.0 / cell_size).ceil() as usize).max(1);
        Self {
            resolution,
            cells: vec![None; resolution * resolution],
            min_distance_sq: min_distance * min_distance,
        }
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Zellkoordinate eines Punktes. Punkte auf dem Rand `1.0` landen in der
    /// letzten Zelle.
    fn cell_of(&self, p: Point2D) -> (isize, isize) {
        let max = self.resolution as isize - 1;
        let gx = ((p.x * self.resolution as f64).floor() as isize).clamp(0, max);
        let gy = ((p.y * self.resolution as f64).floor() as isize).clamp(0, max);
        (gx, gy)
    }

    pub fn insert(&mut self, p: Point2D) {
        let (gx, gy) = self.cell_of(p);
        let index = gy as usize * self.resolution + gx as usize;
        self.cells[index] = Some(p);
    }

    /// `true`, wenn ein bereits eingefügter Punkt näher als der Mindestabstand liegt.
    pub fn is_in_neighbourhood(&self, p: Point2D) -> bool {
        let (gx, gy) = self.cell_of(p);
        let n = self.resolution as isize;

        for j in (gy - NEIGHBOURHOOD_RADIUS)..=(gy + NEIGHBOURHOOD_RADIUS) {
            if j < 0 || j >= n {
                continue;
            }
            for i in (gx - NEIGHBOURHOOD_RADIUS)..=(gx + NEIGHBOURHOOD_RADIUS) {
                if i < 0 || i >= n {
                    continue;
                }
                if let Some(other) = self.cells[j as usize * self.resolution + i as usize] {
                    if other.distance_squared(p) < self.min_distance_sq {
                        return true;
                    }
                }
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_from_min_distance() {
        let grid = SpatialGrid::new(0.1);
        // 1 / (0.1 / √2) = 14.14…
        assert_eq!(grid.resolution(), 15);
    }

    #[test]
    fn test_neighbourhood_detection() {
        let mut grid = SpatialGrid::new(0.1);
        grid.insert(Point2D::new(0.5, 0.5));

        assert!(grid.is_in_neighbourhood(Point2D::new(0.55, 0.5)));
        assert!(grid.is_in_neighbourhood(Point2D::new(0.5, 0.5999)));
        assert!(!grid.is_in_neighbourhood(Point2D::new(0.61, 0.5)));
        assert!(!grid.is_in_neighbourhood(Point2D::new(0.9, 0.9)));
    }

    #[test]
    fn test_border_points_do_not_overflow() {
        let mut grid = SpatialGrid::new(0.2);
        grid.insert(Point2D::new(1.0, 1.0));
        grid.insert(Point2D::new(0.0, 0.0));
        assert!(grid.is_in_neighbourhood(Point2D::new(0.95, 1.0)));
        assert!(grid.is_in_neighbourhood(Point2D::new(0.0, 0.1)));
    }
}
