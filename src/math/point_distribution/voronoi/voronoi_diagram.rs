// src/math/point_distribution/voronoi/voronoi_diagram.rs

use crate::math::types::{Bounds2D, Point2D, to_geo_coord, to_geo_polygon};
use geo::{Area, Intersects};

/// Repräsentiert eine einzelne, auf das Rechteck beschnittene Voronoi-Zelle.
#[derive(Debug, Clone, PartialEq)]
pub struct VoronoiCell {
    /// Index der Site in der Eingabeliste. Gleich dem Index der Zelle.
    pub site_index: usize,
    /// Der Generatorpunkt (Site), der diese Zelle definiert.
    pub site: Point2D,
    /// Die Eckpunkte des Polygons in CCW-Reihenfolge, ohne Wiederholung des
    /// Startpunkts. Leer für entartete Zellen.
    pub vertices: Vec<Point2D>,
    /// Die Zelle war vor dem Beschneiden unbeschränkt.
    pub was_unbounded: bool,
    /// Indizes der benachbarten Eingabe-Sites im unbeschnittenen Diagramm.
    pub neighbor_ids: Vec<usize>,
}

impl VoronoiCell {
    pub(crate) fn empty(site_index: usize, site: Point2D) -> Self {
        Self {
            site_index,
            site,
            vertices: Vec::new(),
            was_unbounded: false,
            neighbor_ids: Vec::new(),
        }
    }

    /// Entartete Zelle ohne Fläche (z.B. doppelte Site).
    pub fn is_empty(&self) -> bool {
        self.vertices.len() < 3
    }

    pub fn area(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        to_geo_polygon(&self.vertices).unsigned_area()
    }

    /// Berechnet den Umfang der Voronoi-Zelle.
    pub fn perimeter(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let n = self.vertices.len();
        (0..n)
            .map(|i| self.vertices[i].distance(self.vertices[(i + 1) % n]))
            .sum()
    }

    /// Punkt liegt in der Zelle oder auf ihrem Rand.
    pub fn contains_point(&self, point: Point2D) -> bool {
        !self.is_empty() && to_geo_polygon(&self.vertices).intersects(&to_geo_coord(point))
    }
}

/// Ergebnis des Builders: indexgleich zu den Eingabe-Sites.
#[derive(Debug, Clone, PartialEq)]
pub struct VoronoiDiagram {
    pub sites: Vec<Point2D>,
    pub bounds: Bounds2D,
    pub cells: Vec<VoronoiCell>,
}

impl VoronoiDiagram {
    pub fn cell(&self, site_index: usize) -> Option<&VoronoiCell> {
        self.cells.get(site_index)
    }

    /// Erste Zelle, die den Punkt enthält (Rand inklusive).
    pub fn cell_containing(&self, point: Point2D) -> Option<usize> {
        self.cells.iter().position(|cell| cell.contains_point(point))
    }

    pub fn total_area(&self) -> f64 {
        self.cells.iter().map(VoronoiCell::area).sum()
    }

    /// Mittlerer Umfang der nicht leeren Zellen, `0.0` ohne solche Zellen.
    pub fn mean_perimeter(&self) -> f64 {
        let filled: Vec<f64> = self
            .cells
            .iter()
            .filter(|cell| !cell.is_empty())
            .map(VoronoiCell::perimeter)
            .collect();
        if filled.is_empty() {
            0.0
        } else {
            filled.iter().sum::<f64>() / filled.len() as f64
        }
    }

    pub fn empty_cell_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }

    pub fn into_cells(self) -> Vec<VoronoiCell> {
        self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_square_cell() -> VoronoiCell {
        VoronoiCell {
            site_index: 0,
            site: Point2D::new(0.5, 0.5),
            vertices: vec![
                Point2D::new(0.0, 0.0),
                Point2D::new(1.0, 0.0),
                Point2D::new(1.0, 1.0),
                Point2D::new(0.0, 1.0),
            ],
            was_unbounded: false,
            neighbor_ids: Vec::new(),
        }
    }

    #[test]
    fn test_cell_measures() {
        let cell = unit_square_cell();
        assert!(!cell.is_empty());
        assert_relative_eq!(cell.area(), 1.0);
        assert_relative_eq!(cell.perimeter(), 4.0);
    }

    #[test]
    fn test_contains_includes_boundary() {
        let cell = unit_square_cell();
        assert!(cell.contains_point(Point2D::new(0.5, 0.5)));
        assert!(cell.contains_point(Point2D::new(1.0, 0.5)));
        assert!(!cell.contains_point(Point2D::new(1.5, 0.5)));
    }

    #[test]
    fn test_empty_cell() {
        let cell = VoronoiCell::empty(3, Point2D::new(1.0, 1.0));
        assert!(cell.is_empty());
        assert_eq!(cell.area(), 0.0);
        assert_eq!(cell.perimeter(), 0.0);
        assert!(!cell.contains_point(Point2D::new(1.0, 1.0)));
    }

    #[test]
    fn test_mean_perimeter_skips_empty_cells() {
        let diagram = VoronoiDiagram {
            sites: vec![Point2D::new(0.5, 0.5), Point2D::new(0.5, 0.5)],
            bounds: Bounds2D::from_size(1.0, 1.0).unwrap(),
            cells: vec![
                unit_square_cell(),
                VoronoiCell::empty(1, Point2D::new(0.5, 0.5)),
            ],
        };
        assert_relative_eq!(diagram.mean_perimeter(), 4.0);
        assert_eq!(diagram.empty_cell_count(), 1);

        let none = VoronoiDiagram {
            cells: vec![VoronoiCell::empty(0, Point2D::ZERO)],
            ..diagram
        };
        assert_eq!(none.mean_perimeter(), 0.0);
    }
}
