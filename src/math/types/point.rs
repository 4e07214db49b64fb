// src/math/types/point.rs
use super::{Point2D, SpadePoint};

// --- Konvertierungsfunktionen ---

/// Konvertiert einen Punkt in Spade's Punkt-Typ.
pub fn to_spade_point(p: Point2D) -> SpadePoint {
    SpadePoint::new(p.x, p.y)
}

/// Konvertiert einen Spade-Punkt zurück in unseren Punkt-Typ.
pub fn from_spade_point(p: SpadePoint) -> Point2D {
    Point2D::new(p.x, p.y)
}

/// Konvertiert einen Punkt in eine `geo`-Koordinate.
pub fn to_geo_coord(p: Point2D) -> geo::Coord<f64> {
    geo::Coord { x: p.x, y: p.y }
}

/// Baut ein `geo::Polygon` aus einem (offenen) Ring von Eckpunkten.
/// `geo` schließt den Ring selbst.
pub fn to_geo_polygon(vertices: &[Point2D]) -> geo::Polygon<f64> {
    let exterior: Vec<geo::Coord<f64>> = vertices.iter().copied().map(to_geo_coord).collect();
    geo::Polygon::new(geo::LineString::new(exterior), Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Area;

    #[test]
    fn test_spade_round_trip() {
        let p = Point2D::new(12.5, -3.25);
        assert_eq!(from_spade_point(to_spade_point(p)), p);
    }

    #[test]
    fn test_geo_polygon_area() {
        let square = [
            Point2D::new(0.0, 0.0),
            Point2D::new(2.0, 0.0),
            Point2D::new(2.0, 2.0),
            Point2D::new(0.0, 2.0),
        ];
        let polygon = to_geo_polygon(&square);
        approx::assert_relative_eq!(polygon.unsigned_area(), 4.0);
        // CCW-Eingabe ergibt positive signierte Fläche
        assert!(polygon.signed_area() > 0.0);
    }
}
