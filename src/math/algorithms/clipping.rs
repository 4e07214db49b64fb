// src/math/algorithms/clipping.rs

//! # Polygon Clipping Module
//!
//! Clips a subject polygon against an axis-aligned rectangle.
//!
//! Sutherland-Hodgman is the only supported algorithm. It is correct for any
//! simple subject polygon when the clip region is convex, which the rectangle
//! always is. Intersection points on a rectangle side carry the side's
//! coordinate verbatim, so rectangle corners come out bit-exact.

use crate::math::{
    types::{Bounds2D, Point2D},
    utils::constants,
};

/// Specifies the algorithm to be used for polygon clipping operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClippingAlgorithm {
    /// The Sutherland-Hodgman algorithm.
    /// Processes the subject polygon against each side of the clip region sequentially.
    #[default]
    SutherlandHodgman,
}

/// One side of the clip rectangle, as the half-plane that is kept.
#[derive(Debug, Clone, Copy, PartialEq)]
enum RectSide {
    Left(f64),
    Right(f64),
    Bottom(f64),
    Top(f64),
}

impl RectSide {
    fn is_inside(self, p: Point2D) -> bool {
        match self {
            RectSide::Left(x) => p.x >= x,
            RectSide::Right(x) => p.x <= x,
            RectSide::Bottom(y) => p.y >= y,
            RectSide::Top(y) => p.y <= y,
        }
    }

    /// Intersection of segment `s → e` with the side's supporting line.
    /// Only called when exactly one of the endpoints is inside.
    fn intersect(self, s: Point2D, e: Point2D) -> Point2D {
        match self {
            RectSide::Left(x) | RectSide::Right(x) => {
                let t = (x - s.x) / (e.x - s.x);
                Point2D::new(x, s.y + t * (e.y - s.y))
            }
            RectSide::Bottom(y) | RectSide::Top(y) => {
                let t = (y - s.y) / (e.y - s.y);
                Point2D::new(s.x + t * (e.x - s.x), y)
            }
        }
    }
}

/// Performs polygon clipping operations using a specified algorithm.
#[derive(Debug, Clone)]
pub struct PolygonClipper {
    algorithm: ClippingAlgorithm,
    /// Consecutive output vertices closer than this are merged.
    tolerance: f64,
}

impl Default for PolygonClipper {
    fn default() -> Self {
        Self {
            algorithm: ClippingAlgorithm::default(),
            tolerance: constants::EPSILON,
        }
    }
}

impl PolygonClipper {
    pub fn new(algorithm: ClippingAlgorithm) -> Self {
        Self {
            algorithm,
            ..Self::default()
        }
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Clips `subject` (an open ring, either orientation) against `bounds`.
    ///
    /// Returns an empty vector when the intersection has no area, i.e. fewer
    /// than three distinct vertices remain. Orientation is preserved.
    pub fn clip_against_rectangle(&self, subject: &[Point2D], bounds: &Bounds2D) -> Vec<Point2D> {
        let clipped = match self.algorithm {
            ClippingAlgorithm::SutherlandHodgman => sutherland_hodgman(subject, bounds),
        };
        self.cleanup(clipped)
    }

    fn cleanup(&self, mut vertices: Vec<Point2D>) -> Vec<Point2D> {
        let tolerance_sq = self.tolerance * self.tolerance;
        vertices.dedup_by(|b, a| a.distance_squared(*b) <= tolerance_sq);
        while vertices.len() > 1 {
            let first = vertices[0];
            let last = vertices[vertices.len() - 1];
            if first.distance_squared(last) <= tolerance_sq {
                vertices.pop();
            } else {
                break;
            }
        }
        if vertices.len() < 3 {
            vertices.clear();
        }
        vertices
    }
}

fn sutherland_hodgman(subject: &[Point2D], bounds: &Bounds2D) -> Vec<Point2D> {
    let sides = [
        RectSide::Left(bounds.min.x),
        RectSide::Right(bounds.max.x),
        RectSide::Bottom(bounds.min.y),
        RectSide::Top(bounds.max.y),
    ];

    let mut output = subject.to_vec();
    for side in sides {
        if output.is_empty() {
            break;
        }
        let input = std::mem::take(&mut output);
        let mut s = input[input.len() - 1];

        for &e in &input {
            let e_inside = side.is_inside(e);
            let s_inside = side.is_inside(s);
            if e_inside {
                if !s_inside {
                    // Entering
                    output.push(side.intersect(s, e));
                }
                output.push(e);
            } else if s_inside {
                // Leaving
                output.push(side.intersect(s, e));
            }
            s = e;
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use geo::Area;

    fn area(vertices: &[Point2D]) -> f64 {
        crate::math::types::to_geo_polygon(vertices).unsigned_area()
    }

    fn bounds() -> Bounds2D {
        Bounds2D::from_size(10.0, 10.0).unwrap()
    }

    #[test]
    fn test_inside_polygon_is_unchanged() {
        let square = vec![
            Point2D::new(2.0, 2.0),
            Point2D::new(4.0, 2.0),
            Point2D::new(4.0, 4.0),
            Point2D::new(2.0, 4.0),
        ];
        let clipped = PolygonClipper::default().clip_against_rectangle(&square, &bounds());
        assert_eq!(clipped, square);
    }

    #[test]
    fn test_huge_polygon_becomes_exact_rectangle() {
        let huge = vec![
            Point2D::new(-1e6, -1e6),
            Point2D::new(1e6, -1e6),
            Point2D::new(1e6, 1e6),
            Point2D::new(-1e6, 1e6),
        ];
        let clipped = PolygonClipper::default().clip_against_rectangle(&huge, &bounds());
        assert_eq!(clipped.len(), 4);
        for corner in bounds().corners() {
            assert!(clipped.contains(&corner), "missing corner {:?}", corner);
        }
    }

    #[test]
    fn test_partial_overlap() {
        let triangle = vec![
            Point2D::new(5.0, 5.0),
            Point2D::new(15.0, 5.0),
            Point2D::new(5.0, 15.0),
        ];
        let clipped = PolygonClipper::default().clip_against_rectangle(&triangle, &bounds());
        // Hypotenuse x+y=20 berührt (10,10) genau, übrig bleibt das Quadrat [5,10]²
        assert_relative_eq!(area(&clipped), 25.0, epsilon = 1e-9);
    }

    #[test]
    fn test_disjoint_polygon_is_empty() {
        let outside = vec![
            Point2D::new(20.0, 20.0),
            Point2D::new(30.0, 20.0),
            Point2D::new(30.0, 30.0),
        ];
        assert!(
            PolygonClipper::default()
                .clip_against_rectangle(&outside, &bounds())
                .is_empty()
        );
    }

    #[test]
    fn test_touching_polygon_has_no_area() {
        let touching = vec![
            Point2D::new(10.0, 2.0),
            Point2D::new(12.0, 2.0),
            Point2D::new(12.0, 4.0),
            Point2D::new(10.0, 4.0),
        ];
        assert!(
            PolygonClipper::default()
                .clip_against_rectangle(&touching, &bounds())
                .is_empty()
        );
    }
}
