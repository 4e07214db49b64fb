// src/math/types/bounds.rs

use crate::math::{error::*, types::*};
use std::fmt;

/// 2D Bounding Box (Axis-Aligned Bounding Box).
///
/// Der Zielbereich eines Diagramms ist immer `[0,0] × [W,H]`, siehe
/// [`Bounds2D::from_size`]. Allgemeine min/max-Boxen werden intern für
/// skalierte Varianten verwendet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds2D {
    pub min: Point2D,
    pub max: Point2D,
}

impl Bounds2D {
    /// Erstellt eine neue Bounding Box
    pub fn new(min: Point2D, max: Point2D) -> MathResult<Self> {
        if !(min.x < max.x && min.y < max.y) || !min.is_finite() || !max.is_finite() {
            return Err(MathError::InvalidRegion {
                width: max.x - min.x,
                height: max.y - min.y,
            });
        }

        Ok(Self { min, max })
    }

    /// Erstellt den Bereich `[0,0] × [width,height]`.
    pub fn from_size(width: f64, height: f64) -> MathResult<Self> {
        if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
            return Err(MathError::InvalidRegion { width, height });
        }
        Ok(Self {
            min: Point2D::ZERO,
            max: Point2D::new(width, height),
        })
    }

    /// Breite der Bounding Box
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Höhe der Bounding Box
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn size(&self) -> Point2D {
        self.max - self.min
    }

    /// Zentrum der Bounding Box
    pub fn center(&self) -> Point2D {
        (self.min + self.max) * 0.5
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Länge der Diagonalen
    pub fn diagonal(&self) -> f64 {
        self.size().length()
    }

    /// Prüft ob ein Punkt in der Bounding Box liegt (Rand inklusive)
    pub fn contains_point(&self, point: Point2D) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Klemmt einen Punkt auf den Rand der Box.
    pub fn clamp_point(&self, point: Point2D) -> Point2D {
        point.clamp(self.min, self.max)
    }

    /// Vergrößert die Box in alle Richtungen um `margin`.
    pub fn expand(&self, margin: f64) -> Self {
        Self {
            min: self.min - Point2D::splat(margin),
            max: self.max + Point2D::splat(margin),
        }
    }

    /// Skaliert die Koordinaten (nicht um das Zentrum, sondern um den Ursprung).
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            min: self.min * factor,
            max: self.max * factor,
        }
    }

    /// Eckpunkte gegen den Uhrzeigersinn, beginnend bei `min`.
    pub fn corners(&self) -> [Point2D; 4] {
        [
            self.min,
            Point2D::new(self.max.x, self.min.y),
            self.max,
            Point2D::new(self.min.x, self.max.y),
        ]
    }
}

impl fmt::Display for Bounds2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.3}, {:.3}] × [{:.3}, {:.3}]",
            self.min.x, self.max.x, self.min.y, self.max.y
        )
    }
}
