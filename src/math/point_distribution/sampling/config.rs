// src/math/point_distribution/sampling/config.rs

use crate::math::{
    error::{MathError, MathResult},
    types::{Bounds2D, Point2D},
    utils::constants,
};

/// Kantenlänge einer Kachel des Jitter-Gitters.
pub const DEFAULT_TILE_SIZE: f64 = 50.0;
/// Standardwert für `k` aus Bridsons Verfahren.
pub const DEFAULT_CANDIDATES_PER_POINT: usize = 30;
/// Obergrenze der Gitterauflösung pro Achse für das Poisson-Beschleunigungsgitter.
pub const MAX_GRID_RESOLUTION: usize = 4096;

/// Wertebereich der Verschiebung pro Achse beim Jitter-Gitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JitterSpan {
    /// `[-r/2, r/2]`
    #[default]
    Half,
    /// `[-r, r]`
    Full,
}

impl JitterSpan {
    /// Halbe Breite des Intervalls für den Jitter-Radius `r`.
    pub fn half_width(self, jitter: f64) -> f64 {
        match self {
            JitterSpan::Half => jitter * 0.5,
            JitterSpan::Full => jitter,
        }
    }
}

/// Konfiguration für das gejitterte Gitter (Policy A).
#[derive(Debug, Clone, PartialEq)]
pub struct JitteredGridConfig {
    /// Anzahl der Gitterknoten in x-Richtung.
    pub columns: usize,
    /// Anzahl der Gitterknoten in y-Richtung.
    pub rows: usize,
    /// Jitter-Radius `r ≥ 0` in Bereichseinheiten.
    pub jitter: f64,
    pub tile_size: f64,
    pub span: JitterSpan,
}

impl Default for JitteredGridConfig {
    fn default() -> Self {
        Self {
            columns: 30,
            rows: 20,
            jitter: DEFAULT_TILE_SIZE / 10.0,
            tile_size: DEFAULT_TILE_SIZE,
            span: JitterSpan::Half,
        }
    }
}

impl JitteredGridConfig {
    pub fn new(columns: usize, rows: usize, jitter: f64) -> Self {
        Self {
            columns,
            rows,
            jitter,
            ..Self::default()
        }
    }

    pub fn with_tile_size(mut self, tile_size: f64) -> Self {
        self.tile_size = tile_size;
        self
    }

    pub fn with_span(mut self, span: JitterSpan) -> Self {
        self.span = span;
        self
    }

    /// Der Bereich `tile·(w+1) × tile·(h+1)`, in dem die Knoten liegen.
    pub fn region(&self) -> MathResult<Bounds2D> {
        Bounds2D::from_size(
            self.tile_size * (self.columns as f64 + 1.0),
            self.tile_size * (self.rows as f64 + 1.0),
        )
    }

    pub fn validate(&self) -> MathResult<()> {
        if self.columns == 0 || self.rows == 0 {
            return Err(MathError::InvalidConfiguration {
                message: format!(
                    "Jittered grid needs at least one column and one row, got {}x{}",
                    self.columns, self.rows
                ),
            });
        }
        if !(self.tile_size > 0.0 && self.tile_size.is_finite()) {
            return Err(MathError::InvalidConfiguration {
                message: format!("Tile size must be positive, got {}", self.tile_size),
            });
        }
        if !(self.jitter >= 0.0 && self.jitter.is_finite()) {
            return Err(MathError::InvalidConfiguration {
                message: format!("Jitter must be a finite value >= 0, got {}", self.jitter),
            });
        }
        self.region().map(|_| ())
    }
}

/// Form, die Poisson-Samples im normierten Raum erfüllen müssen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleShape {
    /// Einheitsquadrat `[0,1]²`
    #[default]
    Rectangle,
    /// Einbeschriebener Kreis um `(0.5, 0.5)` mit Radius `0.5`
    Circle,
}

impl SampleShape {
    pub fn contains(self, p: Point2D) -> bool {
        match self {
            SampleShape::Rectangle => p.x >= 0.0 && p.y >= 0.0 && p.x <= 1.0 && p.y <= 1.0,
            SampleShape::Circle => {
                let d = p - Point2D::splat(0.5);
                d.length_squared() <= 0.25
            }
        }
    }
}

/// Konfiguration für Poisson-Disk-Sampling (Policy B).
#[derive(Debug, Clone, PartialEq)]
pub struct PoissonDiskConfig {
    /// Zielanzahl `NumPoints`. Das Ergebnis kann kürzer sein.
    pub target_count: usize,
    /// Kandidaten pro aktivem Punkt (`k`).
    pub candidates_per_point: usize,
    pub shape: SampleShape,
    /// Minimaler Abstand im normierten Raum. `None` → `√N / N`.
    pub min_distance: Option<f64>,
    /// Breite des Zielbereichs, in den die normierten Punkte skaliert werden.
    pub width: f64,
    /// Höhe des Zielbereichs.
    pub height: f64,
    /// Optionaler abschließender Jitter (Bereichseinheiten), danach wird geklemmt.
    pub final_jitter: f64,
}

impl Default for PoissonDiskConfig {
    fn default() -> Self {
        Self {
            target_count: 500,
            candidates_per_point: DEFAULT_CANDIDATES_PER_POINT,
            shape: SampleShape::Rectangle,
            min_distance: None,
            width: 1.0,
            height: 1.0,
            final_jitter: 0.0,
        }
    }
}

impl PoissonDiskConfig {
    pub fn new(width: f64, height: f64, target_count: usize) -> Self {
        Self {
            width,
            height,
            target_count,
            ..Self::default()
        }
    }

    pub fn with_candidates(mut self, k: usize) -> Self {
        self.candidates_per_point = k;
        self
    }

    pub fn with_shape(mut self, shape: SampleShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn with_min_distance(mut self, min_distance: f64) -> Self {
        self.min_distance = Some(min_distance);
        self
    }

    pub fn with_final_jitter(mut self, jitter: f64) -> Self {
        self.final_jitter = jitter;
        self
    }

    /// Der tatsächlich verwendete Mindestabstand im normierten Raum.
    pub fn effective_min_distance(&self) -> f64 {
        self.min_distance.unwrap_or_else(|| {
            let n = self.target_count.max(1) as f64;
            n.sqrt() / n
        })
    }

    pub fn region(&self) -> MathResult<Bounds2D> {
        Bounds2D::from_size(self.width, self.height)
    }

    pub fn validate(&self) -> MathResult<()> {
        if self.target_count == 0 {
            return Err(MathError::InvalidConfiguration {
                message: "Poisson disk sampling needs a target count of at least 1".to_string(),
            });
        }
        if self.candidates_per_point == 0 {
            return Err(MathError::InvalidConfiguration {
                message: "Candidates per point (k) must be greater than 0".to_string(),
            });
        }
        let min_distance = self.effective_min_distance();
        if !(min_distance > 0.0 && min_distance.is_finite()) {
            return Err(MathError::InvalidConfiguration {
                message: format!("Minimum distance must be positive, got {}", min_distance),
            });
        }
        let resolution = (constants::SQRT_2 / min_distance).ceil();
        if resolution > MAX_GRID_RESOLUTION as f64 {
            return Err(MathError::InvalidConfiguration {
                message: format!(
                    "Minimum distance {} needs a {}x{} acceleration grid (max {})",
                    min_distance, resolution, resolution, MAX_GRID_RESOLUTION
                ),
            });
        }
        if !(self.final_jitter >= 0.0 && self.final_jitter.is_finite()) {
            return Err(MathError::InvalidConfiguration {
                message: format!(
                    "Final jitter must be a finite value >= 0, got {}",
                    self.final_jitter
                ),
            });
        }
        self.region().map(|_| ())
    }
}
