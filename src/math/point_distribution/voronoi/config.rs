// src/math/point_distribution/voronoi/config.rs

use crate::math::error::{MathError, MathResult};

/// Hilfspunkte pro Seite des Verstärkungsrings.
pub const DEFAULT_RING_POINTS_PER_SIDE: usize = 16;
/// Radius des Fernkreises für rekonstruierte Strahlen, relativ zur Zellausdehnung.
pub const DEFAULT_FAR_FIELD_FACTOR: f64 = 4.0;

/// Konfiguration für den Aufbau eines begrenzten Voronoi-Diagramms.
#[derive(Debug, Clone, PartialEq)]
pub struct VoronoiConfig {
    /// Zusätzliche Hilfs-Sites außerhalb des Rechtecks einfügen. Sie erzeugen
    /// keine Ausgabezellen, halten aber alle Eingabezellen endlich.
    pub boundary_reinforcement: bool,
    /// Anzahl der Hilfs-Sites pro Rechteckseite.
    pub ring_points_per_side: usize,
    /// Ganzzahliger Skalierungspfad: Koordinaten werden mit dem Faktor
    /// multipliziert und gerundet, danach wieder geteilt. Muss eine Zweierpotenz sein.
    pub integer_scale: Option<u32>,
    /// Faktor für den Radius, bis zu dem offene Kanten verlängert werden (≥ 2).
    pub far_field_factor: f64,
}

impl Default for VoronoiConfig {
    fn default() -> Self {
        Self {
            boundary_reinforcement: true,
            ring_points_per_side: DEFAULT_RING_POINTS_PER_SIDE,
            integer_scale: None,
            far_field_factor: DEFAULT_FAR_FIELD_FACTOR,
        }
    }
}

impl VoronoiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_boundary_reinforcement(mut self, enabled: bool) -> Self {
        self.boundary_reinforcement = enabled;
        self
    }

    pub fn with_ring_points_per_side(mut self, count: usize) -> Self {
        self.ring_points_per_side = count;
        self
    }

    pub fn with_integer_scale(mut self, scale: u32) -> Self {
        self.integer_scale = Some(scale);
        self
    }

    pub fn with_far_field_factor(mut self, factor: f64) -> Self {
        self.far_field_factor = factor;
        self
    }

    /// Skalierungsfaktor als f64, `1.0` ohne Skalierungspfad.
    pub fn scale_factor(&self) -> f64 {
        self.integer_scale.map_or(1.0, f64::from)
    }

    pub fn validate(&self) -> MathResult<()> {
        if self.boundary_reinforcement && self.ring_points_per_side < 2 {
            return Err(MathError::InvalidConfiguration {
                message: format!(
                    "Boundary reinforcement needs at least 2 points per side, got {}",
                    self.ring_points_per_side
                ),
            });
        }
        if let Some(scale) = self.integer_scale {
            if !scale.is_power_of_two() {
                return Err(MathError::InvalidConfiguration {
                    message: format!("Integer scale must be a power of two, got {}", scale),
                });
            }
        }
        if !(self.far_field_factor.is_finite() && self.far_field_factor >= 2.0) {
            return Err(MathError::InvalidConfiguration {
                message: format!(
                    "Far field factor must be finite and at least 2, got {}",
                    self.far_field_factor
                ),
            });
        }
        Ok(())
    }
}
