// src/diagram/resources.rs
use crate::math::point_distribution::{
    JitterSpan, JitteredGridConfig, PoissonDiskConfig, SampleSet, SampleShape, SamplingStrategy,
    VoronoiConfig, VoronoiDiagram, sampling::DEFAULT_TILE_SIZE,
};
use bevy::prelude::*;
use std::ops::RangeInclusive;

/// Erlaubte Gittergröße (Spalten und Zeilen).
pub const GRID_SIZE_RANGE: RangeInclusive<usize> = 5..=1000;
/// Erlaubte Punktanzahl für Poisson-Disk.
pub const POINT_COUNT_RANGE: RangeInclusive<usize> = 10..=10000;
/// Skalierung für den ganzzahligen Konstruktionspfad.
pub const LATTICE_SCALE: u32 = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistributionMode {
    #[default]
    JitteredGrid,
    PoissonDisk,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellColouring {
    /// Alle Zellen in einer Farbe.
    #[default]
    Outline,
    /// Zufällige Farbe pro Zelle.
    Palette,
}

#[derive(Resource, Debug, Clone)]
pub struct DiagramParameters {
    // --- Verteilung ---
    pub mode: DistributionMode,
    pub columns: usize,
    pub rows: usize,
    pub randomness: f64,
    pub jitter_span: JitterSpan,
    pub tile_size: f64,
    pub point_count: usize,
    pub shape: SampleShape,

    // --- Voronoi ---
    pub boundary_reinforcement: bool,
    pub integer_lattice: bool,

    // --- Zufall ---
    pub use_fixed_seed: bool,
    pub seed_text: String,

    // --- Visualisierung ---
    pub colouring: CellColouring,
    pub show_points: bool,

    pub regenerate_requested: bool,
}

impl Default for DiagramParameters {
    fn default() -> Self {
        Self {
            mode: DistributionMode::default(),
            columns: 30,
            rows: 20,
            randomness: 5.0,
            jitter_span: JitterSpan::default(),
            tile_size: DEFAULT_TILE_SIZE,
            point_count: 600,
            shape: SampleShape::default(),

            boundary_reinforcement: true,
            integer_lattice: false,

            use_fixed_seed: false,
            seed_text: String::from("voronoi"),

            colouring: CellColouring::default(),
            show_points: true,

            // Beim Start einmal generieren
            regenerate_requested: true,
        }
    }
}

impl DiagramParameters {
    /// Zulässiger Bereich für die Zufallsverschiebung, `0 ..= Kachelgröße - 1`.
    pub fn randomness_range(&self) -> RangeInclusive<f64> {
        0.0..=(self.tile_size - 1.0).max(0.0)
    }

    /// Zieht alle Werte in ihre erlaubten Bereiche.
    pub fn clamp_to_ranges(&mut self) {
        self.columns = self
            .columns
            .clamp(*GRID_SIZE_RANGE.start(), *GRID_SIZE_RANGE.end());
        self.rows = self.rows.clamp(*GRID_SIZE_RANGE.start(), *GRID_SIZE_RANGE.end());
        self.point_count = self
            .point_count
            .clamp(*POINT_COUNT_RANGE.start(), *POINT_COUNT_RANGE.end());
        let range = self.randomness_range();
        self.randomness = self.randomness.clamp(*range.start(), *range.end());
    }

    /// Breite und Höhe des Zielbereichs. Beide Verfahren füllen dasselbe
    /// Rechteck `tile·(columns+1) × tile·(rows+1)`.
    pub fn region_size(&self) -> (f64, f64) {
        (
            self.tile_size * (self.columns + 1) as f64,
            self.tile_size * (self.rows + 1) as f64,
        )
    }

    pub fn strategy(&self) -> SamplingStrategy {
        match self.mode {
            DistributionMode::JitteredGrid => SamplingStrategy::JitteredGrid(
                JitteredGridConfig::new(self.columns, self.rows, self.randomness)
                    .with_tile_size(self.tile_size)
                    .with_span(self.jitter_span),
            ),
            DistributionMode::PoissonDisk => {
                let (width, height) = self.region_size();
                SamplingStrategy::PoissonDisk(
                    PoissonDiskConfig::new(width, height, self.point_count)
                        .with_shape(self.shape),
                )
            }
        }
    }

    pub fn voronoi_config(&self) -> VoronoiConfig {
        let config =
            VoronoiConfig::new().with_boundary_reinforcement(self.boundary_reinforcement);
        if self.integer_lattice {
            config.with_integer_scale(LATTICE_SCALE)
        } else {
            config
        }
    }
}

/// Ergebnis der letzten Generierung.
#[derive(Resource, Debug, Default)]
pub struct DiagramState {
    pub samples: Option<SampleSet>,
    pub diagram: Option<VoronoiDiagram>,
    /// Eine Farbe pro Zelle, gleicher Index.
    pub palette: Vec<Color>,
    pub last_error: Option<String>,
    pub last_duration_ms: f64,
}
