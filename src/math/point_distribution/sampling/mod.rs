// src/math/point_distribution/sampling/mod.rs

pub mod config;
pub mod jittered_grid;
pub mod poisson_disk;
pub mod spatial_grid;

pub use self::config::{
    DEFAULT_CANDIDATES_PER_POINT, DEFAULT_TILE_SIZE, JitterSpan, JitteredGridConfig,
    PoissonDiskConfig, SampleShape,
};
pub use self::jittered_grid::jittered_grid;
pub use self::poisson_disk::{NormalizedSamples, generate_normalized, poisson_disk};

use crate::math::{
    error::MathResult,
    types::{Bounds2D, Point2D},
};
use rand::Rng;

/// Geordnete, indexstabile Punktmenge. Der Index eines Punktes ist seine
/// Identität und wird später für die Zuordnung zur Voronoi-Zelle genutzt.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    pub points: Vec<Point2D>,
    /// Der Bereich, in dem die Punkte liegen.
    pub bounds: Bounds2D,
    /// Poisson-Sampling hat vor Erreichen der Zielanzahl aufgehört. Kein Fehler.
    pub exhausted: bool,
}

impl SampleSet {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point2D> {
        self.points.iter()
    }
}

/// Auswahl der Verteilungsstrategie.
#[derive(Debug, Clone, PartialEq)]
pub enum SamplingStrategy {
    /// Gitterknoten mit zufälliger Verschiebung (Policy A).
    JitteredGrid(JitteredGridConfig),
    /// Blue Noise nach Bridson (Policy B).
    PoissonDisk(PoissonDiskConfig),
}

impl SamplingStrategy {
    pub fn validate(&self) -> MathResult<()> {
        match self {
            SamplingStrategy::JitteredGrid(config) => config.validate(),
            SamplingStrategy::PoissonDisk(config) => config.validate(),
        }
    }

    /// Der Bereich, den die Strategie füllt.
    pub fn region(&self) -> MathResult<Bounds2D> {
        match self {
            SamplingStrategy::JitteredGrid(config) => config.region(),
            SamplingStrategy::PoissonDisk(config) => config.region(),
        }
    }
}

/// Punkt-Sampler mit fest gewählter Strategie.
#[derive(Debug, Clone)]
pub struct PointSampler {
    strategy: SamplingStrategy,
}

impl PointSampler {
    pub fn new(strategy: SamplingStrategy) -> MathResult<Self> {
        strategy.validate()?;
        Ok(Self { strategy })
    }

    pub fn strategy(&self) -> &SamplingStrategy {
        &self.strategy
    }

    /// Erzeugt eine Punktmenge. Der Generator wird vom Aufrufer besessen.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> MathResult<SampleSet> {
        sample(&self.strategy, rng)
    }
}

/// Erzeugt eine Punktmenge gemäß `strategy`.
pub fn sample<R: Rng + ?Sized>(strategy: &SamplingStrategy, rng: &mut R) -> MathResult<SampleSet> {
    match strategy {
        SamplingStrategy::JitteredGrid(config) => jittered_grid(config, rng),
        SamplingStrategy::PoissonDisk(config) => poisson_disk(config, rng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_sampler_dispatches_by_strategy() {
        let mut rng = StdRng::seed_from_u64(21);

        let grid = PointSampler::new(SamplingStrategy::JitteredGrid(JitteredGridConfig::new(
            6, 4, 5.0,
        )))
        .unwrap();
        let set = grid.sample(&mut rng).unwrap();
        assert_eq!(set.len(), 24);
        assert_eq!(set.bounds, grid.strategy().region().unwrap());

        let poisson = PointSampler::new(SamplingStrategy::PoissonDisk(PoissonDiskConfig::new(
            200.0, 100.0, 40,
        )))
        .unwrap();
        let set = poisson.sample(&mut rng).unwrap();
        assert!(set.len() <= 40);
        assert_eq!(set.bounds.max, Point2D::new(200.0, 100.0));
    }

    #[test]
    fn test_invalid_strategy_is_rejected_up_front() {
        let strategy = SamplingStrategy::PoissonDisk(PoissonDiskConfig::new(-1.0, 1.0, 10));
        assert!(PointSampler::new(strategy).is_err());
    }
}
