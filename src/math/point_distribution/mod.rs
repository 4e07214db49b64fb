// src/math/point_distribution/mod.rs

// Punktverteilung (Sampler) und die darauf aufbauende Zerlegung in Zellen
pub mod sampling;
pub mod voronoi;

pub use self::sampling::{
    JitterSpan, JitteredGridConfig, PointSampler, PoissonDiskConfig, SampleSet, SampleShape,
    SamplingStrategy,
};
pub use self::voronoi::{VoronoiBuilder, VoronoiCell, VoronoiConfig, VoronoiDiagram, build_voronoi};
