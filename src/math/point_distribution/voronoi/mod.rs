// src/math/point_distribution/voronoi/mod.rs

pub mod boundary;
pub mod builder;
pub mod config;
pub mod half_edge;
pub mod voronoi_diagram;

pub use self::builder::{VoronoiBuilder, build_voronoi};
pub use self::config::VoronoiConfig;
pub use self::half_edge::{HalfEdge, HalfEdgeGraph, SiteSource};
pub use self::voronoi_diagram::{VoronoiCell, VoronoiDiagram};
