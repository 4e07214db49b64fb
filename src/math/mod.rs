pub mod algorithms;
pub mod error;
pub mod point_distribution;
pub mod probability;
pub mod types;
pub mod utils;

// Re-exports für einfache Verwendung
pub use error::{MathError, MathResult};
pub use types::*;

// Öffentliche API
pub mod prelude {
    pub use super::{
        error::{MathError, MathResult},
        point_distribution::{
            sampling::{
                JitterSpan, JitteredGridConfig, PointSampler, PoissonDiskConfig, SampleSet,
                SampleShape, SamplingStrategy, sample,
            },
            voronoi::{VoronoiBuilder, VoronoiCell, VoronoiConfig, VoronoiDiagram, build_voronoi},
        },
        probability::{SeedPolicy, SeedResource},
        types::*,
    };
}
