// src/math/point_distribution/sampling/jittered_grid.rs

use super::{SampleSet, config::JitteredGridConfig};
use crate::math::{error::MathResult, types::Point2D};
use bevy::log::debug;
use rand::Rng;

/// Erzeugt `columns · rows` Punkte auf den Knoten `tile·(i+1, j+1)`, jeweils
/// unabhängig pro Achse verschoben.
///
/// Bei großem Jitter können Punkte zusammenfallen, sie bleiben trotzdem erhalten.
pub fn jittered_grid<R: Rng + ?Sized>(
    config: &JitteredGridConfig,
    rng: &mut R,
) -> MathResult<SampleSet> {
    config.validate()?;
    let bounds = config.region()?;
    let half = config.span.half_width(config.jitter);

    let mut points = Vec::with_capacity(config.columns * config.rows);
    for x in 0..config.columns {
        for y in 0..config.rows {
            let node = Point2D::new(
                config.tile_size * (x as f64 + 1.0),
                config.tile_size * (y as f64 + 1.0),
            );
            let offset = Point2D::new(rng.random_range(-half..=half), rng.random_range(-half..=half));
            points.push(node + offset);
        }
    }

    debug!(
        "jittered_grid: {}x{} nodes, jitter {} ({:?}), region {}",
        config.columns, config.rows, config.jitter, config.span, bounds
    );

    Ok(SampleSet {
        points,
        bounds,
        exhausted: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::point_distribution::sampling::config::JitterSpan;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_exact_point_count() {
        let mut rng = StdRng::seed_from_u64(1);
        for (w, h) in [(5, 5), (30, 20), (7, 13), (1, 1)] {
            let set = jittered_grid(&JitteredGridConfig::new(w, h, 10.0), &mut rng).unwrap();
            assert_eq!(set.len(), w * h);
            assert!(!set.exhausted);
        }
    }

    #[test]
    fn test_zero_jitter_hits_nodes() {
        let mut rng = StdRng::seed_from_u64(2);
        let set = jittered_grid(&JitteredGridConfig::new(5, 6, 0.0), &mut rng).unwrap();
        assert_eq!(set.points[0], Point2D::new(50.0, 50.0));
        // x-major: der zweite Punkt liegt in derselben Spalte
        assert_eq!(set.points[1], Point2D::new(50.0, 100.0));
        assert_eq!(set.points[29], Point2D::new(250.0, 300.0));
    }

    #[test]
    fn test_points_respect_jitter_bound() {
        let mut rng = StdRng::seed_from_u64(3);
        let config = JitteredGridConfig::new(10, 10, 20.0);
        let set = jittered_grid(&config, &mut rng).unwrap();
        for (k, p) in set.iter().enumerate() {
            let node = Point2D::new(50.0 * (k / 10 + 1) as f64, 50.0 * (k % 10 + 1) as f64);
            assert!((p.x - node.x).abs() <= 10.0);
            assert!((p.y - node.y).abs() <= 10.0);
            assert!(set.bounds.contains_point(*p));
        }
    }

    #[test]
    fn test_full_span_stays_inside_region() {
        let mut rng = StdRng::seed_from_u64(4);
        let config = JitteredGridConfig::new(8, 5, 49.0).with_span(JitterSpan::Full);
        let set = jittered_grid(&config, &mut rng).unwrap();
        assert_eq!(set.len(), 40);
        assert!(set.iter().all(|p| set.bounds.contains_point(*p)));
    }
}
