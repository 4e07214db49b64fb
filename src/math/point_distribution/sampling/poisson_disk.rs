// src/math/point_distribution/sampling/poisson_disk.rs

//! Bridsons schnelles Poisson-Disk-Sampling
//! (<http://people.cs.ubc.ca/~rbridson/docs/bridson-siggraph07-poissondisk.pdf>).

use super::{SampleSet, config::PoissonDiskConfig, spatial_grid::SpatialGrid};
use crate::math::{error::MathResult, types::Point2D, utils::constants};
use bevy::log::{debug, info};
use rand::Rng;

/// Ergebnis eines Laufs im normierten Raum.
#[derive(Debug, Clone)]
pub struct NormalizedSamples {
    pub points: Vec<Point2D>,
    pub min_distance: f64,
    /// Die aktive Front war leer, bevor die Zielanzahl erreicht wurde.
    pub exhausted: bool,
}

/// Entfernt ein gleichverteilt zufälliges Element aus der aktiven Front.
fn pop_random<R: Rng + ?Sized>(front: &mut Vec<Point2D>, rng: &mut R) -> Option<Point2D> {
    if front.is_empty() {
        return None;
    }
    let index = rng.random_range(0..front.len());
    Some(front.swap_remove(index))
}

/// Kandidat im Ring `[d, 2d)` um `p` mit gleichverteiltem Winkel.
fn random_point_around<R: Rng + ?Sized>(p: Point2D, min_distance: f64, rng: &mut R) -> Point2D {
    let radius = min_distance * (1.0 + rng.random::<f64>());
    let angle = rng.random_range(0.0..constants::TAU);
    p + Point2D::from_angle(angle) * radius
}

/// Läuft das Verfahren im normierten Raum `[0,1]²` (bzw. im Einheitskreis).
pub fn generate_normalized<R: Rng + ?Sized>(
    config: &PoissonDiskConfig,
    rng: &mut R,
) -> MathResult<NormalizedSamples> {
    config.validate()?;
    let min_distance = config.effective_min_distance();
    let shape = config.shape;

    let mut grid = SpatialGrid::new(min_distance);
    let mut samples = Vec::with_capacity(config.target_count);
    let mut front = Vec::new();

    let first = loop {
        let candidate = Point2D::new(rng.random(), rng.random());
        if shape.contains(candidate) {
            break candidate;
        }
    };
    front.push(first);
    samples.push(first);
    grid.insert(first);

    while samples.len() < config.target_count {
        let Some(point) = pop_random(&mut front, rng) else {
            break;
        };

        for _ in 0..config.candidates_per_point {
            let candidate = random_point_around(point, min_distance, rng);
            if shape.contains(candidate) && !grid.is_in_neighbourhood(candidate) {
                front.push(candidate);
                samples.push(candidate);
                grid.insert(candidate);
            }
        }
    }

    // Der letzte Pop kann mehr als die Zielanzahl erzeugen
    samples.truncate(config.target_count);
    let exhausted = samples.len() < config.target_count;

    debug!(
        "poisson_disk: {} of {} points, min distance {:.5}, grid {}x{}",
        samples.len(),
        config.target_count,
        min_distance,
        grid.resolution(),
        grid.resolution()
    );

    Ok(NormalizedSamples {
        points: samples,
        min_distance,
        exhausted,
    })
}

/// Poisson-Disk-Sampling im Zielbereich `width × height`.
///
/// Die normierten Punkte werden auf den Bereich skaliert, optional unabhängig
/// verwackelt und auf den Bereich geklemmt.
pub fn poisson_disk<R: Rng + ?Sized>(
    config: &PoissonDiskConfig,
    rng: &mut R,
) -> MathResult<SampleSet> {
    let bounds = config.region()?;
    let normalized = generate_normalized(config, rng)?;

    if normalized.exhausted {
        info!(
            "poisson_disk: active front emptied after {} of {} points",
            normalized.points.len(),
            config.target_count
        );
    }

    let size = bounds.size();
    let jitter = config.final_jitter;
    let points = normalized
        .points
        .into_iter()
        .map(|p| {
            let mut scaled = bounds.min + p * size;
            if jitter > 0.0 {
                scaled += Point2D::new(
                    rng.random_range(-jitter..=jitter),
                    rng.random_range(-jitter..=jitter),
                );
            }
            bounds.clamp_point(scaled)
        })
        .collect();

    Ok(SampleSet {
        points,
        bounds,
        exhausted: normalized.exhausted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::point_distribution::sampling::config::SampleShape;
    use rand::{SeedableRng, rngs::StdRng};

    fn assert_min_distance(points: &[Point2D], min_distance: f64) {
        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                let d = points[i].distance(points[j]);
                assert!(
                    d >= min_distance - 1e-12,
                    "points {} and {} are {} apart (min {})",
                    i,
                    j,
                    d,
                    min_distance
                );
            }
        }
    }

    #[test]
    fn test_min_distance_rectangle() {
        let mut rng = StdRng::seed_from_u64(42);
        for count in [10, 100, 1000] {
            let config = PoissonDiskConfig::new(1.0, 1.0, count);
            let result = generate_normalized(&config, &mut rng).unwrap();
            assert!(!result.points.is_empty());
            assert!(result.points.len() <= count);
            assert_min_distance(&result.points, result.min_distance);
            assert!(
                result
                    .points
                    .iter()
                    .all(|p| SampleShape::Rectangle.contains(*p))
            );
        }
    }

    #[test]
    fn test_min_distance_circle() {
        let mut rng = StdRng::seed_from_u64(7);
        let config = PoissonDiskConfig::new(1.0, 1.0, 400)
            .with_shape(SampleShape::Circle)
            .with_candidates(12);
        let result = generate_normalized(&config, &mut rng).unwrap();
        assert_min_distance(&result.points, result.min_distance);
        assert!(result.points.iter().all(|p| SampleShape::Circle.contains(*p)));
    }

    #[test]
    fn test_explicit_min_distance_saturates() {
        // Bei d = 0.25 passen nur wenige Punkte in das Einheitsquadrat
        let mut rng = StdRng::seed_from_u64(9);
        let config = PoissonDiskConfig::new(1.0, 1.0, 10_000).with_min_distance(0.25);
        let result = generate_normalized(&config, &mut rng).unwrap();
        assert!(result.exhausted);
        assert!(result.points.len() < 40);
        assert_min_distance(&result.points, 0.25);
    }

    #[test]
    fn test_target_count_is_an_upper_bound() {
        let mut rng = StdRng::seed_from_u64(11);
        let config = PoissonDiskConfig::new(1.0, 1.0, 25).with_min_distance(0.01);
        let result = generate_normalized(&config, &mut rng).unwrap();
        assert_eq!(result.points.len(), 25);
        assert!(!result.exhausted);
    }

    #[test]
    fn test_rescaled_points_stay_in_region() {
        let mut rng = StdRng::seed_from_u64(5);
        let config = PoissonDiskConfig::new(800.0, 600.0, 300).with_final_jitter(3.0);
        let set = poisson_disk(&config, &mut rng).unwrap();
        assert!(!set.is_empty());
        assert_eq!(set.bounds.max, Point2D::new(800.0, 600.0));
        assert!(set.iter().all(|p| set.bounds.contains_point(*p)));
    }

    #[test]
    fn test_same_seed_same_points() {
        let config = PoissonDiskConfig::new(100.0, 100.0, 50);
        let a = poisson_disk(&config, &mut StdRng::seed_from_u64(3)).unwrap();
        let b = poisson_disk(&config, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(a.points, b.points);
    }
}
