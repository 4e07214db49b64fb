// src/math/point_distribution/voronoi/builder.rs

use crate::math::{
    algorithms::clipping::{ClippingAlgorithm, PolygonClipper},
    error::{MathError, MathResult},
    point_distribution::{
        sampling::SampleSet,
        voronoi::{
            boundary::reinforcement_ring,
            config::VoronoiConfig,
            half_edge::{HalfEdgeGraph, SiteSource},
            voronoi_diagram::{VoronoiCell, VoronoiDiagram},
        },
    },
    types::{Bounds2D, Point2D, SpadePoint, to_spade_point},
    utils::{angles, constants},
};
use bevy::log::{debug, warn};
use spade::{DelaunayTriangulation, Triangulation};

/// Erzeugt ein auf ein Rechteck begrenztes Voronoi-Diagramm.
/// Orchestriert die Schritte: Randverstärkung, Delaunay-Triangulation,
/// Halbkanten-Graph, Umlauf je Zelle, Rekonstruktion offener Kanten,
/// Clipping und Rückskalierung.
pub struct VoronoiBuilder {
    config: VoronoiConfig,
}

/// Element des Zellumlaufs vor dem Schließen im Fernfeld.
#[derive(Debug, Clone, Copy)]
enum Trace {
    Finite(Point2D),
    /// Fehlender Ursprung: die Kante kommt aus dem Unendlichen.
    FarIn { anchor: Point2D, direction: Point2D },
    /// Fehlendes Ziel: die Kante läuft ins Unendliche.
    FarOut { anchor: Point2D, direction: Point2D },
}

impl Trace {
    fn anchor(&self) -> Point2D {
        match *self {
            Trace::Finite(p) => p,
            Trace::FarIn { anchor, .. } | Trace::FarOut { anchor, .. } => anchor,
        }
    }
}

struct TracedCell {
    polygon: Vec<Point2D>,
    unbounded: bool,
}

impl VoronoiBuilder {
    pub fn new(config: VoronoiConfig) -> MathResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &VoronoiConfig {
        &self.config
    }

    /// Baut das Diagramm für eine Punktmenge aus dem Sampler.
    pub fn build_from_samples(&self, samples: &SampleSet) -> MathResult<VoronoiDiagram> {
        self.build(&samples.points, &samples.bounds)
    }

    /// Baut das Diagramm. Zelle `i` gehört zu `sites[i]`.
    pub fn build(&self, sites: &[Point2D], bounds: &Bounds2D) -> MathResult<VoronoiDiagram> {
        if sites.is_empty() {
            return Err(MathError::InsufficientPoints {
                expected: 1,
                actual: 0,
            });
        }
        let bounds = Bounds2D::new(bounds.min, bounds.max)?;
        debug!(
            "VoronoiBuilder: building diagram for {} sites in {}",
            sites.len(),
            bounds
        );

        let outside = sites.iter().filter(|p| !bounds.contains_point(**p)).count();
        if outside > 0 {
            warn!(
                "VoronoiBuilder: {} of {} sites lie outside {}, their cells may be cut short",
                outside,
                sites.len(),
                bounds
            );
        }

        let scale = self.config.scale_factor();
        let working_bounds = bounds.scale(scale);
        if self.config.integer_scale.is_some() {
            debug!(
                "VoronoiBuilder: integer lattice path with scale {}, working bounds {}",
                scale, working_bounds
            );
        }

        let mut triangulation = DelaunayTriangulation::<SpadePoint>::new();
        let mut sources: Vec<Option<SiteSource>> = Vec::with_capacity(sites.len());
        let mut site_vertices = Vec::with_capacity(sites.len());

        for (i, site) in sites.iter().enumerate() {
            let working = to_lattice(*site, self.config.integer_scale);
            let handle = triangulation
                .insert(to_spade_point(working))
                .map_err(|e| MathError::TriangulationFailed {
                    reason: format!("site {} at {:?} rejected: {:?}", i, site, e),
                })?;
            let vertex = triangulation.vertex(handle).index();
            assign_source(&mut sources, vertex, SiteSource::Input(i));
            site_vertices.push(vertex);
        }

        if self.config.boundary_reinforcement {
            let ring = reinforcement_ring(&working_bounds, self.config.ring_points_per_side);
            for p in &ring {
                let handle = triangulation.insert(to_spade_point(*p)).map_err(|e| {
                    MathError::TriangulationFailed {
                        reason: format!("reinforcement site {:?} rejected: {:?}", p, e),
                    }
                })?;
                let vertex = triangulation.vertex(handle).index();
                assign_source(&mut sources, vertex, SiteSource::Boundary);
            }
            debug!(
                "VoronoiBuilder: {} reinforcement sites added",
                ring.len()
            );
        }
        sources.resize(triangulation.num_vertices(), None);

        let graph = HalfEdgeGraph::from_triangulation(&triangulation, &sources)?;
        debug!(
            "VoronoiBuilder: half-edge graph with {} cells, {} half-edges, {} vertices",
            graph.cells.len(),
            graph.edges.len(),
            graph.vertices.len()
        );

        let clipper = PolygonClipper::new(ClippingAlgorithm::SutherlandHodgman)
            .with_tolerance(constants::EPSILON * working_bounds.diagonal().max(1.0));

        let mut cells = Vec::with_capacity(sites.len());
        for (i, site) in sites.iter().enumerate() {
            let cell = site_vertices[i];
            if graph.cells[cell].source != Some(SiteSource::Input(i)) {
                debug!(
                    "VoronoiBuilder: site {} at {:?} coincides with {:?}, empty cell",
                    i, site, graph.cells[cell].source
                );
                cells.push(VoronoiCell::empty(i, *site));
                continue;
            }

            let traced = self.trace_cell(&graph, cell, &working_bounds);
            let clipped = clipper.clip_against_rectangle(&traced.polygon, &working_bounds);
            let vertices = clipped
                .into_iter()
                .map(|p| from_lattice(p, self.config.integer_scale))
                .collect();

            cells.push(VoronoiCell {
                site_index: i,
                site: *site,
                vertices,
                was_unbounded: traced.unbounded,
                neighbor_ids: input_neighbours(&graph, cell),
            });
        }

        let diagram = VoronoiDiagram {
            sites: sites.to_vec(),
            bounds,
            cells,
        };
        let empty = diagram.empty_cell_count();
        if empty > 0 {
            warn!(
                "VoronoiBuilder: {} of {} cells are empty",
                empty,
                diagram.cells.len()
            );
        }
        Ok(diagram)
    }

    /// Läuft einmal um die Zelle und liefert ein konvexes Polygon, dessen
    /// Schnitt mit `bounds` gleich dem Schnitt der echten Zelle ist.
    ///
    /// Der Fernkreis hängt nur von Site, Nachbar-Mittelpunkten und Rechteck ab.
    /// Voronoi-Knoten außerhalb des Kreises werden wie fehlende Endpunkte
    /// behandelt, ihre berechnete Lage wird nicht verwendet.
    fn trace_cell(&self, graph: &HalfEdgeGraph, cell: usize, bounds: &Bounds2D) -> TracedCell {
        // Einzige Site ohne Kanten: die ganze Ebene
        if graph.cells[cell].incident_edge.is_none() {
            return TracedCell {
                polygon: bounds.corners().to_vec(),
                unbounded: true,
            };
        }

        let site = graph.cells[cell].site;
        let center = bounds.center();
        let ring: Vec<usize> = graph.cell_edges(cell).collect();
        let neighbours: Vec<Point2D> = ring
            .iter()
            .map(|&edge| graph.cells[graph.neighbour(edge)].site)
            .collect();
        let reach = neighbours
            .iter()
            .map(|&n| ((site + n) * 0.5).distance(center))
            .fold((bounds.diagonal() * 0.5).max(site.distance(center)), f64::max);
        let radius = self.config.far_field_factor * reach;
        let near = |p: Option<Point2D>| p.filter(|p| p.distance(center) <= radius);

        let count = ring.len();
        let mut trace = Vec::new();
        for (k, &edge) in ring.iter().enumerate() {
            if !graph.edges[edge].primary {
                continue;
            }
            let neighbour = neighbours[k];
            // Die Kante verläuft links herum um die Site, senkrecht zu site → neighbour
            let direction = (neighbour - site).perp().normalize_or_zero();

            match (near(graph.origin(edge)), near(graph.destination(edge))) {
                (Some(p), Some(_)) => trace.push(Trace::Finite(p)),
                (Some(p), None) => {
                    trace.push(Trace::Finite(p));
                    trace.push(Trace::FarOut {
                        anchor: p,
                        direction,
                    });
                }
                (None, Some(q)) => trace.push(Trace::FarIn {
                    anchor: q,
                    direction: -direction,
                }),
                (None, None) => {
                    // Dritte Site des Dreiecks rechts bzw. links der Kante
                    let before = neighbours[(k + count - 1) % count];
                    let after = neighbours[(k + 1) % count];
                    let origin_ahead = graph.origin(edge).is_some()
                        && lies_ahead(site, neighbour, before, false);
                    let destination_ahead = graph.destination(edge).is_none()
                        || lies_ahead(site, neighbour, after, true);
                    if origin_ahead || !destination_ahead {
                        // Die Kante liegt ganz jenseits des Fernkreises
                        continue;
                    }
                    let midpoint = (site + neighbour) * 0.5;
                    let anchor = midpoint - direction * (midpoint - center).dot(direction);
                    trace.push(Trace::FarIn {
                        anchor,
                        direction: -direction,
                    });
                    trace.push(Trace::FarOut { anchor, direction });
                }
            }
        }

        if trace.is_empty() {
            return TracedCell {
                polygon: Vec::new(),
                unbounded: false,
            };
        }

        let unbounded = trace.iter().any(|t| !matches!(t, Trace::Finite(_)));
        if !unbounded {
            return TracedCell {
                polygon: trace.iter().map(Trace::anchor).collect(),
                unbounded,
            };
        }

        TracedCell {
            polygon: close_far_field(&trace, center, radius),
            unbounded,
        }
    }
}

/// Liegt der Voronoi-Knoten des Dreiecks `site, neighbour, apex` auf der
/// Mittelsenkrechten vor dem Mittelpunkt, also in Umlaufrichtung?
///
/// Der Knoten ist `m + t·d` mit `t = (a−s)·(a−n) / (2 (a−m)·d)`. Das Vorzeichen
/// des Nenners folgt aus der Seite, auf der `apex` liegt, und wird nicht
/// gerechnet, weil es bei flachen Dreiecken im Rundungsrauschen liegt.
fn lies_ahead(site: Point2D, neighbour: Point2D, apex: Point2D, apex_on_left: bool) -> bool {
    let numerator = (apex - site).dot(apex - neighbour);
    if apex_on_left {
        numerator > 0.0
    } else {
        numerator < 0.0
    }
}

/// Ersetzt offene Kanten durch ihre Schnittpunkte mit dem Fernkreis und
/// verbindet Austritt und Wiedereintritt über Kreisbogenpunkte.
///
/// Alle Mittelsenkrechten laufen höchstens `radius / 2` am Zentrum vorbei. Ein
/// Bogen innerhalb der Zelle ist daher nie größer als 4π/3, größere Werte
/// stammen von Rundungsfehlern bei nahezu gleichen Punkten.
fn close_far_field(trace: &[Trace], center: Point2D, radius: f64) -> Vec<Point2D> {
    let n = trace.len();
    let mut polygon = Vec::with_capacity(n + 8);

    for (k, item) in trace.iter().enumerate() {
        match *item {
            Trace::Finite(p) => polygon.push(p),
            Trace::FarIn { anchor, direction } => {
                polygon.push(far_point(anchor, direction, center, radius));
            }
            Trace::FarOut { anchor, direction } => {
                let exit = far_point(anchor, direction, center, radius);
                polygon.push(exit);

                let reentry = (1..=n).find_map(|step| match trace[(k + step) % n] {
                    Trace::FarIn { anchor, direction } => {
                        Some(far_point(anchor, direction, center, radius))
                    }
                    _ => None,
                });
                if let Some(reentry) = reentry {
                    push_arc(&mut polygon, center, radius, exit, reentry);
                }
            }
        }
    }

    polygon
}

/// Schnitt des Strahls `anchor + t·direction` (t ≥ 0) mit dem Kreis um
/// `center`. Der Anker liegt innerhalb des Kreises.
fn far_point(anchor: Point2D, direction: Point2D, center: Point2D, radius: f64) -> Point2D {
    let offset = anchor - center;
    let b = offset.dot(direction);
    let discriminant = (radius * radius - offset.length_squared() + b * b).max(0.0);
    anchor + direction * (discriminant.sqrt() - b)
}

/// Zwischenpunkte auf dem Kreis von `from` nach `to` gegen den Uhrzeigersinn,
/// in Schritten von höchstens π/2. Die Endpunkte selbst werden nicht eingefügt.
fn push_arc(polygon: &mut Vec<Point2D>, center: Point2D, radius: f64, from: Point2D, to: Point2D) {
    let start = angle_of(from - center);
    let sweep = angles::ccw_sweep(start, angle_of(to - center));
    if sweep > 1.5 * constants::PI {
        return;
    }

    let steps = (sweep / constants::PI_OVER_2).ceil() as usize;
    for s in 1..steps {
        let angle = start + sweep * s as f64 / steps as f64;
        polygon.push(center + Point2D::from_angle(angle) * radius);
    }
}

fn angle_of(v: Point2D) -> f64 {
    v.y.atan2(v.x)
}

fn assign_source(sources: &mut Vec<Option<SiteSource>>, vertex: usize, source: SiteSource) {
    if vertex >= sources.len() {
        sources.resize(vertex + 1, None);
    }
    // Bei Duplikaten behält die erste Site die Zelle
    if sources[vertex].is_none() {
        sources[vertex] = Some(source);
    }
}

fn input_neighbours(graph: &HalfEdgeGraph, cell: usize) -> Vec<usize> {
    let mut neighbours: Vec<usize> = graph
        .cell_edges(cell)
        .filter(|&edge| graph.edges[edge].primary)
        .filter_map(|edge| match graph.cells[graph.neighbour(edge)].source {
            Some(SiteSource::Input(j)) => Some(j),
            _ => None,
        })
        .collect();
    neighbours.sort_unstable();
    neighbours.dedup();
    neighbours
}

/// Rundet auf das Gitter `1/scale`, skaliert dabei in Arbeitskoordinaten.
fn to_lattice(p: Point2D, scale: Option<u32>) -> Point2D {
    match scale {
        Some(s) => (p * f64::from(s)).round(),
        None => p,
    }
}

fn from_lattice(p: Point2D, scale: Option<u32>) -> Point2D {
    match scale {
        Some(s) => p / f64::from(s),
        None => p,
    }
}

/// Baut die Zellen mit der Standardkonfiguration für `[0,0] × [width,height]`.
/// Ergebnis ist indexgleich zu `points`.
pub fn build_voronoi(points: &[Point2D], width: f64, height: f64) -> MathResult<Vec<VoronoiCell>> {
    let bounds = Bounds2D::from_size(width, height)?;
    let builder = VoronoiBuilder::new(VoronoiConfig::default())?;
    Ok(builder.build(points, &bounds)?.into_cells())
}
