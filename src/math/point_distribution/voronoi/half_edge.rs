// src/math/point_distribution/voronoi/half_edge.rs

//! Halbkanten-Graph des Voronoi-Diagramms als Index-Arena.
//!
//! Jede gerichtete Delaunay-Kante `a → b` liefert genau eine Halbkante der
//! Zelle `a`. Ursprung ist der Umkreismittelpunkt des Dreiecks rechts von
//! `a → b`, Ziel der des Dreiecks links davon. Liegt dort die äußere Fläche,
//! fehlt der Punkt und die Kante ist in diese Richtung unbeschränkt.
//! Die Halbkanten einer Zelle folgen über `next` gegen den Uhrzeigersinn.

use crate::math::{
    error::{MathError, MathResult},
    types::{Point2D, SpadePoint, from_spade_point},
    utils::constants,
};
use spade::{DelaunayTriangulation, Triangulation};

/// Herkunft einer Site im Graphen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteSource {
    /// Index in der Eingabeliste.
    Input(usize),
    /// Hilfspunkt des Verstärkungsrings.
    Boundary,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CellRecord {
    pub site: Point2D,
    pub source: Option<SiteSource>,
    /// Irgendeine Halbkante der Zelle; `None` für eine isolierte Site.
    pub incident_edge: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HalfEdge {
    pub cell: usize,
    pub origin: Option<usize>,
    pub twin: usize,
    pub next: usize,
    /// `false` für entartete Kanten der Länge null (kozirkuläre Sites).
    pub primary: bool,
}

#[derive(Debug, Clone, Default)]
pub struct HalfEdgeGraph {
    pub cells: Vec<CellRecord>,
    pub edges: Vec<HalfEdge>,
    pub vertices: Vec<Point2D>,
}

impl HalfEdgeGraph {
    /// Baut den dualen Graphen. `sources` ist nach Vertex-Index der
    /// Triangulation indiziert.
    pub fn from_triangulation(
        triangulation: &DelaunayTriangulation<SpadePoint>,
        sources: &[Option<SiteSource>],
    ) -> MathResult<Self> {
        if sources.len() != triangulation.num_vertices() {
            return Err(MathError::GeometricFailure {
                operation: format!(
                    "HalfEdgeGraph: {} site sources for {} triangulation vertices",
                    sources.len(),
                    triangulation.num_vertices()
                ),
            });
        }

        // Voronoi-Knoten: ein Umkreismittelpunkt je innerem Dreieck
        let mut face_vertex: Vec<Option<usize>> = vec![None; triangulation.num_all_faces()];
        let mut vertices = Vec::with_capacity(triangulation.num_inner_faces());
        for face in triangulation.inner_faces() {
            face_vertex[face.index()] = Some(vertices.len());
            vertices.push(from_spade_point(face.circumcenter()));
        }

        let cells = collect_indexed(
            triangulation.num_vertices(),
            triangulation.vertices().map(|vertex| {
                (
                    vertex.index(),
                    CellRecord {
                        site: from_spade_point(vertex.position()),
                        source: sources[vertex.index()],
                        incident_edge: vertex.out_edge().map(|edge| edge.index()),
                    },
                )
            }),
            "cells",
        )?;

        let mut indexed_edges = Vec::with_capacity(triangulation.num_directed_edges());
        for vertex in triangulation.vertices() {
            let out_edges: Vec<_> = vertex.out_edges().collect();
            for (k, edge) in out_edges.iter().enumerate() {
                let next = out_edges[(k + 1) % out_edges.len()];
                indexed_edges.push((
                    edge.index(),
                    HalfEdge {
                        cell: vertex.index(),
                        origin: face_vertex[edge.rev().face().index()],
                        twin: edge.rev().index(),
                        next: next.index(),
                        primary: true,
                    },
                ));
            }
        }
        let mut edges = collect_indexed(
            triangulation.num_directed_edges(),
            indexed_edges.into_iter(),
            "half-edges",
        )?;

        for i in 0..edges.len() {
            let origin = edges[i].origin;
            let destination = edges[edges[i].twin].origin;
            edges[i].primary = match (origin, destination) {
                (Some(a), Some(b)) => a != b && !coincide(vertices[a], vertices[b]),
                _ => true,
            };
        }

        Ok(Self {
            cells,
            edges,
            vertices,
        })
    }

    pub fn origin(&self, edge: usize) -> Option<Point2D> {
        self.edges[edge].origin.map(|v| self.vertices[v])
    }

    pub fn destination(&self, edge: usize) -> Option<Point2D> {
        self.origin(self.edges[edge].twin)
    }

    /// Zelle auf der anderen Seite der Kante.
    pub fn neighbour(&self, edge: usize) -> usize {
        self.edges[self.edges[edge].twin].cell
    }

    /// Umlauf um die Zelle, höchstens `edges.len()` Schritte.
    pub fn cell_edges(&self, cell: usize) -> CellEdges<'_> {
        CellEdges {
            graph: self,
            start: self.cells[cell].incident_edge,
            current: self.cells[cell].incident_edge,
            remaining: self.edges.len(),
        }
    }
}

pub struct CellEdges<'a> {
    graph: &'a HalfEdgeGraph,
    start: Option<usize>,
    current: Option<usize>,
    remaining: usize,
}

impl Iterator for CellEdges<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let current = self.current?;
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let next = self.graph.edges[current].next;
        self.current = if Some(next) == self.start {
            None
        } else {
            Some(next)
        };
        Some(current)
    }
}

fn coincide(a: Point2D, b: Point2D) -> bool {
    let tolerance = constants::EPSILON * (1.0 + a.abs().max_element());
    a.distance_squared(b) <= tolerance * tolerance
}

fn collect_indexed<T>(
    len: usize,
    items: impl Iterator<Item = (usize, T)>,
    what: &str,
) -> MathResult<Vec<T>> {
    let mut slots: Vec<Option<T>> = (0..len).map(|_| None).collect();
    for (index, item) in items {
        match slots.get_mut(index) {
            Some(slot) => *slot = Some(item),
            None => {
                return Err(MathError::GeometricFailure {
                    operation: format!("HalfEdgeGraph: {} index {} out of range {}", what, index, len),
                });
            }
        }
    }
    slots
        .into_iter()
        .collect::<Option<Vec<T>>>()
        .ok_or_else(|| MathError::GeometricFailure {
            operation: format!("HalfEdgeGraph: missing {} entries", what),
        })
}
