//! Planar split of a graph along a line, ray or segment.
//!
//! Purpose
//! - Insert the vertices and crease edges a fold needs, in the xy-plane of
//!   whatever coordinates the graph carries, and report provenance so the
//!   caller can carry attributes and orders over to the new indices.
//!
//! Shape of the result
//! - Existing indices stay valid: a split edge keeps its index for the first
//!   half and appends the second; a split face keeps its index for the first
//!   child and appends the rest.
//! - New crease edges are `F` with fold angle 0 (when those layers exist).
//! - `faces_normal` / `faces_layer` / `face_orders` are left untouched.
//!
//! Explicit `points` (ray origin, segment endpoints) are inserted first, so a
//! ray or segment that stops inside a face leaves a slit or a free edge
//! instead of splitting the face.

mod edges;
mod faces;
mod types;


pub use types::{EdgeMap, EdgeSource, SplitEdges, SplitFaces, SplitResult, SplitVertices, VertexSource};

use nalgebra::Vector2;

use crate::geom::{xy, Line, LineDomain};
use crate::graph::{EdgeAssignment, Graph};

/// Split `graph` in place along `line` restricted to `domain`.
///
/// `points` are added as vertices when they fall inside the model (on an
/// existing vertex, on an edge, or inside a face); points outside every face
/// are ignored. The caller guarantees `line` is not degenerate.
pub fn split_graph_with_line_and_points(
    graph: &mut Graph,
    line: Line,
    domain: LineDomain,
    points: &[Vector2<f64>],
    eps: f64,
) -> SplitResult {
    debug_assert!(!line.is_degenerate());
    let mut runner = SplitRunner::new(graph, line, domain, eps);
    runner.split_crossed_edges();
    for &p in points {
        runner.insert_point(p);
    }
    runner.split_faces();
    runner.attach_interior_points();
    runner.finish()
}

/// Working state of one split. Mirrors the graph arrays with per-index
/// bookkeeping that is discarded in `finish`.
pub(crate) struct SplitRunner<'g> {
    pub(crate) graph: &'g mut Graph,
    pub(crate) line: Line,
    pub(crate) domain: LineDomain,
    pub(crate) eps: f64,
    /// Parameter-space tolerance (`eps` divided by `|line.vector|`).
    pub(crate) eps_t: f64,
    /// Vertex lies on the line within the domain.
    pub(crate) on_line: Vec<bool>,
    /// Vertex lies on the infinite line (domain ignored).
    pub(crate) near_line: Vec<bool>,
    /// Original edge each edge descends from; `None` for new creases.
    pub(crate) edge_origin: Vec<Option<usize>>,
    /// Original face each face descends from.
    pub(crate) face_origin: Vec<usize>,
    pub(crate) sources: Vec<(usize, VertexSource)>,
    /// `(vertex, face at insertion time)` for points placed inside a face.
    pub(crate) interior: Vec<(usize, usize)>,
    /// New creases with the faces they were created in.
    pub(crate) creases: Vec<(usize, Vec<usize>)>,
    pub(crate) num_edges_before: usize,
    pub(crate) num_faces_before: usize,
}

impl<'g> SplitRunner<'g> {
    fn new(graph: &'g mut Graph, line: Line, domain: LineDomain, eps: f64) -> Self {
        let eps_t = eps / line.vector.norm();
        let mut on_line = Vec::with_capacity(graph.num_vertices());
        let mut near_line = Vec::with_capacity(graph.num_vertices());
        for p in &graph.vertices_coords {
            let p = xy(p);
            let near = line.distance_to(p) <= eps;
            near_line.push(near);
            on_line.push(near && domain.includes(line.param_of(p), eps_t));
        }
        let ne = graph.num_edges();
        let nf = graph.num_faces();
        Self {
            graph,
            line,
            domain,
            eps,
            eps_t,
            on_line,
            near_line,
            edge_origin: (0..ne).map(Some).collect(),
            face_origin: (0..nf).collect(),
            sources: Vec::new(),
            interior: Vec::new(),
            creases: Vec::new(),
            num_edges_before: ne,
            num_faces_before: nf,
        }
    }

    pub(crate) fn push_vertex(&mut self, coords: nalgebra::Vector3<f64>, source: VertexSource) -> usize {
        let v = self.graph.vertices_coords.len();
        self.graph.vertices_coords.push(coords);
        self.on_line.push(true);
        self.near_line.push(true);
        self.sources.push((v, source));
        v
    }

    /// Append a flat crease `u – w` and return its index.
    pub(crate) fn push_crease(&mut self, u: usize, w: usize, faces: Vec<usize>) -> usize {
        let e = self.graph.edges_vertices.len();
        self.graph.edges_vertices.push([u, w]);
        if let Some(a) = self.graph.edges_assignment.as_mut() {
            a.push(EdgeAssignment::Flat);
        }
        if let Some(a) = self.graph.edges_fold_angle.as_mut() {
            a.push(0.0);
        }
        self.edge_origin.push(None);
        self.creases.push((e, faces));
        e
    }

    fn finish(self) -> SplitResult {
        let edges_faces = crate::graph::make_edges_faces(self.graph);
        let mut faces_map = vec![Vec::new(); self.num_faces_before];
        for (f, &origin) in self.face_origin.iter().enumerate() {
            faces_map[origin].push(f);
        }
        let mut pieces = vec![Vec::new(); self.num_edges_before];
        for (e, origin) in self.edge_origin.iter().enumerate() {
            if let Some(origin) = origin {
                pieces[*origin].push(e);
            }
        }
        let map = pieces
            .into_iter()
            .enumerate()
            .map(|(e, p)| {
                if p.len() <= 1 {
                    EdgeMap::Kept(e)
                } else {
                    EdgeMap::Split(p)
                }
            })
            .collect();
        let mut new = Vec::with_capacity(self.creases.len());
        let mut source = Vec::with_capacity(self.creases.len());
        for (e, recorded) in self.creases {
            let mut faces = if edges_faces[e].is_empty() {
                recorded
            } else {
                edges_faces[e].clone()
            };
            faces.sort_unstable();
            new.push(e);
            source.push(EdgeSource { edge: e, faces });
        }
        SplitResult {
            vertices: SplitVertices {
                source: self.sources,
            },
            edges: SplitEdges { new, map, source },
            faces: SplitFaces { map: faces_map },
        }
    }
}
