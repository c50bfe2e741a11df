use nalgebra::{Vector2, Vector3};

use super::{SplitRunner, VertexSource};
use crate::geom::{distance_to_segment, lerp, newell_normal, xy};
use crate::graph::faces_containing_point;

impl SplitRunner<'_> {
    /// Split every original edge the line crosses strictly inside it.
    pub(crate) fn split_crossed_edges(&mut self) {
        for e in 0..self.num_edges_before {
            let [u, w] = self.graph.edges_vertices[e];
            if self.near_line[u] || self.near_line[w] {
                continue;
            }
            let pu = xy(&self.graph.vertices_coords[u]);
            let pw = xy(&self.graph.vertices_coords[w]);
            let Some((t, b)) = self.line.intersect_segment(pu, pw, self.eps) else {
                continue;
            };
            let b_eps = self.eps / (pw - pu).norm();
            if b <= b_eps || b >= 1.0 - b_eps || !self.domain.includes(t, self.eps_t) {
                continue;
            }
            self.split_edge(e, b);
        }
    }

    /// Split edge `e` at parameter `b` (from its first vertex). The first half
    /// keeps index `e`; the second half is appended and inherits attributes.
    pub(crate) fn split_edge(&mut self, e: usize, b: f64) -> usize {
        let [u, w] = self.graph.edges_vertices[e];
        let coords = lerp(self.graph.vertices_coords[u], self.graph.vertices_coords[w], b);
        let x = self.push_vertex(coords, VertexSource::Edge { b, vertices: [u, w] });

        self.graph.edges_vertices[e] = [u, x];
        self.graph.edges_vertices.push([x, w]);
        if let Some(a) = self.graph.edges_assignment.as_mut() {
            let parent = a[e];
            a.push(parent);
        }
        if let Some(a) = self.graph.edges_fold_angle.as_mut() {
            let parent = a[e];
            a.push(parent);
        }
        self.edge_origin.push(self.edge_origin[e]);

        for fv in self.graph.faces_vertices.iter_mut() {
            let n = fv.len();
            if n < 2 || !(fv.contains(&u) && fv.contains(&w)) {
                continue;
            }
            let mut out = Vec::with_capacity(n + 1);
            for k in 0..n {
                let (p, q) = (fv[k], fv[(k + 1) % n]);
                out.push(p);
                if (p == u && q == w) || (p == w && q == u) {
                    out.push(x);
                }
            }
            *fv = out;
        }
        x
    }

    /// Insert an explicit point. Stacked layers of a folded form can put the
    /// point over several faces, so every match is handled: coincident
    /// vertices are reused, edges under the point are split, and any face
    /// still lacking a vertex there gets an interior vertex. Points outside
    /// the model are skipped.
    pub(crate) fn insert_point(&mut self, p: Vector2<f64>) {
        let eps = self.eps;
        let mut placed: Vec<usize> = (0..self.graph.num_vertices())
            .filter(|&v| (xy(&self.graph.vertices_coords[v]) - p).norm() <= eps)
            .collect();
        for &v in &placed {
            self.on_line[v] = true;
            self.near_line[v] = true;
        }
        let mut e = 0;
        while e < self.graph.num_edges() {
            let [u, w] = self.graph.edges_vertices[e];
            let pu = xy(&self.graph.vertices_coords[u]);
            let pw = xy(&self.graph.vertices_coords[w]);
            if !placed.contains(&u)
                && !placed.contains(&w)
                && distance_to_segment(p, pu, pw) <= eps
            {
                let d = pw - pu;
                let b = (p - pu).dot(&d) / d.norm_squared();
                placed.push(self.split_edge(e, b));
            }
            e += 1;
        }
        let candidates = faces_containing_point(self.graph, p, eps);
        if candidates.is_empty() {
            tracing::debug!(x = p.x, y = p.y, "point outside every face, skipped");
            return;
        }
        for face in candidates {
            if self.graph.faces_vertices[face]
                .iter()
                .any(|v| placed.contains(v))
            {
                continue;
            }
            let z = self.height_in_face(face, p);
            let v = self.push_vertex(
                Vector3::new(p.x, p.y, z),
                VertexSource::Face {
                    point: p,
                    face,
                    faces: Vec::new(),
                },
            );
            self.interior.push((v, face));
        }
    }

    /// z of the face's plane above `p`.
    fn height_in_face(&self, face: usize, p: Vector2<f64>) -> f64 {
        let pts = self.graph.face_points(face);
        let Some(&p0) = pts.first() else { return 0.0 };
        match newell_normal(&pts) {
            Some(n) if n.z.abs() > self.eps => p0.z - (n.x * (p.x - p0.x) + n.y * (p.y - p0.y)) / n.z,
            _ => p0.z,
        }
    }
}
