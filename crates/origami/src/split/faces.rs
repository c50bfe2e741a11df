use std::f64::consts::TAU;

use nalgebra::Vector2;

use super::{SplitRunner, VertexSource};
use crate::geom::{ccw_angle, point_strictly_in_polygon, signed_area, xy, ZERO_LEN2};
use crate::graph::{edge_key, make_edges_lookup};

impl SplitRunner<'_> {
    #[inline]
    fn param(&self, v: usize) -> f64 {
        self.line.param_of(xy(&self.graph.vertices_coords[v]))
    }

    /// Cut faces along chords between on-line boundary vertices until no
    /// face has a chord left. Children of a split face are re-examined.
    pub(crate) fn split_faces(&mut self) {
        let mut f = 0;
        while f < self.graph.num_faces() {
            if !self.split_face_once(f) {
                f += 1;
            }
        }
    }

    /// Split `f` along its first admissible chord: two on-line vertices of
    /// the face that are consecutive along the line, not yet joined by an
    /// edge, with the chord running inside the face.
    ///
    /// A loop may visit a vertex more than once (slits from earlier ray or
    /// segment folds). The cut is made at the visit whose corner opens
    /// toward the chord, so each slit stays with the child it lies in.
    fn split_face_once(&mut self, f: usize) -> bool {
        let fv = self.graph.faces_vertices[f].clone();
        if fv.len() < 3 {
            return false;
        }
        let poly = self.graph.face_polygon(f);
        let area = signed_area(&poly);
        if area.abs() <= ZERO_LEN2 {
            return false;
        }
        let ccw = area > 0.0;
        let mut hits: Vec<(f64, usize)> = fv
            .iter()
            .copied()
            .filter(|&v| self.on_line[v])
            .map(|v| (self.param(v), v))
            .collect();
        hits.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
        hits.dedup_by_key(|h| h.1);
        if hits.len() < 2 {
            return false;
        }
        let lookup = make_edges_lookup(&self.graph.edges_vertices);
        for pair in hits.windows(2) {
            let (u, w) = (pair[0].1, pair[1].1);
            if lookup.contains_key(&edge_key(u, w)) {
                continue;
            }
            let (pu, pw) = (self.point(u), self.point(w));
            if !point_strictly_in_polygon(&poly, (pu + pw) * 0.5, self.eps) {
                continue;
            }
            let (Some(a), Some(b)) = (
                self.corner_toward(&fv, ccw, u, pw - pu),
                self.corner_toward(&fv, ccw, w, pu - pw),
            ) else {
                tracing::debug!(face = f, u, w, "no corner opens toward the chord");
                continue;
            };
            let (i, j) = (a.min(b), a.max(b));
            let first: Vec<usize> = fv[i..=j].to_vec();
            let second: Vec<usize> = fv[j..].iter().chain(fv[..=i].iter()).copied().collect();
            let g = self.graph.faces_vertices.len();
            self.graph.faces_vertices[f] = first;
            self.graph.faces_vertices.push(second);
            self.face_origin.push(self.face_origin[f]);
            tracing::trace!(face = f, child = g, u, w, "face split");
            self.push_crease(u, w, vec![f, g]);
            return true;
        }
        false
    }

    #[inline]
    fn point(&self, v: usize) -> Vector2<f64> {
        xy(&self.graph.vertices_coords[v])
    }

    /// Interior angle at loop position `k` contains direction `dir`.
    ///
    /// The interior lies left of travel for counter-clockwise loops and right
    /// of it otherwise; a slit tip (both neighbours the same way) is open all
    /// around.
    fn corner_contains(&self, fv: &[usize], ccw: bool, k: usize, dir: Vector2<f64>) -> bool {
        let n = fv.len();
        let p = self.point(fv[k]);
        let prev = self.point(fv[(k + n - 1) % n]) - p;
        let next = self.point(fv[(k + 1) % n]) - p;
        let (from, to) = if ccw { (next, prev) } else { (prev, next) };
        let mut sweep = ccw_angle(from, to);
        if sweep <= self.eps {
            sweep = TAU;
        }
        let angle = ccw_angle(from, dir);
        angle > self.eps && angle < sweep - self.eps
    }

    /// First loop position of `v` whose corner opens toward `dir`.
    fn corner_toward(&self, fv: &[usize], ccw: bool, v: usize, dir: Vector2<f64>) -> Option<usize> {
        (0..fv.len())
            .filter(|&k| fv[k] == v)
            .find(|&k| self.corner_contains(fv, ccw, k, dir))
    }

    /// Connect vertices placed inside faces: two such vertices in the same
    /// face become a free edge; a lone one is joined to the nearest on-line
    /// boundary vertex by a slit.
    pub(crate) fn attach_interior_points(&mut self) {
        let interior = std::mem::take(&mut self.interior);
        // locate each interior vertex in the post-split faces
        let located: Vec<(usize, Option<usize>)> = interior
            .iter()
            .map(|&(v, face)| (v, self.locate_interior(v, face)))
            .collect();
        let mut attached = vec![false; located.len()];
        for i in 0..located.len() {
            for j in (i + 1)..located.len() {
                let ((v, fi), (w, fj)) = (located[i], located[j]);
                if attached[i] || attached[j] || fi.is_none() || fi != fj {
                    continue;
                }
                let Some(f) = fi else { continue };
                if !self.chord_inside(f, v, w) {
                    continue;
                }
                self.push_crease(v, w, vec![f]);
                self.set_point_faces(v, vec![f]);
                self.set_point_faces(w, vec![f]);
                attached[i] = true;
                attached[j] = true;
            }
        }
        for (i, &(v, face)) in located.iter().enumerate() {
            if attached[i] {
                continue;
            }
            let Some(f) = face else {
                tracing::debug!(vertex = v, "interior vertex lost its face");
                continue;
            };
            self.set_point_faces(v, vec![f]);
            let tv = self.param(v);
            let pv = self.point(v);
            let fv = self.graph.faces_vertices[f].clone();
            let ccw = signed_area(&self.graph.face_polygon(f)) > 0.0;
            let nearest = fv
                .iter()
                .enumerate()
                .filter(|&(k, &q)| {
                    self.on_line[q]
                        && self.chord_inside(f, v, q)
                        && self.corner_contains(&fv, ccw, k, pv - self.point(q))
                })
                .min_by(|a, b| {
                    let da = (self.param(*a.1) - tv).abs();
                    let db = (self.param(*b.1) - tv).abs();
                    da.total_cmp(&db)
                })
                .map(|(k, &q)| (k, q));
            let Some((k, q)) = nearest else {
                tracing::debug!(vertex = v, face = f, "interior vertex left unconnected");
                continue;
            };
            let mut slit = Vec::with_capacity(fv.len() + 2);
            slit.extend_from_slice(&fv[..=k]);
            slit.push(v);
            slit.extend_from_slice(&fv[k..]);
            self.graph.faces_vertices[f] = slit;
            self.push_crease(q, v, vec![f]);
        }
    }

    /// The post-split face that holds interior vertex `v`, searched among the
    /// descendants of `face`.
    fn locate_interior(&self, v: usize, face: usize) -> Option<usize> {
        let origin = self.face_origin[face];
        let p: Vector2<f64> = xy(&self.graph.vertices_coords[v]);
        (0..self.graph.num_faces())
            .filter(|&f| self.face_origin[f] == origin)
            .find(|&f| point_strictly_in_polygon(&self.graph.face_polygon(f), p, self.eps))
    }

    /// Segment `a – b` runs through the inside of face `f`.
    fn chord_inside(&self, f: usize, a: usize, b: usize) -> bool {
        let pa = xy(&self.graph.vertices_coords[a]);
        let pb = xy(&self.graph.vertices_coords[b]);
        point_strictly_in_polygon(&self.graph.face_polygon(f), (pa + pb) * 0.5, self.eps)
    }

    fn set_point_faces(&mut self, v: usize, faces: Vec<usize>) {
        if let Some((_, VertexSource::Face { faces: slot, .. })) =
            self.sources.iter_mut().find(|(w, _)| *w == v)
        {
            *slot = faces;
        }
    }
}
