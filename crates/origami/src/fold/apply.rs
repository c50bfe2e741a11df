//! The fold applicator.
//!
//! The crease pattern goes in, the creased crease pattern comes out; the
//! split itself happens on the folded form, where the fold line is drawn.

use nalgebra::{Vector2, Vector3};

use super::assign::{write_attributes, FoldAttributes};
use super::collinear::{collinear_edges, reassignable_edges};
use super::migrate::{migrate_face_orders, synthesize_face_orders};
use super::transfer::{recalculate_point_along_edge, transfer_point_in_face};
use super::types::{EdgesEvent, FacesEvent, FoldEvent, FoldOptions, Folded, OrdersEvent, VerticesEvent};
use crate::error::{OrigamiError, Result};
use crate::geom::{FoldCfg, Line, LineDomain};
use crate::graph::{
    face_under_point, make_edges_assignment, make_edges_faces, make_edges_fold_angle,
    make_faces_winding, make_vertices_coords_folded, EdgeLayers, Graph,
};
use crate::split::{split_graph_with_line_and_points, SplitResult, VertexSource};

/// Crease `graph` along `line` restricted to `domain`.
///
/// Returns a new graph; the input is left untouched. New creases inside
/// counter-clockwise faces of the folded form get `options.assignment`,
/// creases inside clockwise faces get the mirrored assignment.
pub fn fold_graph(
    graph: &Graph,
    line: Line,
    domain: LineDomain,
    options: &FoldOptions,
    cfg: &FoldCfg,
) -> Result<Folded> {
    if line.is_degenerate() {
        return Err(OrigamiError::DegenerateGeometry {
            vertex: None,
            reason: "fold line has a zero-length direction",
        });
    }
    graph.validate()?;
    let eps = cfg.eps;

    let folded_coords = match &options.folded_coords {
        Some(coords) if coords.len() == graph.num_vertices() => coords.clone(),
        Some(coords) => {
            return Err(OrigamiError::InvalidGraph(format!(
                "folded coordinates have {} entries for {} vertices",
                coords.len(),
                graph.num_vertices()
            )))
        }
        None => {
            let root = face_under_point(graph, line.origin, line.vector, eps).unwrap_or_else(|| {
                tracing::debug!("no face under the fold line origin, rooting at face 0");
                0
            });
            make_vertices_coords_folded(graph, root)
        }
    };

    let mut out = graph.clone();
    out.faces_normal = None;
    out.faces_layer = None;
    let layers = options.layers.unwrap_or_else(|| EdgeLayers::of(graph));
    prepare_edge_layers(&mut out, layers);
    let cp_coords = std::mem::replace(&mut out.vertices_coords, folded_coords);
    let old_orders = out.face_orders.take();

    let split = split_graph_with_line_and_points(&mut out, line, domain, &options.points, eps);
    // winding is read once, in folded space, with the new crease still flat
    let winding = make_faces_winding(&out, eps);
    let edges_faces = make_edges_faces(&out);

    let forward = FoldAttributes::new(options.assignment, options.fold_angle);
    let mut creases: Vec<(usize, FoldAttributes)> = split
        .edges
        .source
        .iter()
        .map(|src| {
            let ccw = src.faces.first().map_or(true, |&f| winding[f]);
            (src.edge, forward.select(ccw))
        })
        .collect();

    let collinear = collinear_edges(&out, line, domain, &split.edges.new, eps);
    let reassign = reassignable_edges(&out, &collinear, &edges_faces);
    creases.extend(
        reassign
            .iter()
            .map(|&e| (e, forward.select(winding[edges_faces[e][0]]))),
    );

    let mut orders = OrdersEvent::default();
    if let Some(old) = old_orders {
        let migrated = migrate_face_orders(&out, &old, &split.faces.map, eps);
        orders.added = synthesize_face_orders(&creases, &edges_faces, &migrated.orders, eps);
        orders.dropped = migrated.dropped;
        let mut all = migrated.orders;
        all.extend(orders.added.iter().copied());
        out.face_orders = Some(all);
    }

    for &(e, attrs) in &creases {
        write_attributes(&mut out, e, attrs, layers);
    }

    let folded_after = std::mem::take(&mut out.vertices_coords);
    out.vertices_coords = transfer_new_vertices(&cp_coords, &folded_after, &out, &split, eps)?;

    let mut new_faces: Vec<usize> = Vec::new();
    for src in &split.edges.source {
        for &f in &src.faces {
            if !new_faces.contains(&f) {
                new_faces.push(f);
            }
        }
    }

    tracing::debug!(
        new_vertices = split.vertices.source.len(),
        new_edges = split.edges.new.len(),
        new_faces = new_faces.len(),
        collinear = collinear.len(),
        reassign = reassign.len(),
        "fold applied"
    );

    let event = FoldEvent {
        vertices: VerticesEvent {
            folded: folded_after,
            source: split.vertices.source,
        },
        edges: EdgesEvent {
            new: split.edges.new,
            map: split.edges.map,
            collinear,
            reassign,
        },
        faces: FacesEvent {
            new: new_faces,
            map: split.faces.map,
        },
        orders,
    };
    Ok(Folded { graph: out, event })
}

/// Fold along an infinite line.
pub fn fold_line(graph: &Graph, line: Line, options: &FoldOptions, cfg: &FoldCfg) -> Result<Folded> {
    fold_graph(graph, line, LineDomain::Line, &options.with_points(Vec::new()), cfg)
}

/// Fold along a ray starting at `ray.origin`.
pub fn fold_ray(graph: &Graph, ray: Line, options: &FoldOptions, cfg: &FoldCfg) -> Result<Folded> {
    fold_graph(graph, ray, LineDomain::Ray, &options.with_points(vec![ray.origin]), cfg)
}

/// Fold along the segment `p0 → p1`.
pub fn fold_segment(
    graph: &Graph,
    p0: Vector2<f64>,
    p1: Vector2<f64>,
    options: &FoldOptions,
    cfg: &FoldCfg,
) -> Result<Folded> {
    fold_graph(
        graph,
        Line::from_points(p0, p1),
        LineDomain::Segment,
        &options.with_points(vec![p0, p1]),
        cfg,
    )
}

/// Create enabled-but-absent edge layers so the split keeps them aligned.
fn prepare_edge_layers(graph: &mut Graph, layers: EdgeLayers) {
    if layers.assignment && graph.edges_assignment.is_none() {
        graph.edges_assignment = Some(make_edges_assignment(graph));
    }
    if layers.fold_angle && graph.edges_fold_angle.is_none() {
        graph.edges_fold_angle = Some(make_edges_fold_angle(graph));
    }
}

/// Crease-pattern coordinates for every vertex of the split graph: existing
/// vertices keep theirs, edge points are re-interpolated (in creation order,
/// so a point on an already-split edge finds both parents), then interior
/// points are trilaterated.
fn transfer_new_vertices(
    cp_coords: &[Vector3<f64>],
    folded: &[Vector3<f64>],
    graph: &Graph,
    split: &SplitResult,
    eps: f64,
) -> Result<Vec<Vector3<f64>>> {
    let mut cp: Vec<Option<Vector3<f64>>> = cp_coords.iter().copied().map(Some).collect();
    cp.resize(folded.len(), None);

    for (vertex, source) in &split.vertices.source {
        if let VertexSource::Edge { b, vertices } = source {
            let [u, w] = *vertices;
            let (Some(pu), Some(pw)) = (cp[u], cp[w]) else {
                return Err(OrigamiError::DegenerateGeometry {
                    vertex: Some(*vertex),
                    reason: "parent edge endpoint has no crease-pattern position",
                });
            };
            cp[*vertex] = Some(recalculate_point_along_edge(&[pu, pw], [0, 1], *b));
        }
    }
    for (vertex, source) in &split.vertices.source {
        if let VertexSource::Face { face, faces, .. } = source {
            let host = faces.first().copied().unwrap_or(*face);
            let p = transfer_point_in_face(folded, &cp, &graph.faces_vertices[host], *vertex, eps)?;
            cp[*vertex] = Some(p);
        }
    }

    cp.into_iter()
        .enumerate()
        .map(|(v, p)| {
            p.ok_or(OrigamiError::DegenerateGeometry {
                vertex: Some(v),
                reason: "vertex has no crease-pattern position",
            })
        })
        .collect()
}
