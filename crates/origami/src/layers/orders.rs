use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use super::directed::{connected_components, topological_sort};
use crate::error::{OrigamiError, Result};
use crate::graph::{make_faces_normal, FaceOrder, Graph};

/// Face orders whose two faces are both in `faces`.
pub fn face_orders_subset(orders: &[FaceOrder], faces: &[usize]) -> Vec<FaceOrder> {
    orders
        .iter()
        .filter(|o| faces.contains(&o.a()) && faces.contains(&o.b()))
        .copied()
        .collect()
}

/// Faces grouped by connectivity through face orders, with each group's
/// own orders. Index-aligned: `orders[i]` belongs to `faces[i]`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceOrderClusters {
    pub faces: Vec<Vec<usize>>,
    pub orders: Vec<Vec<FaceOrder>>,
}

pub fn overlapping_face_orders_clusters(orders: &[FaceOrder]) -> FaceOrderClusters {
    let pairs: Vec<(usize, usize)> = orders.iter().map(|o| (o.a(), o.b())).collect();
    let faces = connected_components(&pairs);
    let orders = faces.iter().map(|fs| face_orders_subset(orders, fs)).collect();
    FaceOrderClusters { faces, orders }
}

/// Unique constrained faces, ascending.
fn constrained_faces(orders: &[FaceOrder]) -> Vec<usize> {
    let mut faces: Vec<usize> = orders.iter().flat_map(|o| [o.a(), o.b()]).collect();
    faces.sort_unstable();
    faces.dedup();
    faces
}

fn normal_of(faces_normal: &[Vector3<f64>], f: usize) -> Result<Vector3<f64>> {
    faces_normal
        .get(f)
        .copied()
        .ok_or_else(|| OrigamiError::InvalidGraph(format!("no normal for face {f}")))
}

/// Directed "below → above" pairs along the normal of a reference face.
///
/// The reference is `root_face` when it is constrained, else the lowest
/// constrained face. For `[a, b, sign]`, `a → b` iff `sign == +1` XOR face
/// `b`'s normal opposes the reference.
pub fn face_orders_to_directed_edges(
    orders: &[FaceOrder],
    faces_normal: &[Vector3<f64>],
    root_face: Option<usize>,
) -> Result<Vec<(usize, usize)>> {
    let faces = constrained_faces(orders);
    let Some(&lowest) = faces.first() else {
        return Ok(Vec::new());
    };
    let reference = root_face
        .filter(|r| faces.binary_search(r).is_ok())
        .unwrap_or(lowest);
    let up = normal_of(faces_normal, reference)?;
    orders
        .iter()
        .map(|o| {
            let matches = normal_of(faces_normal, o.b())?.dot(&up) > 0.0;
            Ok(if (o.sign() == 1) != !matches {
                (o.a(), o.b())
            } else {
                (o.b(), o.a())
            })
        })
        .collect()
}

/// Constrained faces bottom to top. Meaningful for one coplanar cluster.
pub fn linearize_face_orders(
    orders: &[FaceOrder],
    faces_normal: &[Vector3<f64>],
    root_face: Option<usize>,
) -> Result<Vec<usize>> {
    topological_sort(&face_orders_to_directed_edges(orders, faces_normal, root_face)?)
}

/// Stored normals, or computed from the graph's coordinates.
pub(crate) fn faces_normal_of(graph: &Graph) -> Vec<Vector3<f64>> {
    match &graph.faces_normal {
        Some(normals) if normals.len() == graph.num_faces() => normals.clone(),
        _ => make_faces_normal(graph),
    }
}

/// Every face of a flat-folded graph, bottom to top.
///
/// Face orders win over a stored `faces_layer`; with neither, faces come in
/// index order. Faces without a place in the order go first, ascending.
pub fn linearize_2d_faces(graph: &Graph, root_face: Option<usize>) -> Result<Vec<usize>> {
    let nf = graph.num_faces();
    let placed: Vec<Option<usize>> = if let Some(orders) = &graph.face_orders {
        let sequence = linearize_face_orders(orders, &faces_normal_of(graph), root_face)?;
        invert_sequence(&sequence, nf)
    } else if let Some(faces_layer) = &graph.faces_layer {
        (0..nf).map(|f| faces_layer.get(f).copied()).collect()
    } else {
        return Ok((0..nf).collect());
    };
    let mut missing: Vec<usize> = (0..nf).filter(|&f| placed[f].is_none()).collect();
    let mut ranked: Vec<(usize, usize)> = placed
        .iter()
        .enumerate()
        .filter_map(|(f, layer)| layer.map(|l| (l, f)))
        .collect();
    ranked.sort_unstable();
    missing.extend(ranked.into_iter().map(|(_, f)| f));
    Ok(missing)
}

/// Face → position in `sequence`, `None` for faces not in it.
fn invert_sequence(sequence: &[usize], num_faces: usize) -> Vec<Option<usize>> {
    let mut layers = vec![None; num_faces.max(sequence.iter().map(|&f| f + 1).max().unwrap_or(0))];
    for (layer, &f) in sequence.iter().enumerate() {
        layers[f] = Some(layer);
    }
    layers
}

/// Layer of every constrained face (from the graph's face orders); other
/// faces map to `None`.
pub fn make_faces_layer(graph: &Graph) -> Result<Vec<Option<usize>>> {
    let sequence = linearize_face_orders(graph.orders(), &faces_normal_of(graph), None)?;
    Ok(invert_sequence(&sequence, graph.num_faces()))
}

/// Turn the model over: `layer' = max - layer`.
pub fn flip_faces_layer(faces_layer: &[usize]) -> Vec<usize> {
    let max = faces_layer.iter().copied().max().unwrap_or(0);
    faces_layer.iter().map(|&l| max - l).collect()
}
