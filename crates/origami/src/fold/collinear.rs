use crate::geom::{xy, Line, LineDomain};
use crate::graph::Graph;

/// Edges of `graph` lying on `line` inside `domain`, skipping `created`.
/// Coordinates are read from the graph as given (folded form in a fold).
pub fn collinear_edges(
    graph: &Graph,
    line: Line,
    domain: LineDomain,
    created: &[usize],
    eps: f64,
) -> Vec<usize> {
    let eps_t = eps / line.vector.norm();
    (0..graph.num_edges())
        .filter(|e| !created.contains(e))
        .filter(|&e| {
            graph.edges_vertices[e].iter().all(|&v| {
                let p = xy(&graph.vertices_coords[v]);
                line.distance_to(p) <= eps && domain.includes(line.param_of(p), eps_t)
            })
        })
        .collect()
}

/// The collinear edges a fold takes over: flat (`F`/`U`, angle 0) edges
/// between two faces. Folded creases and boundaries stay as they are.
pub fn reassignable_edges(graph: &Graph, collinear: &[usize], edges_faces: &[Vec<usize>]) -> Vec<usize> {
    collinear
        .iter()
        .copied()
        .filter(|&e| edges_faces[e].len() == 2)
        .filter(|&e| graph.assignment(e).map_or(true, |a| a.is_flat()))
        .filter(|&e| graph.fold_angle(e) == 0.0)
        .collect()
}
