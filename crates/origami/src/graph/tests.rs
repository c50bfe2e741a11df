use super::*;
use crate::geom::EPSILON;
use nalgebra::{vector, Vector3};

/// Unit square creased along x = 0.5 with the given assignment.
fn two_panel(assignment: EdgeAssignment) -> Graph {
    let b = EdgeAssignment::Boundary;
    Graph {
        vertices_coords: vec![
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(0.5, 0.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(1.0, 1.0, 0.0),
            Vector3::new(0.5, 1.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
        ],
        edges_vertices: vec![[0, 1], [1, 2], [2, 3], [3, 4], [4, 5], [5, 0], [1, 4]],
        edges_assignment: Some(vec![b, b, b, b, b, b, assignment]),
        edges_fold_angle: None,
        faces_vertices: vec![vec![0, 1, 4, 5], vec![1, 2, 3, 4]],
        ..Graph::default()
    }
}

#[test]
fn edges_faces_and_faces_edges() {
    let g = two_panel(EdgeAssignment::Valley);
    let ef = make_edges_faces(&g);
    assert_eq!(ef[6].len(), 2);
    assert!(ef[6].contains(&0) && ef[6].contains(&1));
    assert_eq!(ef[0], vec![0]);
    let fe = make_faces_edges(&g);
    assert_eq!(fe[0], vec![Some(0), Some(6), Some(4), Some(5)]);
}

#[test]
fn winding_and_normals_of_crease_pattern() {
    let g = two_panel(EdgeAssignment::Valley);
    assert_eq!(make_faces_winding(&g, EPSILON), vec![true, true]);
    for n in make_faces_normal(&g) {
        assert!((n - Vector3::z()).norm() < 1e-12);
    }
}

#[test]
fn edge_on_face_counts_as_counter_clockwise() {
    let g = Graph {
        vertices_coords: vec![
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(1.0, 0.0, 1.0),
            Vector3::new(0.0, 0.0, 1.0),
            Vector3::new(1.0, -1.0, 0.0),
        ],
        faces_vertices: vec![vec![0, 1, 2, 3], vec![0, 1, 4]],
        ..Graph::default()
    };
    // the vertical face projects to a segment; the other is clockwise
    assert_eq!(make_faces_winding(&g, EPSILON), vec![true, false]);
}

#[test]
fn flat_valley_fold_mirrors_right_panel() {
    let g = two_panel(EdgeAssignment::Valley);
    let folded = make_vertices_coords_folded(&g, 0);
    // left panel stays put
    for v in [0, 1, 4, 5] {
        assert!((folded[v] - g.vertices_coords[v]).norm() < 1e-12);
    }
    assert!((folded[2] - Vector3::new(0.0, 0.0, 0.0)).norm() < 1e-9);
    assert!((folded[3] - Vector3::new(0.0, 1.0, 0.0)).norm() < 1e-9);
    let g_folded = Graph {
        vertices_coords: folded,
        ..g
    };
    assert_eq!(make_faces_winding(&g_folded, EPSILON), vec![true, false]);
}

#[test]
fn partial_valley_lifts_toward_root_normal() {
    let mut g = two_panel(EdgeAssignment::Valley);
    g.edges_fold_angle = Some(vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 90.0]);
    let folded = make_vertices_coords_folded(&g, 0);
    assert!((folded[2] - Vector3::new(0.5, 0.0, 0.5)).norm() < 1e-9);
    let mut m = g.clone();
    m.edges_fold_angle = Some(vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -90.0]);
    let folded_m = make_vertices_coords_folded(&m, 0);
    assert!((folded_m[2] - Vector3::new(0.5, 0.0, -0.5)).norm() < 1e-9);
}

#[test]
fn rooting_on_the_other_face_moves_the_left_panel() {
    let g = two_panel(EdgeAssignment::Mountain);
    let folded = make_vertices_coords_folded(&g, 1);
    assert!((folded[2] - g.vertices_coords[2]).norm() < 1e-12);
    assert!((folded[0] - Vector3::new(1.0, 0.0, 0.0)).norm() < 1e-9);
}

#[test]
fn face_under_point_breaks_ties_along_vector() {
    let g = two_panel(EdgeAssignment::Flat);
    assert_eq!(face_under_point(&g, vector![0.25, 0.5], vector![1.0, 0.0], 1e-6), Some(0));
    // on the shared crease: step right lands in face 1, step left in face 0
    assert_eq!(face_under_point(&g, vector![0.5, 0.5], vector![1.0, 0.0], 1e-6), Some(1));
    assert_eq!(face_under_point(&g, vector![0.5, 0.5], vector![-1.0, 0.0], 1e-6), Some(0));
    assert_eq!(face_under_point(&g, vector![2.0, 0.5], vector![1.0, 0.0], 1e-6), None);
}

#[test]
fn overlap_of_panels_before_and_after_folding() {
    let g = two_panel(EdgeAssignment::Valley);
    assert!(!faces_overlap(&g, 0, 1, 1e-6));
    let folded = Graph {
        vertices_coords: make_vertices_coords_folded(&g, 0),
        ..g
    };
    assert!(faces_overlap(&folded, 0, 1, 1e-6));
}

#[test]
fn validate_rejects_bad_input() {
    let mut g = special::square();
    assert!(g.validate().is_ok());
    g.face_orders = Some(vec![FaceOrder::new(0, 3, 1)]);
    assert!(g.validate().is_err());
    g.face_orders = Some(vec![FaceOrder::new(0, 0, 2)]);
    assert!(g.validate().is_err());
    let mut h = special::square();
    h.edges_vertices.push([0, 9]);
    assert!(h.validate().is_err());
}

#[test]
fn assignment_table_and_inversion() {
    assert_eq!(EdgeAssignment::Valley.inverted(), EdgeAssignment::Mountain);
    assert_eq!(EdgeAssignment::Flat.inverted(), EdgeAssignment::Flat);
    assert_eq!(EdgeAssignment::Mountain.flat_fold_angle(), -180.0);
    assert_eq!(EdgeAssignment::from_char('v'), Some(EdgeAssignment::Valley));
    assert_eq!(EdgeAssignment::Joint.as_char(), 'J');
    assert!(EdgeAssignment::from_char('x').is_none());
}

#[test]
fn assignments_inferred_from_angles() {
    let mut g = two_panel(EdgeAssignment::Unassigned);
    g.edges_assignment = None;
    g.edges_fold_angle = Some(vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -90.0]);
    let inferred = make_edges_assignment(&g);
    assert_eq!(inferred[0], EdgeAssignment::Boundary);
    assert_eq!(inferred[6], EdgeAssignment::Mountain);
    g.edges_fold_angle = None;
    assert_eq!(make_edges_assignment(&g)[6], EdgeAssignment::Unassigned);
}
