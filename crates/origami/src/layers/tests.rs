use super::*;
use crate::error::OrigamiError;
use crate::graph::{FaceOrder, Graph};
use crate::rand::{draw_face_orders, FaceOrdersCfg, ReplayToken};
use nalgebra::Vector3;
use proptest::prelude::*;

fn orders(raw: &[[i64; 3]]) -> Vec<FaceOrder> {
    raw.iter()
        .map(|&[a, b, s]| FaceOrder::new(a as usize, b as usize, s as i8))
        .collect()
}

fn up(n: usize) -> Vec<Vector3<f64>> {
    vec![Vector3::z(); n]
}

/// Graph carrying only face slots, normals and orders.
fn stack_graph(normals: Vec<Vector3<f64>>, face_orders: Option<Vec<FaceOrder>>) -> Graph {
    Graph {
        faces_vertices: vec![Vec::new(); normals.len()],
        faces_normal: Some(normals),
        face_orders,
        ..Graph::default()
    }
}

#[test]
fn topological_sort_prefers_smallest_ready_node() {
    assert_eq!(topological_sort(&[(0, 1), (1, 2)]).unwrap(), vec![0, 1, 2]);
    assert_eq!(topological_sort(&[(2, 3), (0, 3), (1, 3)]).unwrap(), vec![0, 1, 2, 3]);
    assert!(topological_sort(&[]).unwrap().is_empty());
    let err = topological_sort(&[(0, 1), (1, 0)]).unwrap_err();
    assert_eq!(err, OrigamiError::CyclicConstraints { cluster: None });
}

#[test]
fn components_sorted_and_ordered_by_lowest_node() {
    let cc = connected_components(&[(4, 3), (0, 1), (2, 1)]);
    assert_eq!(cc, vec![vec![0, 1, 2], vec![3, 4]]);
}

#[test]
fn chain_of_positive_orders_stacks_upward() {
    let o = orders(&[[0, 1, 1], [1, 2, 1]]);
    assert_eq!(linearize_face_orders(&o, &up(3), None).unwrap(), vec![0, 1, 2]);
}

#[test]
fn sign_and_flipped_normals_reverse_the_edge() {
    let above = orders(&[[0, 1, -1]]);
    assert_eq!(linearize_face_orders(&above, &up(2), None).unwrap(), vec![1, 0]);

    let flipped = vec![Vector3::z(), -Vector3::z()];
    let below = orders(&[[0, 1, 1]]);
    assert_eq!(linearize_face_orders(&below, &flipped, None).unwrap(), vec![1, 0]);
    // reading along face 1's normal turns the stack over
    assert_eq!(linearize_face_orders(&below, &flipped, Some(1)).unwrap(), vec![0, 1]);
    // an unconstrained root is ignored
    assert_eq!(linearize_face_orders(&below, &flipped, Some(7)).unwrap(), vec![1, 0]);
}

#[test]
fn directed_edges_follow_the_reference_normal() {
    let o = orders(&[[2, 1, 1], [1, 3, -1]]);
    let edges = face_orders_to_directed_edges(&o, &up(4), None).unwrap();
    assert_eq!(edges, vec![(2, 1), (3, 1)]);
    assert!(face_orders_to_directed_edges(&[], &up(4), None).unwrap().is_empty());
    let err = face_orders_to_directed_edges(&o, &up(2), None).unwrap_err();
    assert!(matches!(err, OrigamiError::InvalidGraph(_)));
}

#[test]
fn cycles_are_errors_and_stay_in_their_cluster() {
    let o = orders(&[[0, 1, 1], [1, 2, 1], [2, 0, 1], [3, 4, 1]]);
    assert!(linearize_face_orders(&o, &up(5), None).unwrap_err().is_cyclic());

    let clusters = overlapping_face_orders_clusters(&o);
    assert_eq!(clusters.faces, vec![vec![0, 1, 2], vec![3, 4]]);
    assert_eq!(clusters.orders[1], orders(&[[3, 4, 1]]));
    assert!(linearize_face_orders(&clusters.orders[0], &up(5), None).is_err());
    assert_eq!(linearize_face_orders(&clusters.orders[1], &up(5), None).unwrap(), vec![3, 4]);
}

#[test]
fn subset_edge_cases() {
    let o = orders(&[[0, 1, 1], [1, 2, -1]]);
    assert!(face_orders_subset(&o, &[0, 2, 5]).is_empty());
    assert_eq!(face_orders_subset(&o, &[0, 1, 2, 3]), o);
    assert_eq!(face_orders_subset(&o, &[1, 2]), orders(&[[1, 2, -1]]));
}

#[test]
fn nudges_are_cluster_local() {
    let g = stack_graph(up(5), Some(orders(&[[0, 1, 1], [3, 4, 1]])));
    let nudges = nudge_faces_with_face_orders(&g).unwrap();
    let layers: Vec<Option<usize>> = nudges.iter().map(|n| n.map(|n| n.layer)).collect();
    assert_eq!(layers, vec![Some(0), Some(1), None, Some(0), Some(1)]);
    assert!(nudges.iter().flatten().all(|n| n.vector == Vector3::z()));
}

#[test]
fn one_cyclic_cluster_fails_the_nudge() {
    let g = stack_graph(up(5), Some(orders(&[[0, 1, 1], [2, 3, 1], [3, 4, 1], [4, 2, 1]])));
    let err = nudge_faces_with_face_orders(&g).unwrap_err();
    assert_eq!(err, OrigamiError::CyclicConstraints { cluster: Some(1) });
}

#[test]
fn nudges_from_a_global_order() {
    let nudges = nudge_faces_with_faces_layer(&[2, 0, 1]);
    assert_eq!(nudges.iter().map(|n| n.layer).collect::<Vec<_>>(), vec![2, 0, 1]);
    assert!(nudges.iter().all(|n| n.vector == Vector3::z()));
}

#[test]
fn linearize_2d_faces_fills_in_unconstrained_faces() {
    let with_orders = stack_graph(up(4), Some(orders(&[[1, 2, 1]])));
    assert_eq!(linearize_2d_faces(&with_orders, None).unwrap(), vec![0, 3, 1, 2]);

    let mut with_layer = stack_graph(up(4), None);
    with_layer.faces_layer = Some(vec![3, 1, 0]);
    assert_eq!(linearize_2d_faces(&with_layer, None).unwrap(), vec![3, 2, 1, 0]);

    let bare = stack_graph(up(4), None);
    assert_eq!(linearize_2d_faces(&bare, None).unwrap(), vec![0, 1, 2, 3]);

    let cyclic = stack_graph(up(4), Some(orders(&[[0, 1, 1], [1, 0, 1]])));
    assert!(linearize_2d_faces(&cyclic, None).unwrap_err().is_cyclic());
}

#[test]
fn faces_layer_from_orders() {
    let g = stack_graph(up(3), Some(orders(&[[0, 2, 1]])));
    assert_eq!(make_faces_layer(&g).unwrap(), vec![Some(0), None, Some(1)]);
    let cyclic = stack_graph(up(2), Some(orders(&[[0, 1, 1], [0, 1, -1]])));
    assert!(make_faces_layer(&cyclic).unwrap_err().is_cyclic());
}

#[test]
fn flipping_reverses_layers() {
    assert_eq!(flip_faces_layer(&[0, 2, 1]), vec![2, 0, 1]);
    assert!(flip_faces_layer(&[]).is_empty());
}

fn position(sequence: &[usize]) -> std::collections::HashMap<usize, usize> {
    sequence.iter().enumerate().map(|(i, &f)| (f, i)).collect()
}

proptest! {
    #[test]
    fn random_acyclic_orders_linearize_consistently(seed in any::<u64>(), n in 2usize..16) {
        let cfg = FaceOrdersCfg { num_faces: n, density: 0.4, flipped: 0.5 };
        let drawn = draw_face_orders(cfg, ReplayToken::new(seed, 0));
        let sequence = linearize_face_orders(&drawn.orders, &drawn.faces_normal, None).unwrap();

        let mut constrained: Vec<usize> = drawn.orders.iter().flat_map(|o| [o.a(), o.b()]).collect();
        constrained.sort_unstable();
        constrained.dedup();
        let mut sorted = sequence.clone();
        sorted.sort_unstable();
        prop_assert_eq!(&sorted, &constrained);

        let pos = position(&sequence);
        let edges = face_orders_to_directed_edges(&drawn.orders, &drawn.faces_normal, None).unwrap();
        for (a, b) in edges {
            prop_assert!(pos[&a] < pos[&b]);
        }

        // the hidden stack is recovered, read along the reference normal
        if let Some(&reference) = constrained.first() {
            let upward = drawn.faces_normal[reference].z > 0.0;
            let stack_pos = position(&drawn.stack);
            for o in &drawn.orders {
                let same = (stack_pos[&o.a()] < stack_pos[&o.b()]) == (pos[&o.a()] < pos[&o.b()]);
                prop_assert_eq!(same, upward);
            }
        }
    }

    #[test]
    fn linearize_2d_faces_is_a_permutation(seed in any::<u64>(), n in 1usize..16, use_orders in any::<bool>()) {
        let cfg = FaceOrdersCfg { num_faces: n, density: 0.2, flipped: 0.3 };
        let drawn = draw_face_orders(cfg, ReplayToken::new(seed, 1));
        let mut g = stack_graph(drawn.faces_normal.clone(), None);
        if use_orders {
            g.face_orders = Some(drawn.orders.clone());
        } else {
            g.faces_layer = Some(position(&drawn.stack).into_iter().fold(vec![0; n], |mut acc, (f, l)| {
                acc[f] = l;
                acc
            }));
        }
        let mut sequence = linearize_2d_faces(&g, None).unwrap();
        sequence.sort_unstable();
        prop_assert_eq!(sequence, (0..n).collect::<Vec<_>>());
    }

    #[test]
    fn flip_is_an_involution(layers in (1usize..24).prop_flat_map(|n| Just((0..n).collect::<Vec<usize>>()).prop_shuffle())) {
        prop_assert_eq!(flip_faces_layer(&flip_faces_layer(&layers)), layers);
    }
}
