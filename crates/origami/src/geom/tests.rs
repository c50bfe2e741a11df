use super::*;
use nalgebra::{vector, Vector2};

fn unit_square() -> Vec<Vector2<f64>> {
    vec![
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![1.0, 1.0],
        vector![0.0, 1.0],
    ]
}

#[test]
fn domain_inclusion_line_ray_segment() {
    let eps = 1e-6;
    assert!(LineDomain::Line.includes(-5.0, eps));
    assert!(LineDomain::Ray.includes(0.0, eps));
    assert!(!LineDomain::Ray.includes(-0.1, eps));
    assert!(LineDomain::Segment.includes(1.0, eps));
    assert!(!LineDomain::Segment.includes(1.1, eps));
    assert!(!LineDomain::Segment.includes(-0.1, eps));
}

#[test]
fn line_segment_intersection_params() {
    let line = Line::new(vector![0.5, 0.0], vector![0.0, 1.0]);
    // bottom edge of the unit square
    let (t, b) = line
        .intersect_segment(vector![0.0, 0.0], vector![1.0, 0.0], 1e-9)
        .unwrap();
    assert!(t.abs() < 1e-12);
    assert!((b - 0.5).abs() < 1e-12);
    // top edge, traversed right to left
    let (t, b) = line
        .intersect_segment(vector![1.0, 1.0], vector![0.0, 1.0], 1e-9)
        .unwrap();
    assert!((t - 1.0).abs() < 1e-12);
    assert!((b - 0.5).abs() < 1e-12);
    // parallel edge
    assert!(line
        .intersect_segment(vector![1.0, 0.0], vector![1.0, 1.0], 1e-9)
        .is_none());
}

#[test]
fn line_distance_and_param() {
    let line = Line::from_points(vector![0.0, 0.0], vector![2.0, 0.0]);
    assert!((line.param_of(vector![1.0, 3.0]) - 0.5).abs() < 1e-12);
    assert!((line.distance_to(vector![1.0, 3.0]) - 3.0).abs() < 1e-12);
    assert!(Line::new(vector![1.0, 1.0], vector![0.0, 0.0]).is_degenerate());
}

#[test]
fn winding_sign_and_containment() {
    let sq = unit_square();
    assert!((signed_area(&sq) - 1.0).abs() < 1e-12);
    let rev: Vec<_> = sq.iter().rev().cloned().collect();
    assert!((signed_area(&rev) + 1.0).abs() < 1e-12);

    assert!(point_in_polygon(&sq, vector![0.5, 0.5], 1e-9));
    assert!(point_in_polygon(&sq, vector![1.0, 0.5], 1e-9));
    assert!(!point_strictly_in_polygon(&sq, vector![1.0, 0.5], 1e-9));
    assert!(!point_in_polygon(&sq, vector![1.5, 0.5], 1e-9));
}

#[test]
fn overlap_requires_positive_area() {
    let sq = unit_square();
    let shifted: Vec<_> = sq.iter().map(|p| p + vector![0.5, 0.0]).collect();
    let touching: Vec<_> = sq.iter().map(|p| p + vector![1.0, 0.0]).collect();
    let apart: Vec<_> = sq.iter().map(|p| p + vector![3.0, 0.0]).collect();
    assert!(convex_polygons_overlap(&sq, &shifted, 1e-9));
    assert!(!convex_polygons_overlap(&sq, &touching, 1e-9));
    assert!(!convex_polygons_overlap(&sq, &apart, 1e-9));
}

#[test]
fn newell_normal_of_ccw_square_points_up() {
    let sq: Vec<_> = unit_square()
        .iter()
        .map(|p| nalgebra::Vector3::new(p.x, p.y, 0.0))
        .collect();
    let n = newell_normal(&sq).unwrap();
    assert!((n - nalgebra::Vector3::z()).norm() < 1e-12);
    let flat = vec![nalgebra::Vector3::zeros(); 3];
    assert!(newell_normal(&flat).is_none());
}

#[test]
fn trilateration_recovers_point() {
    let anchors = [vector![0.0, 0.0], vector![2.0, 0.0], vector![0.0, 3.0]];
    let target = vector![0.7, 1.1];
    let radii = [
        (target - anchors[0]).norm(),
        (target - anchors[1]).norm(),
        (target - anchors[2]).norm(),
    ];
    let p = trilateration2(anchors, radii).unwrap();
    assert!((p - target).norm() < 1e-9);

    let collinear = [vector![0.0, 0.0], vector![1.0, 0.0], vector![2.0, 0.0]];
    assert!(trilateration2(collinear, radii).is_none());
}

#[test]
fn ccw_angle_wraps_into_full_turn() {
    use std::f64::consts::{FRAC_PI_2, PI};
    let x = vector![1.0, 0.0];
    assert!((ccw_angle(x, vector![0.0, 1.0]) - FRAC_PI_2).abs() < 1e-12);
    assert!((ccw_angle(x, vector![-1.0, 0.0]) - PI).abs() < 1e-12);
    assert!((ccw_angle(x, vector![0.0, -1.0]) - 3.0 * FRAC_PI_2).abs() < 1e-12);
    assert_eq!(ccw_angle(x, x), 0.0);
}
