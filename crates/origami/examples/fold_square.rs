//! Fold a square in half twice and print the resulting stack.
//!
//! Purpose
//! - A small end-to-end run: valley fold along the vertical midline, then a
//!   mountain fold across it, then linearize the face orders the folds left.

use nalgebra::Vector2;
use origami::api::{
    fold_line, linearize_2d_faces, make_vertices_coords_folded, square, EdgeAssignment, FoldCfg,
    FoldOptions, Line,
};

fn main() -> origami::Result<()> {
    let cfg = FoldCfg::default();
    let mut paper = square();
    paper.face_orders = Some(Vec::new());

    let first = fold_line(
        &paper,
        Line::new(Vector2::new(0.5, 0.0), Vector2::new(0.0, 1.0)),
        &FoldOptions::new(EdgeAssignment::Valley),
        &cfg,
    )?;
    println!(
        "fold 1: {} new faces, orders added {:?}",
        first.event.faces.new.len(),
        first.event.orders.added
    );

    let second = fold_line(
        &first.graph,
        Line::new(Vector2::new(0.0, 0.5), Vector2::new(1.0, 0.0)),
        &FoldOptions::new(EdgeAssignment::Mountain),
        &cfg,
    )?;
    println!(
        "fold 2: {} faces, {} face orders",
        second.graph.num_faces(),
        second.graph.orders().len()
    );

    let mut folded = second.graph.clone();
    folded.vertices_coords = make_vertices_coords_folded(&second.graph, 0);
    let stack = linearize_2d_faces(&folded, None)?;
    println!("stack bottom to top: {stack:?}");
    Ok(())
}
