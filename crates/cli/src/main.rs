use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use origami::api::{
    flip_faces_layer, fold_line, fold_ray, fold_segment, linearize_2d_faces,
    make_vertices_coords_folded, nudge_faces_with_face_orders, overlapping_face_orders_clusters,
    EdgeAssignment, FoldCfg, FoldFrame, FoldOptions, Graph, Line, EPSILON,
};
use origami::prelude::Vec2;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

use provenance::{write_sidecar, Payload};

/// Custom FOLD key holding the change summary of the last fold.
const FOLD_EVENT_KEY: &str = "origami:foldEvent";

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Fold FOLD files and stack their layers")]
struct Cmd {
    /// Tolerance for geometric comparisons
    #[arg(long, default_value_t = EPSILON)]
    eps: f64,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Crease a FOLD file along a line, ray or segment and write the result
    Fold(FoldArgs),
    /// Linearize the face orders of a FOLD file into a bottom-to-top stack
    Layers(LayersArgs),
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Domain {
    Line,
    Ray,
    Segment,
}

#[derive(Args, Debug)]
struct FoldArgs {
    #[arg(long)]
    input: PathBuf,
    #[arg(long)]
    out: PathBuf,
    /// Start point `x,y` in folded space
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    origin: Vec2<f64>,
    /// Direction `x,y` (line and ray)
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    vector: Option<Vec2<f64>>,
    #[arg(long, value_enum, default_value_t = Domain::Line)]
    domain: Domain,
    /// End point `x,y` (segment)
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    end: Option<Vec2<f64>>,
    /// FOLD assignment character for the new creases
    #[arg(long, value_parser = parse_assignment, default_value = "V")]
    assignment: EdgeAssignment,
    /// Fold angle in degrees; the flat angle of the assignment if omitted
    #[arg(long, allow_hyphen_values = true)]
    angle: Option<f64>,
}

#[derive(Args, Debug)]
struct LayersArgs {
    #[arg(long)]
    input: PathBuf,
    #[arg(long)]
    out: PathBuf,
    /// Face whose normal points up; also the root when folding a crease pattern
    #[arg(long)]
    root_face: Option<usize>,
    /// Input coordinates are a crease pattern; fold them before stacking
    #[arg(long)]
    crease_pattern: bool,
    /// Turn the stack over
    #[arg(long)]
    flip: bool,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let cfg = FoldCfg { eps: cmd.eps };
    match cmd.action {
        Action::Fold(args) => fold(&args, &cfg),
        Action::Layers(args) => layers(&args),
        Action::Report => report(),
    }
}

fn parse_point(s: &str) -> std::result::Result<Vec2<f64>, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [x, y] = parts.as_slice() else {
        return Err(format!("expected `x,y`, got `{s}`"));
    };
    let x: f64 = x.parse().map_err(|e| format!("bad x in `{s}`: {e}"))?;
    let y: f64 = y.parse().map_err(|e| format!("bad y in `{s}`: {e}"))?;
    Ok(Vec2::new(x, y))
}

fn parse_assignment(s: &str) -> std::result::Result<EdgeAssignment, String> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => {
            EdgeAssignment::from_char(c).ok_or_else(|| format!("unknown assignment `{s}`"))
        }
        _ => Err(format!("assignment must be one of B M V F J C U, got `{s}`")),
    }
}

fn read_frame(path: &Path) -> Result<(FoldFrame, Graph)> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let frame =
        FoldFrame::from_json(&text).with_context(|| format!("parsing {}", path.display()))?;
    let graph = Graph::try_from(frame.clone())
        .with_context(|| format!("validating {}", path.display()))?;
    Ok((frame, graph))
}

fn write_text(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, text).with_context(|| format!("writing {}", path.display()))
}

fn fold(args: &FoldArgs, cfg: &FoldCfg) -> Result<()> {
    let (input, graph) = read_frame(&args.input)?;
    let mut options = FoldOptions::new(args.assignment);
    if let Some(angle) = args.angle {
        options = options.with_fold_angle(angle);
    }
    let folded = match args.domain {
        Domain::Line | Domain::Ray => {
            let vector = args
                .vector
                .context("--vector is required for line and ray folds")?;
            let line = Line::new(args.origin, vector);
            if args.domain == Domain::Line {
                fold_line(&graph, line, &options, cfg)
            } else {
                fold_ray(&graph, line, &options, cfg)
            }
        }
        Domain::Segment => {
            let end = args.end.context("--end is required for segment folds")?;
            fold_segment(&graph, args.origin, end, &options, cfg)
        }
    }
    .with_context(|| format!("folding {}", args.input.display()))?;
    tracing::info!(
        faces = folded.graph.num_faces(),
        new_edges = folded.event.edges.new.len(),
        added_orders = folded.event.orders.added.len(),
        dropped_orders = folded.event.orders.dropped.len(),
        "fold"
    );

    let mut frame = FoldFrame::from(&folded.graph);
    frame.file_spec = input.file_spec.or(Some(1.1));
    frame.file_creator = Some(format!("origami-cli {}", origami::VERSION));
    frame.frame_title = input.frame_title;
    frame.frame_classes = input.frame_classes;
    frame
        .extra
        .insert(FOLD_EVENT_KEY.to_string(), serde_json::to_value(&folded.event)?);
    write_text(&args.out, &frame.to_json_pretty()?)?;

    let params = json!({
        "domain": format!("{:?}", args.domain).to_lowercase(),
        "origin": [args.origin.x, args.origin.y],
        "vector": args.vector.map(|v| [v.x, v.y]),
        "end": args.end.map(|v| [v.x, v.y]),
        "assignment": args.assignment.as_char().to_string(),
        "angle": args.angle,
        "eps": cfg.eps,
    });
    write_sidecar(&args.out, Payload::new("fold", params).with_input(&args.input))?;
    Ok(())
}

fn layers(args: &LayersArgs) -> Result<()> {
    let (_, mut graph) = read_frame(&args.input)?;
    if args.crease_pattern {
        let root = args.root_face.unwrap_or(0);
        if root >= graph.num_faces() {
            bail!("root face {root} out of range ({} faces)", graph.num_faces());
        }
        graph.vertices_coords = make_vertices_coords_folded(&graph, root);
        graph.faces_normal = None;
    }
    let order = linearize_2d_faces(&graph, args.root_face)
        .with_context(|| format!("stacking faces of {}", args.input.display()))?;
    let mut faces_layer = vec![0; graph.num_faces()];
    for (layer, &f) in order.iter().enumerate() {
        faces_layer[f] = layer;
    }
    if args.flip {
        faces_layer = flip_faces_layer(&faces_layer);
    }
    let clusters = overlapping_face_orders_clusters(graph.orders());
    let nudges = nudge_faces_with_face_orders(&graph)?;
    tracing::info!(
        faces = graph.num_faces(),
        orders = graph.orders().len(),
        clusters = clusters.faces.len(),
        "layers"
    );

    let doc = json!({
        "faces_order": order,
        "faces_layer": faces_layer,
        "clusters": clusters.faces,
        "nudges": nudges,
    });
    write_text(&args.out, &serde_json::to_string_pretty(&doc)?)?;

    let params = json!({
        "root_face": args.root_face,
        "crease_pattern": args.crease_pattern,
        "flip": args.flip,
    });
    write_sidecar(&args.out, Payload::new("layers", params).with_input(&args.input))?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "origami_version": origami::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use origami::api::square;
    use serde_json::Value;
    use tempfile::tempdir;

    fn write_square(dir: &Path, with_orders: bool) -> PathBuf {
        let mut paper = square();
        if with_orders {
            paper.face_orders = Some(Vec::new());
        }
        let path = dir.join("square.fold");
        fs::write(&path, FoldFrame::from(&paper).to_json_pretty().unwrap()).unwrap();
        path
    }

    fn fold_args(input: PathBuf, out: PathBuf) -> FoldArgs {
        FoldArgs {
            input,
            out,
            origin: Vec2::new(0.5, 0.0),
            vector: Some(Vec2::new(0.0, 1.0)),
            domain: Domain::Line,
            end: None,
            assignment: EdgeAssignment::Valley,
            angle: None,
        }
    }

    #[test]
    fn parses_points_and_assignments() {
        assert_eq!(parse_point("0.5, -1").unwrap(), Vec2::new(0.5, -1.0));
        assert!(parse_point("1").is_err());
        assert!(parse_point("a,b").is_err());
        assert_eq!(parse_assignment("m").unwrap(), EdgeAssignment::Mountain);
        assert!(parse_assignment("VV").is_err());
        assert!(parse_assignment("x").is_err());
    }

    #[test]
    fn fold_writes_frame_event_and_sidecar() {
        let dir = tempdir().unwrap();
        let input = write_square(dir.path(), true);
        let out = dir.path().join("out").join("half.fold");
        fold(&fold_args(input, out.clone()), &FoldCfg::default()).unwrap();

        let frame = FoldFrame::from_json(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(frame.faces_vertices.len(), 2);
        assert!(frame.extra.contains_key(FOLD_EVENT_KEY));
        let graph = Graph::try_from(frame).unwrap();
        assert_eq!(graph.assignment(6), Some(EdgeAssignment::Valley));
        assert_eq!(graph.orders().len(), 1);

        let sidecar = dir.path().join("out").join("half.provenance.json");
        let prov: Value = serde_json::from_slice(&fs::read(sidecar).unwrap()).unwrap();
        assert_eq!(prov["command"], "fold");
        assert_eq!(prov["params"]["assignment"], "V");
    }

    #[test]
    fn segment_fold_needs_an_end_point() {
        let dir = tempdir().unwrap();
        let input = write_square(dir.path(), false);
        let mut args = fold_args(input, dir.path().join("seg.fold"));
        args.domain = Domain::Segment;
        let err = fold(&args, &FoldCfg::default()).unwrap_err();
        assert!(err.to_string().contains("--end"));
    }

    #[test]
    fn layers_of_a_folded_square() {
        let dir = tempdir().unwrap();
        let input = write_square(dir.path(), true);
        let folded = dir.path().join("half.fold");
        fold(&fold_args(input, folded.clone()), &FoldCfg::default()).unwrap();

        let out = dir.path().join("stack.json");
        let args = LayersArgs {
            input: folded,
            out: out.clone(),
            root_face: None,
            crease_pattern: true,
            flip: false,
        };
        layers(&args).unwrap();
        let doc: Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        let mut order: Vec<u64> = doc["faces_order"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_u64().unwrap())
            .collect();
        order.sort_unstable();
        assert_eq!(order, vec![0, 1]);
        assert_eq!(doc["clusters"].as_array().unwrap().len(), 1);
        assert!(dir.path().join("stack.provenance.json").exists());
    }

    #[test]
    fn layers_rejects_a_missing_root_face() {
        let dir = tempdir().unwrap();
        let input = write_square(dir.path(), false);
        let args = LayersArgs {
            input,
            out: dir.path().join("stack.json"),
            root_face: Some(3),
            crease_pattern: true,
            flip: false,
        };
        assert!(layers(&args).is_err());
    }
}
